use serde::{Deserialize, Serialize};

use crate::practice_engine::{error::ConfigError, models::Level};

/// Tunables for a practice session.
///
/// The defaults give the standard rules: exact match within `1e-9`, start at
/// level 1, level up after every second consecutive correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Largest absolute difference still counted as correct.
    pub tolerance: f64,
    /// Level a fresh or reset session starts at.
    pub starting_level: Level,
    /// Consecutive correct answers needed per level-up.
    pub level_up_streak: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            tolerance: 1e-9,
            starting_level: Level::MIN,
            level_up_streak: 2,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if self.level_up_streak == 0 {
            return Err(ConfigError::ZeroLevelUpStreak);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = SessionConfig::from_json("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let config = SessionConfig::from_json(r#"{ "starting_level": 4, "level_up_streak": 3 }"#).unwrap();
        assert_eq!(config.starting_level, Level::new(4));
        assert_eq!(config.level_up_streak, 3);
        assert_eq!(config.tolerance, 1e-9);
    }

    #[test]
    fn out_of_range_level_is_clamped() {
        let config = SessionConfig::from_json(r#"{ "starting_level": 99 }"#).unwrap();
        assert_eq!(config.starting_level, Level::MAX);
    }

    #[test]
    fn level_outside_byte_range_is_clamped() {
        let high = SessionConfig::from_json(r#"{ "starting_level": 300 }"#).unwrap();
        assert_eq!(high.starting_level, Level::MAX);
        let negative = SessionConfig::from_json(r#"{ "starting_level": -2 }"#).unwrap();
        assert_eq!(negative.starting_level, Level::MIN);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            SessionConfig::from_json(r#"{ "tolerance": -0.1 }"#),
            Err(ConfigError::InvalidTolerance(_))
        ));
        assert!(matches!(
            SessionConfig::from_json(r#"{ "level_up_streak": 0 }"#),
            Err(ConfigError::ZeroLevelUpStreak)
        ));
        assert!(matches!(SessionConfig::from_json("not json"), Err(ConfigError::Json(_))));
    }
}
