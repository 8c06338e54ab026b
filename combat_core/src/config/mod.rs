//! Configuration loading from TOML files

mod abilities;
mod constants;
mod enemies;

pub use abilities::{default_abilities, load_ability_configs, parse_ability_configs, AbilitiesConfig};
pub use constants::{
    BattleConstants, CritConstants, DamageConstants, DerivedStatConstants, EnemyConstants, GameConstants,
    InspectionConstants, ResourceConstants,
};
pub use enemies::{default_enemy_templates, load_enemy_templates, parse_enemy_templates, EnemyTemplate};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load game constants, falling back to defaults for any missing section
pub fn load_constants(path: &Path) -> Result<GameConstants, ConfigError> {
    let constants: GameConstants = load_toml(path)?;
    if constants.battle.max_prompts_per_turn == 0 {
        return Err(ConfigError::ValidationError(
            "battle.max_prompts_per_turn must be at least 1".to_string(),
        ));
    }
    Ok(constants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_constants_keep_defaults() {
        let constants: GameConstants = parse_toml(
            r#"
[crit]
base_multiplier = 3.0
"#,
        )
        .unwrap();

        assert!((constants.crit.base_multiplier - 3.0).abs() < f64::EPSILON);
        assert_eq!(constants.battle.max_prompts_per_turn, 16);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let result: Result<GameConstants, _> = parse_toml("[crit\nbase = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_constants(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
