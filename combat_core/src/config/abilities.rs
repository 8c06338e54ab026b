//! Hero ability configuration loading

use super::ConfigError;
use crate::ability::Ability;
use crate::types::HeroClass;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::warn;

/// Container for per-class ability lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbilitiesConfig {
    #[serde(default)]
    pub warrior: Vec<Ability>,
    #[serde(default)]
    pub mage: Vec<Ability>,
    #[serde(default)]
    pub rogue: Vec<Ability>,
}

impl AbilitiesConfig {
    fn into_map(self) -> Result<HashMap<HeroClass, Vec<Ability>>, ConfigError> {
        let mut map = HashMap::new();
        map.insert(HeroClass::Warrior, self.warrior);
        map.insert(HeroClass::Mage, self.mage);
        map.insert(HeroClass::Rogue, self.rogue);

        for (class, abilities) in &map {
            validate_class(*class, abilities)?;
        }
        Ok(map)
    }
}

fn validate_class(class: HeroClass, abilities: &[Ability]) -> Result<(), ConfigError> {
    let mut names = HashSet::new();
    for ability in abilities {
        if !names.insert(ability.name.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "{}: duplicate ability '{}'",
                class.key(),
                ability.name
            )));
        }
        if ability.hits == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: ability '{}' must hit at least once",
                class.key(),
                ability.name
            )));
        }
        if ability.cost < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: ability '{}' has a negative cost",
                class.key(),
                ability.name
            )));
        }
    }

    for ability in abilities {
        if let Some(prerequisite) = &ability.combo_after {
            if !names.contains(prerequisite.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "{}: ability '{}' combos after unknown ability '{}'",
                    class.key(),
                    ability.name,
                    prerequisite
                )));
            }
        }
    }
    Ok(())
}

/// Load ability configurations from a TOML file
pub fn load_ability_configs(path: &Path) -> Result<HashMap<HeroClass, Vec<Ability>>, ConfigError> {
    let config: AbilitiesConfig = super::load_toml(path)?;
    config.into_map()
}

/// Load ability configurations from a TOML string
pub fn parse_ability_configs(content: &str) -> Result<HashMap<HeroClass, Vec<Ability>>, ConfigError> {
    let config: AbilitiesConfig = super::parse_toml(content)?;
    config.into_map()
}

/// Get the built-in abilities for a class
pub fn default_abilities(class: HeroClass) -> Vec<Ability> {
    let toml = include_str!("../../config/abilities.toml");
    match parse_ability_configs(toml) {
        Ok(mut map) => map.remove(&class).unwrap_or_default(),
        Err(err) => {
            warn!(class = class.key(), error = %err, "built-in abilities failed to load");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::DebuffSpec;
    use crate::types::Stat;

    #[test]
    fn test_parse_abilities() {
        let toml = r#"
[[mage]]
name = "Fireball"
cost = 25
cooldown = 1

[mage.scaling]
base = 12
stat = "intelligence"
ratio = 1.2

[mage.debuff]
kind = "burn"
damage = 4
duration = 3
"#;

        let map = parse_ability_configs(toml).unwrap();
        assert!(map[&HeroClass::Warrior].is_empty());

        let fireball = &map[&HeroClass::Mage][0];
        assert_eq!(fireball.name, "Fireball");
        assert_eq!(fireball.hits, 1);
        assert_eq!(fireball.scaling.stat, Some(Stat::Intelligence));
        assert_eq!(
            fireball.debuff,
            Some(DebuffSpec::Burn {
                damage: 4.0,
                duration: 3
            })
        );
    }

    #[test]
    fn test_zero_hits_rejected() {
        let toml = r#"
[[rogue]]
name = "Nothing"
hits = 0
"#;
        assert!(matches!(
            parse_ability_configs(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_combo_prerequisite_must_exist_in_class() {
        let toml = r#"
[[warrior]]
name = "Power Strike"

[[rogue]]
name = "Flurry"
combo_after = "Power Strike"
"#;
        let err = parse_ability_configs(toml).unwrap_err();
        assert!(err.to_string().contains("Flurry"));
    }

    #[test]
    fn test_default_abilities_loads_all_classes() {
        for &class in HeroClass::all() {
            let abilities = default_abilities(class);
            assert!(abilities.len() >= 4, "{:?} has too few abilities", class);
        }

        let warrior = default_abilities(HeroClass::Warrior);
        let execute = warrior.iter().find(|a| a.name == "Execute").unwrap();
        assert_eq!(execute.combo_after.as_deref(), Some("Power Strike"));

        let rogue = default_abilities(HeroClass::Rogue);
        assert!(rogue.iter().any(|a| a.hits > 1));
    }
}
