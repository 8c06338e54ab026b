//! Enemy template loading

use super::ConfigError;
use crate::enemy::{EnemyBuilder, Rewards};
use crate::types::Element;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// Unscaled stats for one kind of enemy, grown linearly with dungeon level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub base_hp: f64,
    #[serde(default)]
    pub hp_per_level: f64,
    pub damage: f64,
    #[serde(default)]
    pub damage_per_level: f64,
    #[serde(default)]
    pub defense: f64,
    #[serde(default)]
    pub defense_per_level: f64,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub loot_table: Option<String>,
    #[serde(default)]
    pub drop_chance: f64,
    #[serde(default)]
    pub vulnerable: Option<Element>,
    #[serde(default)]
    pub resistant: Option<Element>,
}

impl EnemyTemplate {
    /// Start a builder with this template's stats at the given level
    pub fn builder(&self, level: u32) -> EnemyBuilder {
        let level = level.max(1);
        let growth = (level - 1) as f64;

        let mut rewards = Rewards::new(self.gold + self.gold * (level - 1) / 4, self.xp * level);
        if let Some(table) = &self.loot_table {
            rewards = rewards.with_loot(table.clone(), self.drop_chance);
        }

        EnemyBuilder::new(
            self.name.clone(),
            level,
            self.base_hp + self.hp_per_level * growth,
            self.damage + self.damage_per_level * growth,
            self.defense + self.defense_per_level * growth,
        )
        .rewards(rewards)
        .affinity(self.vulnerable, self.resistant)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_hp <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "enemy '{}' must have positive base_hp",
                self.id
            )));
        }
        if self.damage < 0.0 || self.defense < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "enemy '{}' has negative damage or defense",
                self.id
            )));
        }
        if !(0.0..=1.0).contains(&self.drop_chance) {
            return Err(ConfigError::ValidationError(format!(
                "enemy '{}' drop_chance must be between 0 and 1",
                self.id
            )));
        }
        if self.vulnerable.is_some() && self.vulnerable == self.resistant {
            return Err(ConfigError::ValidationError(format!(
                "enemy '{}' cannot be vulnerable and resistant to the same element",
                self.id
            )));
        }
        Ok(())
    }
}

/// Container for enemy templates
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EnemiesConfig {
    #[serde(rename = "enemies")]
    enemies: Vec<EnemyTemplate>,
}

fn validate_all(templates: Vec<EnemyTemplate>) -> Result<Vec<EnemyTemplate>, ConfigError> {
    let mut ids = HashSet::new();
    for template in &templates {
        template.validate()?;
        if !ids.insert(template.id.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate enemy id '{}'",
                template.id
            )));
        }
    }
    Ok(templates)
}

/// Load enemy templates from a TOML file
pub fn load_enemy_templates(path: &Path) -> Result<Vec<EnemyTemplate>, ConfigError> {
    let config: EnemiesConfig = super::load_toml(path)?;
    validate_all(config.enemies)
}

/// Load enemy templates from a TOML string
pub fn parse_enemy_templates(content: &str) -> Result<Vec<EnemyTemplate>, ConfigError> {
    let config: EnemiesConfig = super::parse_toml(content)?;
    validate_all(config.enemies)
}

/// Get the built-in enemy templates
pub fn default_enemy_templates() -> Vec<EnemyTemplate> {
    let toml = include_str!("../../config/enemies.toml");
    parse_enemy_templates(toml).unwrap_or_else(|err| {
        warn!(error = %err, "built-in enemy templates failed to load");
        vec![EnemyTemplate {
            id: "training_dummy".to_string(),
            name: "Training Dummy".to_string(),
            base_hp: 50.0,
            hp_per_level: 10.0,
            damage: 5.0,
            damage_per_level: 1.0,
            defense: 0.0,
            defense_per_level: 0.0,
            gold: 1,
            xp: 1,
            loot_table: None,
            drop_chance: 0.0,
            vulnerable: None,
            resistant: None,
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enemy_template() {
        let toml = r#"
[[enemies]]
id = "skeleton"
name = "Skeleton"
base_hp = 40
hp_per_level = 8
damage = 7
damage_per_level = 1.5
defense = 3
gold = 10
xp = 12
vulnerable = "holy"
"#;

        let templates = parse_enemy_templates(toml).unwrap();
        let skeleton = &templates[0];
        assert_eq!(skeleton.vulnerable, Some(Element::Holy));

        let enemy = skeleton.builder(3).build();
        assert!((enemy.combatant.computed_max_hp() - 56.0).abs() < f64::EPSILON);
        assert!((enemy.base_damage.compute() - 10.0).abs() < f64::EPSILON);
        assert_eq!(enemy.rewards.xp, 36);
    }

    #[test]
    fn test_invalid_drop_chance_rejected() {
        let toml = r#"
[[enemies]]
id = "rat"
name = "Rat"
base_hp = 10
damage = 2
drop_chance = 1.5
"#;
        assert!(matches!(
            parse_enemy_templates(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml = r#"
[[enemies]]
id = "rat"
name = "Rat"
base_hp = 10
damage = 2

[[enemies]]
id = "rat"
name = "Big Rat"
base_hp = 20
damage = 4
"#;
        let err = parse_enemy_templates(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_default_templates_load() {
        let templates = default_enemy_templates();
        assert!(templates.len() >= 4);
        assert!(templates.iter().all(|t| t.id != "training_dummy"));
    }
}
