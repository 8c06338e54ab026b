//! Core types shared by every combat module

use serde::{Deserialize, Serialize};

/// Elemental damage types carried by weapon enchantments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    Poison,
    Holy,
    Shadow,
    Arcane,
    Nature,
}

impl Element {
    /// Get all elements
    pub fn all() -> &'static [Element] {
        &[
            Element::Fire,
            Element::Ice,
            Element::Lightning,
            Element::Poison,
            Element::Holy,
            Element::Shadow,
            Element::Arcane,
            Element::Nature,
        ]
    }
}

/// Core attributes a combatant carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Strength,
    Dexterity,
    Intelligence,
    Defense,
}

/// What kind of resource pays for abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Mana,
    Energy,
    Rage,
}

/// Playable hero classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroClass {
    Warrior,
    Mage,
    Rogue,
}

impl HeroClass {
    pub fn all() -> &'static [HeroClass] {
        &[HeroClass::Warrior, HeroClass::Mage, HeroClass::Rogue]
    }

    /// The stat that drives basic attack damage
    pub fn primary_stat(&self) -> Stat {
        match self {
            HeroClass::Warrior => Stat::Strength,
            HeroClass::Mage => Stat::Intelligence,
            HeroClass::Rogue => Stat::Dexterity,
        }
    }

    pub fn resource_kind(&self) -> ResourceKind {
        match self {
            HeroClass::Warrior => ResourceKind::Rage,
            HeroClass::Mage => ResourceKind::Mana,
            HeroClass::Rogue => ResourceKind::Energy,
        }
    }

    /// Config key used in ability tables
    pub fn key(&self) -> &'static str {
        match self {
            HeroClass::Warrior => "warrior",
            HeroClass::Mage => "mage",
            HeroClass::Rogue => "rogue",
        }
    }
}

/// Which side of the battle an event or effect concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Hero,
    Enemy,
}

/// Per-stat flat modifiers granted by buffs, debuffs and potions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatModifiers {
    #[serde(default)]
    pub strength: f64,
    #[serde(default)]
    pub dexterity: f64,
    #[serde(default)]
    pub intelligence: f64,
    #[serde(default)]
    pub defense: f64,
}

impl StatModifiers {
    /// Modifier for a single stat
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Defense => self.defense,
        }
    }

    /// Single-stat modifier
    pub fn single(stat: Stat, value: f64) -> Self {
        let mut mods = StatModifiers::default();
        match stat {
            Stat::Strength => mods.strength = value,
            Stat::Dexterity => mods.dexterity = value,
            Stat::Intelligence => mods.intelligence = value,
            Stat::Defense => mods.defense = value,
        }
        mods
    }

    /// Sum of absolute modifier values, used to compare strength of two modifiers
    pub fn magnitude(&self) -> f64 {
        self.strength.abs() + self.dexterity.abs() + self.intelligence.abs() + self.defense.abs()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitude() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_primary_and_resource() {
        assert_eq!(HeroClass::Warrior.primary_stat(), Stat::Strength);
        assert_eq!(HeroClass::Mage.resource_kind(), ResourceKind::Mana);
        assert_eq!(HeroClass::Rogue.primary_stat(), Stat::Dexterity);
    }

    #[test]
    fn test_stat_modifiers_single() {
        let mods = StatModifiers::single(Stat::Defense, 5.0);
        assert!((mods.get(Stat::Defense) - 5.0).abs() < f64::EPSILON);
        assert!((mods.get(Stat::Strength) - 0.0).abs() < f64::EPSILON);
        assert!(!mods.is_empty());
    }

    #[test]
    fn test_element_serialization() {
        let json = serde_json::to_string(&Element::Fire).unwrap();
        assert_eq!(json, "\"fire\"");
    }
}
