//! Combatant - State shared by the hero and enemies

mod derived;
mod hero;
mod stat_value;

pub use derived::DerivedStats;
pub use hero::{Armor, Equipment, Hero, Weapon};
pub use stat_value::StatValue;

use crate::config::{DamageConstants, GameConstants};
use crate::effect::{resolve_effects, EffectTickResult, StatusEffects};
use crate::types::{Element, ResourceKind, Stat};
use serde::{Deserialize, Serialize};

/// Core attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreStats {
    pub strength: StatValue,
    pub dexterity: StatValue,
    pub intelligence: StatValue,
    pub defense: StatValue,
}

impl CoreStats {
    pub fn new(strength: f64, dexterity: f64, intelligence: f64, defense: f64) -> Self {
        CoreStats {
            strength: StatValue::with_base(strength),
            dexterity: StatValue::with_base(dexterity),
            intelligence: StatValue::with_base(intelligence),
            defense: StatValue::with_base(defense),
        }
    }

    pub fn get(&self, stat: Stat) -> &StatValue {
        match stat {
            Stat::Strength => &self.strength,
            Stat::Dexterity => &self.dexterity,
            Stat::Intelligence => &self.intelligence,
            Stat::Defense => &self.defense,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut StatValue {
        match stat {
            Stat::Strength => &mut self.strength,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Defense => &mut self.defense,
        }
    }
}

/// Resource pool used to pay for abilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub current: f64,
    pub max: f64,
}

impl Resource {
    pub fn new(kind: ResourceKind, max: f64) -> Self {
        // Rage builds up during a fight, the others start full
        let current = match kind {
            ResourceKind::Rage => 0.0,
            ResourceKind::Mana | ResourceKind::Energy => max,
        };
        Resource { kind, current, max }
    }

    /// Spend `amount` if available
    pub fn spend(&mut self, amount: f64) -> bool {
        if amount > self.current {
            return false;
        }
        self.current -= amount;
        true
    }

    /// Restore up to `amount`, capped at max. Returns the amount actually gained.
    pub fn restore(&mut self, amount: f64) -> f64 {
        let before = self.current;
        self.current = (self.current + amount.max(0.0)).min(self.max);
        self.current - before
    }
}

/// Elemental vulnerability and resistance. The two never name the same element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affinity {
    vulnerable: Option<Element>,
    resistant: Option<Element>,
}

impl Affinity {
    pub fn new(vulnerable: Option<Element>, resistant: Option<Element>) -> Self {
        let mut affinity = Affinity::default();
        if let Some(element) = resistant {
            affinity.set_resistant(element);
        }
        if let Some(element) = vulnerable {
            affinity.set_vulnerable(element);
        }
        affinity
    }

    pub fn vulnerable(&self) -> Option<Element> {
        self.vulnerable
    }

    pub fn resistant(&self) -> Option<Element> {
        self.resistant
    }

    /// Mark vulnerable to `element`, dropping a resistance to the same element
    pub fn set_vulnerable(&mut self, element: Element) {
        if self.resistant == Some(element) {
            self.resistant = None;
        }
        self.vulnerable = Some(element);
    }

    /// Mark resistant to `element`, dropping a vulnerability to the same element
    pub fn set_resistant(&mut self, element: Element) {
        if self.vulnerable == Some(element) {
            self.vulnerable = None;
        }
        self.resistant = Some(element);
    }

    /// Damage multiplier for an incoming element
    pub fn multiplier(&self, element: Element, constants: &DamageConstants) -> f64 {
        if self.vulnerable == Some(element) {
            constants.vulnerability_multiplier
        } else if self.resistant == Some(element) {
            constants.resistance_multiplier
        } else {
            1.0
        }
    }
}

/// Complete combat state for one side of a battle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub level: u32,
    pub max_hp: StatValue,
    pub current_hp: f64,
    pub resource: Resource,
    pub stats: CoreStats,
    #[serde(default)]
    pub effects: StatusEffects,
    #[serde(default)]
    pub affinity: Affinity,
}

impl Combatant {
    pub fn new(name: impl Into<String>, level: u32, max_hp: f64, resource: Resource, stats: CoreStats) -> Self {
        Combatant {
            name: name.into(),
            level,
            max_hp: StatValue::with_base(max_hp),
            current_hp: max_hp,
            resource,
            stats,
            effects: StatusEffects::new(),
            affinity: Affinity::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0.0
    }

    pub fn computed_max_hp(&self) -> f64 {
        self.max_hp.compute()
    }

    pub fn hp_percent(&self) -> f64 {
        let max = self.computed_max_hp();
        if max <= 0.0 {
            return 0.0;
        }
        (self.current_hp / max * 100.0).clamp(0.0, 100.0)
    }

    /// Stat value including active buffs and debuffs, never negative
    pub fn effective_stat(&self, stat: Stat) -> f64 {
        (self.stats.get(stat).compute() + self.effects.stat_modifier(stat)).max(0.0)
    }

    /// Remove HP, never below zero. Returns damage actually taken.
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        let taken = amount.max(0.0).min(self.current_hp);
        self.current_hp -= taken;
        taken
    }

    /// Heal, capped at max HP. Returns the amount actually healed.
    pub fn heal(&mut self, amount: f64) -> f64 {
        if !self.is_alive() {
            return 0.0;
        }
        let before = self.current_hp;
        self.current_hp = (self.current_hp + amount.max(0.0)).min(self.computed_max_hp());
        self.current_hp - before
    }

    /// Combat stats derived from current effective stats
    pub fn derived_stats(&self, constants: &GameConstants) -> DerivedStats {
        DerivedStats::from_combatant(self, constants)
    }

    /// End-of-turn effect phase: DoT damage, regeneration, duration countdown.
    /// Skipped entirely for a defeated combatant.
    pub fn resolve_end_of_turn(&mut self) -> EffectTickResult {
        if !self.is_alive() {
            return EffectTickResult::new();
        }

        let mut result = resolve_effects(&mut self.effects);
        result.total_damage = self.take_damage(result.total_damage);
        if self.is_alive() {
            result.total_healing = self.heal(result.total_healing);
        } else {
            result.total_healing = 0.0;
        }
        result
    }
}
