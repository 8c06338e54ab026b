//! Abilities - Data-driven hero skills and their execution
//!
//! An [`Ability`] is pure configuration plus one piece of runtime state, its
//! remaining cooldown. Execution lives in [`execute`].

mod execute;

pub use execute::{use_ability, AbilityOutcome};

use crate::combatant::Combatant;
use crate::effect::ActiveEffect;
use crate::types::{Stat, StatModifiers};
use serde::{Deserialize, Serialize};

/// Damage formula: `base + effective(stat) * ratio`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scaling {
    #[serde(default)]
    pub base: f64,
    #[serde(default)]
    pub stat: Option<Stat>,
    #[serde(default)]
    pub ratio: f64,
}

impl Scaling {
    pub fn new(base: f64, stat: Option<Stat>, ratio: f64) -> Self {
        Scaling { base, stat, ratio }
    }

    pub fn evaluate(&self, combatant: &Combatant) -> f64 {
        let from_stat = self
            .stat
            .map(|stat| combatant.effective_stat(stat) * self.ratio)
            .unwrap_or(0.0);
        (self.base + from_stat).max(0.0)
    }
}

/// A buff the ability grants to the hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffSpec {
    pub name: String,
    #[serde(default)]
    pub modifiers: StatModifiers,
    pub duration: u32,
}

impl BuffSpec {
    pub fn to_effect(&self) -> ActiveEffect {
        ActiveEffect::stat_modifier(self.name.clone(), self.modifiers, self.duration)
    }
}

/// A debuff the ability places on the enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DebuffSpec {
    Burn { damage: f64, duration: u32 },
    Poison { damage: f64, duration: u32 },
    Stun { duration: u32 },
    Slow { percent: f64, duration: u32 },
    Weaken {
        name: String,
        modifiers: StatModifiers,
        duration: u32,
    },
}

impl DebuffSpec {
    pub fn to_effect(&self) -> ActiveEffect {
        match self {
            DebuffSpec::Burn { damage, duration } => ActiveEffect::burn(*damage, *duration),
            DebuffSpec::Poison { damage, duration } => ActiveEffect::poison(*damage, *duration),
            DebuffSpec::Stun { duration } => ActiveEffect::stun(*duration),
            DebuffSpec::Slow { percent, duration } => ActiveEffect::slow(*percent, *duration),
            DebuffSpec::Weaken {
                name,
                modifiers,
                duration,
            } => ActiveEffect::stat_modifier(name.clone(), *modifiers, *duration),
        }
    }
}

/// A hero ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub description: String,

    // === Costs ===
    #[serde(default)]
    pub cost: f64,
    /// Turns before the ability can be used again
    #[serde(default)]
    pub cooldown: u32,
    #[serde(skip)]
    remaining_cooldown: u32,

    // === Damage ===
    #[serde(default)]
    pub scaling: Scaling,
    #[serde(default = "default_hits")]
    pub hits: u32,
    /// Percentage points added to hit chance for each hit
    #[serde(default)]
    pub hit_bonus: f64,

    // === Combo ===
    /// Ability that must have been used immediately before for the bonus
    #[serde(default)]
    pub combo_after: Option<String>,
    #[serde(default = "default_combo_bonus")]
    pub combo_bonus: f64,

    // === Self effects ===
    #[serde(default)]
    pub self_damage: f64,
    #[serde(default)]
    pub heal_flat: f64,
    /// Percent of max HP
    #[serde(default)]
    pub heal_percent: f64,
    #[serde(default)]
    pub buff: Option<BuffSpec>,
    #[serde(default)]
    pub resource_generated: f64,

    // === Target effects ===
    #[serde(default)]
    pub debuff: Option<DebuffSpec>,
}

fn default_hits() -> u32 {
    1
}

fn default_combo_bonus() -> f64 {
    1.5
}

impl Default for Ability {
    fn default() -> Self {
        Ability::new("Unnamed")
    }
}

impl Ability {
    pub fn new(name: impl Into<String>) -> Self {
        Ability {
            name: name.into(),
            description: String::new(),
            cost: 0.0,
            cooldown: 0,
            remaining_cooldown: 0,
            scaling: Scaling::default(),
            hits: default_hits(),
            hit_bonus: 0.0,
            combo_after: None,
            combo_bonus: default_combo_bonus(),
            self_damage: 0.0,
            heal_flat: 0.0,
            heal_percent: 0.0,
            buff: None,
            resource_generated: 0.0,
            debuff: None,
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_scaling(mut self, base: f64, stat: Option<Stat>, ratio: f64) -> Self {
        self.scaling = Scaling::new(base, stat, ratio);
        self
    }

    pub fn with_hits(mut self, hits: u32) -> Self {
        self.hits = hits;
        self
    }

    pub fn with_hit_bonus(mut self, bonus: f64) -> Self {
        self.hit_bonus = bonus;
        self
    }

    pub fn with_combo(mut self, after: impl Into<String>, bonus: f64) -> Self {
        self.combo_after = Some(after.into());
        self.combo_bonus = bonus;
        self
    }

    pub fn with_self_damage(mut self, amount: f64) -> Self {
        self.self_damage = amount;
        self
    }

    pub fn with_heal(mut self, flat: f64, percent: f64) -> Self {
        self.heal_flat = flat;
        self.heal_percent = percent;
        self
    }

    pub fn with_buff(mut self, buff: BuffSpec) -> Self {
        self.buff = Some(buff);
        self
    }

    pub fn with_debuff(mut self, debuff: DebuffSpec) -> Self {
        self.debuff = Some(debuff);
        self
    }

    pub fn with_resource_generated(mut self, amount: f64) -> Self {
        self.resource_generated = amount;
        self
    }

    // === Cooldown ===

    pub fn remaining_cooldown(&self) -> u32 {
        self.remaining_cooldown
    }

    pub fn is_ready(&self) -> bool {
        self.remaining_cooldown == 0
    }

    /// Put the ability on its full cooldown. The only way remaining cooldown goes up.
    pub fn start_cooldown(&mut self) {
        self.remaining_cooldown = self.cooldown;
    }

    /// One action has passed
    pub fn tick_cooldown(&mut self) {
        self.remaining_cooldown = self.remaining_cooldown.saturating_sub(1);
    }

    pub fn reset_cooldown(&mut self) {
        self.remaining_cooldown = 0;
    }

    // === Values ===

    /// Damage before combo bonus, defense or crit
    pub fn scaled_damage(&self, user: &Combatant) -> f64 {
        self.scaling.evaluate(user)
    }

    /// Flat heal plus percent of max HP
    pub fn heal_amount(&self, max_hp: f64) -> f64 {
        self.heal_flat + max_hp * self.heal_percent / 100.0
    }

    /// Whether `previous` satisfies this ability's combo prerequisite
    pub fn combo_satisfied_by(&self, previous: Option<&str>) -> bool {
        match (&self.combo_after, previous) {
            (Some(required), Some(previous)) => required == previous,
            _ => false,
        }
    }
}
