//! Inventory - The potion boundary between combat and the economy
//!
//! Combat only ever queries counts and consumes one potion per use. The
//! backing store belongs to whoever implements [`Inventory`].

use crate::effect::ActiveEffect;
use crate::types::{Stat, StatModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PotionKind {
    Health,
    Resource,
    /// +Strength buff
    Might,
    /// +Defense buff
    Fortitude,
}

impl PotionKind {
    pub fn all() -> &'static [PotionKind] {
        &[PotionKind::Health, PotionKind::Resource, PotionKind::Might, PotionKind::Fortitude]
    }
}

/// What drinking a potion does
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PotionEffect {
    Heal(f64),
    Restore(f64),
    Buff {
        name: String,
        modifiers: StatModifiers,
        duration: u32,
    },
}

impl PotionEffect {
    /// Status effect granted by a buff potion
    pub fn to_effect(&self) -> Option<ActiveEffect> {
        match self {
            PotionEffect::Buff {
                name,
                modifiers,
                duration,
            } => Some(ActiveEffect::stat_modifier(name.clone(), *modifiers, *duration)),
            PotionEffect::Heal(_) | PotionEffect::Restore(_) => None,
        }
    }
}

/// Potion supply as seen by combat
pub trait Inventory {
    fn potion_count(&self, kind: PotionKind) -> u32;

    /// Consume one potion. `None` when none are left.
    fn take_potion(&mut self, kind: PotionKind) -> Option<PotionEffect>;
}

/// Default strength of each potion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotionStrength {
    pub heal: f64,
    pub restore: f64,
    pub buff_amount: f64,
    pub buff_duration: u32,
}

impl Default for PotionStrength {
    fn default() -> Self {
        PotionStrength {
            heal: 40.0,
            restore: 40.0,
            buff_amount: 5.0,
            buff_duration: 3,
        }
    }
}

/// In-memory potion bag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Satchel {
    counts: HashMap<PotionKind, u32>,
    #[serde(default)]
    strength: PotionStrength,
}

impl Satchel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strength(strength: PotionStrength) -> Self {
        Satchel {
            counts: HashMap::new(),
            strength,
        }
    }

    pub fn add(&mut self, kind: PotionKind, count: u32) {
        *self.counts.entry(kind).or_insert(0) += count;
    }

    pub fn with(mut self, kind: PotionKind, count: u32) -> Self {
        self.add(kind, count);
        self
    }

    fn effect_for(&self, kind: PotionKind) -> PotionEffect {
        let s = &self.strength;
        match kind {
            PotionKind::Health => PotionEffect::Heal(s.heal),
            PotionKind::Resource => PotionEffect::Restore(s.restore),
            PotionKind::Might => PotionEffect::Buff {
                name: "Might".to_string(),
                modifiers: StatModifiers::single(Stat::Strength, s.buff_amount),
                duration: s.buff_duration,
            },
            PotionKind::Fortitude => PotionEffect::Buff {
                name: "Fortitude".to_string(),
                modifiers: StatModifiers::single(Stat::Defense, s.buff_amount),
                duration: s.buff_duration,
            },
        }
    }
}

impl Inventory for Satchel {
    fn potion_count(&self, kind: PotionKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    fn take_potion(&mut self, kind: PotionKind) -> Option<PotionEffect> {
        let count = self.counts.get_mut(&kind)?;
        if *count == 0 {
            return None;
        }
        *count -= 1;
        Some(self.effect_for(kind))
    }
}
