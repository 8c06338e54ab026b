//! Weapon enchantments and their secondary effects

use crate::effect::ActiveEffect;
use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Burn: share of the enchantment's contribution dealt per turn
const BURN_SHARE: f64 = 0.3;
const BURN_TURNS: u32 = 3;
const SLOW_PERCENT: f64 = 25.0;
const SLOW_TURNS: u32 = 2;
/// Chance (0-1) a lightning enchantment stuns
const STUN_CHANCE: f64 = 0.2;
const STUN_TURNS: u32 = 1;
const POISON_SHARE: f64 = 0.25;
const POISON_TURNS: u32 = 4;
const HOLY_HEAL_SHARE: f64 = 0.5;
const SHADOW_LIFESTEAL_SHARE: f64 = 0.3;
const REGEN_SHARE: f64 = 0.2;
const REGEN_TURNS: u32 = 3;

/// Elemental bonus damage attached to a weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enchantment {
    pub element: Element,
    pub base_damage: f64,
}

impl Enchantment {
    pub fn new(element: Element, base_damage: f64) -> Self {
        Enchantment { element, base_damage }
    }
}

/// What an enchantment does beyond its damage, once a hit lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryEffect {
    Burn,
    Slow,
    StunChance,
    Poison,
    AttackerHeal,
    Lifesteal,
    None,
    AttackerRegen,
}

impl SecondaryEffect {
    pub fn for_element(element: Element) -> Self {
        match element {
            Element::Fire => SecondaryEffect::Burn,
            Element::Ice => SecondaryEffect::Slow,
            Element::Lightning => SecondaryEffect::StunChance,
            Element::Poison => SecondaryEffect::Poison,
            Element::Holy => SecondaryEffect::AttackerHeal,
            Element::Shadow => SecondaryEffect::Lifesteal,
            Element::Arcane => SecondaryEffect::None,
            Element::Nature => SecondaryEffect::AttackerRegen,
        }
    }

    /// Effect placed on the target, given the enchantment's dealt contribution
    pub fn target_effect(&self, contribution: f64) -> Option<ActiveEffect> {
        match self {
            SecondaryEffect::Burn => Some(ActiveEffect::burn((contribution * BURN_SHARE).max(1.0), BURN_TURNS)),
            SecondaryEffect::Slow => Some(ActiveEffect::slow(SLOW_PERCENT, SLOW_TURNS)),
            SecondaryEffect::StunChance => Some(ActiveEffect::stun(STUN_TURNS)),
            SecondaryEffect::Poison => Some(ActiveEffect::poison((contribution * POISON_SHARE).max(1.0), POISON_TURNS)),
            SecondaryEffect::AttackerHeal
            | SecondaryEffect::Lifesteal
            | SecondaryEffect::None
            | SecondaryEffect::AttackerRegen => None,
        }
    }

    /// Effect placed on the attacker
    pub fn attacker_effect(&self, contribution: f64) -> Option<ActiveEffect> {
        match self {
            SecondaryEffect::AttackerRegen => {
                Some(ActiveEffect::regeneration((contribution * REGEN_SHARE).max(1.0), REGEN_TURNS))
            }
            _ => None,
        }
    }

    /// Immediate healing for the attacker
    pub fn attacker_heal(&self, contribution: f64) -> f64 {
        match self {
            SecondaryEffect::AttackerHeal => contribution * HOLY_HEAL_SHARE,
            SecondaryEffect::Lifesteal => contribution * SHADOW_LIFESTEAL_SHARE,
            _ => 0.0,
        }
    }

    /// Chance (0-1) the target effect actually triggers
    pub fn trigger_chance(&self) -> f64 {
        match self {
            SecondaryEffect::StunChance => STUN_CHANCE,
            _ => 1.0,
        }
    }
}
