//! Affixes - Enemy modifiers drawn from a conflict-aware pool

use crate::types::Element;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Share of max HP granted as a shield pool
pub const SHIELD_PERCENT: f64 = 0.5;
/// Share of max HP healed each turn
pub const REGEN_PERCENT: f64 = 0.05;
pub const ARMORED_DEFENSE: f64 = 1.5;
pub const BERSERKER_DAMAGE: f64 = 1.3;
pub const BERSERKER_DEFENSE: f64 = 0.75;
/// Damage bonus below half HP
pub const ENRAGED_DAMAGE: f64 = 1.5;
/// Share of dealt damage healed
pub const VAMPIRIC_LEECH: f64 = 0.25;
/// Burn per turn as a share of the hit
pub const BURNING_SHARE: f64 = 0.15;
pub const BURNING_TURNS: u32 = 3;
pub const FROZEN_SLOW: f64 = 20.0;
pub const FROZEN_TURNS: u32 = 2;
/// Chance (percent) a Shocking hit stuns
pub const SHOCK_STUN_CHANCE: f64 = 15.0;
/// Stuns placed on the hero must outlast the end-of-turn tick that follows
pub const SHOCK_STUN_TURNS: u32 = 2;
/// Chance (percent) of a second attack
pub const FAST_EXTRA_ATTACK: f64 = 25.0;

/// Closed set of enemy affixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffixKind {
    Shielded,
    Armored,
    Enraged,
    Berserker,
    Vampiric,
    Regenerating,
    Burning,
    FrozenAura,
    Shocking,
    Fast,
    Phasing,
}

/// Pairs that never appear on the same enemy
const CONFLICTS: &[(AffixKind, AffixKind)] = &[
    (AffixKind::Burning, AffixKind::FrozenAura),
    (AffixKind::Burning, AffixKind::Shocking),
    (AffixKind::FrozenAura, AffixKind::Shocking),
    (AffixKind::Armored, AffixKind::Berserker),
    (AffixKind::Shielded, AffixKind::Phasing),
    (AffixKind::Regenerating, AffixKind::Vampiric),
];

impl AffixKind {
    pub fn all() -> &'static [AffixKind] {
        &[
            AffixKind::Shielded,
            AffixKind::Armored,
            AffixKind::Enraged,
            AffixKind::Berserker,
            AffixKind::Vampiric,
            AffixKind::Regenerating,
            AffixKind::Burning,
            AffixKind::FrozenAura,
            AffixKind::Shocking,
            AffixKind::Fast,
            AffixKind::Phasing,
        ]
    }

    /// Symmetric conflict check
    pub fn conflicts_with(&self, other: AffixKind) -> bool {
        CONFLICTS
            .iter()
            .any(|&(a, b)| (a == *self && b == other) || (b == *self && a == other))
    }

    pub fn name(&self) -> &'static str {
        match self {
            AffixKind::Shielded => "Shielded",
            AffixKind::Armored => "Armored",
            AffixKind::Enraged => "Enraged",
            AffixKind::Berserker => "Berserker",
            AffixKind::Vampiric => "Vampiric",
            AffixKind::Regenerating => "Regenerating",
            AffixKind::Burning => "Burning",
            AffixKind::FrozenAura => "Frozen",
            AffixKind::Shocking => "Shocking",
            AffixKind::Fast => "Fast",
            AffixKind::Phasing => "Phasing",
        }
    }

    /// Element an elemental aura makes the enemy resistant to
    pub fn resisted_element(&self) -> Option<Element> {
        match self {
            AffixKind::Burning => Some(Element::Fire),
            AffixKind::FrozenAura => Some(Element::Ice),
            AffixKind::Shocking => Some(Element::Lightning),
            _ => None,
        }
    }
}

/// Draw up to `count` affixes. Every draw removes the drawn affix and
/// everything it conflicts with from the pool.
pub fn roll_affixes(count: usize, rng: &mut impl Rng) -> Vec<AffixKind> {
    let mut pool: Vec<AffixKind> = AffixKind::all().to_vec();
    let mut drawn = Vec::with_capacity(count);

    while drawn.len() < count && !pool.is_empty() {
        let affix = pool.remove(rng.gen_range(0..pool.len()));
        pool.retain(|other| !affix.conflicts_with(*other));
        drawn.push(affix);
    }

    drawn
}
