//! Damage pipeline - turning attacker inputs into a DamageBreakdown
//!
//! Fixed order:
//! 1. Primary-stat physical base
//! 2. Weapon attack bonus
//! 3. Enchantments, each scaled by the target's vulnerability/resistance
//! 4. Ability damage
//! 5. Sum into `total_before_defense`
//! 6. One crit roll (+inspection bonus), multiplying the running total
//! 7. Subtract defense, floored at the minimum damage
//!
//! The crit roll is the only randomness; [`resolve_breakdown`] is the pure
//! part and takes the roll as an argument.

use super::{DamageBreakdown, Enchantment, EnchantmentDamage};
use crate::combatant::Affinity;
use crate::config::GameConstants;
use crate::defense::{apply_defense, roll_chance};
use rand::Rng;

/// Raw offensive inputs to one hit
#[derive(Debug, Clone, Copy, Default)]
pub struct DamageInput<'a> {
    pub base_physical: f64,
    pub weapon_bonus: f64,
    pub enchantments: &'a [Enchantment],
    pub ability_damage: f64,
}

impl<'a> DamageInput<'a> {
    /// A weapon swing: primary stat, weapon bonus and enchantments
    pub fn basic_attack(base_physical: f64, weapon_bonus: f64, enchantments: &'a [Enchantment]) -> Self {
        DamageInput {
            base_physical,
            weapon_bonus,
            enchantments,
            ability_damage: 0.0,
        }
    }

    /// One hit of an ability; the ability's own damage is the whole input
    pub fn ability(ability_damage: f64) -> Self {
        DamageInput {
            ability_damage,
            ..Default::default()
        }
    }

    /// Plain physical damage, used for enemy attacks
    pub fn physical(amount: f64) -> Self {
        DamageInput {
            base_physical: amount,
            ..Default::default()
        }
    }

    /// Scale the non-elemental parts (slows reduce these)
    pub fn scaled(mut self, factor: f64) -> Self {
        self.base_physical *= factor;
        self.weapon_bonus *= factor;
        self.ability_damage *= factor;
        self
    }
}

/// Attacker's crit profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackProfile {
    /// Percent, before inspection bonus
    pub crit_chance: f64,
    pub crit_multiplier: f64,
}

/// What the defender brings to the computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetProfile {
    pub defense: f64,
    pub affinity: Affinity,
    /// Whether the hero inspected this target this battle
    pub inspected: bool,
}

/// Roll for a critical strike, once per hit
pub fn roll_critical(chance_percent: f64, rng: &mut impl Rng) -> bool {
    roll_chance(chance_percent, rng)
}

/// Run the full pipeline, rolling crit exactly once
pub fn compute_damage(
    input: &DamageInput<'_>,
    attack: &AttackProfile,
    target: &TargetProfile,
    constants: &GameConstants,
    rng: &mut impl Rng,
) -> DamageBreakdown {
    let crit_chance = effective_crit_chance(attack, target, constants);
    let is_critical = roll_critical(crit_chance, rng);
    resolve_breakdown(input, attack, target, is_critical, constants)
}

/// The deterministic part of the pipeline, given the outcome of the crit roll
pub fn resolve_breakdown(
    input: &DamageInput<'_>,
    attack: &AttackProfile,
    target: &TargetProfile,
    is_critical: bool,
    constants: &GameConstants,
) -> DamageBreakdown {
    // Steps 1-2
    let base = input.base_physical.max(0.0);
    let weapon_bonus = input.weapon_bonus.max(0.0);

    // Step 3
    let enchantments: Vec<EnchantmentDamage> = input
        .enchantments
        .iter()
        .map(|enchant| {
            let multiplier = target.affinity.multiplier(enchant.element, &constants.damage);
            EnchantmentDamage {
                element: enchant.element,
                base: enchant.base_damage,
                multiplier,
                amount: enchant.base_damage.max(0.0) * multiplier,
            }
        })
        .collect();

    // Step 4
    let ability_damage = input.ability_damage.max(0.0);

    // Step 5
    let enchantment_total: f64 = enchantments.iter().map(|e| e.amount).sum();
    let total_before_defense = base + weapon_bonus + enchantment_total + ability_damage;

    // Step 6
    let crit_multiplier = attack.crit_multiplier;
    let total_after_crit = if is_critical {
        total_before_defense * crit_multiplier
    } else {
        total_before_defense
    };

    // Step 7
    let defense = target.defense.max(0.0);
    let (final_damage, mitigated) = apply_defense(total_after_crit, defense, constants.damage.min_damage);

    DamageBreakdown {
        base,
        weapon_bonus,
        enchantments,
        ability_damage,
        total_before_defense,
        crit_chance: effective_crit_chance(attack, target, constants),
        is_critical,
        crit_multiplier,
        total_after_crit,
        defense,
        mitigated,
        final_damage,
    }
}

fn effective_crit_chance(attack: &AttackProfile, target: &TargetProfile, constants: &GameConstants) -> f64 {
    let bonus = if target.inspected {
        constants.inspection.crit_bonus
    } else {
        0.0
    };
    (attack.crit_chance + bonus).clamp(0.0, 100.0)
}
