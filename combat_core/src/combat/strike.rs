//! Strike resolution - One attack from one side to the other
//!
//! Every hero hit, whether a basic attack or one hit of an ability, goes
//! through [`hero_strike`]: hit roll, Phasing evade check, then the damage
//! pipeline with its single crit roll. Enemy hits go through
//! [`enemy_strike`]: hero dodge roll, variance, then the same pipeline.

use crate::combatant::Hero;
use crate::config::GameConstants;
use crate::damage::{compute_damage, AttackProfile, DamageBreakdown, DamageInput, TargetProfile};
use crate::defense::{hit_chance, roll_chance};
use crate::effect::ActiveEffect;
use crate::enemy::{
    AffixKind, Enemy, BURNING_SHARE, BURNING_TURNS, FAST_EXTRA_ATTACK, FROZEN_SLOW, FROZEN_TURNS, SHOCK_STUN_CHANCE,
    SHOCK_STUN_TURNS, VAMPIRIC_LEECH,
};
use crate::types::{Element, Stat};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a single strike ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StrikeOutcome {
    /// Failed the attacker's hit roll
    Missed,
    /// A Phasing enemy slipped the hit
    Evaded,
    /// The hero dodged
    Dodged,
    Landed(DamageBreakdown),
}

/// Result of one strike
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strike {
    pub outcome: StrikeOutcome,
    /// Damage soaked by a shield
    pub absorbed: f64,
    /// Damage that reached HP
    pub dealt: f64,
    /// Lifesteal healing for the attacker
    pub healed: f64,
}

impl Strike {
    fn avoided(outcome: StrikeOutcome) -> Self {
        Strike {
            outcome,
            absorbed: 0.0,
            dealt: 0.0,
            healed: 0.0,
        }
    }

    pub fn landed(&self) -> bool {
        matches!(self.outcome, StrikeOutcome::Landed(_))
    }

    pub fn breakdown(&self) -> Option<&DamageBreakdown> {
        match &self.outcome {
            StrikeOutcome::Landed(breakdown) => Some(breakdown),
            _ => None,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.breakdown().map(|b| b.is_critical).unwrap_or(false)
    }

    /// Damage the target lost, shield included
    pub fn total_damage(&self) -> f64 {
        self.absorbed + self.dealt
    }
}

/// One hero hit against the enemy
pub fn hero_strike(
    hero: &mut Hero,
    enemy: &mut Enemy,
    input: DamageInput<'_>,
    hit_bonus: f64,
    inspected: bool,
    constants: &GameConstants,
    rng: &mut impl Rng,
) -> Strike {
    let derived = hero.combatant.derived_stats(constants);
    let inspection_bonus = if inspected {
        constants.inspection.hit_bonus
    } else {
        0.0
    };

    let chance = hit_chance(derived.hit_chance, hit_bonus, inspection_bonus);
    if !roll_chance(chance, rng) {
        debug!(chance, "hero missed");
        return Strike::avoided(StrikeOutcome::Missed);
    }
    if roll_chance(enemy.evade_chance(), rng) {
        debug!("enemy phased out of the hit");
        return Strike::avoided(StrikeOutcome::Evaded);
    }

    let slow = hero.combatant.effects.slow_percent();
    let input = input.scaled(1.0 - slow / 100.0);
    let attack = AttackProfile {
        crit_chance: derived.crit_chance,
        crit_multiplier: derived.crit_multiplier,
    };
    let target = TargetProfile {
        defense: enemy.defense(),
        affinity: enemy.combatant.affinity,
        inspected,
    };

    let breakdown = compute_damage(&input, &attack, &target, constants, rng);
    let (absorbed, dealt) = enemy.receive_hit(breakdown.final_damage);
    let healed = hero
        .combatant
        .heal((absorbed + dealt) * derived.lifesteal_percent / 100.0);

    debug!(
        damage = breakdown.final_damage,
        crit = breakdown.is_critical,
        absorbed,
        dealt,
        healed,
        "hero hit landed"
    );

    Strike {
        outcome: StrikeOutcome::Landed(breakdown),
        absorbed,
        dealt,
        healed,
    }
}

/// One enemy hit against the hero, scaled by `multiplier` for specials
pub fn enemy_strike(
    enemy: &mut Enemy,
    hero: &mut Hero,
    multiplier: f64,
    constants: &GameConstants,
    rng: &mut impl Rng,
) -> Strike {
    let dodge = hero.combatant.derived_stats(constants).dodge_chance;
    if roll_chance(dodge, rng) {
        debug!(dodge, "hero dodged");
        return Strike::avoided(StrikeOutcome::Dodged);
    }

    let variance = constants.enemy.damage_variance.abs();
    let roll = if variance > 0.0 {
        rng.gen_range(1.0 - variance..=1.0 + variance)
    } else {
        1.0
    };
    let slow = enemy.combatant.effects.slow_percent();
    let raw = enemy.attack_damage() * multiplier * roll * (1.0 - slow / 100.0);

    let attack = AttackProfile {
        crit_chance: constants.enemy.crit_chance,
        crit_multiplier: constants.crit.base_multiplier,
    };
    let target = TargetProfile {
        defense: hero.combatant.effective_stat(Stat::Defense),
        affinity: hero.combatant.affinity,
        inspected: false,
    };

    let breakdown = compute_damage(&DamageInput::physical(raw), &attack, &target, constants, rng);
    let dealt = hero.combatant.take_damage(breakdown.final_damage);

    debug!(damage = breakdown.final_damage, crit = breakdown.is_critical, dealt, "enemy hit landed");

    Strike {
        outcome: StrikeOutcome::Landed(breakdown),
        absorbed: 0.0,
        dealt,
        healed: 0.0,
    }
}

/// Something an affix did after a landed enemy attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AffixTrigger {
    Leeched { affix: AffixKind, healed: f64 },
    Inflicted { affix: AffixKind, effect: String },
}

/// On-hit affix behaviour after a landed enemy attack
pub fn apply_on_hit_affixes(enemy: &mut Enemy, hero: &mut Hero, strike: &Strike, rng: &mut impl Rng) -> Vec<AffixTrigger> {
    let mut triggers = Vec::new();
    if !strike.landed() {
        return triggers;
    }

    for affix in enemy.affixes.clone() {
        match affix {
            AffixKind::Vampiric => {
                let healed = enemy.combatant.heal(strike.dealt * VAMPIRIC_LEECH);
                if healed > 0.0 {
                    triggers.push(AffixTrigger::Leeched { affix, healed });
                }
            }
            AffixKind::Burning => {
                let burn = ActiveEffect::burn((strike.dealt * BURNING_SHARE).max(1.0), BURNING_TURNS);
                if hero.combatant.effects.apply(burn.clone()) {
                    triggers.push(AffixTrigger::Inflicted { affix, effect: burn.name });
                }
            }
            AffixKind::FrozenAura => {
                let slow = ActiveEffect::slow(FROZEN_SLOW, FROZEN_TURNS);
                if hero.combatant.effects.apply(slow.clone()) {
                    triggers.push(AffixTrigger::Inflicted { affix, effect: slow.name });
                }
            }
            AffixKind::Shocking => {
                if roll_chance(SHOCK_STUN_CHANCE, rng) {
                    let stun = ActiveEffect::stun(SHOCK_STUN_TURNS);
                    if hero.combatant.effects.apply(stun.clone()) {
                        triggers.push(AffixTrigger::Inflicted { affix, effect: stun.name });
                    }
                }
            }
            AffixKind::Shielded
            | AffixKind::Armored
            | AffixKind::Enraged
            | AffixKind::Berserker
            | AffixKind::Regenerating
            | AffixKind::Fast
            | AffixKind::Phasing => {}
        }
    }

    triggers
}

/// Whether a Fast enemy gets a second attack this turn
pub fn rolls_extra_attack(enemy: &Enemy, rng: &mut impl Rng) -> bool {
    enemy.has_affix(AffixKind::Fast) && roll_chance(FAST_EXTRA_ATTACK, rng)
}

/// Something an enchantment did after a landed basic attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnchantmentTrigger {
    TargetEffect { element: Element, effect: String },
    AttackerEffect { element: Element, effect: String },
    AttackerHealed { element: Element, amount: f64 },
}

/// Apply each enchantment's secondary effect, scaled by what it contributed
pub fn apply_enchantment_secondaries(
    hero: &mut Hero,
    enemy: &mut Enemy,
    breakdown: &DamageBreakdown,
    rng: &mut impl Rng,
) -> Vec<EnchantmentTrigger> {
    let mut triggers = Vec::new();

    for contribution in &breakdown.enchantments {
        let element = contribution.element;
        let secondary = crate::damage::SecondaryEffect::for_element(element);

        if enemy.is_alive() {
            if let Some(effect) = secondary.target_effect(contribution.amount) {
                if rng.gen_bool(secondary.trigger_chance().clamp(0.0, 1.0)) && enemy.combatant.effects.apply(effect.clone()) {
                    triggers.push(EnchantmentTrigger::TargetEffect {
                        element,
                        effect: effect.name,
                    });
                }
            }
        }

        if let Some(effect) = secondary.attacker_effect(contribution.amount) {
            if hero.combatant.effects.apply(effect.clone()) {
                triggers.push(EnchantmentTrigger::AttackerEffect {
                    element,
                    effect: effect.name,
                });
            }
        }

        let heal = secondary.attacker_heal(contribution.amount);
        if heal > 0.0 {
            let amount = hero.combatant.heal(heal);
            if amount > 0.0 {
                triggers.push(EnchantmentTrigger::AttackerHealed { element, amount });
            }
        }
    }

    triggers
}
