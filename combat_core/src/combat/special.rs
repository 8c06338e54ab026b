//! Enemy special abilities in action

use super::events::SpecialOutcome;
use super::strike::enemy_strike;
use crate::combatant::Hero;
use crate::config::GameConstants;
use crate::defense::roll_chance;
use crate::effect::ActiveEffect;
use crate::enemy::{Enemy, EnemyAbility};
use crate::types::{Stat, StatModifiers};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

const FLAME_BURST_BURN_SHARE: f64 = 0.2;
const FLAME_BURST_TURNS: u32 = 3;
const VENOM_SHARE: f64 = 0.25;
const VENOM_TURNS: u32 = 4;
const MEND_PERCENT: f64 = 0.2;
const STONE_SKIN_BONUS: f64 = 5.0;
const STONE_SKIN_TURNS: u32 = 3;
const BARRIER_PERCENT: f64 = 0.15;
/// Outlasts the end-of-turn tick right after the roar
const ROAR_STUN_TURNS: u32 = 2;
const ENFEEBLE_AMOUNT: f64 = -3.0;
const ENFEEBLE_TURNS: u32 = 3;
const MANA_DRAIN_AMOUNT: f64 = 20.0;

/// Roll whether the enemy uses a special this turn, and which one
pub fn roll_special(enemy: &Enemy, constants: &GameConstants, rng: &mut impl Rng) -> Option<EnemyAbility> {
    if enemy.abilities.is_empty() {
        return None;
    }
    if !roll_chance(constants.enemy.special_ability_chance * 100.0, rng) {
        return None;
    }
    enemy.abilities.choose(rng).copied()
}

/// Carry out one special ability
pub fn perform_special(
    ability: EnemyAbility,
    enemy: &mut Enemy,
    hero: &mut Hero,
    constants: &GameConstants,
    rng: &mut impl Rng,
) -> SpecialOutcome {
    let mut outcome = SpecialOutcome::new(ability);

    match ability {
        EnemyAbility::CrushingBlow | EnemyAbility::FlameBurst | EnemyAbility::VenomStrike => {
            let multiplier = ability.damage_multiplier().unwrap_or(1.0);
            let strike = enemy_strike(enemy, hero, multiplier, constants, rng);

            if strike.landed() && hero.is_alive() {
                let effect = match ability {
                    EnemyAbility::FlameBurst => Some(ActiveEffect::burn(
                        (strike.dealt * FLAME_BURST_BURN_SHARE).max(1.0),
                        FLAME_BURST_TURNS,
                    )),
                    EnemyAbility::VenomStrike => {
                        Some(ActiveEffect::poison((strike.dealt * VENOM_SHARE).max(1.0), VENOM_TURNS))
                    }
                    _ => None,
                };
                if let Some(effect) = effect {
                    let name = effect.name.clone();
                    if hero.combatant.effects.apply(effect) {
                        outcome.hero_effect = Some(name);
                    }
                }
            }
            outcome.strike = Some(strike);
        }
        EnemyAbility::Mend => {
            outcome.healed = enemy.combatant.heal(enemy.combatant.computed_max_hp() * MEND_PERCENT);
        }
        EnemyAbility::StoneSkin => {
            let effect = ActiveEffect::stat_modifier(
                ability.name(),
                StatModifiers::single(Stat::Defense, STONE_SKIN_BONUS),
                STONE_SKIN_TURNS,
            );
            if enemy.combatant.effects.apply(effect) {
                outcome.self_effect = Some(ability.name().to_string());
            }
        }
        EnemyAbility::Barrier => {
            let shield = enemy.combatant.computed_max_hp() * BARRIER_PERCENT;
            enemy.shield += shield;
            outcome.shield_gained = shield;
        }
        EnemyAbility::StunningRoar => {
            let stun = ActiveEffect::stun(ROAR_STUN_TURNS);
            let name = stun.name.clone();
            if hero.combatant.effects.apply(stun) {
                outcome.hero_effect = Some(name);
            }
        }
        EnemyAbility::Enfeeble => {
            let modifiers = StatModifiers {
                strength: ENFEEBLE_AMOUNT,
                dexterity: ENFEEBLE_AMOUNT,
                ..Default::default()
            };
            if hero
                .combatant
                .effects
                .apply(ActiveEffect::stat_modifier(ability.name(), modifiers, ENFEEBLE_TURNS))
            {
                outcome.hero_effect = Some(ability.name().to_string());
            }
        }
        EnemyAbility::ManaDrain => {
            let resource = &mut hero.combatant.resource;
            let drained = resource.current.min(MANA_DRAIN_AMOUNT);
            resource.current -= drained;
            outcome.drained = drained;
            outcome.healed = enemy.combatant.heal(drained);
        }
    }

    debug!(ability = ability.name(), "enemy special");
    outcome
}
