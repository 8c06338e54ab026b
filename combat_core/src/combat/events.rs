//! Combat events - Ordered narration stream for the presentation layer

use super::inventory::{PotionEffect, PotionKind};
use super::strike::{AffixTrigger, EnchantmentTrigger, Strike};
use super::BattleOutcome;
use crate::ability::AbilityOutcome;
use crate::effect::EffectTickResult;
use crate::enemy::EnemyAbility;
use crate::error::CombatError;
use crate::types::Side;

/// Every discrete thing that happened in a battle, in order
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    BattleStarted {
        hero: String,
        enemy: String,
        is_boss: bool,
    },
    HeroStunned,
    HeroAttack(Strike),
    AbilityUsed(AbilityOutcome),
    /// A hero action that failed and did not consume the turn
    ActionFailed(CombatError),
    PotionUsed {
        kind: PotionKind,
        effect: PotionEffect,
        /// HP healed or resource restored
        amount: f64,
    },
    Inspected {
        enemy: String,
        hp: f64,
        max_hp: f64,
        defense: f64,
        damage: f64,
        affixes: Vec<String>,
        abilities: Vec<String>,
    },
    Fled,
    FleeBlocked,
    EnchantmentTriggered(EnchantmentTrigger),
    EnemyStunned,
    EnemyAttack(Strike),
    EnemyAffix(AffixTrigger),
    EnemySpecial(SpecialOutcome),
    EffectTicked {
        side: Side,
        result: EffectTickResult,
    },
    ResourceRegenerated {
        amount: f64,
    },
    BattleEnded(BattleOutcome),
}

impl CombatEvent {
    /// One-line narration, for presentation layers that want plain text
    pub fn describe(&self) -> String {
        match self {
            CombatEvent::BattleStarted { hero, enemy, is_boss } => {
                if *is_boss {
                    format!("{} faces the boss {}!", hero, enemy)
                } else {
                    format!("{} encounters {}.", hero, enemy)
                }
            }
            CombatEvent::HeroStunned => "You are stunned and lose your turn.".to_string(),
            CombatEvent::HeroAttack(strike) => describe_strike("You", strike),
            CombatEvent::AbilityUsed(outcome) => {
                let mut text = format!("You use {}", outcome.ability);
                if outcome.combo_triggered {
                    text.push_str(" (COMBO)");
                }
                let total: f64 = outcome.hits.iter().map(|s| s.total_damage()).sum();
                if !outcome.hits.is_empty() {
                    text.push_str(&format!(": {} hit(s) for {:.0} damage", outcome.hits.len(), total));
                }
                if outcome.healed > 0.0 {
                    text.push_str(&format!(", healed {:.0}", outcome.healed));
                }
                text
            }
            CombatEvent::ActionFailed(err) => err.to_string(),
            CombatEvent::PotionUsed { kind, amount, .. } => format!("You drink a {:?} potion ({:.0}).", kind, amount),
            CombatEvent::Inspected { enemy, hp, max_hp, .. } => {
                format!("You study {} ({:.0}/{:.0} HP).", enemy, hp, max_hp)
            }
            CombatEvent::Fled => "You escape!".to_string(),
            CombatEvent::FleeBlocked => "There is no escape from this foe!".to_string(),
            CombatEvent::EnchantmentTriggered(trigger) => format!("{:?}", trigger),
            CombatEvent::EnemyStunned => "The enemy is stunned.".to_string(),
            CombatEvent::EnemyAttack(strike) => describe_strike("The enemy", strike),
            CombatEvent::EnemyAffix(trigger) => format!("{:?}", trigger),
            CombatEvent::EnemySpecial(special) => format!("The enemy uses {}.", special.ability.name()),
            CombatEvent::EffectTicked { side, result } => format!(
                "{:?}: {:.0} damage, {:.0} healing from effects",
                side, result.total_damage, result.total_healing
            ),
            CombatEvent::ResourceRegenerated { amount } => format!("You recover {:.0} resource.", amount),
            CombatEvent::BattleEnded(outcome) => format!("Battle over: {:?}", outcome),
        }
    }
}

fn describe_strike(attacker: &str, strike: &Strike) -> String {
    match strike.breakdown() {
        Some(breakdown) => format!("{} hit for {}", attacker, breakdown.summary()),
        None => format!("{} attack: {:?}", attacker, strike.outcome),
    }
}

/// Result of an enemy special ability
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialOutcome {
    pub ability: EnemyAbility,
    /// Present for offensive abilities
    pub strike: Option<Strike>,
    pub healed: f64,
    pub shield_gained: f64,
    /// Effect placed on the hero
    pub hero_effect: Option<String>,
    /// Effect placed on the enemy itself
    pub self_effect: Option<String>,
    /// Resource drained from the hero
    pub drained: f64,
}

impl SpecialOutcome {
    pub fn new(ability: EnemyAbility) -> Self {
        SpecialOutcome {
            ability,
            strike: None,
            healed: 0.0,
            shield_gained: 0.0,
            hero_effect: None,
            self_effect: None,
            drained: 0.0,
        }
    }
}
