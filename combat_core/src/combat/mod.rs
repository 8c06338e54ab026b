//! Combat - The turn state machine and everything it drives

mod battle;
mod controller;
mod events;
mod inventory;
mod session;
mod special;
mod strike;

pub use battle::{Battle, BattleReport};
pub use controller::{BattleView, HeroAction, HeroController, InvalidMenuChoice, MenuChoice, ScriptedController};
pub use events::{CombatEvent, SpecialOutcome};
pub use inventory::{Inventory, PotionEffect, PotionKind, PotionStrength, Satchel};
pub use session::Session;
pub use special::{perform_special, roll_special};
pub use strike::{
    apply_enchantment_secondaries, apply_on_hit_affixes, enemy_strike, hero_strike, rolls_extra_attack, AffixTrigger,
    EnchantmentTrigger, Strike, StrikeOutcome,
};

use serde::{Deserialize, Serialize};

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Fled,
}

/// Where the battle loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    HeroTurn,
    EnemyTurn,
    EffectResolution,
    BattleOver(BattleOutcome),
}
