//! combat_core - Turn-based combat resolution engine
//!
//! This library provides:
//! - Combatant / Hero: Stats, resources, equipment and status effects
//! - Damage pipeline: Crits, enchantments, affinities and defense
//! - Abilities: Costs, cooldowns, combos and multi-hit sequences
//! - Enemy modifiers: Tiers, archetypes, affixes and special abilities
//! - Battle: The hero/enemy turn state machine and its event stream

pub mod ability;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod defense;
pub mod effect;
pub mod enemy;
pub mod error;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use ability::{use_ability, Ability, AbilityOutcome};
pub use combat::{
    Battle, BattleOutcome, BattleReport, BattleState, CombatEvent, HeroAction, HeroController, Inventory, PotionKind,
    Satchel, Session,
};
pub use combatant::{Combatant, Hero, StatValue};
pub use config::{default_abilities, default_enemy_templates, GameConstants};
pub use damage::{compute_damage, DamageBreakdown, DamageInput};
pub use effect::{ActiveEffect, EffectKind};
pub use enemy::{Enemy, EnemyBuilder, EnemyTier};
pub use error::{CombatError, ModifierError};
pub use types::{Element, HeroClass, ResourceKind, Side, Stat, StatModifiers};
