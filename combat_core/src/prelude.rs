//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::{Armor, Combatant, Equipment, Hero, StatValue, Weapon};
pub use crate::types::{Element, HeroClass, ResourceKind, Side, Stat, StatModifiers};

// Damage system
pub use crate::damage::{compute_damage, DamageBreakdown, DamageInput, Enchantment, SecondaryEffect};

// Abilities
pub use crate::ability::{use_ability, Ability, AbilityOutcome, BuffSpec, DebuffSpec, Scaling};

// Enemies
pub use crate::enemy::{Archetype, AffixKind, Enemy, EnemyAbility, EnemyBuilder, EnemyTier, Rewards};

// Combat
pub use crate::combat::{
    Battle, BattleOutcome, BattleReport, BattleState, BattleView, CombatEvent, HeroAction, HeroController, Inventory,
    PotionKind, Satchel, ScriptedController, Session,
};

// Effects
pub use crate::effect::{ActiveEffect, EffectKind, EffectTickResult};

// Config
pub use crate::config::{default_abilities, default_enemy_templates, EnemyTemplate, GameConstants};
pub use crate::error::{CombatError, ModifierError};
