//! Damage pipeline - base stats, weapon, enchantments, crit, mitigation

mod breakdown;
mod enchantment;
mod pipeline;

pub use breakdown::{DamageBreakdown, EnchantmentDamage};
pub use enchantment::{Enchantment, SecondaryEffect};
pub use pipeline::{compute_damage, resolve_breakdown, roll_critical, AttackProfile, DamageInput, TargetProfile};
