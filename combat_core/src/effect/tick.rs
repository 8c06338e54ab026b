//! End-of-turn effect resolution

use super::{EffectKind, StatusEffects};
use crate::types::Element;

/// Result of resolving one end-of-turn for a combatant's effects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectTickResult {
    /// (effect name, element, damage) for each damage-over-time tick
    pub damage_ticks: Vec<(String, Element, f64)>,
    /// (effect name, amount) for each regeneration tick
    pub heal_ticks: Vec<(String, f64)>,
    /// Effects whose duration ran out this turn
    pub expired: Vec<String>,
    pub total_damage: f64,
    pub total_healing: f64,
}

impl EffectTickResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.damage_ticks.is_empty() && self.heal_ticks.is_empty() && self.expired.is_empty()
    }
}

/// Tick every active effect once: collect DoT damage and regeneration,
/// decrement every duration by 1 and remove the ones that reach zero.
///
/// Applying the returned damage/healing is the caller's job.
pub fn resolve_effects(effects: &mut StatusEffects) -> EffectTickResult {
    let mut result = EffectTickResult::new();

    for effect in effects.iter_mut() {
        match &effect.kind {
            EffectKind::DamageOverTime(element) => {
                if effect.magnitude > 0.0 {
                    result.damage_ticks.push((effect.name.clone(), *element, effect.magnitude));
                    result.total_damage += effect.magnitude;
                }
            }
            EffectKind::Regeneration => {
                if effect.magnitude > 0.0 {
                    result.heal_ticks.push((effect.name.clone(), effect.magnitude));
                    result.total_healing += effect.magnitude;
                }
            }
            EffectKind::StatModifier(_) | EffectKind::Stun | EffectKind::Slow => {}
        }

        effect.remaining = effect.remaining.saturating_sub(1);
        if effect.remaining == 0 {
            result.expired.push(effect.name.clone());
        }
    }

    effects.retain(|e| e.remaining > 0);

    result
}
