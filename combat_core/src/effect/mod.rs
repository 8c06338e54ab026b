//! Status effects - damage over time, regeneration, stat modifiers, stun, slow
//!
//! Durations are whole turns. An effect is only removed during end-of-turn
//! resolution (see [`tick`]); nothing mid-turn ever shortens it.

mod active;
pub mod tick;

pub use active::{ActiveEffect, EffectKind, BURN, POISON, REGENERATION, SLOW, STUN};
pub use tick::{resolve_effects, EffectTickResult};

use crate::types::Stat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Effects currently active on a combatant, keyed by effect name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusEffects {
    effects: BTreeMap<String, ActiveEffect>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an effect. Re-applying an effect of the same name refreshes its
    /// duration and keeps the stronger magnitude.
    ///
    /// Returns false if the effect had no duration and was ignored.
    pub fn apply(&mut self, effect: ActiveEffect) -> bool {
        if effect.remaining == 0 {
            return false;
        }

        if let Some(existing) = self.effects.get_mut(&effect.name) {
            existing.refresh(&effect);
        } else {
            self.effects.insert(effect.name.clone(), effect);
        }
        true
    }

    pub fn get(&self, name: &str) -> Option<&ActiveEffect> {
        self.effects.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.effects.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ActiveEffect> {
        self.effects.remove(name)
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut ActiveEffect> {
        self.effects.values_mut()
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&ActiveEffect) -> bool) {
        self.effects.retain(|_, effect| keep(effect));
    }

    /// Whether any stun is active
    pub fn is_stunned(&self) -> bool {
        self.iter().any(|e| matches!(e.kind, EffectKind::Stun))
    }

    /// Strongest active slow, as a percentage (0-100)
    pub fn slow_percent(&self) -> f64 {
        self.iter()
            .filter(|e| matches!(e.kind, EffectKind::Slow))
            .map(|e| e.magnitude)
            .fold(0.0, f64::max)
            .clamp(0.0, 100.0)
    }

    /// Sum of all stat-modifier effects for one stat
    pub fn stat_modifier(&self, stat: Stat) -> f64 {
        self.iter()
            .map(|e| match &e.kind {
                EffectKind::StatModifier(mods) => mods.get(stat),
                _ => 0.0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Element, StatModifiers};

    #[test]
    fn test_apply_and_refresh_keeps_stronger() {
        let mut effects = StatusEffects::new();
        effects.apply(ActiveEffect::damage_over_time("Burn", Element::Fire, 5.0, 3));
        effects.apply(ActiveEffect::damage_over_time("Burn", Element::Fire, 2.0, 4));

        let burn = effects.get("Burn").unwrap();
        assert_eq!(effects.len(), 1);
        assert_eq!(burn.remaining, 4);
        assert!((burn.magnitude - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shorter_reapplication_keeps_duration() {
        let mut effects = StatusEffects::new();
        let stun = ActiveEffect::stun(2);
        let name = stun.name.clone();
        effects.apply(stun);
        effects.apply(ActiveEffect::stun(1));

        assert_eq!(effects.get(&name).unwrap().remaining, 2);
    }

    #[test]
    fn test_zero_duration_ignored() {
        let mut effects = StatusEffects::new();
        assert!(!effects.apply(ActiveEffect::stun(0)));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_stun_and_slow_queries() {
        let mut effects = StatusEffects::new();
        assert!(!effects.is_stunned());
        effects.apply(ActiveEffect::stun(1));
        effects.apply(ActiveEffect::slow(25.0, 2));
        assert!(effects.is_stunned());
        assert!((effects.slow_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stat_modifiers_sum() {
        let mut effects = StatusEffects::new();
        effects.apply(ActiveEffect::stat_modifier(
            "Battle Cry",
            StatModifiers::single(Stat::Strength, 5.0),
            3,
        ));
        effects.apply(ActiveEffect::stat_modifier(
            "Enfeeble",
            StatModifiers::single(Stat::Strength, -2.0),
            2,
        ));
        assert!((effects.stat_modifier(Stat::Strength) - 3.0).abs() < f64::EPSILON);
        assert!((effects.stat_modifier(Stat::Defense) - 0.0).abs() < f64::EPSILON);
    }
}
