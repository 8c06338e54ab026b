//! ActiveEffect - A single timed effect on a combatant

use crate::types::{Element, StatModifiers};
use serde::{Deserialize, Serialize};

pub const BURN: &str = "Burn";
pub const POISON: &str = "Poison";
pub const STUN: &str = "Stun";
pub const SLOW: &str = "Slow";
pub const REGENERATION: &str = "Regeneration";

/// What an effect does while active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Deals `magnitude` damage at end of turn
    DamageOverTime(Element),
    /// Heals `magnitude` at end of turn
    Regeneration,
    /// Adds flat modifiers to core stats while active
    StatModifier(StatModifiers),
    /// Forfeits the affected combatant's turn
    Stun,
    /// Reduces outgoing damage by `magnitude` percent
    Slow,
}

/// An effect instance with its remaining duration in turns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub name: String,
    pub remaining: u32,
    pub magnitude: f64,
    pub kind: EffectKind,
}

impl ActiveEffect {
    pub fn new(name: impl Into<String>, kind: EffectKind, magnitude: f64, turns: u32) -> Self {
        ActiveEffect {
            name: name.into(),
            remaining: turns,
            magnitude,
            kind,
        }
    }

    pub fn damage_over_time(name: impl Into<String>, element: Element, per_turn: f64, turns: u32) -> Self {
        Self::new(name, EffectKind::DamageOverTime(element), per_turn, turns)
    }

    pub fn burn(per_turn: f64, turns: u32) -> Self {
        Self::damage_over_time(BURN, Element::Fire, per_turn, turns)
    }

    pub fn poison(per_turn: f64, turns: u32) -> Self {
        Self::damage_over_time(POISON, Element::Poison, per_turn, turns)
    }

    pub fn regeneration(per_turn: f64, turns: u32) -> Self {
        Self::new(REGENERATION, EffectKind::Regeneration, per_turn, turns)
    }

    pub fn stun(turns: u32) -> Self {
        Self::new(STUN, EffectKind::Stun, 0.0, turns)
    }

    pub fn slow(percent: f64, turns: u32) -> Self {
        Self::new(SLOW, EffectKind::Slow, percent, turns)
    }

    pub fn stat_modifier(name: impl Into<String>, modifiers: StatModifiers, turns: u32) -> Self {
        let magnitude = modifiers.magnitude();
        Self::new(name, EffectKind::StatModifier(modifiers), magnitude, turns)
    }

    /// Refresh from a re-application: keep the longer duration and the stronger effect
    pub fn refresh(&mut self, other: &ActiveEffect) {
        self.remaining = self.remaining.max(other.remaining);
        if other.magnitude > self.magnitude {
            self.magnitude = other.magnitude;
            self.kind = other.kind.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stat;

    #[test]
    fn test_refresh_extends_duration() {
        let mut slow = ActiveEffect::slow(30.0, 1);
        slow.refresh(&ActiveEffect::slow(20.0, 3));
        assert_eq!(slow.remaining, 3);
        assert!((slow.magnitude - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_refresh_never_shortens() {
        let mut stun = ActiveEffect::stun(2);
        stun.refresh(&ActiveEffect::stun(1));
        assert_eq!(stun.remaining, 2);
    }

    #[test]
    fn test_refresh_upgrades_modifiers() {
        let mut buff = ActiveEffect::stat_modifier("Might", StatModifiers::single(Stat::Strength, 3.0), 2);
        buff.refresh(&ActiveEffect::stat_modifier("Might", StatModifiers::single(Stat::Strength, 6.0), 2));
        assert_eq!(buff.kind, EffectKind::StatModifier(StatModifiers::single(Stat::Strength, 6.0)));
    }
}
