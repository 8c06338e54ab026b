//! Error types for combat actions and enemy setup

use crate::combat::PotionKind;
use thiserror::Error;

/// Failure of a single hero action
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatError {
    #[error("{ability} is on cooldown for {remaining} more turn(s)")]
    AbilityUnavailable { ability: String, remaining: u32 },
    #[error("Not enough resource: need {needed:.0}, have {available:.0}")]
    InsufficientResource { needed: f64, available: f64 },
    #[error("Target is already defeated")]
    InvalidTarget,
    #[error("{ability} cost the hero their life")]
    SelfInflictedDefeat { ability: String },
    #[error("No ability in slot {0}")]
    UnknownAbility(usize),
    #[error("No {0:?} potion available")]
    PotionUnavailable(PotionKind),
    #[error("Enemy has already been inspected this battle")]
    AlreadyInspected,
}

impl CombatError {
    /// Whether the hero simply gets prompted again for the same turn
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CombatError::AbilityUnavailable { .. }
                | CombatError::InsufficientResource { .. }
                | CombatError::UnknownAbility(_)
                | CombatError::PotionUnavailable(_)
                | CombatError::AlreadyInspected
        )
    }
}

/// Failure while applying enemy modifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModifierError {
    #[error("Enemy '{0}' has already been enhanced")]
    AlreadyEnhanced(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(CombatError::InsufficientResource { needed: 10.0, available: 3.0 }.is_recoverable());
        assert!(CombatError::AbilityUnavailable { ability: "Fireball".into(), remaining: 2 }.is_recoverable());
        assert!(!CombatError::InvalidTarget.is_recoverable());
        assert!(!CombatError::SelfInflictedDefeat { ability: "Bloodrage".into() }.is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = CombatError::AbilityUnavailable { ability: "Fireball".into(), remaining: 2 };
        assert_eq!(err.to_string(), "Fireball is on cooldown for 2 more turn(s)");
    }
}
