//! Derived combat stats - linear formulas over core stats

use super::Combatant;
use crate::config::GameConstants;
use crate::types::Stat;

/// Combat stats computed from a combatant's effective core stats.
/// Chances are percentages (0-100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub hit_chance: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub dodge_chance: f64,
    pub lifesteal_percent: f64,
}

impl DerivedStats {
    pub fn from_combatant(combatant: &Combatant, constants: &GameConstants) -> Self {
        let d = &constants.derived;
        let strength = combatant.effective_stat(Stat::Strength);
        let dexterity = combatant.effective_stat(Stat::Dexterity);

        DerivedStats {
            hit_chance: (d.hit_base + dexterity * d.hit_per_dexterity).clamp(0.0, d.hit_cap),
            crit_chance: (d.crit_base + dexterity * d.crit_per_dexterity).clamp(0.0, d.crit_cap),
            crit_multiplier: constants.crit.base_multiplier + strength * d.crit_multiplier_per_strength,
            dodge_chance: (d.dodge_base + dexterity * d.dodge_per_dexterity).clamp(0.0, d.dodge_cap),
            lifesteal_percent: (strength * d.lifesteal_per_strength).clamp(0.0, d.lifesteal_cap),
        }
    }
}
