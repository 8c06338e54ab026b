//! DamageBreakdown - Every intermediate value of one damage computation

use crate::types::Element;
use serde::{Deserialize, Serialize};

/// Contribution of a single enchantment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnchantmentDamage {
    pub element: Element,
    /// Enchantment base damage before affinity
    pub base: f64,
    /// 1.5 vs vulnerable, 0.5 vs resistant, 1.0 otherwise
    pub multiplier: f64,
    /// base * multiplier
    pub amount: f64,
}

/// Output of the damage pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    // === Pre-defense components ===
    /// Primary-stat physical value
    pub base: f64,
    pub weapon_bonus: f64,
    pub enchantments: Vec<EnchantmentDamage>,
    pub ability_damage: f64,
    pub total_before_defense: f64,

    // === Crit ===
    /// Chance actually rolled against, inspection bonus included
    pub crit_chance: f64,
    pub is_critical: bool,
    pub crit_multiplier: f64,
    pub total_after_crit: f64,

    // === Mitigation ===
    pub defense: f64,
    /// Damage removed by defense
    pub mitigated: f64,
    /// Never below the minimum damage
    pub final_damage: f64,
}

impl DamageBreakdown {
    /// Sum of all enchantment contributions
    pub fn enchantment_total(&self) -> f64 {
        self.enchantments.iter().map(|e| e.amount).sum()
    }

    /// Contribution of one element, if present
    pub fn enchantment_of(&self, element: Element) -> f64 {
        self.enchantments
            .iter()
            .filter(|e| e.element == element)
            .map(|e| e.amount)
            .sum()
    }

    /// Whether defense pushed the hit down to the damage floor
    pub fn hit_floor(&self) -> bool {
        self.total_after_crit - self.defense < self.final_damage
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.base > 0.0 {
            parts.push(format!("{:.0} base", self.base));
        }
        if self.weapon_bonus > 0.0 {
            parts.push(format!("+{:.0} weapon", self.weapon_bonus));
        }
        for enchant in &self.enchantments {
            parts.push(format!("+{:.0} {:?}", enchant.amount, enchant.element));
        }
        if self.ability_damage > 0.0 {
            parts.push(format!("+{:.0} ability", self.ability_damage));
        }
        if self.is_critical {
            parts.push(format!("CRIT x{:.2}", self.crit_multiplier));
        }
        if self.mitigated > 0.0 {
            parts.push(format!("-{:.0} defense", self.mitigated));
        }

        format!("{:.0} damage ({})", self.final_damage, parts.join(", "))
    }
}
