//! StatValue - Base value plus layered modifiers

use serde::{Deserialize, Serialize};

/// A stat built from a base and layered modifiers
///
/// Final value is calculated as:
/// `(base + flat) × Π(more)`
///
/// - `base`: Class/level or enemy template value
/// - `flat`: Sum of all flat additions (equipment)
/// - `more`: Independent multipliers (tier, archetype, affix), each applied in turn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub base: f64,
    #[serde(default)]
    pub flat: f64,
    #[serde(default)]
    pub more: Vec<f64>,
}

impl StatValue {
    /// Create a new StatValue with the given base
    pub fn with_base(base: f64) -> Self {
        StatValue {
            base,
            flat: 0.0,
            more: Vec::new(),
        }
    }

    /// Calculate final value: (base + flat) × Π(more)
    pub fn compute(&self) -> f64 {
        (self.base + self.flat) * self.total_more_multiplier()
    }

    pub fn add_flat(&mut self, value: f64) {
        self.flat += value;
    }

    /// Add an independent multiplier (e.g., 1.5 for a x1.5 tier)
    pub fn add_more(&mut self, multiplier: f64) {
        self.more.push(multiplier);
    }

    /// Product of all independent multipliers
    pub fn total_more_multiplier(&self) -> f64 {
        self.more.iter().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_basic() {
        let stat = StatValue::with_base(100.0);
        assert!((stat.compute() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compute_with_flat() {
        let mut stat = StatValue::with_base(100.0);
        stat.add_flat(50.0);
        assert!((stat.compute() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compute_full_formula() {
        // (100 + 50) × (1.5 × 1.2)
        let mut stat = StatValue::with_base(100.0);
        stat.add_flat(50.0);
        stat.add_more(1.5);
        stat.add_more(1.2);

        let expected = 150.0 * (1.5 * 1.2);
        assert!((stat.compute() - expected).abs() < 0.01);
    }

    #[test]
    fn test_multiple_more_stack_multiplicatively() {
        let mut stat = StatValue::with_base(100.0);
        stat.add_more(2.0);
        stat.add_more(1.5);
        // 100 * 2.0 * 1.5 = 300, tier and archetype compound
        assert!((stat.compute() - 300.0).abs() < f64::EPSILON);
    }
}
