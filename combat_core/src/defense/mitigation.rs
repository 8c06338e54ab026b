//! Mitigation - Flat defense subtraction with a damage floor

/// Subtract defense from incoming damage.
///
/// The result is rounded to a whole number and never drops below
/// `min_damage`, so defense alone can never negate a hit.
///
/// # Returns
/// `(final_damage, mitigated)` where `mitigated` is what defense removed
pub fn apply_defense(damage: f64, defense: f64, min_damage: f64) -> (f64, f64) {
    let damage = damage.max(0.0);
    let defense = defense.max(0.0);

    let final_damage = (damage - defense).round().max(min_damage);
    let mitigated = (damage - final_damage).max(0.0);

    (final_damage, mitigated)
}
