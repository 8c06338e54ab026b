//! Avoidance - Hit, dodge and evade rolls
//!
//! Every roll is a single percentage check against the injected RNG.
//! A failed roll is a final outcome for that hit, never retried.

use super::constants::MAX_HIT_CHANCE;
use rand::Rng;

/// Roll a percentage chance (0-100)
pub fn roll_chance(chance_percent: f64, rng: &mut impl Rng) -> bool {
    if chance_percent <= 0.0 {
        return false;
    }
    if chance_percent >= 100.0 {
        return true;
    }
    rng.gen::<f64>() * 100.0 < chance_percent
}

/// Final hit chance from the attacker's base plus any bonuses, clamped to 0-100
pub fn hit_chance(base: f64, ability_bonus: f64, inspection_bonus: f64) -> f64 {
    (base + ability_bonus + inspection_bonus).clamp(0.0, MAX_HIT_CHANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_test_rng() -> StdRng {
        StdRng::seed_from_u64(12345)
    }

    #[test]
    fn test_certain_and_impossible() {
        let mut rng = make_test_rng();
        for _ in 0..100 {
            assert!(roll_chance(100.0, &mut rng));
            assert!(!roll_chance(0.0, &mut rng));
            assert!(!roll_chance(-5.0, &mut rng));
        }
    }

    #[test]
    fn test_roll_rate_roughly_matches_chance() {
        let mut rng = make_test_rng();
        let hits = (0..10_000).filter(|_| roll_chance(30.0, &mut rng)).count();
        assert!(hits > 2_700 && hits < 3_300, "got {} hits", hits);
    }

    #[test]
    fn test_hit_chance_clamped() {
        assert!((hit_chance(85.0, 10.0, 10.0) - 100.0).abs() < f64::EPSILON);
        assert!((hit_chance(85.0, 0.0, 10.0) - 95.0).abs() < f64::EPSILON);
        assert!((hit_chance(5.0, -20.0, 0.0) - 0.0).abs() < f64::EPSILON);
    }
}
