//! Archetypes - Bias an enemy's stats and the ability pools it draws from

use super::abilities::{AbilitySlot, EnemyAbility};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chance a slot is filled from the archetype's preferred pool
pub const PREFERRED_POOL_CHANCE: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Brute,
    Caster,
    Guardian,
    Trickster,
}

impl Archetype {
    pub fn all() -> &'static [Archetype] {
        &[Archetype::Brute, Archetype::Caster, Archetype::Guardian, Archetype::Trickster]
    }

    pub fn hp_multiplier(&self) -> f64 {
        match self {
            Archetype::Brute => 1.2,
            Archetype::Caster => 0.9,
            Archetype::Guardian => 1.4,
            Archetype::Trickster => 1.0,
        }
    }

    pub fn damage_multiplier(&self) -> f64 {
        match self {
            Archetype::Brute => 1.2,
            Archetype::Caster => 1.3,
            Archetype::Guardian => 0.9,
            Archetype::Trickster => 1.1,
        }
    }

    /// Preferred abilities for a slot; `None` when the archetype has no preference
    pub fn preferred(&self, slot: AbilitySlot) -> Option<&'static [EnemyAbility]> {
        use EnemyAbility::*;
        match (self, slot) {
            (Archetype::Brute, AbilitySlot::Offensive) => Some(&[CrushingBlow]),
            (Archetype::Brute, AbilitySlot::Tactical) => Some(&[StunningRoar]),
            (Archetype::Caster, AbilitySlot::Offensive) => Some(&[FlameBurst, VenomStrike]),
            (Archetype::Caster, AbilitySlot::Defensive) => Some(&[Barrier]),
            (Archetype::Caster, AbilitySlot::Tactical) => Some(&[ManaDrain, Enfeeble]),
            (Archetype::Guardian, AbilitySlot::Defensive) => Some(&[StoneSkin, Mend]),
            (Archetype::Guardian, AbilitySlot::Tactical) => Some(&[StunningRoar]),
            (Archetype::Trickster, AbilitySlot::Offensive) => Some(&[VenomStrike]),
            (Archetype::Trickster, AbilitySlot::Tactical) => Some(&[Enfeeble, ManaDrain]),
            _ => None,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Archetype {
        *Self::all().choose(rng).unwrap_or(&Archetype::Brute)
    }
}

/// Pick `count` distinct abilities, cycling slots offensive, defensive, tactical.
///
/// Each slot draws from the archetype's preferred pool with
/// [`PREFERRED_POOL_CHANCE`], otherwise from the generic pool for that slot.
/// Exhausted pools fall back to any ability not yet taken.
pub fn assign_abilities(archetype: Option<Archetype>, count: usize, rng: &mut impl Rng) -> Vec<EnemyAbility> {
    let mut chosen: Vec<EnemyAbility> = Vec::with_capacity(count);

    for i in 0..count.min(EnemyAbility::all().len()) {
        let slot = AbilitySlot::ROTATION[i % AbilitySlot::ROTATION.len()];
        let available = |pool: &[EnemyAbility], chosen: &[EnemyAbility]| -> Vec<EnemyAbility> {
            pool.iter().copied().filter(|a| !chosen.contains(a)).collect()
        };

        let preferred = archetype
            .and_then(|a| a.preferred(slot))
            .map(|pool| available(pool, &chosen))
            .unwrap_or_default();

        let candidates = if !preferred.is_empty() && rng.gen_bool(PREFERRED_POOL_CHANCE) {
            preferred
        } else {
            let generic = available(EnemyAbility::pool(slot), &chosen);
            if generic.is_empty() {
                available(EnemyAbility::all(), &chosen)
            } else {
                generic
            }
        };

        if let Some(ability) = candidates.choose(rng) {
            chosen.push(*ability);
        }
    }

    chosen
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
    fn test_count_and_uniqueness() {
        let mut rng = make_test_rng();
        for count in 0..=4 {
            for archetype in Archetype::all() {
                let abilities = assign_abilities(Some(*archetype), count, &mut rng);
                assert_eq!(abilities.len(), count);
                for (i, a) in abilities.iter().enumerate() {
                    assert!(!abilities[i + 1..].contains(a));
                }
            }
        }
    }

    #[test]
    fn test_slot_rotation() {
        let mut rng = make_test_rng();
        let abilities = assign_abilities(None, 3, &mut rng);
        assert_eq!(abilities[0].slot(), AbilitySlot::Offensive);
        assert_eq!(abilities[1].slot(), AbilitySlot::Defensive);
        assert_eq!(abilities[2].slot(), AbilitySlot::Tactical);
    }

    #[test]
    fn test_preference_is_bias_not_exclusive() {
        let mut rng = make_test_rng();
        let mut crushing = 0;
        let trials = 2_000;
        for _ in 0..trials {
            let abilities = assign_abilities(Some(Archetype::Brute), 1, &mut rng);
            if abilities[0] == EnemyAbility::CrushingBlow {
                crushing += 1;
            }
        }
        // 75% preferred plus a third of the generic draws
        assert!(crushing > 1_500 && crushing < 1_800, "crushing = {}", crushing);
        assert!(crushing < trials);
    }
}
