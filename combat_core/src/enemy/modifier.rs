//! Modifier step - tier, archetype, affixes and abilities applied once

use super::affix::{self, roll_affixes, AffixKind};
use super::archetype::{assign_abilities, Archetype};
use super::{EnemyAbility, EnemyBuilder, EnemyTier};
use crate::enemy::Enemy;
use crate::error::ModifierError;
use rand::Rng;
use tracing::info;

/// Chance (0-1) a boss drops a bonus item
const BOSS_BONUS_ITEM_CHANCE: f64 = 0.5;

/// What the modifier step did to an enemy
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierReport {
    pub tier: EnemyTier,
    pub archetype: Option<Archetype>,
    pub affixes: Vec<AffixKind>,
    pub abilities: Vec<EnemyAbility>,
    pub max_hp: f64,
    pub damage: f64,
    pub defense: f64,
    pub shield: f64,
}

/// Run the modifier step on a builder. Fails if it already ran.
pub fn enhance_enemy(
    builder: &mut EnemyBuilder,
    dungeon_level: u32,
    force_boss: bool,
    rng: &mut impl Rng,
) -> Result<ModifierReport, ModifierError> {
    builder.enhance(dungeon_level, force_boss, rng)
}

pub(super) fn apply_modifiers(enemy: &mut Enemy, tier: EnemyTier, rng: &mut impl Rng) -> ModifierReport {
    // 1. Tier
    enemy.tier = tier;
    enemy.is_boss = tier == EnemyTier::Boss;

    // 2. Archetype
    enemy.archetype = if tier == EnemyTier::Normal {
        None
    } else {
        Some(Archetype::random(rng))
    };

    // 3. Tier multipliers
    enemy.combatant.max_hp.add_more(tier.hp_multiplier());
    enemy.base_damage.add_more(tier.damage_multiplier());
    enemy.rewards.scale(tier.reward_multiplier());
    if enemy.is_boss {
        enemy.rewards.bonus_item_chance = BOSS_BONUS_ITEM_CHANCE;
    }

    // 4. Archetype multipliers
    if let Some(archetype) = enemy.archetype {
        enemy.combatant.max_hp.add_more(archetype.hp_multiplier());
        enemy.base_damage.add_more(archetype.damage_multiplier());
    }

    // 5. Affixes
    enemy.affixes = roll_affixes(tier.max_affixes(), rng);
    for affix in enemy.affixes.clone() {
        apply_affix_setup(enemy, affix);
    }

    // 6. Abilities
    enemy.abilities = assign_abilities(enemy.archetype, tier.max_affixes(), rng);

    enemy.combatant.current_hp = enemy.combatant.computed_max_hp();

    let report = ModifierReport {
        tier,
        archetype: enemy.archetype,
        affixes: enemy.affixes.clone(),
        abilities: enemy.abilities.clone(),
        max_hp: enemy.combatant.computed_max_hp(),
        damage: enemy.base_damage.compute(),
        defense: enemy.defense(),
        shield: enemy.shield,
    };

    info!(
        enemy = %enemy.display_name(),
        tier = ?report.tier,
        archetype = ?report.archetype,
        max_hp = report.max_hp,
        damage = report.damage,
        "enemy enhanced"
    );

    report
}

/// One-time setup for affixes that change stats or carry state
fn apply_affix_setup(enemy: &mut Enemy, affix: AffixKind) {
    match affix {
        AffixKind::Shielded => {
            enemy.shield = enemy.combatant.computed_max_hp() * affix::SHIELD_PERCENT;
        }
        AffixKind::Regenerating => {
            enemy.regen_per_turn = enemy.combatant.computed_max_hp() * affix::REGEN_PERCENT;
        }
        AffixKind::Armored => {
            enemy.combatant.stats.defense.add_more(affix::ARMORED_DEFENSE);
        }
        AffixKind::Berserker => {
            enemy.base_damage.add_more(affix::BERSERKER_DAMAGE);
            enemy.combatant.stats.defense.add_more(affix::BERSERKER_DEFENSE);
        }
        AffixKind::Burning | AffixKind::FrozenAura | AffixKind::Shocking => {
            if let Some(element) = affix.resisted_element() {
                enemy.combatant.affinity.set_resistant(element);
            }
        }
        // Behaviour lives in combat
        AffixKind::Enraged | AffixKind::Vampiric | AffixKind::Fast | AffixKind::Phasing => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Rewards;
    use crate::types::Element;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_test_rng() -> StdRng {
        StdRng::seed_from_u64(12345)
    }

    fn make_orc() -> EnemyBuilder {
        EnemyBuilder::new("Orc", 5, 100.0, 12.0, 4.0).rewards(Rewards::new(40, 50).with_loot("orc", 0.2))
    }

    #[test]
    fn test_normal_tier_untouched() {
        let mut builder = make_orc();
        let report = builder.enhance_with_tier(EnemyTier::Normal, &mut make_test_rng()).unwrap();
        let enemy = builder.build();

        assert!(report.archetype.is_none());
        assert!(report.affixes.is_empty());
        assert!(report.abilities.is_empty());
        assert!((enemy.combatant.computed_max_hp() - 100.0).abs() < f64::EPSILON);
        assert_eq!(enemy.rewards.gold, 40);
        assert!(!enemy.is_boss);
    }

    #[test]
    fn test_boss_scaling() {
        let mut builder = make_orc();
        let report = enhance_enemy(&mut builder, 5, true, &mut make_test_rng()).unwrap();
        let enemy = builder.build();

        assert_eq!(report.tier, EnemyTier::Boss);
        assert!(enemy.is_boss);
        assert_eq!(enemy.affixes.len(), 3);
        assert_eq!(enemy.abilities.len(), 3);
        assert_eq!(enemy.rewards.gold, 120);
        assert!((enemy.rewards.bonus_item_chance - 0.5).abs() < f64::EPSILON);

        // Tier 3.0 and the archetype multiplier layer on top of each other
        let archetype = report.archetype.unwrap();
        let expected_hp = 100.0 * 3.0 * archetype.hp_multiplier();
        assert!((enemy.combatant.computed_max_hp() - expected_hp).abs() < 1e-9);
        assert!((enemy.combatant.current_hp - enemy.combatant.computed_max_hp()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_affix_setup() {
        let mut enemy = make_orc().build();
        apply_affix_setup(&mut enemy, AffixKind::Shielded);
        apply_affix_setup(&mut enemy, AffixKind::Regenerating);
        apply_affix_setup(&mut enemy, AffixKind::Armored);
        apply_affix_setup(&mut enemy, AffixKind::Burning);

        assert!((enemy.shield - 50.0).abs() < f64::EPSILON);
        assert!((enemy.regen_per_turn - 5.0).abs() < f64::EPSILON);
        assert!((enemy.defense() - 6.0).abs() < f64::EPSILON);
        assert_eq!(enemy.combatant.affinity.resistant(), Some(Element::Fire));
    }

    #[test]
    fn test_aura_overrides_vulnerability() {
        let mut enemy = make_orc().affinity(Some(Element::Ice), None).build();
        apply_affix_setup(&mut enemy, AffixKind::FrozenAura);
        assert_eq!(enemy.combatant.affinity.resistant(), Some(Element::Ice));
        assert_eq!(enemy.combatant.affinity.vulnerable(), None);
    }

    #[test]
    fn test_legendary_full_kit() {
        let mut builder = make_orc();
        let report = builder.enhance_with_tier(EnemyTier::Legendary, &mut make_test_rng()).unwrap();
        assert_eq!(report.affixes.len(), 4);
        assert_eq!(report.abilities.len(), 4);
        assert_eq!(builder.peek().rewards.gold, 200);
    }
}
