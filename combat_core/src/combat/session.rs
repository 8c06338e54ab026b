//! Session - Explicit context for constants, progression and randomness

use super::battle::{Battle, BattleReport};
use super::controller::HeroController;
use super::inventory::Inventory;
use crate::combatant::Hero;
use crate::config::{EnemyTemplate, GameConstants};
use crate::enemy::Enemy;
use crate::error::ModifierError;
use rand::Rng;

/// State shared across battles of one game session
pub struct Session<R: Rng> {
    pub constants: GameConstants,
    pub dungeon_level: u32,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(constants: GameConstants, rng: R) -> Self {
        Session {
            constants,
            dungeon_level: 1,
            rng,
        }
    }

    pub fn at_level(mut self, dungeon_level: u32) -> Self {
        self.dungeon_level = dungeon_level.max(1);
        self
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn descend(&mut self) {
        self.dungeon_level += 1;
    }

    /// Build an enemy from a template at the current dungeon level and run
    /// the modifier step on it
    pub fn spawn_enemy(&mut self, template: &EnemyTemplate, force_boss: bool) -> Result<Enemy, ModifierError> {
        let mut builder = template.builder(self.dungeon_level);
        builder.enhance(self.dungeon_level, force_boss, &mut self.rng)?;
        Ok(builder.build())
    }

    /// Reset cooldowns, then fight one battle to completion
    pub fn battle(
        &mut self,
        hero: &mut Hero,
        enemy: Enemy,
        inventory: &mut dyn Inventory,
        controller: &mut dyn HeroController,
    ) -> BattleReport {
        hero.reset_cooldowns();
        Battle::new(hero, enemy, inventory, &self.constants, &mut self.rng).run(controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{BattleOutcome, HeroAction, Satchel, ScriptedController};
    use crate::config::default_enemy_templates;
    use crate::types::HeroClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_test_rng() -> StdRng {
        StdRng::seed_from_u64(12345)
    }

    #[test]
    fn test_deeper_levels_spawn_stronger_enemies() {
        let templates = default_enemy_templates();
        let template = &templates[0];

        let mut shallow = Session::new(GameConstants::default(), make_test_rng());
        let mut deep = Session::new(GameConstants::default(), make_test_rng()).at_level(10);

        let a = shallow.spawn_enemy(template, true).unwrap();
        let b = deep.spawn_enemy(template, true).unwrap();
        assert!(a.is_boss && b.is_boss);
        assert!(b.combatant.level > a.combatant.level);
        assert!(template.builder(10).build().combatant.computed_max_hp() > template.builder(1).build().combatant.computed_max_hp());
    }

    #[test]
    fn test_descend() {
        let mut session = Session::new(GameConstants::default(), make_test_rng()).at_level(0);
        assert_eq!(session.dungeon_level, 1);
        session.descend();
        assert_eq!(session.dungeon_level, 2);
    }

    #[test]
    fn test_battle_resets_cooldowns() {
        let mut session = Session::new(GameConstants::default(), make_test_rng());
        let mut hero = Hero::new("Brom", HeroClass::Warrior, 1);
        for ability in &mut hero.abilities {
            ability.start_cooldown();
        }
        let templates = default_enemy_templates();
        let enemy = session.spawn_enemy(&templates[0], false).unwrap();

        let mut controller = ScriptedController::new([HeroAction::Flee]);
        let report = session.battle(&mut hero, enemy, &mut Satchel::new(), &mut controller);

        assert_eq!(report.outcome, BattleOutcome::Fled);
        assert!(hero.abilities.iter().all(|a| a.is_ready()));
    }
}
