//! Scripted decision making for batch simulation

use combat_core::combat::{BattleView, HeroAction, HeroController};
use combat_core::PotionKind;

/// Drink below this HP percent
const POTION_THRESHOLD: f64 = 35.0;
/// Skip self-damaging abilities below this HP percent
const SELF_DAMAGE_THRESHOLD: f64 = 50.0;

/// Greedy controller: heal when low, inspect once, chase combos, otherwise
/// spend resource on whatever is ready
#[derive(Debug, Default)]
pub struct AutoPilot;

impl HeroController for AutoPilot {
    fn choose_action(&mut self, view: &BattleView<'_>) -> HeroAction {
        let hero = view.hero;
        let hp_percent = hero.combatant.hp_percent();

        if hp_percent < POTION_THRESHOLD && view.inventory.potion_count(PotionKind::Health) > 0 {
            return HeroAction::Potion(PotionKind::Health);
        }
        if !view.inspected {
            return HeroAction::Inspect;
        }

        let usable = |index: &usize| {
            let ability = &hero.abilities[*index];
            ability.is_ready()
                && hero.combatant.resource.current >= ability.cost
                && (ability.self_damage <= 0.0 || hp_percent >= SELF_DAMAGE_THRESHOLD)
        };
        let indices = 0..hero.abilities.len();

        let combo = indices
            .clone()
            .filter(usable)
            .find(|&i| hero.abilities[i].combo_satisfied_by(hero.last_ability()));
        if let Some(index) = combo {
            return HeroAction::Ability(index);
        }

        // Hold combo finishers for their opener
        let ready = indices
            .filter(usable)
            .find(|&i| hero.abilities[i].combo_after.is_none());
        match ready {
            Some(index) => HeroAction::Ability(index),
            None => HeroAction::Attack,
        }
    }
}
