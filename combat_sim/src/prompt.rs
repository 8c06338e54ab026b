//! Terminal controller reading numbered menu choices from stdin

use combat_core::combat::{BattleView, CombatEvent, HeroAction, HeroController, MenuChoice};
use combat_core::PotionKind;
use std::io::{self, BufRead, Write};

pub struct TerminalController<R: BufRead> {
    input: R,
}

impl<R: BufRead> TerminalController<R> {
    pub fn new(input: R) -> Self {
        TerminalController { input }
    }

    fn read_number(&mut self, prompt: &str) -> Option<u8> {
        print!("{} ", prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => line.trim().parse().ok(),
        }
    }

    fn pick_ability(&mut self, view: &BattleView<'_>) -> Option<HeroAction> {
        for (i, ability) in view.hero.abilities.iter().enumerate() {
            let status = if ability.is_ready() {
                String::new()
            } else {
                format!(" (cooldown {})", ability.remaining_cooldown())
            };
            println!("  {}. {} [{:.0}]{}", i + 1, ability.name, ability.cost, status);
        }
        let choice = self.read_number("Ability #:")? as usize;
        // Picks past the end come back from the battle as an unknown ability
        Some(HeroAction::Ability(choice.checked_sub(1)?))
    }

    fn pick_potion(&mut self, view: &BattleView<'_>) -> Option<HeroAction> {
        for (i, kind) in PotionKind::all().iter().enumerate() {
            println!("  {}. {:?} x{}", i + 1, kind, view.inventory.potion_count(*kind));
        }
        let choice = self.read_number("Potion #:")? as usize;
        let kind = PotionKind::all().get(choice.checked_sub(1)?)?;
        Some(HeroAction::Potion(*kind))
    }
}

impl<R: BufRead> HeroController for TerminalController<R> {
    fn choose_action(&mut self, view: &BattleView<'_>) -> HeroAction {
        let hero = &view.hero.combatant;
        println!(
            "\n[Turn {}] {} {:.0}/{:.0} HP, {:.0} {:?} | {} {:.0}/{:.0} HP",
            view.turn,
            hero.name,
            hero.current_hp,
            hero.computed_max_hp(),
            hero.resource.current,
            hero.resource.kind,
            view.enemy.display_name(),
            view.enemy.combatant.current_hp,
            view.enemy.combatant.computed_max_hp(),
        );

        loop {
            println!("1. Attack  2. Ability  3. Potion  4. Inspect  5. Flee");
            let Some(number) = self.read_number(">") else {
                // Closed input: keep swinging until the battle ends
                return HeroAction::Attack;
            };
            let action = match MenuChoice::try_from(number) {
                Ok(MenuChoice::Attack) => Some(HeroAction::Attack),
                Ok(MenuChoice::Ability) => self.pick_ability(view),
                Ok(MenuChoice::Potion) => self.pick_potion(view),
                Ok(MenuChoice::Inspect) => Some(HeroAction::Inspect),
                Ok(MenuChoice::Flee) => Some(HeroAction::Flee),
                Err(err) => {
                    println!("{}", err);
                    None
                }
            };
            if let Some(action) = action {
                return action;
            }
        }
    }

    fn observe(&mut self, event: &CombatEvent) {
        if let CombatEvent::Inspected {
            defense,
            damage,
            affixes,
            abilities,
            ..
        } = event
        {
            println!("{}", event.describe());
            println!("  defense {:.0}, damage {:.0}", defense, damage);
            if !affixes.is_empty() {
                println!("  affixes: {}", affixes.join(", "));
            }
            if !abilities.is_empty() {
                println!("  abilities: {}", abilities.join(", "));
            }
        } else {
            println!("{}", event.describe());
        }
    }
}
