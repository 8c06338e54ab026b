//! Battle - The turn state machine
//!
//! `HeroTurn -> EnemyTurn -> EffectResolution -> HeroTurn | BattleOver`
//!
//! The hero turn keeps prompting until an action consumes the turn. Failed
//! ability or potion attempts and inspection re-prompt within the same turn,
//! up to the configured prompt budget.

use super::controller::{BattleView, HeroAction, HeroController};
use super::events::CombatEvent;
use super::inventory::{Inventory, PotionEffect, PotionKind};
use super::special::{perform_special, roll_special};
use super::strike::{
    apply_enchantment_secondaries, apply_on_hit_affixes, enemy_strike, hero_strike, rolls_extra_attack, AffixTrigger, Strike,
};
use super::{BattleOutcome, BattleState};
use crate::ability::use_ability;
use crate::combatant::Hero;
use crate::config::GameConstants;
use crate::damage::DamageInput;
use crate::enemy::{Enemy, Rewards};
use crate::error::CombatError;
use crate::types::Side;
use rand::Rng;
use tracing::{debug, info, warn};

/// Final result of a battle
#[derive(Debug, Clone)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    /// Completed turns
    pub turns: u32,
    /// Only present on victory
    pub rewards: Option<Rewards>,
    pub events: Vec<CombatEvent>,
    /// The enemy as it ended the battle
    pub enemy: Enemy,
}

/// Whether a hero action used up the turn
enum ActionResult {
    Consumed,
    /// Inspection: the hero acts again
    Reprompt,
    /// Flee resolved the turn on its own
    Resolved,
}

/// One battle between the session's hero and a single enemy
pub struct Battle<'a, R: Rng> {
    hero: &'a mut Hero,
    enemy: Enemy,
    inventory: &'a mut dyn Inventory,
    constants: &'a GameConstants,
    rng: &'a mut R,
    state: BattleState,
    turn: u32,
    inspected: bool,
    events: Vec<CombatEvent>,
    /// Events already forwarded to the controller
    notified: usize,
}

impl<'a, R: Rng> Battle<'a, R> {
    pub fn new(
        hero: &'a mut Hero,
        enemy: Enemy,
        inventory: &'a mut dyn Inventory,
        constants: &'a GameConstants,
        rng: &'a mut R,
    ) -> Self {
        hero.begin_battle();

        info!(hero = hero.name(), enemy = %enemy.display_name(), boss = enemy.is_boss, "battle started");
        let started = CombatEvent::BattleStarted {
            hero: hero.name().to_string(),
            enemy: enemy.display_name(),
            is_boss: enemy.is_boss,
        };

        let mut battle = Battle {
            hero,
            enemy,
            inventory,
            constants,
            rng,
            state: BattleState::HeroTurn,
            turn: 1,
            inspected: false,
            events: vec![started],
            notified: 0,
        };
        // A side that enters at 0 HP never gets to act
        battle.check_finished();
        battle
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn hero(&self) -> &Hero {
        &*self.hero
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, BattleState::BattleOver(_))
    }

    /// Advance one state
    pub fn step(&mut self, controller: &mut dyn HeroController) -> BattleState {
        match self.state {
            BattleState::HeroTurn => self.hero_turn(controller),
            BattleState::EnemyTurn => self.enemy_turn(false),
            BattleState::EffectResolution => self.resolve_effects(),
            BattleState::BattleOver(_) => {}
        }
        self.notify(controller);
        self.state
    }

    /// Run to completion
    pub fn run(mut self, controller: &mut dyn HeroController) -> BattleReport {
        self.notify(controller);
        while !self.is_over() {
            self.step(controller);
        }
        self.into_report()
    }

    pub fn into_report(self) -> BattleReport {
        let outcome = match self.state {
            BattleState::BattleOver(outcome) => outcome,
            // An unfinished battle counts as the hero walking away
            _ => BattleOutcome::Fled,
        };
        let rewards = (outcome == BattleOutcome::Victory).then(|| self.enemy.rewards.clone());

        BattleReport {
            outcome,
            turns: self.turn,
            rewards,
            events: self.events,
            enemy: self.enemy,
        }
    }

    fn notify(&mut self, controller: &mut dyn HeroController) {
        for event in &self.events[self.notified..] {
            controller.observe(event);
        }
        self.notified = self.events.len();
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        info!(?outcome, turns = self.turn, "battle over");
        self.state = BattleState::BattleOver(outcome);
        self.events.push(CombatEvent::BattleEnded(outcome));
    }

    /// Victory and defeat checks after anything that deals damage.
    /// Returns true if the battle ended.
    fn check_finished(&mut self) -> bool {
        if !self.hero.is_alive() {
            self.finish(BattleOutcome::Defeat);
            true
        } else if !self.enemy.is_alive() {
            self.finish(BattleOutcome::Victory);
            true
        } else {
            false
        }
    }

    // === Hero turn ===

    fn hero_turn(&mut self, controller: &mut dyn HeroController) {
        if self.hero.combatant.effects.is_stunned() {
            debug!("hero stunned, turn forfeited");
            self.events.push(CombatEvent::HeroStunned);
            self.state = BattleState::EnemyTurn;
            return;
        }

        let budget = self.constants.battle.max_prompts_per_turn.max(1);
        for _ in 0..budget {
            let action = {
                let view = BattleView {
                    hero: &*self.hero,
                    enemy: &self.enemy,
                    inventory: &*self.inventory,
                    turn: self.turn,
                    inspected: self.inspected,
                };
                controller.choose_action(&view)
            };

            match self.perform(action) {
                Ok(ActionResult::Consumed) => {
                    if !self.check_finished() {
                        self.state = BattleState::EnemyTurn;
                    }
                    return;
                }
                Ok(ActionResult::Resolved) => return,
                Ok(ActionResult::Reprompt) => {}
                Err(CombatError::SelfInflictedDefeat { ability }) => {
                    self.events.push(CombatEvent::ActionFailed(CombatError::SelfInflictedDefeat { ability }));
                    self.finish(BattleOutcome::Defeat);
                    return;
                }
                Err(err) if err.is_recoverable() => {
                    debug!(%err, "hero action failed, prompting again");
                    self.events.push(CombatEvent::ActionFailed(err));
                }
                Err(err) => {
                    warn!(%err, "hero action against an invalid state");
                    self.check_finished();
                    return;
                }
            }
            self.notify(controller);
        }

        warn!(budget, "prompt budget exhausted, forcing a basic attack");
        self.basic_attack();
        self.hero.tick_cooldowns(None);
        if !self.check_finished() {
            self.state = BattleState::EnemyTurn;
        }
    }

    fn perform(&mut self, action: HeroAction) -> Result<ActionResult, CombatError> {
        match action {
            HeroAction::Attack => {
                self.basic_attack();
                self.hero.tick_cooldowns(None);
                Ok(ActionResult::Consumed)
            }
            HeroAction::Ability(slot) => {
                let outcome = use_ability(
                    self.hero,
                    &mut self.enemy,
                    slot,
                    self.constants,
                    self.inspected,
                    &mut *self.rng,
                )?;
                self.events.push(CombatEvent::AbilityUsed(outcome));
                Ok(ActionResult::Consumed)
            }
            HeroAction::Potion(kind) => {
                self.drink(kind)?;
                self.hero.tick_cooldowns(None);
                Ok(ActionResult::Consumed)
            }
            HeroAction::Inspect => {
                self.inspect()?;
                Ok(ActionResult::Reprompt)
            }
            HeroAction::Flee => {
                self.flee();
                Ok(ActionResult::Resolved)
            }
        }
    }

    fn basic_attack(&mut self) {
        let enchantments = self.hero.enchantments().to_vec();
        let input = DamageInput::basic_attack(
            self.hero.base_physical(self.constants),
            self.hero.weapon_bonus(),
            &enchantments,
        );

        let strike = hero_strike(
            self.hero,
            &mut self.enemy,
            input,
            0.0,
            self.inspected,
            self.constants,
            &mut *self.rng,
        );

        let mut triggers = Vec::new();
        if let Some(breakdown) = strike.breakdown() {
            self.hero.gain_rage(self.constants.resources.rage_on_hit);
            triggers = apply_enchantment_secondaries(self.hero, &mut self.enemy, breakdown, &mut *self.rng);
        }

        self.events.push(CombatEvent::HeroAttack(strike));
        self.events
            .extend(triggers.into_iter().map(CombatEvent::EnchantmentTriggered));
    }

    fn drink(&mut self, kind: PotionKind) -> Result<(), CombatError> {
        if self.inventory.potion_count(kind) == 0 {
            return Err(CombatError::PotionUnavailable(kind));
        }
        let effect = self
            .inventory
            .take_potion(kind)
            .ok_or(CombatError::PotionUnavailable(kind))?;

        let amount = match &effect {
            PotionEffect::Heal(amount) => self.hero.combatant.heal(*amount),
            PotionEffect::Restore(amount) => self.hero.combatant.resource.restore(*amount),
            PotionEffect::Buff { modifiers, .. } => {
                if let Some(buff) = effect.to_effect() {
                    self.hero.combatant.effects.apply(buff);
                }
                modifiers.magnitude()
            }
        };

        self.events.push(CombatEvent::PotionUsed { kind, effect, amount });
        Ok(())
    }

    fn inspect(&mut self) -> Result<(), CombatError> {
        if self.inspected {
            return Err(CombatError::AlreadyInspected);
        }
        self.inspected = true;

        let enemy = &self.enemy;
        self.events.push(CombatEvent::Inspected {
            enemy: enemy.display_name(),
            hp: enemy.combatant.current_hp,
            max_hp: enemy.combatant.computed_max_hp(),
            defense: enemy.defense(),
            damage: enemy.attack_damage(),
            affixes: enemy.affixes.iter().map(|a| a.name().to_string()).collect(),
            abilities: enemy.abilities.iter().map(|a| a.name().to_string()).collect(),
        });
        Ok(())
    }

    /// Fleeing a normal enemy always works. A boss blocks the escape and
    /// gets a free attack in place of its turn.
    fn flee(&mut self) {
        if !self.enemy.is_boss {
            self.events.push(CombatEvent::Fled);
            self.finish(BattleOutcome::Fled);
            return;
        }

        self.events.push(CombatEvent::FleeBlocked);
        self.hero.tick_cooldowns(None);
        self.enemy_turn(true);
    }

    // === Enemy turn ===

    /// `forced` attacks ignore stun and skip specials
    fn enemy_turn(&mut self, forced: bool) {
        if !forced && self.enemy.combatant.effects.is_stunned() {
            debug!("enemy stunned, turn forfeited");
            self.events.push(CombatEvent::EnemyStunned);
            self.state = BattleState::EffectResolution;
            return;
        }

        self.enemy_attack();
        if self.hero.is_alive() && rolls_extra_attack(&self.enemy, &mut *self.rng) {
            debug!("fast enemy attacks again");
            self.enemy_attack();
        }

        if !forced && self.hero.is_alive() {
            if let Some(ability) = roll_special(&self.enemy, self.constants, &mut *self.rng) {
                let outcome = perform_special(ability, &mut self.enemy, self.hero, self.constants, &mut *self.rng);
                let triggers = match &outcome.strike {
                    Some(strike) => self.after_enemy_strike(strike),
                    None => Vec::new(),
                };
                self.events.push(CombatEvent::EnemySpecial(outcome));
                self.events.extend(triggers.into_iter().map(CombatEvent::EnemyAffix));
            }
        }

        if !self.hero.is_alive() {
            self.finish(BattleOutcome::Defeat);
        } else {
            self.state = BattleState::EffectResolution;
        }
    }

    fn enemy_attack(&mut self) {
        let strike = enemy_strike(&mut self.enemy, self.hero, 1.0, self.constants, &mut *self.rng);
        let triggers = self.after_enemy_strike(&strike);

        self.events.push(CombatEvent::EnemyAttack(strike));
        self.events.extend(triggers.into_iter().map(CombatEvent::EnemyAffix));
    }

    /// Rage from the hit and on-hit affixes, shared by basic and special strikes
    fn after_enemy_strike(&mut self, strike: &Strike) -> Vec<AffixTrigger> {
        if strike.landed() {
            self.hero.gain_rage(self.constants.resources.rage_on_damage_taken);
        }
        apply_on_hit_affixes(&mut self.enemy, self.hero, strike, &mut *self.rng)
    }

    // === Effect resolution ===

    fn resolve_effects(&mut self) {
        let hero_result = self.hero.combatant.resolve_end_of_turn();
        if !hero_result.is_empty() {
            self.events.push(CombatEvent::EffectTicked {
                side: Side::Hero,
                result: hero_result,
            });
        }

        let enemy_result = self.enemy.resolve_end_of_turn();
        if !enemy_result.is_empty() {
            self.events.push(CombatEvent::EffectTicked {
                side: Side::Enemy,
                result: enemy_result,
            });
        }

        if self.hero.is_alive() {
            let amount = self.hero.regenerate_resource(self.constants);
            if amount > 0.0 {
                self.events.push(CombatEvent::ResourceRegenerated { amount });
            }
        }

        if !self.check_finished() {
            self.turn += 1;
            self.state = BattleState::HeroTurn;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::Ability;
    use crate::combat::{Satchel, ScriptedController};
    use crate::effect::ActiveEffect;
    use crate::enemy::{AffixKind, EnemyAbility, EnemyBuilder, EnemyTier};
    use crate::types::HeroClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_test_rng() -> StdRng {
        StdRng::seed_from_u64(12345)
    }

    /// Certain hits, no crits, no dodges
    fn steady() -> GameConstants {
        let mut constants = GameConstants::default();
        constants.derived.hit_base = 100.0;
        constants.derived.crit_base = 0.0;
        constants.derived.crit_per_dexterity = 0.0;
        constants.derived.dodge_base = 0.0;
        constants.derived.dodge_per_dexterity = 0.0;
        constants.enemy.crit_chance = 0.0;
        constants.enemy.damage_variance = 0.0;
        constants
    }

    fn make_hero() -> Hero {
        Hero::with_abilities(
            "Brom",
            HeroClass::Warrior,
            1,
            vec![Ability::new("Heavy Swing").with_cost(30.0).with_scaling(10.0, None, 0.0)],
        )
    }

    #[test]
    fn test_flee_from_normal_enemy() {
        let constants = steady();
        let mut rng = make_test_rng();
        let mut hero = make_hero();
        let mut satchel = Satchel::new();
        let enemy = EnemyBuilder::new("Rat", 1, 30.0, 3.0, 0.0).build();

        let mut controller = ScriptedController::new([HeroAction::Flee]);
        let report = Battle::new(&mut hero, enemy, &mut satchel, &constants, &mut rng).run(&mut controller);

        assert_eq!(report.outcome, BattleOutcome::Fled);
        assert!(report.rewards.is_none());
    }

    #[test]
    fn test_failed_actions_do_not_consume_turn() {
        let constants = steady();
        let mut rng = make_test_rng();
        let mut hero = make_hero();
        let mut satchel = Satchel::new();
        let enemy = EnemyBuilder::new("Rat", 1, 1000.0, 3.0, 0.0).build();

        // No rage for the ability, no potion, then a real attack
        let mut controller = ScriptedController::new([
            HeroAction::Ability(0),
            HeroAction::Potion(PotionKind::Health),
            HeroAction::Attack,
        ]);
        let mut battle = Battle::new(&mut hero, enemy, &mut satchel, &constants, &mut rng);

        assert_eq!(battle.step(&mut controller), BattleState::EnemyTurn);
        assert_eq!(battle.turn(), 1);
        let failures = battle
            .events()
            .iter()
            .filter(|e| matches!(e, CombatEvent::ActionFailed(_)))
            .count();
        assert_eq!(failures, 2);
        assert_eq!(controller.remaining(), 0);
    }

    #[test]
    fn test_inspect_reprompts_once() {
        let constants = steady();
        let mut rng = make_test_rng();
        let mut hero = make_hero();
        let mut satchel = Satchel::new();
        let enemy = EnemyBuilder::new("Rat", 1, 1000.0, 3.0, 0.0).build();

        let mut controller = ScriptedController::new([HeroAction::Inspect, HeroAction::Inspect, HeroAction::Attack]);
        let mut battle = Battle::new(&mut hero, enemy, &mut satchel, &constants, &mut rng);
        battle.step(&mut controller);

        let events = battle.events();
        assert!(events.iter().any(|e| matches!(e, CombatEvent::Inspected { .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, CombatEvent::ActionFailed(CombatError::AlreadyInspected))));
        assert!(events.iter().any(|e| matches!(e, CombatEvent::HeroAttack(_))));
    }

    #[test]
    fn test_prompt_budget_forces_attack() {
        let mut constants = steady();
        constants.battle.max_prompts_per_turn = 3;
        let mut rng = make_test_rng();
        let mut hero = make_hero();
        let mut satchel = Satchel::new();
        let enemy = EnemyBuilder::new("Rat", 1, 1000.0, 3.0, 0.0).build();

        let mut controller = ScriptedController::new([HeroAction::Ability(7); 10]);
        let mut battle = Battle::new(&mut hero, enemy, &mut satchel, &constants, &mut rng);

        assert_eq!(battle.step(&mut controller), BattleState::EnemyTurn);
        assert!(battle.events().iter().any(|e| matches!(e, CombatEvent::HeroAttack(_))));
        assert_eq!(controller.remaining(), 7);
    }

    #[test]
    fn test_stunned_enemy_forfeits() {
        let constants = steady();
        let mut rng = make_test_rng();
        let mut hero = make_hero();
        let mut satchel = Satchel::new();
        let mut enemy = EnemyBuilder::new("Rat", 1, 1000.0, 3.0, 0.0).build();
        enemy.combatant.effects.apply(ActiveEffect::stun(1));

        let mut controller = ScriptedController::default();
        let mut battle = Battle::new(&mut hero, enemy, &mut satchel, &constants, &mut rng);
        battle.step(&mut controller);
        assert_eq!(battle.step(&mut controller), BattleState::EffectResolution);
        assert!(battle.events().iter().any(|e| matches!(e, CombatEvent::EnemyStunned)));

        // Stun expired during resolution
        assert_eq!(battle.step(&mut controller), BattleState::HeroTurn);
        assert!(!battle.enemy().combatant.effects.is_stunned());
        assert_eq!(battle.turn(), 2);
    }

    #[test]
    fn test_stunned_hero_forfeits() {
        let constants = steady();
        let mut rng = make_test_rng();
        let mut hero = make_hero();
        let mut satchel = Satchel::new();
        let enemy = EnemyBuilder::new("Rat", 1, 1000.0, 3.0, 0.0).build();

        let mut controller = ScriptedController::new([HeroAction::Attack]);
        let mut battle = Battle::new(&mut hero, enemy, &mut satchel, &constants, &mut rng);
        battle.hero.combatant.effects.apply(ActiveEffect::stun(1));

        assert_eq!(battle.step(&mut controller), BattleState::EnemyTurn);
        assert!(battle.events().iter().any(|e| matches!(e, CombatEvent::HeroStunned)));
        assert_eq!(controller.remaining(), 1);
    }

    #[test]
    fn test_victory_skips_enemy_turn_and_pays_out() {
        let constants = steady();
        let mut rng = make_test_rng();
        let mut hero = make_hero();
        let mut satchel = Satchel::new();
        let enemy = EnemyBuilder::new("Rat", 1, 5.0, 3.0, 0.0)
            .rewards(Rewards::new(7, 11))
            .build();

        let mut controller = ScriptedController::default();
        let report = Battle::new(&mut hero, enemy, &mut satchel, &constants, &mut rng).run(&mut controller);

        assert_eq!(report.outcome, BattleOutcome::Victory);
        assert_eq!(report.turns, 1);
        assert_eq!(report.rewards, Some(Rewards::new(7, 11)));
        assert!(!report.events.iter().any(|e| matches!(e, CombatEvent::EnemyAttack(_))));
        assert_eq!(
            controller.observed.last(),
            Some(&CombatEvent::BattleEnded(BattleOutcome::Victory))
        );
    }

    #[test]
    fn test_boss_blocks_flee() {
        let constants = steady();
        let mut rng = make_test_rng();
        let mut hero = make_hero();
        let mut satchel = Satchel::new();
        let mut builder = EnemyBuilder::new("Lich", 5, 300.0, 12.0, 2.0);
        builder.enhance_with_tier(EnemyTier::Boss, &mut make_test_rng()).unwrap();
        let boss = builder.build();

        let mut controller = ScriptedController::new([HeroAction::Flee]);
        let mut battle = Battle::new(&mut hero, boss, &mut satchel, &constants, &mut rng);

        assert_eq!(battle.step(&mut controller), BattleState::EffectResolution);
        assert!(battle.events().iter().any(|e| matches!(e, CombatEvent::FleeBlocked)));
        assert!(battle.events().iter().any(|e| matches!(e, CombatEvent::EnemyAttack(_))));
        assert!(battle.hero().combatant.current_hp < battle.hero().combatant.computed_max_hp());
    }

    #[test]
    fn test_downed_hero_never_acts() {
        let constants = steady();
        let mut rng = make_test_rng();
        let mut hero = make_hero();
        hero.combatant.take_damage(10_000.0);
        let mut satchel = Satchel::new();
        let enemy = EnemyBuilder::new("Rat", 1, 30.0, 3.0, 0.0).build();

        let mut controller = ScriptedController::new([HeroAction::Attack]);
        let report = Battle::new(&mut hero, enemy, &mut satchel, &constants, &mut rng).run(&mut controller);

        assert_eq!(report.outcome, BattleOutcome::Defeat);
        assert_eq!(report.turns, 1);
        assert!(report.rewards.is_none());
        assert!(!report.events.iter().any(|e| matches!(e, CombatEvent::HeroAttack(_))));
        assert_eq!(controller.remaining(), 1);
    }

    #[test]
    fn test_downed_enemy_is_immediate_victory() {
        let constants = steady();
        let mut rng = make_test_rng();
        let mut hero = make_hero();
        let mut satchel = Satchel::new();
        let mut enemy = EnemyBuilder::new("Rat", 1, 30.0, 3.0, 0.0)
            .rewards(Rewards::new(7, 11))
            .build();
        enemy.combatant.take_damage(10_000.0);

        let mut controller = ScriptedController::new([HeroAction::Attack]);
        let mut battle = Battle::new(&mut hero, enemy, &mut satchel, &constants, &mut rng);
        assert_eq!(battle.state(), BattleState::BattleOver(BattleOutcome::Victory));

        let report = battle.run(&mut controller);
        assert_eq!(report.rewards, Some(Rewards::new(7, 11)));
        assert!(!report.events.iter().any(|e| matches!(e, CombatEvent::HeroAttack(_))));
        assert_eq!(
            controller.observed.last(),
            Some(&CombatEvent::BattleEnded(BattleOutcome::Victory))
        );
    }

    #[test]
    fn test_special_strike_triggers_affixes_and_rage() {
        let mut constants = steady();
        constants.enemy.special_ability_chance = 1.0;
        let mut rng = make_test_rng();
        let mut hero = make_hero();
        let mut satchel = Satchel::new();
        let mut enemy = EnemyBuilder::new("Ghoul", 1, 1000.0, 3.0, 0.0).build();
        enemy.abilities = vec![EnemyAbility::CrushingBlow];
        enemy.affixes = vec![AffixKind::Vampiric];
        // Room for the leech to heal
        enemy.combatant.take_damage(500.0);

        let mut controller = ScriptedController::default();
        let mut battle = Battle::new(&mut hero, enemy, &mut satchel, &constants, &mut rng);
        battle.hero.combatant.effects.apply(ActiveEffect::stun(1));
        let rage_before = battle.hero().combatant.resource.current;

        assert_eq!(battle.step(&mut controller), BattleState::EnemyTurn);
        assert_eq!(battle.step(&mut controller), BattleState::EffectResolution);

        let events = battle.events();
        assert!(events.iter().any(|e| matches!(e, CombatEvent::EnemySpecial(_))));
        let leeches = events
            .iter()
            .filter(|e| matches!(e, CombatEvent::EnemyAffix(AffixTrigger::Leeched { .. })))
            .count();
        assert_eq!(leeches, 2);

        let gained = battle.hero().combatant.resource.current - rage_before;
        assert!((gained - 2.0 * constants.resources.rage_on_damage_taken).abs() < f64::EPSILON);
    }
}
