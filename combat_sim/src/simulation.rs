//! Batch simulation and summary statistics

use crate::autopilot::AutoPilot;
use combat_core::combat::{BattleOutcome, Satchel, Session};
use combat_core::config::EnemyTemplate;
use combat_core::{EnemyTier, Hero, HeroClass, ModifierError, PotionKind};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, info};

/// Starting potions for every simulated battle
const HEALTH_POTIONS: u32 = 2;
const RESOURCE_POTIONS: u32 = 1;

#[derive(Debug, Default)]
pub struct SimulationSummary {
    pub battles: u32,
    pub victories: u32,
    pub defeats: u32,
    pub fled: u32,
    pub total_turns: u64,
    pub gold: u64,
    pub xp: u64,
    pub by_tier: HashMap<EnemyTier, (u32, u32)>,
}

impl SimulationSummary {
    fn record(&mut self, tier: EnemyTier, outcome: BattleOutcome, turns: u32) {
        self.battles += 1;
        self.total_turns += turns as u64;
        let entry = self.by_tier.entry(tier).or_insert((0, 0));
        entry.0 += 1;
        match outcome {
            BattleOutcome::Victory => {
                self.victories += 1;
                entry.1 += 1;
            }
            BattleOutcome::Defeat => self.defeats += 1,
            BattleOutcome::Fled => self.fled += 1,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.battles == 0 {
            return 0.0;
        }
        self.victories as f64 / self.battles as f64 * 100.0
    }

    pub fn average_turns(&self) -> f64 {
        if self.battles == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.battles as f64
    }

    pub fn print(&self) {
        println!("Battles:   {}", self.battles);
        println!("Victories: {} ({:.1}%)", self.victories, self.win_rate());
        println!("Defeats:   {}", self.defeats);
        println!("Fled:      {}", self.fled);
        println!("Avg turns: {:.1}", self.average_turns());
        println!("Gold: {}  XP: {}", self.gold, self.xp);
        for tier in EnemyTier::all() {
            if let Some((fought, won)) = self.by_tier.get(tier) {
                println!("  {:<8} {:>4} fought, {:>4} won", tier.label(), fought, won);
            }
        }
    }
}

/// Fight `battles` independent battles with a fresh hero each time
pub fn run_batch<R: Rng>(
    session: &mut Session<R>,
    templates: &[EnemyTemplate],
    class: HeroClass,
    battles: u32,
    force_boss: bool,
) -> Result<SimulationSummary, ModifierError> {
    let mut summary = SimulationSummary::default();
    let level = session.dungeon_level;

    for index in 0..battles {
        let Some(template) = templates.choose(session.rng()) else {
            break;
        };
        let enemy = session.spawn_enemy(template, force_boss)?;
        let tier = enemy.tier;

        let mut hero = Hero::new(format!("Hero {}", index + 1), class, level);
        let mut satchel = Satchel::new()
            .with(PotionKind::Health, HEALTH_POTIONS)
            .with(PotionKind::Resource, RESOURCE_POTIONS);

        let report = session.battle(&mut hero, enemy, &mut satchel, &mut AutoPilot);
        debug!(battle = index, outcome = ?report.outcome, turns = report.turns, "battle finished");

        if let Some(rewards) = &report.rewards {
            summary.gold += rewards.gold as u64;
            summary.xp += rewards.xp as u64;
        }
        summary.record(tier, report.outcome, report.turns);
    }

    info!(
        battles = summary.battles,
        win_rate = summary.win_rate(),
        "simulation complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::config::default_enemy_templates;
    use combat_core::GameConstants;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_batch_accounts_for_every_battle() {
        let mut session = Session::new(GameConstants::default(), ChaCha8Rng::seed_from_u64(7));
        let summary = run_batch(&mut session, &default_enemy_templates(), HeroClass::Warrior, 20, false).unwrap();

        assert_eq!(summary.battles, 20);
        assert_eq!(summary.victories + summary.defeats + summary.fled, 20);
        assert_eq!(summary.fled, 0);
    }

    #[test]
    fn test_same_seed_same_results() {
        let run = |seed| {
            let mut session = Session::new(GameConstants::default(), ChaCha8Rng::seed_from_u64(seed));
            let summary = run_batch(&mut session, &default_enemy_templates(), HeroClass::Mage, 10, false).unwrap();
            (summary.victories, summary.total_turns, summary.gold)
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_boss_batch_only_fights_bosses() {
        let mut session = Session::new(GameConstants::default(), ChaCha8Rng::seed_from_u64(3));
        let summary = run_batch(&mut session, &default_enemy_templates(), HeroClass::Rogue, 5, true).unwrap();
        assert_eq!(summary.by_tier.keys().collect::<Vec<_>>(), vec![&EnemyTier::Boss]);
    }
}
