//! Combat simulator entry point.
mod autopilot;
mod cli;
mod prompt;
mod simulation;

use combat_core::combat::{Satchel, Session};
use combat_core::config::{self, ConfigError, EnemyTemplate};
use combat_core::{GameConstants, Hero, HeroClass, ModifierError, PotionKind};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::io;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
enum SimError {
    #[error("No enemy templates to fight")]
    NoEnemies,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Modifier(#[from] ModifierError),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = cli::parse_args();

    let constants = match &args.config {
        Some(path) => config::load_constants(path).map_err(SimError::from)?,
        None => GameConstants::default(),
    };
    let templates = match &args.enemies {
        Some(path) => config::load_enemy_templates(path).map_err(SimError::from)?,
        None => config::default_enemy_templates(),
    };
    if templates.is_empty() {
        return Err(SimError::NoEnemies.into());
    }

    let class: HeroClass = args.class.into();
    let mut session = Session::new(constants, ChaCha8Rng::seed_from_u64(args.seed)).at_level(args.level);
    info!(seed = args.seed, level = session.dungeon_level, class = class.key(), "session started");

    if args.interactive {
        fight_interactive(&mut session, &templates, class, args.boss)?;
    } else {
        let summary = simulation::run_batch(&mut session, &templates, class, args.battles, args.boss)
            .map_err(SimError::from)?;
        summary.print();
    }
    Ok(())
}

fn fight_interactive(
    session: &mut Session<ChaCha8Rng>,
    templates: &[EnemyTemplate],
    class: HeroClass,
    force_boss: bool,
) -> Result<(), SimError> {
    let template = templates.choose(session.rng()).ok_or(SimError::NoEnemies)?;
    let enemy = session.spawn_enemy(template, force_boss)?;

    let mut hero = Hero::new("Hero", class, session.dungeon_level);
    let mut satchel = Satchel::new()
        .with(PotionKind::Health, 3)
        .with(PotionKind::Resource, 2)
        .with(PotionKind::Might, 1)
        .with(PotionKind::Fortitude, 1);

    let stdin = io::stdin();
    let mut controller = prompt::TerminalController::new(stdin.lock());
    let report = session.battle(&mut hero, enemy, &mut satchel, &mut controller);

    println!("\n{:?} after {} turns.", report.outcome, report.turns);
    if let Some(rewards) = report.rewards {
        println!("Rewards: {} gold, {} xp", rewards.gold, rewards.xp);
        if let Some(table) = rewards.loot_table {
            println!("Loot roll from '{}' ({:.0}% chance)", table, rewards.drop_chance * 100.0);
        }
    }
    Ok(())
}
