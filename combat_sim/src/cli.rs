//! Command-line interface for the combat simulator

use clap::{Parser, ValueEnum};
use combat_core::HeroClass;
use std::path::PathBuf;

/// Hero class as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassArg {
    Warrior,
    Mage,
    Rogue,
}

impl From<ClassArg> for HeroClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Warrior => HeroClass::Warrior,
            ClassArg::Mage => HeroClass::Mage,
            ClassArg::Rogue => HeroClass::Rogue,
        }
    }
}

/// Turn-based combat simulator
#[derive(Parser, Debug)]
#[command(name = "combat_sim")]
#[command(about = "Run batches of auto-piloted battles, or fight one interactively")]
#[command(version)]
pub struct Args {
    /// Seed for the battle RNG
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Number of battles to simulate
    #[arg(long, default_value = "100")]
    pub battles: u32,

    /// Hero and dungeon level
    #[arg(long, default_value = "1")]
    pub level: u32,

    /// Hero class
    #[arg(long, value_enum, default_value = "warrior")]
    pub class: ClassArg,

    /// Every enemy is a boss
    #[arg(long)]
    pub boss: bool,

    /// Game constants TOML file (defaults are used when absent)
    #[arg(long, value_name = "CONSTANTS_FILE")]
    pub config: Option<PathBuf>,

    /// Enemy templates TOML file (built-in templates are used when absent)
    #[arg(long, value_name = "ENEMIES_FILE")]
    pub enemies: Option<PathBuf>,

    /// Fight a single battle from the terminal
    #[arg(long)]
    pub interactive: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
