//! Defense system - Flat mitigation and avoidance rolls

mod avoidance;
mod mitigation;

pub use avoidance::{hit_chance, roll_chance};
pub use mitigation::apply_defense;

/// Defense calculation constants
pub mod constants {
    /// Chance (percent) a Phasing enemy evades a hero hit
    pub const PHASING_EVADE_CHANCE: f64 = 20.0;

    /// Hit chance never rises above this, whatever the bonuses
    pub const MAX_HIT_CHANCE: f64 = 100.0;
}
