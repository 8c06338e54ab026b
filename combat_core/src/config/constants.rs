//! Game constants configuration

use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub crit: CritConstants,
    #[serde(default)]
    pub damage: DamageConstants,
    #[serde(default)]
    pub inspection: InspectionConstants,
    #[serde(default)]
    pub derived: DerivedStatConstants,
    #[serde(default)]
    pub enemy: EnemyConstants,
    #[serde(default)]
    pub resources: ResourceConstants,
    #[serde(default)]
    pub battle: BattleConstants,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CritConstants {
    /// Base critical strike multiplier (1.5 = 150%)
    #[serde(default = "default_base_multiplier")]
    pub base_multiplier: f64,
}

impl Default for CritConstants {
    fn default() -> Self {
        CritConstants {
            base_multiplier: default_base_multiplier(),
        }
    }
}

fn default_base_multiplier() -> f64 {
    1.5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageConstants {
    /// No hit ever lands for less than this after defense
    #[serde(default = "default_min_damage")]
    pub min_damage: f64,
    /// Enchantment multiplier against a vulnerable target
    #[serde(default = "default_vulnerability")]
    pub vulnerability_multiplier: f64,
    /// Enchantment multiplier against a resistant target
    #[serde(default = "default_resistance")]
    pub resistance_multiplier: f64,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            min_damage: default_min_damage(),
            vulnerability_multiplier: default_vulnerability(),
            resistance_multiplier: default_resistance(),
        }
    }
}

fn default_min_damage() -> f64 {
    1.0
}
fn default_vulnerability() -> f64 {
    1.5
}
fn default_resistance() -> f64 {
    0.5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionConstants {
    /// Percentage points added to hero hit chance after inspecting
    #[serde(default = "default_inspect_hit")]
    pub hit_bonus: f64,
    /// Percentage points added to hero crit chance after inspecting
    #[serde(default = "default_inspect_crit")]
    pub crit_bonus: f64,
}

impl Default for InspectionConstants {
    fn default() -> Self {
        InspectionConstants {
            hit_bonus: default_inspect_hit(),
            crit_bonus: default_inspect_crit(),
        }
    }
}

fn default_inspect_hit() -> f64 {
    10.0
}
fn default_inspect_crit() -> f64 {
    15.0
}

/// Linear coefficients turning core stats into combat stats.
/// All chances are percentages (0-100).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedStatConstants {
    #[serde(default = "default_hit_base")]
    pub hit_base: f64,
    #[serde(default = "default_hit_per_dex")]
    pub hit_per_dexterity: f64,
    #[serde(default = "default_hit_cap")]
    pub hit_cap: f64,
    #[serde(default = "default_crit_base")]
    pub crit_base: f64,
    #[serde(default = "default_crit_per_dex")]
    pub crit_per_dexterity: f64,
    #[serde(default = "default_crit_cap")]
    pub crit_cap: f64,
    #[serde(default = "default_crit_mult_per_str")]
    pub crit_multiplier_per_strength: f64,
    #[serde(default = "default_dodge_base")]
    pub dodge_base: f64,
    #[serde(default = "default_dodge_per_dex")]
    pub dodge_per_dexterity: f64,
    #[serde(default = "default_dodge_cap")]
    pub dodge_cap: f64,
    #[serde(default = "default_lifesteal_per_str")]
    pub lifesteal_per_strength: f64,
    #[serde(default = "default_lifesteal_cap")]
    pub lifesteal_cap: f64,
    /// Basic attack damage per point of the class primary stat
    #[serde(default = "default_physical_per_primary")]
    pub physical_per_primary: f64,
}

impl Default for DerivedStatConstants {
    fn default() -> Self {
        DerivedStatConstants {
            hit_base: default_hit_base(),
            hit_per_dexterity: default_hit_per_dex(),
            hit_cap: default_hit_cap(),
            crit_base: default_crit_base(),
            crit_per_dexterity: default_crit_per_dex(),
            crit_cap: default_crit_cap(),
            crit_multiplier_per_strength: default_crit_mult_per_str(),
            dodge_base: default_dodge_base(),
            dodge_per_dexterity: default_dodge_per_dex(),
            dodge_cap: default_dodge_cap(),
            lifesteal_per_strength: default_lifesteal_per_str(),
            lifesteal_cap: default_lifesteal_cap(),
            physical_per_primary: default_physical_per_primary(),
        }
    }
}

fn default_hit_base() -> f64 {
    80.0
}
fn default_hit_per_dex() -> f64 {
    0.5
}
fn default_hit_cap() -> f64 {
    100.0
}
fn default_crit_base() -> f64 {
    5.0
}
fn default_crit_per_dex() -> f64 {
    0.25
}
fn default_crit_cap() -> f64 {
    75.0
}
fn default_crit_mult_per_str() -> f64 {
    0.005
}
fn default_dodge_base() -> f64 {
    5.0
}
fn default_dodge_per_dex() -> f64 {
    0.2
}
fn default_dodge_cap() -> f64 {
    50.0
}
fn default_lifesteal_per_str() -> f64 {
    0.1
}
fn default_lifesteal_cap() -> f64 {
    25.0
}
fn default_physical_per_primary() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyConstants {
    /// Enemy damage rolls within base * (1 +/- variance)
    #[serde(default = "default_variance")]
    pub damage_variance: f64,
    /// Enemy crit chance in percent
    #[serde(default = "default_enemy_crit")]
    pub crit_chance: f64,
    /// Chance (0-1) an enemy with special abilities uses one on its turn
    #[serde(default = "default_special_chance")]
    pub special_ability_chance: f64,
}

impl Default for EnemyConstants {
    fn default() -> Self {
        EnemyConstants {
            damage_variance: default_variance(),
            crit_chance: default_enemy_crit(),
            special_ability_chance: default_special_chance(),
        }
    }
}

fn default_variance() -> f64 {
    0.2
}
fn default_enemy_crit() -> f64 {
    5.0
}
fn default_special_chance() -> f64 {
    0.25
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConstants {
    #[serde(default = "default_mana_regen")]
    pub mana_per_turn: f64,
    #[serde(default = "default_energy_regen")]
    pub energy_per_turn: f64,
    /// Rage gained when a basic attack lands
    #[serde(default = "default_rage_on_hit")]
    pub rage_on_hit: f64,
    /// Rage gained when the hero takes a hit
    #[serde(default = "default_rage_on_damage")]
    pub rage_on_damage_taken: f64,
}

impl Default for ResourceConstants {
    fn default() -> Self {
        ResourceConstants {
            mana_per_turn: default_mana_regen(),
            energy_per_turn: default_energy_regen(),
            rage_on_hit: default_rage_on_hit(),
            rage_on_damage_taken: default_rage_on_damage(),
        }
    }
}

fn default_mana_regen() -> f64 {
    3.0
}
fn default_energy_regen() -> f64 {
    10.0
}
fn default_rage_on_hit() -> f64 {
    8.0
}
fn default_rage_on_damage() -> f64 {
    4.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConstants {
    /// Failed attempts allowed in one hero turn before a basic attack is forced
    #[serde(default = "default_max_prompts")]
    pub max_prompts_per_turn: u32,
}

impl Default for BattleConstants {
    fn default() -> Self {
        BattleConstants {
            max_prompts_per_turn: default_max_prompts(),
        }
    }
}

fn default_max_prompts() -> u32 {
    16
}
