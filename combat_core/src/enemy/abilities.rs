//! Enemy special abilities - Closed set grouped into three slots

use serde::{Deserialize, Serialize};

/// Which slot of an enemy's kit an ability fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilitySlot {
    Offensive,
    Defensive,
    Tactical,
}

impl AbilitySlot {
    /// Order slots are filled in, cycling when the budget exceeds three
    pub const ROTATION: [AbilitySlot; 3] = [AbilitySlot::Offensive, AbilitySlot::Defensive, AbilitySlot::Tactical];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyAbility {
    // === Offensive ===
    CrushingBlow,
    FlameBurst,
    VenomStrike,
    // === Defensive ===
    Mend,
    StoneSkin,
    Barrier,
    // === Tactical ===
    StunningRoar,
    Enfeeble,
    ManaDrain,
}

impl EnemyAbility {
    pub fn all() -> &'static [EnemyAbility] {
        &[
            EnemyAbility::CrushingBlow,
            EnemyAbility::FlameBurst,
            EnemyAbility::VenomStrike,
            EnemyAbility::Mend,
            EnemyAbility::StoneSkin,
            EnemyAbility::Barrier,
            EnemyAbility::StunningRoar,
            EnemyAbility::Enfeeble,
            EnemyAbility::ManaDrain,
        ]
    }

    /// Generic pool for a slot
    pub fn pool(slot: AbilitySlot) -> &'static [EnemyAbility] {
        match slot {
            AbilitySlot::Offensive => &[EnemyAbility::CrushingBlow, EnemyAbility::FlameBurst, EnemyAbility::VenomStrike],
            AbilitySlot::Defensive => &[EnemyAbility::Mend, EnemyAbility::StoneSkin, EnemyAbility::Barrier],
            AbilitySlot::Tactical => &[EnemyAbility::StunningRoar, EnemyAbility::Enfeeble, EnemyAbility::ManaDrain],
        }
    }

    pub fn slot(&self) -> AbilitySlot {
        match self {
            EnemyAbility::CrushingBlow | EnemyAbility::FlameBurst | EnemyAbility::VenomStrike => {
                AbilitySlot::Offensive
            }
            EnemyAbility::Mend | EnemyAbility::StoneSkin | EnemyAbility::Barrier => AbilitySlot::Defensive,
            EnemyAbility::StunningRoar | EnemyAbility::Enfeeble | EnemyAbility::ManaDrain => AbilitySlot::Tactical,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnemyAbility::CrushingBlow => "Crushing Blow",
            EnemyAbility::FlameBurst => "Flame Burst",
            EnemyAbility::VenomStrike => "Venom Strike",
            EnemyAbility::Mend => "Mend",
            EnemyAbility::StoneSkin => "Stone Skin",
            EnemyAbility::Barrier => "Barrier",
            EnemyAbility::StunningRoar => "Stunning Roar",
            EnemyAbility::Enfeeble => "Enfeeble",
            EnemyAbility::ManaDrain => "Mana Drain",
        }
    }

    /// Attack multiplier for offensive abilities
    pub fn damage_multiplier(&self) -> Option<f64> {
        match self {
            EnemyAbility::CrushingBlow => Some(2.0),
            EnemyAbility::FlameBurst => Some(1.2),
            EnemyAbility::VenomStrike => Some(0.8),
            _ => None,
        }
    }
}
