//! Hero - The player-controlled combatant

use super::{Combatant, CoreStats, Resource};
use crate::ability::Ability;
use crate::config::{default_abilities, GameConstants};
use crate::damage::Enchantment;
use crate::types::{HeroClass, ResourceKind};
use serde::{Deserialize, Serialize};

/// Equipped weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub attack_bonus: f64,
    #[serde(default)]
    pub enchantments: Vec<Enchantment>,
}

impl Weapon {
    pub fn new(name: impl Into<String>, attack_bonus: f64) -> Self {
        Weapon {
            name: name.into(),
            attack_bonus,
            enchantments: Vec::new(),
        }
    }

    pub fn with_enchantment(mut self, enchantment: Enchantment) -> Self {
        self.enchantments.push(enchantment);
        self
    }
}

/// Equipped armour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub defense: f64,
}

impl Armor {
    pub fn new(name: impl Into<String>, defense: f64) -> Self {
        Armor {
            name: name.into(),
            defense,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Weapon>,
    pub armor: Option<Armor>,
}

/// Class starting values: (hp, hp per level, str, dex, int, def)
fn class_base(class: HeroClass) -> (f64, f64, f64, f64, f64, f64) {
    match class {
        HeroClass::Warrior => (120.0, 12.0, 14.0, 8.0, 5.0, 6.0),
        HeroClass::Mage => (80.0, 8.0, 5.0, 8.0, 15.0, 3.0),
        HeroClass::Rogue => (95.0, 10.0, 8.0, 15.0, 6.0, 4.0),
    }
}

const PRIMARY_PER_LEVEL: f64 = 2.0;
const DEFENSE_PER_LEVEL: f64 = 0.5;
const RESOURCE_MAX: f64 = 100.0;

/// The hero. Persists across battles; the surrounding session owns it and
/// lends it to one battle at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub combatant: Combatant,
    pub class: HeroClass,
    #[serde(default)]
    pub equipment: Equipment,
    pub abilities: Vec<Ability>,
    /// Name of the last ability used this battle, for combo checks
    #[serde(skip)]
    last_ability: Option<String>,
}

impl Hero {
    /// Create a hero with the class's default ability set
    pub fn new(name: impl Into<String>, class: HeroClass, level: u32) -> Self {
        Self::with_abilities(name, class, level, default_abilities(class))
    }

    pub fn with_abilities(name: impl Into<String>, class: HeroClass, level: u32, abilities: Vec<Ability>) -> Self {
        let level = level.max(1);
        let (hp, hp_per_level, strength, dexterity, intelligence, defense) = class_base(class);
        let levels_gained = (level - 1) as f64;

        let mut stats = CoreStats::new(strength, dexterity, intelligence, defense + DEFENSE_PER_LEVEL * levels_gained);
        stats.get_mut(class.primary_stat()).base += PRIMARY_PER_LEVEL * levels_gained;

        let combatant = Combatant::new(
            name,
            level,
            hp + hp_per_level * levels_gained,
            Resource::new(class.resource_kind(), RESOURCE_MAX),
            stats,
        );

        Hero {
            combatant,
            class,
            equipment: Equipment::default(),
            abilities,
            last_ability: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.combatant.name
    }

    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    // === Equipment ===

    /// Equip a weapon, returning the one it replaced
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.equipment.weapon.replace(weapon)
    }

    /// Equip armour, moving its defense onto the hero's defense stat
    pub fn equip_armor(&mut self, armor: Armor) -> Option<Armor> {
        self.combatant.stats.defense.add_flat(armor.defense);
        let previous = self.equipment.armor.replace(armor);
        if let Some(old) = &previous {
            self.combatant.stats.defense.add_flat(-old.defense);
        }
        previous
    }

    pub fn weapon_bonus(&self) -> f64 {
        self.equipment.weapon.as_ref().map(|w| w.attack_bonus).unwrap_or(0.0)
    }

    pub fn enchantments(&self) -> &[Enchantment] {
        self.equipment
            .weapon
            .as_ref()
            .map(|w| w.enchantments.as_slice())
            .unwrap_or(&[])
    }

    /// Physical damage from the class primary stat
    pub fn base_physical(&self, constants: &GameConstants) -> f64 {
        self.combatant.effective_stat(self.class.primary_stat()) * constants.derived.physical_per_primary
    }

    // === Abilities ===

    pub fn last_ability(&self) -> Option<&str> {
        self.last_ability.as_deref()
    }

    pub(crate) fn set_last_ability(&mut self, name: &str) {
        self.last_ability = Some(name.to_string());
    }

    /// Tick every ability's cooldown except the one just used
    pub fn tick_cooldowns(&mut self, except: Option<usize>) {
        for (index, ability) in self.abilities.iter_mut().enumerate() {
            if Some(index) != except {
                ability.tick_cooldown();
            }
        }
    }

    /// Explicit reset, the only way cooldowns clear between battles
    pub fn reset_cooldowns(&mut self) {
        for ability in &mut self.abilities {
            ability.reset_cooldown();
        }
    }

    /// Clear battle-scoped state. Cooldowns carry over.
    pub fn begin_battle(&mut self) {
        self.last_ability = None;
        self.combatant.effects.clear();
    }

    // === Resources ===

    /// Per-turn regeneration for the hero's resource kind. Returns the amount gained.
    pub fn regenerate_resource(&mut self, constants: &GameConstants) -> f64 {
        let amount = match self.combatant.resource.kind {
            ResourceKind::Mana => constants.resources.mana_per_turn,
            ResourceKind::Energy => constants.resources.energy_per_turn,
            ResourceKind::Rage => 0.0,
        };
        self.combatant.resource.restore(amount)
    }

    /// Rage gained from combat events; other resource kinds ignore it
    pub fn gain_rage(&mut self, amount: f64) -> f64 {
        match self.combatant.resource.kind {
            ResourceKind::Rage => self.combatant.resource.restore(amount),
            ResourceKind::Mana | ResourceKind::Energy => 0.0,
        }
    }
}
