//! Enemies - Two-phase construction and the modifier system
//!
//! An enemy starts as an [`EnemyBuilder`] holding template stats. The
//! modifier step ([`EnemyBuilder::enhance`]) runs at most once and applies
//! tier, archetype, affixes and abilities; [`EnemyBuilder::build`] then
//! hands out the finished [`Enemy`].

mod abilities;
mod affix;
mod archetype;
mod modifier;
mod tier;

pub use abilities::{AbilitySlot, EnemyAbility};
pub use affix::{roll_affixes, AffixKind};
pub use archetype::{assign_abilities, Archetype};
pub use modifier::{enhance_enemy, ModifierReport};
pub use tier::{assign_tier, tier_thresholds, EnemyTier};

pub(crate) use affix::{
    BURNING_SHARE, BURNING_TURNS, FAST_EXTRA_ATTACK, FROZEN_SLOW, FROZEN_TURNS, SHOCK_STUN_CHANCE, SHOCK_STUN_TURNS,
    VAMPIRIC_LEECH,
};

use crate::combatant::{Affinity, Combatant, CoreStats, Resource, StatValue};
use crate::defense::constants::PHASING_EVADE_CHANCE;
use crate::effect::EffectTickResult;
use crate::error::ModifierError;
use crate::types::{Element, ResourceKind, Stat};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What the hero collects on victory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rewards {
    pub gold: u32,
    pub xp: u32,
    /// Loot table id for the loot subsystem
    #[serde(default)]
    pub loot_table: Option<String>,
    /// Chance (0-1) of a regular drop
    #[serde(default)]
    pub drop_chance: f64,
    /// Chance (0-1) of a bonus item, bosses only
    #[serde(default)]
    pub bonus_item_chance: f64,
}

impl Rewards {
    pub fn new(gold: u32, xp: u32) -> Self {
        Rewards {
            gold,
            xp,
            ..Default::default()
        }
    }

    pub fn with_loot(mut self, table: impl Into<String>, drop_chance: f64) -> Self {
        self.loot_table = Some(table.into());
        self.drop_chance = drop_chance.clamp(0.0, 1.0);
        self
    }

    /// Scale every reward by a tier multiplier
    pub fn scale(&mut self, multiplier: f64) {
        self.gold = (self.gold as f64 * multiplier).round() as u32;
        self.xp = (self.xp as f64 * multiplier).round() as u32;
        self.drop_chance = (self.drop_chance * multiplier).clamp(0.0, 1.0);
    }
}

/// A finished enemy, ready for battle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub combatant: Combatant,
    pub base_damage: StatValue,
    pub tier: EnemyTier,
    pub archetype: Option<Archetype>,
    pub affixes: Vec<AffixKind>,
    pub abilities: Vec<EnemyAbility>,
    /// Absorbs damage before HP
    pub shield: f64,
    /// Flat heal at end of turn
    pub regen_per_turn: f64,
    pub rewards: Rewards,
    pub is_boss: bool,
}

impl Enemy {
    pub fn name(&self) -> &str {
        &self.combatant.name
    }

    /// Name with tier and affix prefixes, e.g. "Elite Burning Goblin"
    pub fn display_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !self.tier.label().is_empty() {
            parts.push(self.tier.label());
        }
        parts.extend(self.affixes.iter().map(|a| a.name()));
        parts.push(&self.combatant.name);
        parts.join(" ")
    }

    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }

    pub fn has_affix(&self, affix: AffixKind) -> bool {
        self.affixes.contains(&affix)
    }

    pub fn defense(&self) -> f64 {
        self.combatant.effective_stat(Stat::Defense)
    }

    /// Base attack damage before variance, Enraged included
    pub fn attack_damage(&self) -> f64 {
        let damage = self.base_damage.compute();
        if self.has_affix(AffixKind::Enraged) && self.combatant.hp_percent() < 50.0 {
            damage * affix::ENRAGED_DAMAGE
        } else {
            damage
        }
    }

    /// Chance (percent) to evade a hero hit outright
    pub fn evade_chance(&self) -> f64 {
        if self.has_affix(AffixKind::Phasing) {
            PHASING_EVADE_CHANCE
        } else {
            0.0
        }
    }

    /// Apply a landed hit: the shield absorbs first, the rest reaches HP.
    /// Returns `(absorbed, taken)`.
    pub fn receive_hit(&mut self, amount: f64) -> (f64, f64) {
        let amount = amount.max(0.0);
        let absorbed = amount.min(self.shield);
        self.shield -= absorbed;
        let taken = self.combatant.take_damage(amount - absorbed);
        (absorbed, taken)
    }

    /// End-of-turn phase: status effects, then affix regeneration
    pub fn resolve_end_of_turn(&mut self) -> EffectTickResult {
        let mut result = self.combatant.resolve_end_of_turn();
        if self.is_alive() && self.regen_per_turn > 0.0 {
            let healed = self.combatant.heal(self.regen_per_turn);
            if healed > 0.0 {
                result.heal_ticks.push((AffixKind::Regenerating.name().to_string(), healed));
                result.total_healing += healed;
            }
        }
        result
    }
}

/// First phase of enemy construction
#[derive(Debug, Clone)]
pub struct EnemyBuilder {
    enemy: Enemy,
    enhanced: bool,
}

impl EnemyBuilder {
    pub fn new(name: impl Into<String>, level: u32, max_hp: f64, damage: f64, defense: f64) -> Self {
        let combatant = Combatant::new(
            name,
            level,
            max_hp,
            Resource::new(ResourceKind::Mana, 0.0),
            CoreStats::new(0.0, 0.0, 0.0, defense),
        );

        EnemyBuilder {
            enemy: Enemy {
                combatant,
                base_damage: StatValue::with_base(damage),
                tier: EnemyTier::Normal,
                archetype: None,
                affixes: Vec::new(),
                abilities: Vec::new(),
                shield: 0.0,
                regen_per_turn: 0.0,
                rewards: Rewards::default(),
                is_boss: false,
            },
            enhanced: false,
        }
    }

    pub fn rewards(mut self, rewards: Rewards) -> Self {
        self.enemy.rewards = rewards;
        self
    }

    pub fn affinity(mut self, vulnerable: Option<Element>, resistant: Option<Element>) -> Self {
        self.enemy.combatant.affinity = Affinity::new(vulnerable, resistant);
        self
    }

    /// Stats the enemy currently carries, for inspection before build
    pub fn peek(&self) -> &Enemy {
        &self.enemy
    }

    pub fn is_enhanced(&self) -> bool {
        self.enhanced
    }

    /// Roll a tier and apply the full modifier step
    pub fn enhance(
        &mut self,
        dungeon_level: u32,
        force_boss: bool,
        rng: &mut impl Rng,
    ) -> Result<ModifierReport, ModifierError> {
        let tier = assign_tier(dungeon_level, force_boss, rng);
        self.enhance_with_tier(tier, rng)
    }

    /// Apply the modifier step for a known tier
    pub fn enhance_with_tier(&mut self, tier: EnemyTier, rng: &mut impl Rng) -> Result<ModifierReport, ModifierError> {
        if self.enhanced {
            return Err(ModifierError::AlreadyEnhanced(self.enemy.combatant.name.clone()));
        }
        let report = modifier::apply_modifiers(&mut self.enemy, tier, rng);
        self.enhanced = true;
        Ok(report)
    }

    /// Finish construction at full HP
    pub fn build(mut self) -> Enemy {
        self.enemy.combatant.current_hp = self.enemy.combatant.computed_max_hp();
        self.enemy
    }
}
