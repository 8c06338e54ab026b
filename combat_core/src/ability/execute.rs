//! Ability execution - validate, pay, then apply each step in order

use crate::combat::{hero_strike, Strike};
use crate::combatant::Hero;
use crate::config::GameConstants;
use crate::damage::DamageInput;
use crate::enemy::Enemy;
use crate::error::CombatError;
use rand::Rng;
use tracing::{debug, info};

/// Everything one ability use did, step by step
#[derive(Debug, Clone, PartialEq)]
pub struct AbilityOutcome {
    pub ability: String,
    pub slot: usize,
    pub self_damage: f64,
    pub resource_spent: f64,
    pub healed: f64,
    pub buff_applied: Option<String>,
    /// Scaled damage before the combo bonus
    pub base_damage: f64,
    pub combo_triggered: bool,
    /// Damage fed into the pipeline for each hit
    pub damage_per_hit: f64,
    /// One entry per attempted hit; shorter than the hit count if the enemy fell
    pub hits: Vec<Strike>,
    pub debuff_applied: Option<String>,
    pub resource_generated: f64,
    pub enemy_defeated: bool,
}

impl AbilityOutcome {
    fn new(ability: &str, slot: usize) -> Self {
        AbilityOutcome {
            ability: ability.to_string(),
            slot,
            self_damage: 0.0,
            resource_spent: 0.0,
            healed: 0.0,
            buff_applied: None,
            base_damage: 0.0,
            combo_triggered: false,
            damage_per_hit: 0.0,
            hits: Vec::new(),
            debuff_applied: None,
            resource_generated: 0.0,
            enemy_defeated: false,
        }
    }

    /// Damage dealt across all hits, shields included
    pub fn total_damage(&self) -> f64 {
        self.hits.iter().map(|h| h.total_damage()).sum()
    }

    pub fn landed_hits(&self) -> usize {
        self.hits.iter().filter(|h| h.landed()).count()
    }
}

/// Use the hero's ability in `slot` against `enemy`.
///
/// Cooldown and resource failures leave every piece of state untouched.
/// A self-damage step that drops the hero to 0 HP stops execution with
/// [`CombatError::SelfInflictedDefeat`].
pub fn use_ability(
    hero: &mut Hero,
    enemy: &mut Enemy,
    slot: usize,
    constants: &GameConstants,
    inspected: bool,
    rng: &mut impl Rng,
) -> Result<AbilityOutcome, CombatError> {
    if !enemy.is_alive() {
        return Err(CombatError::InvalidTarget);
    }

    let ability = hero
        .abilities
        .get(slot)
        .cloned()
        .ok_or(CombatError::UnknownAbility(slot))?;

    if !ability.is_ready() {
        return Err(CombatError::AbilityUnavailable {
            ability: ability.name.clone(),
            remaining: ability.remaining_cooldown(),
        });
    }
    let available = hero.combatant.resource.current;
    if available < ability.cost {
        return Err(CombatError::InsufficientResource {
            needed: ability.cost,
            available,
        });
    }

    let mut outcome = AbilityOutcome::new(&ability.name, slot);

    // 1. Self-damage
    if ability.self_damage > 0.0 {
        outcome.self_damage = hero.combatant.take_damage(ability.self_damage);
        if !hero.is_alive() {
            info!(ability = %ability.name, "hero fell to their own ability");
            return Err(CombatError::SelfInflictedDefeat {
                ability: ability.name.clone(),
            });
        }
    }

    // 2. Cost
    if hero.combatant.resource.spend(ability.cost) {
        outcome.resource_spent = ability.cost;
    }

    // 3. Cooldown
    if let Some(used) = hero.abilities.get_mut(slot) {
        used.start_cooldown();
    }

    // 4. Heal
    let heal = ability.heal_amount(hero.combatant.computed_max_hp());
    if heal > 0.0 {
        outcome.healed = hero.combatant.heal(heal);
    }

    // 5. Buff
    if let Some(buff) = &ability.buff {
        if hero.combatant.effects.apply(buff.to_effect()) {
            outcome.buff_applied = Some(buff.name.clone());
        }
    }

    // 6. Damage
    outcome.base_damage = ability.scaled_damage(&hero.combatant);

    // 7. Combo, then the chain moves on whether or not it matched
    outcome.combo_triggered = ability.combo_satisfied_by(hero.last_ability());
    outcome.damage_per_hit = if outcome.combo_triggered {
        outcome.base_damage * ability.combo_bonus
    } else {
        outcome.base_damage
    };
    hero.set_last_ability(&ability.name);

    // 8. Hit loop
    if outcome.damage_per_hit > 0.0 {
        for _ in 0..ability.hits.max(1) {
            if !enemy.is_alive() {
                break;
            }
            let strike = hero_strike(
                hero,
                enemy,
                DamageInput::ability(outcome.damage_per_hit),
                ability.hit_bonus,
                inspected,
                constants,
                rng,
            );
            outcome.hits.push(strike);
        }
    }
    outcome.enemy_defeated = !enemy.is_alive();

    // 9. Debuff
    if let Some(debuff) = &ability.debuff {
        if enemy.is_alive() {
            let effect = debuff.to_effect();
            let name = effect.name.clone();
            if enemy.combatant.effects.apply(effect) {
                outcome.debuff_applied = Some(name);
            }
        }
    }

    // 10. Resource generation
    if ability.resource_generated > 0.0 {
        outcome.resource_generated = hero.combatant.resource.restore(ability.resource_generated);
    }

    // 11. Every other ability ticks
    hero.tick_cooldowns(Some(slot));

    debug!(
        ability = %outcome.ability,
        combo = outcome.combo_triggered,
        hits = outcome.hits.len(),
        damage = outcome.total_damage(),
        "ability used"
    );

    Ok(outcome)
}
