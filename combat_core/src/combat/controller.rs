//! Hero control - The decision boundary between combat and the player
//!
//! The battle loop asks a [`HeroController`] for one action per prompt and
//! reports every event back to it. Interactive front ends, scripted tests
//! and the simulator's auto-pilot all plug in here.

use super::events::CombatEvent;
use super::inventory::{Inventory, PotionKind};
use crate::combatant::Hero;
use crate::enemy::Enemy;
use std::collections::VecDeque;
use thiserror::Error;

/// A hero action for one prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    Attack,
    /// Index into the hero's ability list
    Ability(usize),
    Potion(PotionKind),
    Inspect,
    Flee,
}

/// Top-level menu entries as numbered in the action prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Attack = 1,
    Ability = 2,
    Potion = 3,
    Inspect = 4,
    Flee = 5,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid menu choice {0}, expected 1-5")]
pub struct InvalidMenuChoice(pub u8);

impl TryFrom<u8> for MenuChoice {
    type Error = InvalidMenuChoice;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::Attack),
            2 => Ok(MenuChoice::Ability),
            3 => Ok(MenuChoice::Potion),
            4 => Ok(MenuChoice::Inspect),
            5 => Ok(MenuChoice::Flee),
            other => Err(InvalidMenuChoice(other)),
        }
    }
}

/// Read-only snapshot handed to the controller for a decision
pub struct BattleView<'a> {
    pub hero: &'a Hero,
    pub enemy: &'a Enemy,
    pub inventory: &'a dyn Inventory,
    pub turn: u32,
    pub inspected: bool,
}

pub trait HeroController {
    fn choose_action(&mut self, view: &BattleView<'_>) -> HeroAction;

    /// Called for every event, in order
    fn observe(&mut self, _event: &CombatEvent) {}
}

/// Plays a fixed list of actions, then attacks forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedController {
    actions: VecDeque<HeroAction>,
    pub observed: Vec<CombatEvent>,
}

impl ScriptedController {
    pub fn new(actions: impl IntoIterator<Item = HeroAction>) -> Self {
        ScriptedController {
            actions: actions.into_iter().collect(),
            observed: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl HeroController for ScriptedController {
    fn choose_action(&mut self, _view: &BattleView<'_>) -> HeroAction {
        self.actions.pop_front().unwrap_or(HeroAction::Attack)
    }

    fn observe(&mut self, event: &CombatEvent) {
        self.observed.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_from_number() {
        assert_eq!(MenuChoice::try_from(1), Ok(MenuChoice::Attack));
        assert_eq!(MenuChoice::try_from(5), Ok(MenuChoice::Flee));
        assert_eq!(MenuChoice::try_from(0), Err(InvalidMenuChoice(0)));
        assert_eq!(MenuChoice::try_from(6), Err(InvalidMenuChoice(6)));
    }
}
