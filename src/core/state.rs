//! Battle state: player, enemy and the chain in progress.
//!
//! ## PlayerState
//!
//! - HP, clamped to `0..=max_hp`
//! - Deck (front = next draw), hand, discard pile
//!
//! ## EnemyState
//!
//! - The enemy's definition and clamped HP
//!
//! ## BattleState
//!
//! The single mutable record the turn controller threads through the deck
//! service and combo engine.
//!
//! Status effects and the enemy charge fields are stored but no rule reads
//! them yet.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, CardInstance};
use crate::combo::ComboChain;
use crate::core::entity::InstanceId;
use crate::enemies::EnemyDefinition;

/// Kinds of lingering status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    Poison,
    Paralyze,
    Silence,
    Vulnerable,
    Barrier,
}

/// A status applied to a combatant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Remaining turns.
    pub duration: u32,
    /// Strength or ratio, meaning depends on `kind`.
    pub value: f32,
}

/// The player's side of a battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    max_hp: u32,
    current_hp: u32,

    /// Draw pile; the front is drawn next.
    pub deck: VecDeque<CardFace>,

    /// Cards currently selectable.
    pub hand: Vec<CardInstance>,

    pub discard_pile: Vec<CardFace>,

    pub status_effects: Vec<StatusEffect>,
}

impl PlayerState {
    /// A player at full HP with empty piles.
    #[must_use]
    pub fn new(max_hp: u32) -> Self {
        Self {
            max_hp,
            current_hp: max_hp,
            deck: VecDeque::new(),
            hand: Vec::new(),
            discard_pile: Vec::new(),
            status_effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    #[must_use]
    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Subtract damage, clamped at zero. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    /// Find a hand card by identity.
    #[must_use]
    pub fn hand_card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.instance_id == id)
    }

    /// Cards across deck, hand and discard pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard_pile.len()
    }
}

/// The enemy's side of a battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyState {
    pub definition: EnemyDefinition,
    current_hp: u32,
    pub is_charging: bool,
    pub charge_counter: u32,
    pub status_effects: Vec<StatusEffect>,
}

impl EnemyState {
    /// An enemy at full HP.
    #[must_use]
    pub fn new(definition: EnemyDefinition) -> Self {
        Self {
            current_hp: definition.max_hp,
            definition,
            is_charging: false,
            charge_counter: 0,
            status_effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.definition.max_hp
    }

    #[must_use]
    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Damage dealt to the player each enemy turn.
    #[must_use]
    pub fn attack(&self) -> u32 {
        self.definition.base_attack
    }

    /// Subtract damage, clamped at zero. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }
}

/// Live data of one battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    pub player: PlayerState,
    pub enemy: EnemyState,

    /// Cards selected this turn, in selection order.
    pub chain: ComboChain,

    /// Turn number (starts at 1).
    pub turn: u32,
}

impl BattleState {
    #[must_use]
    pub fn new(player: PlayerState, enemy: EnemyState) -> Self {
        Self {
            player,
            enemy,
            chain: ComboChain::new(),
            turn: 1,
        }
    }
}
