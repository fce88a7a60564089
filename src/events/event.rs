//! Battle notifications.
//!
//! Events are emitted after the state change they describe has been
//! committed. They carry everything a presentation layer needs to animate
//! the change without reading state back.

use serde::{Deserialize, Serialize};

use crate::cards::CardFace;
use crate::rules::BattleResult;

/// Who received damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Player,
    Enemy,
}

/// Something that happened in a battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// HP was subtracted. `amount` is the pre-clamp figure.
    DamageDealt {
        target: Target,
        amount: u32,
        /// Bonus steps in the chain; 0 for enemy attacks.
        combo_tier: u32,
    },

    /// A chain card left the hand.
    CardDiscarded { card: CardFace },

    /// A player turn began (1-based).
    TurnStarted { turn: u32 },

    /// Cards entered the hand.
    CardsDrawn { count: usize },

    /// The discard pile was shuffled back into the deck.
    DeckReshuffled { cards: usize },

    BattleEnded { result: BattleResult },
}

impl BattleEvent {
    /// Short name, used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            BattleEvent::DamageDealt { .. } => "damage_dealt",
            BattleEvent::CardDiscarded { .. } => "card_discarded",
            BattleEvent::TurnStarted { .. } => "turn_started",
            BattleEvent::CardsDrawn { .. } => "cards_drawn",
            BattleEvent::DeckReshuffled { .. } => "deck_reshuffled",
            BattleEvent::BattleEnded { .. } => "battle_ended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Element};

    #[test]
    fn test_event_kind() {
        let event = BattleEvent::DamageDealt {
            target: Target::Enemy,
            amount: 180,
            combo_tier: 1,
        };
        assert_eq!(event.kind(), "damage_dealt");
        assert_eq!(BattleEvent::TurnStarted { turn: 2 }.kind(), "turn_started");
    }

    #[test]
    fn test_event_serialization() {
        let events = vec![
            BattleEvent::CardDiscarded {
                card: CardFace::new(CardId::new(3), 4, Element::Thunder),
            },
            BattleEvent::BattleEnded {
                result: BattleResult::Win,
            },
        ];

        let json = serde_json::to_string(&events).unwrap();
        let deserialized: Vec<BattleEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(events, deserialized);
    }
}
