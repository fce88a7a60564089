//! Deck service: draw, shuffle, reshuffle-on-exhaustion and discard.
//!
//! The service owns the battle's RNG and the instance-id allocator; the
//! piles themselves live in [`PlayerState`] and are passed in on every call.
//!
//! ## Invariants
//!
//! - `deck + hand + discard` never changes size across draws and discards
//! - The hand never grows past the configured limit
//! - Drawing from an exhausted deck first reclaims the whole discard pile,
//!   shuffled; with nothing to reclaim the draw ends early
//!
//! ## Usage
//!
//! ```
//! use combo_battle::cards::{CardFace, CardId, Element};
//! use combo_battle::core::{BattleRng, PlayerState};
//! use combo_battle::zones::DeckService;
//!
//! let mut service = DeckService::new(BattleRng::new(42), 10);
//! let mut player = PlayerState::new(100);
//!
//! let master: Vec<_> = (1..=8)
//!     .map(|i| CardFace::new(CardId::new(i), i as u8, Element::Fire))
//!     .collect();
//! service.load_deck(&mut player, &master);
//!
//! let report = service.draw(&mut player, 5);
//! assert_eq!(report.drawn.len(), 5);
//! assert_eq!(player.deck.len(), 3);
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, CardInstance};
use crate::core::entity::{InstanceAllocator, InstanceId};
use crate::core::rng::{BattleRng, BattleRngState};
use crate::core::state::PlayerState;

/// Outcome of a draw request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReport {
    /// Instances added to the hand, in draw order.
    pub drawn: Vec<CardInstance>,

    /// Cards moved from the discard pile back into the deck (0 if none).
    pub reclaimed: usize,
}

impl DrawReport {
    #[must_use]
    pub fn reshuffled(&self) -> bool {
        self.reclaimed > 0
    }
}

/// Deck/hand/discard lifecycle for one player.
#[derive(Clone, Debug)]
pub struct DeckService {
    rng: BattleRng,
    ids: InstanceAllocator,
    hand_limit: usize,
}

impl DeckService {
    #[must_use]
    pub fn new(rng: BattleRng, hand_limit: usize) -> Self {
        Self {
            rng,
            ids: InstanceAllocator::new(),
            hand_limit,
        }
    }

    #[must_use]
    pub fn hand_limit(&self) -> usize {
        self.hand_limit
    }

    /// RNG position, for reproducing later shuffles.
    #[must_use]
    pub fn rng_state(&self) -> BattleRngState {
        self.rng.state()
    }

    /// Replace the player's piles with a shuffled copy of `master`.
    ///
    /// Hand and discard pile are cleared. `master` is not modified.
    pub fn load_deck(&mut self, player: &mut PlayerState, master: &[CardFace]) {
        player.hand.clear();
        player.discard_pile.clear();
        player.deck = master.iter().copied().collect();
        self.shuffle(&mut player.deck);
    }

    /// Uniform Fisher–Yates shuffle of a deck.
    pub fn shuffle(&mut self, deck: &mut VecDeque<CardFace>) {
        self.rng.shuffle(deck.make_contiguous());
    }

    /// Draw up to `n` cards from the front of the deck into the hand.
    ///
    /// Stops early at the hand limit, or when deck and discard pile are
    /// both empty. Neither case is an error.
    pub fn draw(&mut self, player: &mut PlayerState, n: usize) -> DrawReport {
        let mut report = DrawReport::default();

        for _ in 0..n {
            if player.hand.len() >= self.hand_limit {
                break;
            }

            if player.deck.is_empty() {
                if player.discard_pile.is_empty() {
                    tracing::debug!("Deck and discard pile exhausted, draw stopped");
                    break;
                }
                report.reclaimed += self.reclaim_discards(player);
            }

            let Some(face) = player.deck.pop_front() else {
                break;
            };
            let card = CardInstance::new(self.ids.next_id(), face);
            player.hand.push(card);
            report.drawn.push(card);
        }

        report
    }

    /// Move a hand card to the discard pile.
    ///
    /// Returns the discarded face, or `None` (and changes nothing) if the
    /// instance is not in hand.
    pub fn discard(&self, player: &mut PlayerState, instance: InstanceId) -> Option<CardFace> {
        let pos = player.hand.iter().position(|c| c.instance_id == instance)?;
        let card = player.hand.remove(pos);
        player.discard_pile.push(card.face);
        Some(card.face)
    }

    fn reclaim_discards(&mut self, player: &mut PlayerState) -> usize {
        let count = player.discard_pile.len();
        player.deck.extend(player.discard_pile.drain(..));
        self.shuffle(&mut player.deck);
        tracing::debug!("Reshuffled {} discarded cards into the deck", count);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Element};

    fn faces(count: u32) -> Vec<CardFace> {
        (1..=count)
            .map(|i| CardFace::new(CardId::new(i), (i % 9 + 1) as u8, Element::Fire))
            .collect()
    }

    fn loaded(count: u32, hand_limit: usize) -> (DeckService, PlayerState) {
        let mut service = DeckService::new(BattleRng::new(42), hand_limit);
        let mut player = PlayerState::new(100);
        service.load_deck(&mut player, &faces(count));
        (service, player)
    }

    fn sorted_ids(cards: impl Iterator<Item = CardId>) -> Vec<CardId> {
        let mut ids: Vec<_> = cards.collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_load_deck_shuffles_copy() {
        let master = faces(20);
        let (_, player) = loaded(20, 10);

        assert_eq!(player.deck.len(), 20);
        assert!(player.hand.is_empty());
        assert!(player.discard_pile.is_empty());

        let deck: Vec<_> = player.deck.iter().copied().collect();
        assert_ne!(deck, master);
        assert_eq!(
            sorted_ids(deck.iter().map(|f| f.id)),
            sorted_ids(master.iter().map(|f| f.id))
        );
    }

    #[test]
    fn test_load_deck_clears_previous_piles() {
        let (mut service, mut player) = loaded(10, 10);
        service.draw(&mut player, 3);
        let first = player.hand[0].instance_id;
        service.discard(&mut player, first);

        service.load_deck(&mut player, &faces(4));

        assert_eq!(player.deck.len(), 4);
        assert!(player.hand.is_empty());
        assert!(player.discard_pile.is_empty());
    }

    #[test]
    fn test_draw_takes_from_front() {
        let (mut service, mut player) = loaded(10, 10);
        let expected: Vec<_> = player.deck.iter().take(3).copied().collect();

        let report = service.draw(&mut player, 3);

        let drawn: Vec<_> = report.drawn.iter().map(|c| c.face).collect();
        assert_eq!(drawn, expected);
        assert_eq!(player.hand.len(), 3);
        assert_eq!(player.deck.len(), 7);
        assert!(!report.reshuffled());
    }

    #[test]
    fn test_draw_assigns_fresh_instance_ids() {
        let (mut service, mut player) = loaded(10, 10);
        service.draw(&mut player, 5);

        let mut ids: Vec<_> = player.hand.iter().map(|c| c.instance_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_draw_respects_hand_limit() {
        let (mut service, mut player) = loaded(20, 10);

        service.draw(&mut player, 8);
        let report = service.draw(&mut player, 5);

        assert_eq!(report.drawn.len(), 2);
        assert_eq!(player.hand.len(), 10);
        assert_eq!(player.deck.len(), 10);

        let report = service.draw(&mut player, 1);
        assert!(report.drawn.is_empty());
    }

    #[test]
    fn test_draw_reclaims_discard_pile() {
        let (mut service, mut player) = loaded(6, 10);
        service.draw(&mut player, 6);
        assert!(player.deck.is_empty());

        let ids: Vec<_> = player.hand.iter().take(4).map(|c| c.instance_id).collect();
        for id in ids {
            service.discard(&mut player, id);
        }
        assert_eq!(player.discard_pile.len(), 4);

        let report = service.draw(&mut player, 3);

        assert_eq!(report.reclaimed, 4);
        assert!(report.reshuffled());
        assert_eq!(report.drawn.len(), 3);
        assert!(player.discard_pile.is_empty());
        assert_eq!(player.deck.len(), 1);
        assert_eq!(player.hand.len(), 5);
    }

    #[test]
    fn test_draw_stops_when_everything_is_in_hand() {
        let (mut service, mut player) = loaded(3, 10);

        let report = service.draw(&mut player, 5);

        assert_eq!(report.drawn.len(), 3);
        assert_eq!(player.hand.len(), 3);
        assert!(player.deck.is_empty());
        assert!(player.discard_pile.is_empty());
    }

    #[test]
    fn test_discard_by_identity() {
        let mut service = DeckService::new(BattleRng::new(1), 10);
        let mut player = PlayerState::new(100);
        let face = CardFace::new(CardId::new(7), 3, Element::Water);
        service.load_deck(&mut player, &[face, face]);
        service.draw(&mut player, 2);

        let second = player.hand[1].instance_id;
        let discarded = service.discard(&mut player, second);

        assert_eq!(discarded, Some(face));
        assert_eq!(player.hand.len(), 1);
        assert_ne!(player.hand[0].instance_id, second);
        assert_eq!(player.discard_pile, vec![face]);
    }

    #[test]
    fn test_discard_missing_is_noop() {
        let (mut service, mut player) = loaded(5, 10);
        service.draw(&mut player, 2);
        let before = player.clone();

        assert_eq!(service.discard(&mut player, InstanceId(999)), None);
        assert_eq!(player, before);
    }

    #[test]
    fn test_conservation_over_cycles() {
        let (mut service, mut player) = loaded(12, 10);

        for round in 0..20 {
            service.draw(&mut player, 5);
            let ids: Vec<_> = player.hand.iter().take(round % 4 + 1).map(|c| c.instance_id).collect();
            for id in ids {
                service.discard(&mut player, id);
            }
            assert_eq!(player.total_cards(), 12);
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let (_, a) = loaded(20, 10);
        let (_, b) = loaded(20, 10);
        assert_eq!(a.deck, b.deck);
    }
}
