//! The chain of cards selected during a player turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardInstance;
use crate::core::config::MAX_HAND_SIZE;
use crate::core::entity::InstanceId;

/// Ordered selection of hand cards.
///
/// Holds copies of the selected instances; identity is the instance id.
/// SmallVec keeps a full hand inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboChain {
    cards: SmallVec<[CardInstance; MAX_HAND_SIZE]>,
}

impl ComboChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card the next selection must link to.
    #[must_use]
    pub fn last(&self) -> Option<&CardInstance> {
        self.cards.last()
    }

    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.cards.iter().any(|c| c.instance_id == id)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CardInstance] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Instance ids in chain order.
    #[must_use]
    pub fn instance_ids(&self) -> Vec<InstanceId> {
        self.cards.iter().map(|c| c.instance_id).collect()
    }

    pub(crate) fn push(&mut self, card: CardInstance) {
        self.cards.push(card);
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.cards.truncate(len);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl<'a> IntoIterator for &'a ComboChain {
    type Item = &'a CardInstance;
    type IntoIter = std::slice::Iter<'a, CardInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
