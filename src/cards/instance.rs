//! Card instances - cards currently in a hand.
//!
//! A `CardInstance` is created when a card is drawn and ceases to exist when
//! it is discarded; the discard pile keeps only its [`CardFace`]. The
//! instance id is what selection and discard compare.

use serde::{Deserialize, Serialize};

use super::attributes::Element;
use super::definition::{CardFace, CardId};
use crate::core::entity::InstanceId;

/// A drawn card in a player's hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Identity of this copy.
    pub instance_id: InstanceId,

    /// Rule-relevant card data.
    pub face: CardFace,
}

impl CardInstance {
    #[must_use]
    pub fn new(instance_id: InstanceId, face: CardFace) -> Self {
        Self { instance_id, face }
    }

    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.face.id
    }

    #[must_use]
    pub fn number(&self) -> u8 {
        self.face.number
    }

    #[must_use]
    pub fn element(&self) -> Element {
        self.face.element
    }
}
