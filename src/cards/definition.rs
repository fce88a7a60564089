//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its rank
//! (`number`), its element and its flat `power`. A battle never mutates a
//! definition; the parts the rules need are copied into a [`CardFace`] when
//! the master deck is loaded.

use serde::{Deserialize, Serialize};

use super::attributes::{Element, Rarity};

/// Unique identifier for a card definition.
///
/// This identifies the kind of card, not a specific copy in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use combo_battle::cards::{CardDefinition, CardId, Element};
///
/// let ember = CardDefinition::new(CardId::new(1), "Ember", 4, Element::Fire)
///     .with_power(40)
///     .with_text("A small flame.");
///
/// assert_eq!(ember.number, 4);
/// assert_eq!(ember.face().element, Element::Fire);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Rank, used for base damage and number chaining.
    pub number: u8,

    /// Element, used for attribute chaining.
    #[serde(alias = "attribute")]
    pub element: Element,

    #[serde(default)]
    pub rarity: Rarity,

    /// Flat power value. Carried for display; chain damage uses `number`.
    #[serde(default)]
    pub power: i64,

    /// Descriptive text.
    #[serde(default)]
    pub text: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, number: u8, element: Element) -> Self {
        Self {
            id,
            name: name.into(),
            number,
            element,
            rarity: Rarity::default(),
            power: 0,
            text: String::new(),
        }
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: i64) -> Self {
        self.power = power;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The rule-relevant projection of this definition.
    #[must_use]
    pub fn face(&self) -> CardFace {
        CardFace {
            id: self.id,
            number: self.number,
            element: self.element,
        }
    }
}

/// The parts of a card the battle rules read: id, number and element.
///
/// Decks and discard piles hold faces rather than bare ids so that drawing
/// never needs a catalog lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    pub id: CardId,
    pub number: u8,
    pub element: Element,
}

impl CardFace {
    #[must_use]
    pub const fn new(id: CardId, number: u8, element: Element) -> Self {
        Self { id, number, element }
    }

    /// Whether `other` may follow this card in a chain.
    #[must_use]
    pub fn links_to(&self, other: &CardFace) -> bool {
        self.number == other.number || self.element == other.element
    }
}
