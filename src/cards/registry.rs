//! Card catalog for definition lookup.
//!
//! [`CardCatalog`] is the seam the battle uses to resolve master-deck ids.
//! [`CardRegistry`] is the in-memory implementation, filled by hand or from
//! a JSON list of definitions.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::error::CatalogError;

/// Lookup of static card definitions by id.
pub trait CardCatalog {
    /// Get a card definition, or `None` if the id is unknown.
    fn get_by_id(&self, id: CardId) -> Option<&CardDefinition>;
}

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use combo_battle::cards::{CardCatalog, CardDefinition, CardId, CardRegistry, Element};
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(CardDefinition::new(CardId::new(1), "Ember", 4, Element::Fire))
///     .unwrap();
///
/// let found = registry.get_by_id(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Ember");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Fails if a card with the same id already exists.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Build a registry from a JSON array of card definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<CardDefinition> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for card in cards {
            registry.register(card)?;
        }
        tracing::debug!("Loaded {} card definitions", registry.len());
        Ok(registry)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}

impl CardCatalog for CardRegistry {
    fn get_by_id(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Element;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();

        let card = CardDefinition::new(CardId::new(1), "Test Card", 3, Element::Wind);
        registry.register(card).unwrap();

        let found = registry.get_by_id(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Card");

        assert!(registry.get_by_id(CardId::new(99)).is_none());
        assert!(registry.contains(CardId::new(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = CardRegistry::new();

        registry
            .register(CardDefinition::new(CardId::new(1), "Card A", 1, Element::Fire))
            .unwrap();
        let err = registry
            .register(CardDefinition::new(CardId::new(1), "Card B", 2, Element::Dark))
            .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateCard(id) if id == CardId::new(1)));
        assert_eq!(registry.get_by_id(CardId::new(1)).unwrap().name, "Card A");
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 1, "name": "Ember", "number": 4, "element": "Fire", "rarity": "SR", "power": 40},
            {"id": 2, "name": "Drop", "number": 1, "element": "Water"}
        ]"#;

        let registry = CardRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_by_id(CardId::new(1)).unwrap().power, 40);
        assert_eq!(registry.get_by_id(CardId::new(2)).unwrap().element, Element::Water);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            CardRegistry::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));

        let dup = r#"[
            {"id": 1, "name": "A", "number": 1, "element": "Fire"},
            {"id": 1, "name": "B", "number": 2, "element": "Fire"}
        ]"#;
        assert!(matches!(
            CardRegistry::from_json(dup),
            Err(CatalogError::DuplicateCard(_))
        ));
    }

    #[test]
    fn test_iteration() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(CardId::new(1), "A", 1, Element::None)).unwrap();
        registry.register(CardDefinition::new(CardId::new(2), "B", 2, Element::None)).unwrap();

        let mut names: Vec<_> = registry.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["A", "B"]);
    }
}
