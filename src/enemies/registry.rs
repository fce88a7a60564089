//! Enemy catalog for definition lookup.

use rustc_hash::FxHashMap;

use super::definition::{EnemyDefinition, EnemyId};
use crate::cards::Element;
use crate::core::error::CatalogError;

/// Lookup of the fixed enemy set by id.
pub trait EnemyCatalog {
    /// Get an enemy definition, or `None` if the id is unknown.
    fn get_fixed_by_id(&self, id: EnemyId) -> Option<&EnemyDefinition>;
}

/// In-memory enemy catalog.
#[derive(Clone, Debug, Default)]
pub struct EnemyRegistry {
    enemies: FxHashMap<EnemyId, EnemyDefinition>,
}

impl EnemyRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The three stock opponents.
    ///
    /// | id | name          | HP  | attack | element |
    /// |----|---------------|-----|--------|---------|
    /// | 1  | RED DRAGON    | 300 | 25     | Fire    |
    /// | 2  | ICE GOLEM     | 500 | 15     | Water   |
    /// | 3  | SHADOW KNIGHT | 200 | 40     | Dark    |
    #[must_use]
    pub fn fixed() -> Self {
        let enemies = [
            EnemyDefinition::new(EnemyId::new(1), "RED DRAGON", 300, 25, Element::Fire),
            EnemyDefinition::new(EnemyId::new(2), "ICE GOLEM", 500, 15, Element::Water),
            EnemyDefinition::new(EnemyId::new(3), "SHADOW KNIGHT", 200, 40, Element::Dark),
        ];

        Self {
            enemies: enemies.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    /// Register an enemy definition.
    pub fn register(&mut self, enemy: EnemyDefinition) -> Result<(), CatalogError> {
        if self.enemies.contains_key(&enemy.id) {
            return Err(CatalogError::DuplicateEnemy(enemy.id));
        }
        self.enemies.insert(enemy.id, enemy);
        Ok(())
    }

    /// Build a registry from a JSON array of enemy definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let enemies: Vec<EnemyDefinition> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for enemy in enemies {
            registry.register(enemy)?;
        }
        Ok(registry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

impl EnemyCatalog for EnemyRegistry {
    fn get_fixed_by_id(&self, id: EnemyId) -> Option<&EnemyDefinition> {
        self.enemies.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_roster() {
        let registry = EnemyRegistry::fixed();
        assert_eq!(registry.len(), 3);

        let dragon = registry.get_fixed_by_id(EnemyId::new(1)).unwrap();
        assert_eq!(dragon.name, "RED DRAGON");
        assert_eq!(dragon.max_hp, 300);
        assert_eq!(dragon.base_attack, 25);
        assert_eq!(dragon.element, Element::Fire);

        let golem = registry.get_fixed_by_id(EnemyId::new(2)).unwrap();
        assert_eq!((golem.max_hp, golem.base_attack), (500, 15));

        let knight = registry.get_fixed_by_id(EnemyId::new(3)).unwrap();
        assert_eq!((knight.max_hp, knight.base_attack), (200, 40));

        assert!(registry.get_fixed_by_id(EnemyId::new(4)).is_none());
    }

    #[test]
    fn test_duplicate_enemy_rejected() {
        let mut registry = EnemyRegistry::fixed();
        let err = registry
            .register(EnemyDefinition::new(EnemyId::new(1), "COPY", 1, 1, Element::None))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateEnemy(_)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"id": 10, "name": "WISP", "max_hp": 50, "base_attack": 5, "attribute": "Light"}]"#;
        let registry = EnemyRegistry::from_json(json).unwrap();

        let wisp = registry.get_fixed_by_id(EnemyId::new(10)).unwrap();
        assert_eq!(wisp.element, Element::Light);
        assert!(!registry.is_empty());
    }
}
