//! Enemy definitions - static enemy stats.

use serde::{Deserialize, Serialize};

use crate::cards::Element;

/// Unique identifier for an enemy definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

impl EnemyId {
    /// Create a new enemy ID.
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

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Enemy({})", self.0)
    }
}

/// Static enemy definition.
///
/// ```
/// use combo_battle::cards::Element;
/// use combo_battle::enemies::{EnemyDefinition, EnemyId};
///
/// let slime = EnemyDefinition::new(EnemyId::new(7), "SLIME", 80, 5, Element::Water);
/// assert_eq!(slime.max_hp, 80);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub id: EnemyId,

    pub name: String,

    /// Starting and maximum HP.
    pub max_hp: u32,

    /// Damage dealt to the player on every enemy turn.
    pub base_attack: u32,

    #[serde(alias = "attribute")]
    pub element: Element,
}

impl EnemyDefinition {
    #[must_use]
    pub fn new(
        id: EnemyId,
        name: impl Into<String>,
        max_hp: u32,
        base_attack: u32,
        element: Element,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            max_hp,
            base_attack,
            element,
        }
    }
}
