//! Error types.
//!
//! - [`BattleError`]: a battle could not be started
//! - [`CatalogError`]: catalog data could not be loaded
//! - [`Rejection`]: an input event was refused; the battle is unchanged

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::entity::InstanceId;
use crate::enemies::EnemyId;
use crate::rules::Phase;

/// Errors surfaced while starting a battle.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BattleError {
    #[error("enemy {0} not found in catalog")]
    UnknownEnemy(EnemyId),

    #[error("master deck references {0}, which is not in the catalog")]
    UnknownCard(CardId),

    #[error("master deck is empty")]
    EmptyDeck,

    #[error("invalid battle config: {0}")]
    InvalidConfig(String),
}

/// Errors surfaced while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("card {0} already registered")]
    DuplicateCard(CardId),

    #[error("enemy {0} already registered")]
    DuplicateEnemy(EnemyId),

    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Why an input event was refused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Rejection {
    #[error("input not accepted during {0:?}")]
    WrongPhase(Phase),

    #[error("battle is over")]
    BattleOver,

    #[error("{0} is not in hand")]
    NotInHand(InstanceId),

    #[error("{0} is already in the chain")]
    AlreadySelected(InstanceId),

    #[error("card shares neither number nor element with the end of the chain")]
    ChainMismatch,

    #[error("cannot attack with an empty chain")]
    EmptyChain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BattleError::UnknownEnemy(EnemyId::new(9)).to_string(),
            "enemy Enemy(9) not found in catalog"
        );
        assert_eq!(
            BattleError::UnknownCard(CardId::new(3)).to_string(),
            "master deck references Card(3), which is not in the catalog"
        );
        assert_eq!(BattleError::EmptyDeck.to_string(), "master deck is empty");
        assert_eq!(Rejection::EmptyChain.to_string(), "cannot attack with an empty chain");
        assert_eq!(
            Rejection::NotInHand(InstanceId(4)).to_string(),
            "Instance(4) is not in hand"
        );
    }

    #[test]
    fn test_catalog_error_from_json() {
        let parse_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: CatalogError = parse_err.into();
        assert!(err.to_string().starts_with("failed to parse catalog data"));
    }
}
