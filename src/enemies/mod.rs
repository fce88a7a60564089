//! Enemy system: definitions and the fixed-roster catalog.

pub mod definition;
pub mod registry;

pub use definition::{EnemyDefinition, EnemyId};
pub use registry::{EnemyCatalog, EnemyRegistry};
