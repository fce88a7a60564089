//! Card system: definitions, instances, and catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Element` / `Rarity`: Card attributes
//! - `CardDefinition`: Static card data
//! - `CardFace`: The id, number and element a battle works with
//! - `CardInstance`: A drawn copy in hand, with its own identity
//! - `CardCatalog` / `CardRegistry`: Definition lookup

pub mod attributes;
pub mod definition;
pub mod instance;
pub mod registry;

pub use attributes::{Element, Rarity};
pub use definition::{CardDefinition, CardFace, CardId};
pub use instance::CardInstance;
pub use registry::{CardCatalog, CardRegistry};
