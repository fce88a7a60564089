//! Combo system: chain selection and chain damage.
//!
//! ## Key Types
//!
//! - [`ComboChain`]: the cards selected this turn
//! - [`ComboEngine`]: linking rules and the damage formula
//! - [`ComboBreakdown`] / [`ComboStep`]: per-card accounting of an attack

pub mod chain;
pub mod engine;

pub use chain::ComboChain;
pub use engine::{ComboBreakdown, ComboEngine, ComboStep};
