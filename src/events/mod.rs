//! Battle notifications and the observers that receive them.

pub mod event;
pub mod observer;

pub use event::{BattleEvent, Target};
pub use observer::{BattleObserver, ObserverList};
