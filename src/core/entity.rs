//! Card instance identification.
//!
//! Every card drawn into a hand gets a fresh `InstanceId`. Two copies of the
//! same card definition in one hand are distinct instances, so selection and
//! discard always work by identity, never by card id.
//!
//! ## Usage
//!
//! ```
//! use combo_battle::core::{InstanceId, InstanceAllocator};
//!
//! let mut alloc = InstanceAllocator::new();
//! let a = alloc.next_id();
//! let b = alloc.next_id();
//!
//! assert_ne!(a, b);
//! assert_eq!(a, InstanceId(0));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID.
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

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Monotonic allocator for instance IDs.
///
/// IDs are never reused within a battle, even after the card they named
/// has been discarded and redrawn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceAllocator {
    next: u32,
}

impl InstanceAllocator {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next instance ID.
    pub fn next_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
