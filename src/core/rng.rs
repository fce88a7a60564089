//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Serializable**: O(1) state capture and restore
//! - **Explicit Fisher–Yates**: the shuffle walks the slice from the back,
//!   swapping each element with a uniformly chosen one at or before it
//!
//! ```
//! use combo_battle::core::BattleRng;
//!
//! let mut a = BattleRng::new(42);
//! let mut b = BattleRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG owned by the deck service.
///
/// Uses ChaCha8 for speed while keeping a portable, reproducible stream.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniformly random index in `0..=max`.
    pub fn gen_index_inclusive(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Shuffle a slice in place.
    ///
    /// For `i` from `len - 1` down to `1`, swaps element `i` with a uniformly
    /// random element in `[0, i]`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index_inclusive(i);
            slice.swap(i, j);
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> BattleRngState {
        BattleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &BattleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how many
/// shuffles have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = BattleRng::new(42);
        let mut rng2 = BattleRng::new(42);

        for i in 1..100 {
            assert_eq!(rng1.gen_index_inclusive(i), rng2.gen_index_inclusive(i));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = BattleRng::new(1);
        let mut rng2 = BattleRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index_inclusive(999)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index_inclusive(999)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_index_stays_in_range() {
        let mut rng = BattleRng::new(7);
        for max in 0..50 {
            assert!(rng.gen_index_inclusive(max) <= max);
        }
    }

    #[test]
    fn test_shuffle() {
        let mut rng = BattleRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = BattleRng::new(42);

        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = BattleRng::new(42);

        for _ in 0..100 {
            rng.gen_index_inclusive(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_index_inclusive(1000)).collect();

        let mut restored = BattleRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_index_inclusive(1000)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = BattleRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BattleRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
