//! Battle configuration.
//!
//! A battle is configured once at start by a [`BattleConfig`]:
//! - hand sizes and draw counts for the deck lifecycle
//! - the player's HP and the enemy to fight
//! - [`ComboRules`] for chain damage
//! - the RNG seed
//!
//! The defaults reproduce the stock game. All fields are optional when
//! deserializing; missing ones fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::core::error::BattleError;
use crate::enemies::EnemyId;

/// Largest hand a battle may be configured for.
pub const MAX_HAND_SIZE: usize = 10;

/// Combo damage parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboRules {
    /// Base damage contributed per point of card number.
    pub damage_per_number: u32,

    /// Run length at which a step starts adding the bonus.
    pub run_threshold: u32,

    /// Added to the multiplier by every triggering step.
    pub bonus_per_step: f64,
}

impl Default for ComboRules {
    fn default() -> Self {
        Self {
            damage_per_number: 10,
            run_threshold: 3,
            bonus_per_step: 0.5,
        }
    }
}

/// Complete battle configuration.
///
/// ## Example
///
/// ```
/// use combo_battle::core::BattleConfig;
/// use combo_battle::enemies::EnemyId;
///
/// let config = BattleConfig::new(7)
///     .with_enemy(EnemyId::new(3))
///     .with_player_max_hp(500);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.opening_hand, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Seed for deck shuffling.
    pub seed: u64,

    /// Which enemy to fight.
    pub enemy_id: EnemyId,

    pub player_max_hp: u32,

    /// Cards drawn at battle start.
    pub opening_hand: usize,

    /// At the start of each later turn the hand is topped up to this size.
    pub refill_target: usize,

    /// Extra cards drawn after the refill, while below the hand limit.
    pub bonus_draw: usize,

    /// Maximum cards in hand.
    pub hand_limit: usize,

    pub combo: ComboRules,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            enemy_id: EnemyId::new(1),
            player_max_hp: 1000,
            opening_hand: 5,
            refill_target: 5,
            bonus_draw: 1,
            hand_limit: MAX_HAND_SIZE,
            combo: ComboRules::default(),
        }
    }
}

impl BattleConfig {
    /// Default configuration with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_enemy(mut self, enemy_id: EnemyId) -> Self {
        self.enemy_id = enemy_id;
        self
    }

    #[must_use]
    pub fn with_player_max_hp(mut self, hp: u32) -> Self {
        self.player_max_hp = hp;
        self
    }

    #[must_use]
    pub fn with_hand_sizes(mut self, opening: usize, refill: usize, limit: usize) -> Self {
        self.opening_hand = opening;
        self.refill_target = refill;
        self.hand_limit = limit;
        self
    }

    #[must_use]
    pub fn with_bonus_draw(mut self, bonus: usize) -> Self {
        self.bonus_draw = bonus;
        self
    }

    #[must_use]
    pub fn with_combo(mut self, combo: ComboRules) -> Self {
        self.combo = combo;
        self
    }

    /// Check that the values describe a playable battle.
    pub fn validate(&self) -> Result<(), BattleError> {
        let invalid = |msg: String| -> Result<(), BattleError> {
            Err(BattleError::InvalidConfig(msg))
        };

        if self.player_max_hp == 0 {
            return invalid("player_max_hp must be positive".into());
        }
        if self.hand_limit == 0 {
            return invalid("hand_limit must be positive".into());
        }
        if self.hand_limit > MAX_HAND_SIZE {
            return invalid(format!(
                "hand_limit {} exceeds the maximum of {}",
                self.hand_limit, MAX_HAND_SIZE
            ));
        }
        if self.opening_hand > self.hand_limit {
            return invalid(format!(
                "opening_hand {} exceeds hand_limit {}",
                self.opening_hand, self.hand_limit
            ));
        }
        if self.refill_target > self.hand_limit {
            return invalid(format!(
                "refill_target {} exceeds hand_limit {}",
                self.refill_target, self.hand_limit
            ));
        }
        if self.combo.run_threshold < 2 {
            return invalid("combo.run_threshold must be at least 2".into());
        }
        if !self.combo.bonus_per_step.is_finite() || self.combo.bonus_per_step < 0.0 {
            return invalid("combo.bonus_per_step must be a non-negative number".into());
        }
        Ok(())
    }
}
