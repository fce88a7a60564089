//! Chain validation and damage computation.
//!
//! ## Linking
//!
//! A card may extend a chain when it shares its number or its element with
//! the chain's last card. The first card is always accepted.
//!
//! ## Damage
//!
//! Each card contributes `number * damage_per_number` base damage. Walking
//! the chain, two run counters track how many cards in a row have shared
//! the previous card's number and element. From the second card on, a step
//! where either run has reached `run_threshold` adds `bonus_per_step` to a
//! multiplier that starts at `1.0` and never resets:
//!
//! ```text
//! numbers   4    4    4    4
//! num run   1    2    3    4
//! bonus     -    -   +0.5 +0.5    multiplier 2.0
//! ```
//!
//! Final damage is `round(base_total * multiplier)`, half away from zero.

use serde::{Deserialize, Serialize};

use super::chain::ComboChain;
use crate::cards::CardInstance;
use crate::core::config::ComboRules;
use crate::core::error::Rejection;

/// One card's contribution to a chain attack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComboStep {
    pub card: CardInstance,

    /// This card's base damage.
    pub base: u32,

    /// Base damage of the chain up to and including this card.
    pub running_base: u32,

    /// Multiplier after this card.
    pub multiplier: f64,

    /// Whether this card added a bonus.
    pub triggered: bool,
}

/// Full accounting of a chain attack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComboBreakdown {
    pub steps: Vec<ComboStep>,
    pub base_total: u32,
    pub multiplier: f64,

    /// Number of steps that added a bonus.
    pub tier: u32,

    /// `round(base_total * multiplier)`.
    pub damage: u32,
}

/// Stateless combo rules.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComboEngine {
    rules: ComboRules,
}

impl ComboEngine {
    #[must_use]
    pub fn new(rules: ComboRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &ComboRules {
        &self.rules
    }

    /// Whether `candidate` may be appended to `chain`.
    #[must_use]
    pub fn can_extend(&self, candidate: &CardInstance, chain: &ComboChain) -> bool {
        if chain.contains(candidate.instance_id) {
            return false;
        }
        chain
            .last()
            .map_or(true, |last| last.face.links_to(&candidate.face))
    }

    /// Append `candidate` to `chain` if it links to the last card.
    ///
    /// On rejection the chain is unchanged.
    pub fn try_select(&self, candidate: CardInstance, chain: &mut ComboChain) -> Result<(), Rejection> {
        if chain.contains(candidate.instance_id) {
            return Err(Rejection::AlreadySelected(candidate.instance_id));
        }
        if !self.can_extend(&candidate, chain) {
            return Err(Rejection::ChainMismatch);
        }
        chain.push(candidate);
        Ok(())
    }

    /// Remove the card at `index` and every card after it.
    ///
    /// Returns the number of cards removed; an out-of-range index removes
    /// nothing.
    pub fn deselect(&self, chain: &mut ComboChain, index: usize) -> usize {
        let removed = chain.len().saturating_sub(index);
        chain.truncate(index);
        removed
    }

    /// Damage the chain would deal, or `None` for an empty chain.
    #[must_use]
    pub fn compute_damage(&self, chain: &ComboChain) -> Option<u32> {
        self.breakdown(chain).map(|b| b.damage)
    }

    /// Step-by-step damage accounting, or `None` for an empty chain.
    #[must_use]
    pub fn breakdown(&self, chain: &ComboChain) -> Option<ComboBreakdown> {
        if chain.is_empty() {
            return None;
        }

        let mut steps = Vec::with_capacity(chain.len());
        let mut running_base = 0u32;
        let mut multiplier = 1.0f64;
        let mut tier = 0u32;
        let mut number_run = 1u32;
        let mut element_run = 1u32;
        let mut previous: Option<&CardInstance> = None;

        for card in chain {
            let base = u32::from(card.number()).saturating_mul(self.rules.damage_per_number);
            running_base = running_base.saturating_add(base);

            let mut triggered = false;
            if let Some(prev) = previous {
                number_run = if card.number() == prev.number() { number_run + 1 } else { 1 };
                element_run = if card.element() == prev.element() { element_run + 1 } else { 1 };

                if number_run >= self.rules.run_threshold || element_run >= self.rules.run_threshold {
                    multiplier += self.rules.bonus_per_step;
                    tier += 1;
                    triggered = true;
                }
            }

            steps.push(ComboStep {
                card: *card,
                base,
                running_base,
                multiplier,
                triggered,
            });
            previous = Some(card);
        }

        let damage = (f64::from(running_base) * multiplier).round() as u32;

        Some(ComboBreakdown {
            steps,
            base_total: running_base,
            multiplier,
            tier,
            damage,
        })
    }
}
