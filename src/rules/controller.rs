//! The turn state machine.
//!
//! ## Lifecycle
//!
//! - [`TurnController::start`] runs Init: resolves the enemy and the master
//!   deck, shuffles, draws the opening hand and rests in `PlayerTurn`.
//! - In `PlayerTurn`, `select_card`/`deselect_card` edit the chain and
//!   `execute_attack` resolves it. The controller then rests in `EnemyTurn`,
//!   or in `GameOver(Win)` if the enemy fell.
//! - `advance` commits the enemy's counter-attack and either ends the battle
//!   or starts the next player turn with a refill.
//!
//! Pacing belongs to the caller: the enemy attack only happens when
//! `advance` is called.
//!
//! ## Usage
//!
//! ```
//! use combo_battle::cards::{CardDefinition, CardId, CardRegistry, Element};
//! use combo_battle::core::BattleConfig;
//! use combo_battle::enemies::EnemyRegistry;
//! use combo_battle::rules::{Phase, TurnController};
//!
//! let mut cards = CardRegistry::new();
//! cards.register(CardDefinition::new(CardId::new(1), "Spark", 4, Element::Fire)).unwrap();
//! let master = vec![CardId::new(1); 20];
//!
//! let mut battle = TurnController::start(
//!     BattleConfig::new(42),
//!     &cards,
//!     &EnemyRegistry::fixed(),
//!     &master,
//! )
//! .unwrap();
//!
//! let hand: Vec<_> = battle.state().player.hand.iter().map(|c| c.instance_id).collect();
//! for id in &hand[..3] {
//!     battle.select_card(*id).unwrap();
//! }
//! let attack = battle.execute_attack().unwrap();
//!
//! assert_eq!(attack.damage, 180);
//! assert_eq!(battle.state().enemy.current_hp(), 120);
//! assert_eq!(battle.phase(), Phase::EnemyTurn);
//! ```

use im::Vector;

use super::phase::{BattleResult, Phase};
use crate::cards::{CardCatalog, CardDefinition, CardId, CardInstance};
use crate::combo::{ComboBreakdown, ComboEngine};
use crate::core::action::{BattleInput, InputRecord};
use crate::core::config::BattleConfig;
use crate::core::entity::InstanceId;
use crate::core::error::{BattleError, Rejection};
use crate::core::rng::{BattleRng, BattleRngState};
use crate::core::state::{BattleState, EnemyState, PlayerState};
use crate::enemies::EnemyCatalog;
use crate::events::{BattleEvent, BattleObserver, ObserverList, Target};
use crate::zones::DeckService;

/// One battle, from Init to GameOver.
#[derive(Debug)]
pub struct TurnController {
    config: BattleConfig,
    state: BattleState,
    phase: Phase,
    deck: DeckService,
    combo: ComboEngine,
    events: Vector<BattleEvent>,
    history: Vector<InputRecord>,
    observers: ObserverList,
    turn_sequence: u32,
}

impl TurnController {
    /// Run Init and return a controller resting in `PlayerTurn`.
    ///
    /// `master` is copied; the caller's deck is never touched. Fails if the
    /// config is inconsistent, if `master` is empty, or if the enemy or any
    /// master-deck card is missing from its catalog.
    pub fn start(
        config: BattleConfig,
        cards: &dyn CardCatalog,
        enemies: &dyn EnemyCatalog,
        master: &[CardId],
    ) -> Result<Self, BattleError> {
        config.validate()?;
        if master.is_empty() {
            return Err(BattleError::EmptyDeck);
        }

        let enemy = enemies
            .get_fixed_by_id(config.enemy_id)
            .cloned()
            .ok_or(BattleError::UnknownEnemy(config.enemy_id))?;

        let faces = master
            .iter()
            .map(|&id| {
                cards
                    .get_by_id(id)
                    .map(CardDefinition::face)
                    .ok_or(BattleError::UnknownCard(id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            "Battle started: {} ({} HP) vs player ({} HP), {} card deck",
            enemy.name,
            enemy.max_hp,
            config.player_max_hp,
            faces.len()
        );

        let mut player = PlayerState::new(config.player_max_hp);
        let mut deck = DeckService::new(BattleRng::new(config.seed), config.hand_limit);
        deck.load_deck(&mut player, &faces);

        let mut controller = Self {
            combo: ComboEngine::new(config.combo),
            state: BattleState::new(player, EnemyState::new(enemy)),
            phase: Phase::Init,
            deck,
            events: Vector::new(),
            history: Vector::new(),
            observers: ObserverList::new(),
            turn_sequence: 0,
            config,
        };

        controller.phase = Phase::PlayerTurn;
        controller.emit(BattleEvent::TurnStarted { turn: 1 });
        controller.draw(controller.config.opening_hand);

        Ok(controller)
    }

    // === Inputs ===

    /// Apply any input event.
    pub fn apply(&mut self, input: BattleInput) -> Result<(), Rejection> {
        match input {
            BattleInput::SelectCard(id) => self.select_card(id),
            BattleInput::DeselectCard(index) => self.deselect_card(index).map(|_| ()),
            BattleInput::ExecuteAttack => self.execute_attack().map(|_| ()),
        }
    }

    /// Append a hand card to the chain.
    pub fn select_card(&mut self, id: InstanceId) -> Result<(), Rejection> {
        self.ensure_phase(Phase::PlayerTurn).map_err(rejected)?;

        let card = self
            .state
            .player
            .hand_card(id)
            .copied()
            .ok_or(Rejection::NotInHand(id))
            .map_err(rejected)?;

        self.combo
            .try_select(card, &mut self.state.chain)
            .map_err(rejected)?;

        self.record(BattleInput::SelectCard(id));
        Ok(())
    }

    /// Truncate the chain at `index`. Returns how many cards were removed;
    /// an out-of-range index removes none.
    pub fn deselect_card(&mut self, index: usize) -> Result<usize, Rejection> {
        self.ensure_phase(Phase::PlayerTurn).map_err(rejected)?;

        let removed = self.combo.deselect(&mut self.state.chain, index);
        self.record(BattleInput::DeselectCard(index));
        Ok(removed)
    }

    /// Attack with the current chain.
    ///
    /// Damage is applied and the chain discarded before this returns. The
    /// controller then rests in `EnemyTurn`, or `GameOver(Win)`.
    pub fn execute_attack(&mut self) -> Result<ComboBreakdown, Rejection> {
        self.ensure_phase(Phase::PlayerTurn).map_err(rejected)?;

        let attack = self
            .combo
            .breakdown(&self.state.chain)
            .ok_or(Rejection::EmptyChain)
            .map_err(rejected)?;

        self.record(BattleInput::ExecuteAttack);
        self.phase = Phase::ResolvingAttack;

        self.state.enemy.take_damage(attack.damage);
        tracing::debug!(
            "Chain of {} dealt {} damage (x{}), enemy at {} HP",
            attack.steps.len(),
            attack.damage,
            attack.multiplier,
            self.state.enemy.current_hp()
        );
        self.emit(BattleEvent::DamageDealt {
            target: Target::Enemy,
            amount: attack.damage,
            combo_tier: attack.tier,
        });

        for id in self.state.chain.instance_ids() {
            if let Some(card) = self.deck.discard(&mut self.state.player, id) {
                self.emit(BattleEvent::CardDiscarded { card });
            }
        }
        self.state.chain.clear();

        if self.state.enemy.is_defeated() {
            self.finish(BattleResult::Win);
        } else {
            self.phase = Phase::EnemyTurn;
        }

        Ok(attack)
    }

    /// Commit the enemy's attack and move on.
    ///
    /// Only valid in `EnemyTurn`. Ends the battle if the player falls,
    /// otherwise starts the next player turn.
    pub fn advance(&mut self) -> Result<(), Rejection> {
        self.ensure_phase(Phase::EnemyTurn).map_err(rejected)?;

        let amount = self.state.enemy.attack();
        self.state.player.take_damage(amount);
        tracing::debug!(
            "{} attacks for {}, player at {} HP",
            self.state.enemy.definition.name,
            amount,
            self.state.player.current_hp()
        );
        self.emit(BattleEvent::DamageDealt {
            target: Target::Player,
            amount,
            combo_tier: 0,
        });

        if self.state.player.is_defeated() {
            self.finish(BattleResult::Lose);
        } else {
            self.state.turn += 1;
            self.begin_player_turn();
        }

        Ok(())
    }

    /// Register an observer for events emitted from now on.
    pub fn add_observer(&mut self, observer: impl BattleObserver + 'static) {
        self.observers.add(Box::new(observer));
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn result(&self) -> Option<BattleResult> {
        self.phase.result()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Every event emitted so far, Init included.
    #[must_use]
    pub fn events(&self) -> &Vector<BattleEvent> {
        &self.events
    }

    /// Every accepted input, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<InputRecord> {
        &self.history
    }

    #[must_use]
    pub fn rng_state(&self) -> BattleRngState {
        self.deck.rng_state()
    }

    /// Hand cards that could extend the chain right now.
    ///
    /// Empty outside `PlayerTurn`.
    #[must_use]
    pub fn selectable_cards(&self) -> Vec<CardInstance> {
        if self.phase != Phase::PlayerTurn {
            return Vec::new();
        }
        self.state
            .player
            .hand
            .iter()
            .filter(|card| self.combo.can_extend(card, &self.state.chain))
            .copied()
            .collect()
    }

    /// What the current chain would deal if executed now.
    #[must_use]
    pub fn preview_attack(&self) -> Option<ComboBreakdown> {
        self.combo.breakdown(&self.state.chain)
    }

    // === Internals ===

    fn ensure_phase(&self, expected: Phase) -> Result<(), Rejection> {
        match self.phase {
            Phase::GameOver(_) => Err(Rejection::BattleOver),
            phase if phase == expected => Ok(()),
            phase => Err(Rejection::WrongPhase(phase)),
        }
    }

    fn begin_player_turn(&mut self) {
        self.phase = Phase::PlayerTurn;
        self.turn_sequence = 0;
        self.state.chain.clear();
        self.emit(BattleEvent::TurnStarted {
            turn: self.state.turn,
        });

        let missing = self
            .config
            .refill_target
            .saturating_sub(self.state.player.hand.len());
        self.draw(missing);

        if self.state.player.hand.len() < self.config.hand_limit {
            self.draw(self.config.bonus_draw);
        }

        tracing::debug!(
            "Turn {} started with {} cards in hand, {} in deck",
            self.state.turn,
            self.state.player.hand.len(),
            self.state.player.deck.len()
        );
    }

    fn draw(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let report = self.deck.draw(&mut self.state.player, n);
        if report.reshuffled() {
            self.emit(BattleEvent::DeckReshuffled {
                cards: report.reclaimed,
            });
        }
        if !report.drawn.is_empty() {
            self.emit(BattleEvent::CardsDrawn {
                count: report.drawn.len(),
            });
        }
    }

    fn finish(&mut self, result: BattleResult) {
        self.phase = Phase::GameOver(result);
        tracing::info!("Battle ended on turn {}: {:?}", self.state.turn, result);
        self.emit(BattleEvent::BattleEnded { result });
    }

    fn record(&mut self, input: BattleInput) {
        self.history
            .push_back(InputRecord::new(input, self.state.turn, self.turn_sequence));
        self.turn_sequence += 1;
    }

    fn emit(&mut self, event: BattleEvent) {
        tracing::trace!("Event: {}", event.kind());
        self.observers.notify_all(&event);
        self.events.push_back(event);
    }
}

fn rejected(rejection: Rejection) -> Rejection {
    tracing::debug!("Input rejected: {}", rejection);
    rejection
}
