//! Round sequencing.
//!
//! `RoundController` owns the `GameState` and runs each round as
//! animate -> resolve -> apply -> display.
//!
//! ## Two ways to run a round
//!
//! - `start_round`: synchronous. Shows every animation frame, waiting one
//!   cadence between frames via a `Pacer`, then resolves the round.
//! - `begin_round` / `complete_round`: split. `begin_round` hands back a
//!   `RoundTicket` carrying the lazy animation; the caller plays it at its
//!   own pace (a UI timer, an event loop) and then completes the ticket.
//!
//! While a round is rolling, further start requests are ignored.
//! `reset_game` works in any phase and cancels a rolling round: completing
//! its ticket afterwards returns `RoundError::Cancelled`.
//!
//! A ticket must be either completed or handed back with `abandon_round`.
//! Dropping it leaves the controller rolling until the next reset.
//!
//! ## Failure handling
//!
//! A failed dice draw or result presentation leaves the counters exactly as
//! they were before the round, and always returns the controller to idle.
//!
//! ```
//! use dice_battle::controller::{NoPacer, RoundController};
//! use dice_battle::core::{RoundConfig, ScriptedDice};
//! use dice_battle::present::RecordingPresenter;
//!
//! let dice = ScriptedDice::new([4, 2]);
//! let mut game = RoundController::with_dice(RoundConfig::default(), dice).unwrap();
//! let mut screen = RecordingPresenter::new();
//!
//! let result = game.start_round(&mut screen, &mut NoPacer).unwrap().unwrap();
//! assert_eq!(result.outcome.headline(), "Player 1 Wins!");
//! assert_eq!(game.state().total_rounds, 1);
//! assert_eq!(screen.frame_count(), 8);
//! ```

mod pacer;

pub use pacer::{CountingPacer, NoPacer, Pacer, ThreadPacer};

use log::{debug, error, info, warn};

use crate::animation::RollAnimation;
use crate::core::{DiceSource, DieFace, GameRng, GameState, Phase, RoundConfig};
use crate::error::{ConfigError, DiceError, PresentError, RoundError};
use crate::present::{Presenter, Scoreboard};
use crate::rules::RoundResult;

/// Handle to a round in flight.
///
/// Holds the round's animation. Not `Clone`: each round completes at most
/// once. Pass it to `complete_round` or `abandon_round`.
#[derive(Debug)]
#[must_use = "a dropped ticket leaves the controller rolling; complete or abandon it"]
pub struct RoundTicket {
    epoch: u64,
    animation: RollAnimation,
}

impl RoundTicket {
    /// Identifier of this round within its controller.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The round's animation frames.
    pub fn frames(&mut self) -> &mut RollAnimation {
        &mut self.animation
    }
}

/// Owns the game state and sequences rounds.
pub struct RoundController<D: DiceSource = GameRng> {
    config: RoundConfig,
    state: GameState,
    dice: D,
    animation_rng: GameRng,
    epoch: u64,
}

impl RoundController<GameRng> {
    /// Create a controller rolling with `GameRng`.
    ///
    /// Uses `config.seed` when set, otherwise seeds from the OS. Fails if
    /// the animation timing is unusable.
    pub fn new(config: RoundConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let animation_rng = rng.for_context("animation");

        Ok(Self {
            config,
            state: GameState::new(),
            dice: rng,
            animation_rng,
            epoch: 0,
        })
    }
}

impl<D: DiceSource> RoundController<D> {
    /// Create a controller rolling final faces with a custom dice source.
    ///
    /// Animation frames still come from a `GameRng`. Fails if the animation
    /// timing is unusable.
    pub fn with_dice(config: RoundConfig, dice: D) -> Result<Self, ConfigError> {
        config.validate()?;
        let animation_rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
        .for_context("animation");

        Ok(Self {
            config,
            state: GameState::new(),
            dice,
            animation_rng,
            epoch: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Current counters and phase.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.state.is_rolling()
    }

    /// Current counters with the default title and dice.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::idle(&self.state)
    }

    pub fn dice(&self) -> &D {
        &self.dice
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    /// Start a round without playing it.
    ///
    /// Returns `None` if a round is already rolling.
    #[must_use = "the controller stays rolling until the ticket is completed or abandoned"]
    pub fn begin_round(&mut self) -> Option<RoundTicket> {
        if self.state.is_rolling() {
            debug!("round {} still rolling, ignoring start", self.epoch);
            return None;
        }

        self.epoch += 1;
        self.state.phase = Phase::Rolling;
        debug!("round {} rolling", self.epoch);

        Some(RoundTicket {
            epoch: self.epoch,
            animation: RollAnimation::new(self.animation_rng.fork(), &self.config),
        })
    }

    /// Draw the final faces for a round, count it and present it.
    ///
    /// Any frames left in the ticket are skipped.
    pub fn complete_round<P>(
        &mut self,
        ticket: RoundTicket,
        presenter: &mut P,
    ) -> Result<RoundResult, RoundError>
    where
        P: Presenter + ?Sized,
    {
        if ticket.epoch != self.epoch || !self.state.is_rolling() {
            info!("round {} was cancelled by a reset", ticket.epoch);
            return Err(RoundError::Cancelled);
        }

        let result = match self.draw() {
            Ok((player1, player2)) => RoundResult::new(player1, player2),
            Err(e) => {
                error!("round {} aborted: {}", ticket.epoch, e);
                self.state.phase = Phase::Idle;
                return Err(e.into());
            }
        };

        let mut staged = self.state.with_result(&result);
        staged.phase = Phase::Idle;
        let board = Scoreboard::after_round(&staged, &result);

        if let Err(e) = presenter.show_result(&result, &board) {
            warn!("round {} not counted, presenter failed: {}", ticket.epoch, e);
            self.state.phase = Phase::Idle;
            return Err(e.into());
        }

        self.state = staged;
        info!(
            "round {}: {} ({} - {}, {} draws)",
            self.state.total_rounds,
            result,
            board.player1_score,
            board.player2_score,
            board.total_draws
        );
        Ok(result)
    }

    /// Give up on a round without drawing or counting anything.
    ///
    /// Returns the controller to idle. A ticket from a round that was already
    /// cancelled by a reset returns `RoundError::Cancelled` and changes
    /// nothing.
    pub fn abandon_round(&mut self, ticket: RoundTicket) -> Result<(), RoundError> {
        if ticket.epoch != self.epoch || !self.state.is_rolling() {
            debug!("round {} already cancelled", ticket.epoch);
            return Err(RoundError::Cancelled);
        }

        self.state.phase = Phase::Idle;
        info!("round {} abandoned", ticket.epoch);
        Ok(())
    }

    /// Play a full round: animation, resolution and display.
    ///
    /// Returns `Ok(None)` when ignored because a round is already rolling.
    pub fn start_round<P, W>(
        &mut self,
        presenter: &mut P,
        pacer: &mut W,
    ) -> Result<Option<RoundResult>, RoundError>
    where
        P: Presenter + ?Sized,
        W: Pacer + ?Sized,
    {
        let Some(mut ticket) = self.begin_round() else {
            return Ok(None);
        };

        if let Err(e) = presenter.show_rolling() {
            debug!("round {} rolling display failed: {}", ticket.epoch, e);
        }

        let cadence = ticket.frames().cadence();
        for frame in ticket.frames() {
            if let Err(e) = presenter.show_frame(&frame) {
                debug!("skipping frame {}: {}", frame.tick, e);
            }
            pacer.wait(cadence);
        }

        self.complete_round(ticket, presenter).map(Some)
    }

    /// Zero all counters and show the default display.
    ///
    /// Cancels a rolling round. The state is reset even if the presenter
    /// fails.
    pub fn reset_game<P>(&mut self, presenter: &mut P) -> Result<(), PresentError>
    where
        P: Presenter + ?Sized,
    {
        if self.state.is_rolling() {
            info!("reset cancels rolling round {}", self.epoch);
        }

        self.epoch += 1;
        self.state.reset();
        info!("game reset");

        presenter.show_reset(&self.scoreboard()).map_err(|e| {
            warn!("reset display failed: {}", e);
            e
        })
    }

    fn draw(&mut self) -> Result<(DieFace, DieFace), DiceError> {
        let player1 = self.dice.roll()?;
        let player2 = self.dice.roll()?;
        Ok((player1, player2))
    }
}
