//! Round controller integration tests.
//!
//! These tests drive full rounds through the public API and check the
//! accounting rules, the rolling guard, reset behavior and failure handling.

use dice_battle::controller::{NoPacer, RoundController};
use dice_battle::core::{
    DieFace, GameState, Phase, Player, PlayerScores, RoundConfig, ScriptedDice,
};
use dice_battle::error::{ConfigError, DiceError, PresentError, RoundError};
use dice_battle::present::{
    DisplayLabel, NullPresenter, Presenter, RecordingPresenter, Scoreboard, Shown,
};
use dice_battle::rules::{Outcome, RoundResult};
use dice_battle::AnimationFrame;
use proptest::prelude::*;

fn scripted(values: &[u8]) -> RoundController<ScriptedDice> {
    let config = RoundConfig::default().with_seed(7);
    RoundController::with_dice(config, ScriptedDice::new(values.to_vec())).unwrap()
}

fn state(p1: u32, p2: u32, rounds: u32, draws: u32) -> GameState {
    GameState {
        scores: PlayerScores::new(p1, p2),
        total_rounds: rounds,
        total_draws: draws,
        phase: Phase::Idle,
    }
}

/// Presenter whose displays can be switched off.
///
/// `fail_frames` covers the rolling notice as well as the frames.
#[derive(Default)]
struct FlakyPresenter {
    fail_results: bool,
    fail_frames: bool,
    results: usize,
}

impl Presenter for FlakyPresenter {
    fn show_rolling(&mut self) -> Result<(), PresentError> {
        if self.fail_frames {
            return Err(PresentError::Render("rolling notice dropped".to_string()));
        }
        Ok(())
    }

    fn show_frame(&mut self, _frame: &AnimationFrame) -> Result<(), PresentError> {
        if self.fail_frames {
            return Err(PresentError::Render("frame dropped".to_string()));
        }
        Ok(())
    }

    fn show_result(
        &mut self,
        _result: &RoundResult,
        _board: &Scoreboard,
    ) -> Result<(), PresentError> {
        if self.fail_results {
            return Err(PresentError::Render("surface gone".to_string()));
        }
        self.results += 1;
        Ok(())
    }

    fn show_reset(&mut self, _board: &Scoreboard) -> Result<(), PresentError> {
        Ok(())
    }
}

// =============================================================================
// Scenario
// =============================================================================

/// (4,2) then (3,3) then reset.
#[test]
fn test_win_draw_reset_scenario() {
    let mut game = scripted(&[4, 2, 3, 3]);
    let mut screen = RecordingPresenter::new();
    assert_eq!(*game.state(), state(0, 0, 0, 0));

    let first = game.start_round(&mut screen, &mut NoPacer).unwrap().unwrap();
    assert_eq!(first.outcome, Outcome::Win(Player::One));
    assert_eq!(*game.state(), state(1, 0, 1, 0));

    let second = game.start_round(&mut screen, &mut NoPacer).unwrap().unwrap();
    assert_eq!(second.outcome, Outcome::Draw);
    assert_eq!(*game.state(), state(1, 0, 2, 1));

    game.reset_game(&mut screen).unwrap();
    assert_eq!(*game.state(), GameState::default());

    let board = screen.last_board().unwrap();
    assert_eq!(board.headline, "Dice Battle");
    assert_eq!(board.label, DisplayLabel::Title);
    assert_eq!(board.total_rounds, 0);
    assert_eq!(board.face(Player::One), DieFace::MAX);
}

/// The presenter sees the rolling notice, then frames, then exactly one
/// result per round.
#[test]
fn test_presentation_order() {
    let mut game = scripted(&[1, 5]);
    let mut screen = RecordingPresenter::new();

    game.start_round(&mut screen, &mut NoPacer).unwrap();

    let shown = screen.shown();
    assert_eq!(shown.len(), 10);
    assert_eq!(shown[0], Shown::Rolling);
    assert!(shown[1..9].iter().all(|s| matches!(s, Shown::Frame(_))));
    match &shown[9] {
        Shown::Result(result, board) => {
            assert_eq!(result.outcome, Outcome::Win(Player::Two));
            assert_eq!(board.player2_score, 1);
            assert_eq!(board.label, DisplayLabel::Winner(Player::Two));
        }
        other => panic!("expected result, got {:?}", other),
    }
}

/// Animation frames never consume the final dice.
#[test]
fn test_animation_does_not_touch_dice() {
    let mut game = scripted(&[6, 6]);
    let mut ticket = game.begin_round().unwrap();

    let frames: Vec<_> = ticket.frames().collect();
    assert_eq!(frames.len(), 8);
    assert_eq!(game.dice().remaining(), 2);
    let rolling = GameState {
        phase: Phase::Rolling,
        ..GameState::default()
    };
    assert_eq!(*game.state(), rolling);

    let result = game.complete_round(ticket, &mut NullPresenter).unwrap();
    assert_eq!(result.outcome, Outcome::Draw);
}

/// A round completes even if the caller never plays its animation.
#[test]
fn test_complete_without_playing_frames() {
    let mut game = scripted(&[2, 3]);
    let ticket = game.begin_round().unwrap();

    let result = game.complete_round(ticket, &mut NullPresenter).unwrap();

    assert_eq!(result.outcome, Outcome::Win(Player::Two));
    assert_eq!(game.state().total_rounds, 1);
}

// =============================================================================
// Rolling guard
// =============================================================================

/// Starting while rolling changes nothing.
#[test]
fn test_start_while_rolling_is_noop() {
    let mut game = scripted(&[5, 4, 1, 1]);
    let ticket = game.begin_round().unwrap();
    let before = *game.state();
    let mut screen = RecordingPresenter::new();

    for _ in 0..5 {
        assert_eq!(game.start_round(&mut screen, &mut NoPacer), Ok(None));
        assert!(game.begin_round().is_none());
    }

    assert_eq!(*game.state(), before);
    assert!(screen.shown().is_empty());
    assert_eq!(game.dice().remaining(), 4);

    game.complete_round(ticket, &mut screen).unwrap();
    assert_eq!(game.state().score(Player::One), 1);
}

/// An abandoned round frees the controller without counting anything.
#[test]
fn test_abandoned_round_unblocks_start() {
    let mut game = scripted(&[2, 5]);
    let mut screen = RecordingPresenter::new();
    let ticket = game.begin_round().unwrap();
    assert_eq!(game.start_round(&mut screen, &mut NoPacer), Ok(None));

    game.abandon_round(ticket).unwrap();

    assert_eq!(*game.state(), GameState::default());
    let result = game.start_round(&mut screen, &mut NoPacer).unwrap().unwrap();
    assert_eq!(result.outcome, Outcome::Win(Player::Two));
    assert_eq!(*game.state(), state(0, 1, 1, 0));
    assert_eq!(screen.results().count(), 1);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_from_idle_and_rolling() {
    let mut game = scripted(&[3, 2, 1, 2]);
    game.start_round(&mut NullPresenter, &mut NoPacer).unwrap();

    game.reset_game(&mut NullPresenter).unwrap();
    assert_eq!(*game.state(), GameState::default());

    let ticket = game.begin_round().unwrap();
    game.reset_game(&mut NullPresenter).unwrap();
    assert_eq!(*game.state(), GameState::default());
    assert!(!game.is_rolling());

    let stale = game.complete_round(ticket, &mut NullPresenter);
    assert_eq!(stale, Err(RoundError::Cancelled));
    assert_eq!(*game.state(), GameState::default());
}

// =============================================================================
// Failure handling
// =============================================================================

#[test]
fn test_unusable_timing_is_rejected() {
    let config = RoundConfig {
        roll_duration_ms: 800,
        roll_interval_ms: 0,
        seed: Some(1),
    };
    assert_eq!(RoundController::new(config).err(), Some(ConfigError::ZeroInterval));

    let config = RoundConfig {
        roll_duration_ms: 50,
        roll_interval_ms: 100,
        seed: None,
    };
    let err = RoundController::with_dice(config, ScriptedDice::new([1, 2])).err();
    assert_eq!(
        err,
        Some(ConfigError::DurationShorterThanInterval {
            duration_ms: 50,
            interval_ms: 100,
        })
    );
}

#[test]
fn test_out_of_range_dice_fail_closed() {
    let mut game = scripted(&[2, 1, 0, 3]);
    game.start_round(&mut NullPresenter, &mut NoPacer).unwrap();
    let before = *game.state();

    let err = game.start_round(&mut NullPresenter, &mut NoPacer).unwrap_err();

    assert_eq!(err, RoundError::Dice(DiceError::OutOfRange(0)));
    assert_eq!(*game.state(), before);
    assert!(!game.is_rolling());
}

#[test]
fn test_exhausted_dice_fail_closed() {
    let mut game = scripted(&[]);

    let err = game.start_round(&mut NullPresenter, &mut NoPacer).unwrap_err();

    assert!(matches!(err, RoundError::Dice(DiceError::Unavailable(_))));
    assert_eq!(*game.state(), GameState::default());

    game.dice_mut().extend([6, 1]);
    let result = game.start_round(&mut NullPresenter, &mut NoPacer).unwrap().unwrap();
    assert_eq!(result.outcome, Outcome::Win(Player::One));
}

#[test]
fn test_presenter_failure_does_not_count_round() {
    let mut game = scripted(&[6, 2, 1, 4]);
    let mut screen = FlakyPresenter {
        fail_results: true,
        ..FlakyPresenter::default()
    };

    let err = game.start_round(&mut screen, &mut NoPacer).unwrap_err();
    assert!(matches!(err, RoundError::Present(_)));
    assert_eq!(*game.state(), GameState::default());
    assert!(!game.is_rolling());

    screen.fail_results = false;
    let result = game.start_round(&mut screen, &mut NoPacer).unwrap().unwrap();
    assert_eq!(result.outcome, Outcome::Win(Player::Two));
    assert_eq!(*game.state(), state(0, 1, 1, 0));
    assert_eq!(screen.results, 1);
}

#[test]
fn test_frame_failures_are_cosmetic() {
    let mut game = scripted(&[3, 3]);
    let mut screen = FlakyPresenter {
        fail_frames: true,
        ..FlakyPresenter::default()
    };

    let result = game.start_round(&mut screen, &mut NoPacer).unwrap();

    assert_eq!(result.map(|r| r.outcome), Some(Outcome::Draw));
    assert_eq!(*game.state(), state(0, 0, 1, 1));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_matches_faces(a in 1u8..=6, b in 1u8..=6) {
        let result = RoundResult::new(DieFace::new(a).unwrap(), DieFace::new(b).unwrap());
        prop_assert_eq!(result.outcome == Outcome::Win(Player::One), a > b);
        prop_assert_eq!(result.outcome == Outcome::Win(Player::Two), a < b);
        prop_assert_eq!(result.outcome == Outcome::Draw, a == b);
    }

    #[test]
    fn prop_each_round_counts_once(
        rolls in prop::collection::vec((1u8..=6, 1u8..=6), 0..40)
    ) {
        let values: Vec<u8> = rolls.iter().flat_map(|&(a, b)| [a, b]).collect();
        let config = RoundConfig::default().without_animation().with_seed(3);
        let mut game = RoundController::with_dice(config, ScriptedDice::new(values)).unwrap();

        for &(a, b) in &rolls {
            let before = *game.state();
            let result = game.start_round(&mut NullPresenter, &mut NoPacer).unwrap().unwrap();
            let after = *game.state();

            prop_assert_eq!(after.total_rounds, before.total_rounds + 1);
            prop_assert_eq!(after.total_draws - before.total_draws, u32::from(a == b));
            let p1_gain = after.score(Player::One) - before.score(Player::One);
            let p2_gain = after.score(Player::Two) - before.score(Player::Two);
            prop_assert_eq!(p1_gain, u32::from(a > b));
            prop_assert_eq!(p2_gain, u32::from(a < b));
            prop_assert_eq!(result.player1.value(), a);
            prop_assert!(after.is_consistent());
        }

        game.reset_game(&mut NullPresenter).unwrap();
        prop_assert_eq!(*game.state(), GameState::default());
        prop_assert!(game.state().is_consistent());
    }

    #[test]
    fn prop_seeded_games_are_reproducible(seed in any::<u64>()) {
        let config = RoundConfig::default().with_seed(seed);
        let mut a = RoundController::new(config.clone()).unwrap();
        let mut b = RoundController::new(config).unwrap();

        for _ in 0..5 {
            let mut screen_a = RecordingPresenter::new();
            let mut screen_b = RecordingPresenter::new();
            a.start_round(&mut screen_a, &mut NoPacer).unwrap();
            b.start_round(&mut screen_b, &mut NoPacer).unwrap();
            prop_assert_eq!(screen_a.shown(), screen_b.shown());
        }
    }
}
