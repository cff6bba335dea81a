//! Presentation surface.
//!
//! The controller never draws anything itself. It hands frames, results and
//! counters to a `Presenter`, which may be a terminal, a web page, a test
//! recorder or nothing at all.

use serde::{Deserialize, Serialize};

use crate::animation::AnimationFrame;
use crate::core::{DieFace, GameState, Player};
use crate::error::PresentError;
use crate::rules::{Outcome, RoundResult};

/// Title shown before the first round and after a reset.
pub const DEFAULT_TITLE: &str = "Dice Battle";

/// Styling class of the headline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayLabel {
    /// Neutral game title.
    Title,
    /// A player won the last round; their die is highlighted.
    Winner(Player),
    /// The last round was a draw.
    Draw,
}

impl DisplayLabel {
    /// Label announcing an outcome.
    #[must_use]
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win(player) => DisplayLabel::Winner(player),
            Outcome::Draw => DisplayLabel::Draw,
        }
    }

    /// Whether a player's die should be highlighted.
    #[must_use]
    pub fn highlights(self, player: Player) -> bool {
        self == DisplayLabel::Winner(player)
    }
}

/// Everything a render surface shows after a round or a reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub player1_score: u32,
    pub player2_score: u32,
    pub total_rounds: u32,
    pub total_draws: u32,
    /// Faces currently shown on the dice.
    pub player1_face: DieFace,
    pub player2_face: DieFace,
    pub label: DisplayLabel,
    pub headline: String,
}

impl Scoreboard {
    /// Default display: counters from `state`, title headline, both dice on six.
    #[must_use]
    pub fn idle(state: &GameState) -> Self {
        Self {
            player1_score: state.score(Player::One),
            player2_score: state.score(Player::Two),
            total_rounds: state.total_rounds,
            total_draws: state.total_draws,
            player1_face: DieFace::default(),
            player2_face: DieFace::default(),
            label: DisplayLabel::Title,
            headline: DEFAULT_TITLE.to_string(),
        }
    }

    /// Display after `result` has been counted into `state`.
    #[must_use]
    pub fn after_round(state: &GameState, result: &RoundResult) -> Self {
        Self {
            player1_face: result.player1,
            player2_face: result.player2,
            label: DisplayLabel::for_outcome(result.outcome),
            headline: result.outcome.headline(),
            ..Self::idle(state)
        }
    }

    /// Score text for a player.
    #[must_use]
    pub fn score_text(&self, player: Player) -> String {
        let score = match player {
            Player::One => self.player1_score,
            Player::Two => self.player2_score,
        };
        format!("Score: {}", score)
    }

    /// The face shown on a player's die.
    #[must_use]
    pub fn face(&self, player: Player) -> DieFace {
        match player {
            Player::One => self.player1_face,
            Player::Two => self.player2_face,
        }
    }
}

/// A render surface for the game.
///
/// Frame rendering is cosmetic: the controller logs and skips frame errors.
/// A failing `show_result` aborts the round without counting it.
pub trait Presenter {
    /// A round has started rolling. Called once, before the first frame,
    /// so surfaces can disable their roll controls.
    fn show_rolling(&mut self) -> Result<(), PresentError> {
        Ok(())
    }

    /// Show one intermediate animation frame.
    fn show_frame(&mut self, frame: &AnimationFrame) -> Result<(), PresentError>;

    /// Show the final faces, outcome and updated counters of a round.
    fn show_result(
        &mut self,
        result: &RoundResult,
        board: &Scoreboard,
    ) -> Result<(), PresentError>;

    /// Restore the default display after a reset.
    fn show_reset(&mut self, board: &Scoreboard) -> Result<(), PresentError>;
}

/// Presenter that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn show_frame(&mut self, _frame: &AnimationFrame) -> Result<(), PresentError> {
        Ok(())
    }

    fn show_result(
        &mut self,
        _result: &RoundResult,
        _board: &Scoreboard,
    ) -> Result<(), PresentError> {
        Ok(())
    }

    fn show_reset(&mut self, _board: &Scoreboard) -> Result<(), PresentError> {
        Ok(())
    }
}

/// Something a `RecordingPresenter` was asked to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shown {
    Rolling,
    Frame(AnimationFrame),
    Result(RoundResult, Scoreboard),
    Reset(Scoreboard),
}

/// Presenter that keeps a log of everything shown.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    shown: Vec<Shown>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything shown so far, oldest first.
    #[must_use]
    pub fn shown(&self) -> &[Shown] {
        &self.shown
    }

    /// Number of animation frames shown.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.shown.iter().filter(|s| matches!(s, Shown::Frame(_))).count()
    }

    /// Results shown, oldest first.
    pub fn results(&self) -> impl Iterator<Item = &RoundResult> {
        self.shown.iter().filter_map(|s| match s {
            Shown::Result(result, _) => Some(result),
            _ => None,
        })
    }

    /// The most recent scoreboard shown by a result or reset.
    #[must_use]
    pub fn last_board(&self) -> Option<&Scoreboard> {
        self.shown.iter().rev().find_map(|s| match s {
            Shown::Result(_, board) | Shown::Reset(board) => Some(board),
            Shown::Rolling | Shown::Frame(_) => None,
        })
    }

    pub fn clear(&mut self) {
        self.shown.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn show_rolling(&mut self) -> Result<(), PresentError> {
        self.shown.push(Shown::Rolling);
        Ok(())
    }

    fn show_frame(&mut self, frame: &AnimationFrame) -> Result<(), PresentError> {
        self.shown.push(Shown::Frame(*frame));
        Ok(())
    }

    fn show_result(
        &mut self,
        result: &RoundResult,
        board: &Scoreboard,
    ) -> Result<(), PresentError> {
        self.shown.push(Shown::Result(*result, board.clone()));
        Ok(())
    }

    fn show_reset(&mut self, board: &Scoreboard) -> Result<(), PresentError> {
        self.shown.push(Shown::Reset(board.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(v: u8) -> DieFace {
        DieFace::new(v).unwrap()
    }

    #[test]
    fn test_idle_board() {
        let board = Scoreboard::idle(&GameState::new());

        assert_eq!(board.headline, "Dice Battle");
        assert_eq!(board.label, DisplayLabel::Title);
        assert_eq!(board.face(Player::One).value(), 6);
        assert_eq!(board.face(Player::Two).value(), 6);
        assert_eq!(board.score_text(Player::One), "Score: 0");
    }

    #[test]
    fn test_board_after_round() {
        let result = RoundResult::new(face(2), face(5));
        let state = GameState::new().with_result(&result);
        let board = Scoreboard::after_round(&state, &result);

        assert_eq!(board.headline, "Player 2 Wins!");
        assert_eq!(board.label, DisplayLabel::Winner(Player::Two));
        assert!(board.label.highlights(Player::Two));
        assert!(!board.label.highlights(Player::One));
        assert_eq!(board.player2_score, 1);
        assert_eq!(board.total_rounds, 1);
        assert_eq!(board.face(Player::One), face(2));
    }

    #[test]
    fn test_draw_label_highlights_nobody() {
        let label = DisplayLabel::for_outcome(Outcome::Draw);
        assert_eq!(label, DisplayLabel::Draw);
        assert!(Player::all().all(|p| !label.highlights(p)));
    }

    #[test]
    fn test_recording_presenter() {
        let mut presenter = RecordingPresenter::new();
        let result = RoundResult::new(face(3), face(3));
        let state = GameState::new().with_result(&result);

        presenter.show_rolling().unwrap();
        presenter.show_result(&result, &Scoreboard::after_round(&state, &result)).unwrap();
        presenter.show_reset(&Scoreboard::idle(&GameState::new())).unwrap();

        assert_eq!(presenter.shown().len(), 3);
        assert_eq!(presenter.shown()[0], Shown::Rolling);
        assert_eq!(presenter.results().count(), 1);
        assert_eq!(presenter.last_board().map(|b| b.total_rounds), Some(0));

        presenter.clear();
        assert!(presenter.shown().is_empty());
    }
}
