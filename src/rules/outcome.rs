//! Round outcomes.
//!
//! The higher die wins the round; equal dice are a draw.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::{DieFace, Player};

/// Result classification of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One player rolled strictly higher.
    Win(Player),
    /// Both dice show the same face.
    Draw,
}

impl Outcome {
    /// Classify a pair of faces.
    #[must_use]
    pub fn from_faces(player1: DieFace, player2: DieFace) -> Self {
        match player1.cmp(&player2) {
            Ordering::Greater => Outcome::Win(Player::One),
            Ordering::Less => Outcome::Win(Player::Two),
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Draw => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }

    #[must_use]
    pub fn is_draw(self) -> bool {
        self == Outcome::Draw
    }

    /// Announcement text for this outcome.
    #[must_use]
    pub fn headline(self) -> String {
        match self {
            Outcome::Win(player) => format!("{} Wins!", player),
            Outcome::Draw => "It's a Draw!".to_string(),
        }
    }
}

/// Both final faces of a round and their outcome.
///
/// Built once per round and consumed by the controller; the outcome always
/// agrees with the faces because the only constructor derives it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundResult {
    pub player1: DieFace,
    pub player2: DieFace,
    pub outcome: Outcome,
}

impl RoundResult {
    /// Resolve a round from the two final faces.
    #[must_use]
    pub fn new(player1: DieFace, player2: DieFace) -> Self {
        Self {
            player1,
            player2,
            outcome: Outcome::from_faces(player1, player2),
        }
    }

    /// The face rolled by a player.
    #[must_use]
    pub fn face(&self, player: Player) -> DieFace {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}: {}", self.player1, self.player2, self.outcome.headline())
    }
}
