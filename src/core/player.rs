//! Player identification and per-player score storage.
//!
//! ## Player
//!
//! The game is always played by exactly two players. `Player::One` rolls the
//! left die, `Player::Two` the right one.
//!
//! ## PlayerScores
//!
//! Win counters indexed by `Player`, backed by a fixed array for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Number of players in a game.
    pub const COUNT: usize = 2;

    /// Get the 0-based index of this player.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Get the 1-based number shown to users.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Iterate over both players in seat order.
    ///
    /// ```
    /// use dice_battle::core::Player;
    ///
    /// let players: Vec<_> = Player::all().collect();
    /// assert_eq!(players, vec![Player::One, Player::Two]);
    /// ```
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::One, Player::Two].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player win counters.
///
/// ## Example
///
/// ```
/// use dice_battle::core::{Player, PlayerScores};
///
/// let mut scores = PlayerScores::default();
/// scores[Player::Two] += 1;
///
/// assert_eq!(scores[Player::One], 0);
/// assert_eq!(scores[Player::Two], 1);
/// assert_eq!(scores.total(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerScores {
    wins: [u32; Player::COUNT],
}

impl PlayerScores {
    /// Create scores with explicit values.
    #[must_use]
    pub const fn new(player1: u32, player2: u32) -> Self {
        Self {
            wins: [player1, player2],
        }
    }

    /// Get a player's win count.
    #[must_use]
    pub fn get(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    /// Sum of both players' wins.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.wins.iter().sum()
    }

    /// Iterate over (Player, wins) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::all().map(move |p| (p, self.get(p)))
    }
}

impl Index<Player> for PlayerScores {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.wins[player.index()]
    }
}

impl IndexMut<Player> for PlayerScores {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.wins[player.index()]
    }
}
