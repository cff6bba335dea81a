//! Six-sided die faces.

use serde::{Deserialize, Serialize};

use crate::error::DiceError;

/// A face of a six-sided die, always in `1..=6`.
///
/// The only ways to build one are the checked constructors, so a `DieFace`
/// in hand is always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    /// Number of faces on the die.
    pub const SIDES: u8 = 6;

    /// Lowest face.
    pub const MIN: DieFace = DieFace(1);

    /// Highest face. Shown on both dice before the first roll and after reset.
    pub const MAX: DieFace = DieFace(Self::SIDES);

    /// Create a face, returning `None` outside `1..=6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= Self::SIDES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the pip count.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over every face in ascending order.
    pub fn all() -> impl Iterator<Item = DieFace> {
        (1..=Self::SIDES).map(DieFace)
    }

    /// Relative path of the image rendering this face.
    #[must_use]
    pub fn image_path(self) -> String {
        format!("./images/dice{}.png", self.0)
    }

    /// Accessible description of this face.
    #[must_use]
    pub fn alt_text(self) -> String {
        format!("Dice showing {}", self.0)
    }
}

impl Default for DieFace {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for DieFace {
    type Error = DiceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(DiceError::OutOfRange(value))
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.0
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
