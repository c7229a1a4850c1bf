//! Player colors and turn order.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseColorError;

/// Number of seats at the board.
pub const PLAYER_COUNT: usize = 4;

/// A player color.
///
/// The declaration order is the turn order: red moves first, then blue,
/// green and yellow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Self; PLAYER_COUNT] = [Self::Red, Self::Blue, Self::Green, Self::Yellow];

    /// Returns the seat index of this color.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
            Self::Green => 2,
            Self::Yellow => 3,
        }
    }

    /// Returns the color seated at `index`, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Red),
            1 => Some(Self::Blue),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            _ => None,
        }
    }

    /// Returns the lowercase name used in pawn ids and transcripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or(ParseColorError)
    }
}

