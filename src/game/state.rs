//! Game phase types.

use crate::color::Color;

/// Phase of play, derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The active player has not rolled yet.
    AwaitingRoll,
    /// Dice are rolled and waiting to be played or skipped.
    AwaitingMove,
    /// A player has brought every pawn home.
    Finished(Color),
}
