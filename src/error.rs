//! Error types for engine and session operations.
//!
//! The plain engine operations never return these; they fall back to the
//! unchanged input state. The `try_*` variants and the session surface them so
//! callers can tell a rejection apart from a no-op.

use thiserror::Error;

/// Errors that can occur when rolling the dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// The current turn already has an unresolved roll.
    #[error("dice already rolled this turn")]
    AlreadyRolled,
}

/// Reasons a pawn move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// No player owns the pawn.
    #[error("pawn not found")]
    UnknownPawn,
    /// The pawn is in its start area and the roll is below the entry roll.
    #[error("roll of {steps} is too low to enter the board")]
    EntryRollTooLow {
        /// Steps requested.
        steps: u32,
    },
    /// The move would carry the pawn past home.
    #[error("move overshoots home")]
    Overshoot,
    /// The pawn has already arrived.
    #[error("pawn is already home")]
    AlreadyHome,
}

/// Errors that can occur when parsing a color name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown color")]
pub struct ParseColorError;

/// Errors that can occur when parsing a pawn id such as `red-0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParsePawnIdError {
    /// The id is not of the form `<color>-<index>`.
    #[error("malformed pawn id")]
    Malformed,
    /// The color part is not a known color.
    #[error(transparent)]
    Color(#[from] ParseColorError),
}

/// Errors returned by session actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The join name is empty.
    #[error("please enter your name")]
    EmptyName,
    /// The human player has not joined yet.
    #[error("player has not joined the game")]
    NotJoined,
    /// The game already has a winner.
    #[error("game is over")]
    GameOver,
    /// It is a CPU player's turn.
    #[error("not the human player's turn")]
    NotYourTurn,
    /// The dice have not been rolled this turn.
    #[error("dice not rolled")]
    NotRolled,
    /// Rolling failed.
    #[error(transparent)]
    Roll(#[from] RollError),
}
