//! A four-player Parcheesi rules engine with optional `no_std` support.
//!
//! Pawns leave their start area on a roll of five, race around a shared
//! circular track, turn into a private home lane and finish at home. The first
//! player with all four pawns home wins.
//!
//! The rules live on [`GameState`]: every operation takes a snapshot and
//! returns the next one. [`Session`] wraps a snapshot with dice and the
//! delayed computer and auto-skip turns a host needs.
//!
//! # Example
//!
//! ```
//! use parcheesi::{Color, GameState, PawnId, PawnStatus, ScriptedDice};
//!
//! let mut dice = ScriptedDice::new([3, 2]);
//! let state = GameState::new().roll_dice(&mut dice);
//! assert_eq!(state.dice.sum(), 5);
//!
//! let red = PawnId::new(Color::Red, 0);
//! let state = state.move_pawn(red, state.dice.sum());
//! assert!(matches!(state.pawn(red).map(|p| p.status), Some(PawnStatus::OnTrack { .. })));
//! assert_eq!(state.current_turn, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod color;
pub mod dice;
pub mod error;
pub mod game;
pub mod options;
pub mod pawn;
pub mod player;
pub mod session;

// Re-export main types
pub use board::{HOME_LANE_LENGTH, TRACK_LENGTH};
pub use color::{Color, PLAYER_COUNT};
pub use dice::{Dice, DiceSource, RngDice, ScriptedDice};
pub use error::{MoveError, ParseColorError, ParsePawnIdError, RollError, SessionError};
pub use game::{GameState, Phase, cpu_choice};
pub use options::SessionOptions;
pub use pawn::{PAWNS_PER_PLAYER, Pawn, PawnId, PawnStatus};
pub use player::Player;
pub use session::{Session, Trigger};
