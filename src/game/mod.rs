//! Game state and rules engine.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::color::{Color, PLAYER_COUNT};
use crate::dice::Dice;
use crate::pawn::{Pawn, PawnId};
use crate::player::Player;

mod actions;
mod cpu;
mod moves;
pub mod state;

pub use cpu::cpu_choice;
pub use state::Phase;

/// First transcript line of every game.
pub const INITIAL_LOG: &str = "Game initialized. Waiting for players...";

/// A complete snapshot of a game.
///
/// Every rules operation takes a snapshot by reference and returns the next
/// one; nothing is mutated in place. Rejected operations return an identical
/// copy of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameState {
    /// Players in turn order.
    pub players: [Player; PLAYER_COUNT],
    /// Seat index of the active player.
    pub current_turn: usize,
    /// Dice of the current turn.
    pub dice: Dice,
    /// Whether the active player may roll.
    pub can_roll: bool,
    /// Pawn highlighted by the host. Carried, never interpreted.
    pub selected_pawn_id: Option<PawnId>,
    /// Winner, once there is one.
    pub winner: Option<Color>,
    /// Human-readable transcript, oldest first.
    pub logs: Vec<String>,
}

impl GameState {
    /// Creates the initial state: seat 0 human, the rest CPU, every pawn in
    /// its start area, red to roll.
    ///
    /// # Example
    ///
    /// ```
    /// use parcheesi::{Color, GameState};
    ///
    /// let state = GameState::new();
    /// assert_eq!(state.current_player().color, Color::Red);
    /// assert!(state.can_roll);
    /// ```
    #[doc(alias = "initialize")]
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Color::ALL.map(Player::new),
            current_turn: 0,
            dice: Dice::EMPTY,
            can_roll: true,
            selected_pawn_id: None,
            winner: None,
            logs: alloc::vec![INITIAL_LOG.to_string()],
        }
    }

    /// Returns the active player.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn % PLAYER_COUNT]
    }

    /// Returns the player seated at `color`.
    #[must_use]
    pub const fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// Returns the pawn with `id`, if any player owns it.
    #[must_use]
    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.player(id.color).pawn(id)
    }

    /// Returns the current phase of play.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.winner {
            Some(color) => Phase::Finished(color),
            None if self.can_roll => Phase::AwaitingRoll,
            None => Phase::AwaitingMove,
        }
    }

    /// Returns a copy with the host's pawn selection replaced.
    #[must_use]
    pub fn with_selected_pawn(&self, id: Option<PawnId>) -> Self {
        Self {
            selected_pawn_id: id,
            ..self.clone()
        }
    }

    fn next_turn(&self) -> usize {
        (self.current_turn + 1) % PLAYER_COUNT
    }

    fn push_log(&mut self, entry: String) {
        self.logs.push(entry);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
