//! Players and the pawns they own.

use alloc::format;
use alloc::string::String;

use crate::color::Color;
use crate::pawn::{PAWNS_PER_PLAYER, Pawn, PawnId};

/// A seat at the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Player {
    /// Player id (`player-<seat>`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Seat color.
    pub color: Color,
    /// Whether the join fee was paid. Set by the host, never read by the rules.
    pub has_paid: bool,
    /// Whether the seat is played by the computer.
    pub is_cpu: bool,
    /// The player's pawns, in id order.
    pub pawns: [Pawn; PAWNS_PER_PLAYER],
}

impl Player {
    /// Creates a player seated at `color` with all pawns in the start area.
    ///
    /// Seat 0 is the human, every other seat is a CPU.
    #[must_use]
    pub fn new(color: Color) -> Self {
        let seat = color.index();
        let is_cpu = seat != 0;
        let name = if is_cpu {
            format!("CPU {color}")
        } else {
            format!("Player {color}")
        };

        Self {
            id: format!("player-{seat}"),
            name,
            color,
            has_paid: false,
            is_cpu,
            pawns: core::array::from_fn(|i| Pawn::new(PawnId::new(color, i as u8))),
        }
    }

    /// Returns the pawn with `id`.
    #[must_use]
    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.pawns.iter().find(|pawn| pawn.id == id)
    }

    /// Returns whether every pawn is home.
    #[must_use]
    pub fn all_home(&self) -> bool {
        self.pawns.iter().all(Pawn::is_home)
    }
}
