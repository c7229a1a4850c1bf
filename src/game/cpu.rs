//! Computer player.

use tracing::{debug, instrument};

use crate::board::ENTRY_ROLL;
use crate::dice::DiceSource;
use crate::pawn::{PawnId, PawnStatus};
use crate::player::Player;

use super::GameState;

/// Picks the pawn a computer player moves with a roll of `steps`.
///
/// A pawn leaves the start area only on a roll of exactly the entry roll.
/// Otherwise the first pawn on the track is advanced, whether or not the move
/// is legal. Pawns already in the home lane are never picked.
#[must_use]
pub fn cpu_choice(player: &Player, steps: u32) -> Option<PawnId> {
    let entering = player
        .pawns
        .iter()
        .find(|pawn| pawn.status == PawnStatus::Start)
        .filter(|_| steps == ENTRY_ROLL);

    entering
        .or_else(|| {
            player
                .pawns
                .iter()
                .find(|pawn| matches!(pawn.status, PawnStatus::OnTrack { .. }))
        })
        .map(|pawn| pawn.id)
}

impl GameState {
    /// Plays a full turn for the active player: roll, then move the pawn
    /// picked by [`cpu_choice`] or skip when there is none.
    ///
    /// If the turn already has a roll, that roll is used. When the picked move
    /// is illegal the rolled state is returned and the turn is not over.
    #[must_use]
    #[instrument(level = "debug", skip_all, fields(turn = self.current_turn))]
    pub fn perform_cpu_turn<D: DiceSource + ?Sized>(&self, dice: &mut D) -> Self {
        let rolled = self.roll_dice(dice);
        let steps = rolled.dice.sum();

        match cpu_choice(rolled.current_player(), steps) {
            Some(id) => {
                debug!(pawn = %id, steps, "cpu moves");
                rolled.move_pawn(id, steps)
            }
            None => {
                debug!(steps, "cpu has no pawn to move");
                rolled.skip_turn()
            }
        }
    }
}
