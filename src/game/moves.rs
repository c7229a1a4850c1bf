use alloc::vec::Vec;

use crate::pawn::PawnId;

use super::GameState;

impl GameState {
    /// Returns whether the active player can play the current roll.
    ///
    /// Always `false` before a roll. Hosts use this to skip a human turn that
    /// has nothing to play; it must be asked again for every new snapshot.
    #[must_use]
    pub fn has_valid_moves(&self) -> bool {
        let steps = self.dice.sum();
        if steps == 0 {
            return false;
        }
        self.current_player()
            .pawns
            .iter()
            .any(|pawn| pawn.can_move(steps))
    }

    /// Returns the active player's pawns that can play the current roll, in
    /// list order.
    #[must_use]
    pub fn movable_pawns(&self) -> Vec<PawnId> {
        let steps = self.dice.sum();
        if steps == 0 {
            return Vec::new();
        }
        self.current_player()
            .pawns
            .iter()
            .filter(|pawn| pawn.can_move(steps))
            .map(|pawn| pawn.id)
            .collect()
    }
}
