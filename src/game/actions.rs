use alloc::format;

use tracing::{debug, info};

use crate::dice::{Dice, DiceSource};
use crate::error::{MoveError, RollError};
use crate::pawn::PawnId;

use super::GameState;

impl GameState {
    /// Rolls two dice for the active player.
    ///
    /// Rolling is ignored when the current turn already has an unresolved
    /// roll; the input is returned unchanged.
    #[must_use]
    pub fn roll_dice<D: DiceSource + ?Sized>(&self, dice: &mut D) -> Self {
        self.try_roll_dice(dice).unwrap_or_else(|_| self.clone())
    }

    /// Rolls two dice for the active player.
    ///
    /// # Errors
    ///
    /// Returns an error if the active player has already rolled this turn.
    pub fn try_roll_dice<D: DiceSource + ?Sized>(&self, dice: &mut D) -> Result<Self, RollError> {
        if !self.can_roll {
            return Err(RollError::AlreadyRolled);
        }

        let first = dice.roll_die();
        let second = dice.roll_die();

        let mut next = self.clone();
        next.dice = Dice::pair(first, second);
        next.can_roll = false;
        let name = &self.current_player().name;
        debug!(player = %name, first, second, "rolled");
        next.push_log(format!("{name} rolled {first} and {second}"));
        Ok(next)
    }

    /// Ends the active player's turn without moving.
    #[must_use]
    pub fn skip_turn(&self) -> Self {
        let mut next = self.clone();
        next.end_turn();
        let name = &self.current_player().name;
        debug!(player = %name, "skipped turn");
        next.push_log(format!("{name} skipped turn"));
        next
    }

    /// Moves a pawn by `steps`.
    ///
    /// Unknown pawns and illegal moves leave the state unchanged. A successful
    /// move ends the turn, including the move that wins the game.
    ///
    /// # Example
    ///
    /// ```
    /// use parcheesi::{GameState, PawnId, PawnStatus, Color, board};
    ///
    /// let red = PawnId::new(Color::Red, 0);
    /// let state = GameState::new().move_pawn(red, 5);
    /// assert_eq!(
    ///     state.pawn(red).map(|p| p.status),
    ///     Some(PawnStatus::OnTrack { position: board::start_offset(Color::Red) })
    /// );
    /// assert_eq!(state.current_turn, 1);
    /// ```
    #[must_use]
    pub fn move_pawn(&self, id: PawnId, steps: u32) -> Self {
        self.try_move_pawn(id, steps).unwrap_or_else(|_| self.clone())
    }

    /// Moves a pawn by `steps`, reporting why a move was rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if no player owns the pawn or the move is illegal for
    /// the pawn's current status.
    pub fn try_move_pawn(&self, id: PawnId, steps: u32) -> Result<Self, MoveError> {
        let seat = id.color.index();
        let slot = self.players[seat]
            .pawns
            .iter()
            .position(|pawn| pawn.id == id)
            .ok_or(MoveError::UnknownPawn)?;

        let moved = self.players[seat].pawns[slot].advance(steps).inspect_err(|err| {
            debug!(pawn = %id, steps, %err, "move rejected");
        })?;

        let mut next = self.clone();
        let player = &mut next.players[seat];
        player.pawns[slot] = moved;

        if next.winner.is_none() && player.all_home() {
            info!(winner = %player.color, "all pawns home");
            next.winner = Some(player.color);
        }

        let name = &self.players[seat].name;
        debug!(player = %name, pawn = %id, steps, status = ?moved.status, "moved pawn");
        next.end_turn();
        next.push_log(format!("{name} moved pawn"));
        Ok(next)
    }

    fn end_turn(&mut self) {
        self.dice = Dice::EMPTY;
        self.can_roll = true;
        self.current_turn = self.next_turn();
    }
}
