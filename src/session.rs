//! A single game session driven by a host.
//!
//! The session owns the current [`GameState`] and the dice, replaces the
//! snapshot after every action, and runs the two delayed triggers a host
//! needs: computer turns and skipping a human turn that has nothing to play.
//! Time only moves when the host calls [`Session::advance`].

use alloc::string::ToString;
use alloc::vec::Vec;
use core::time::Duration;

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

use crate::dice::{DiceSource, RngDice};
use crate::error::SessionError;
use crate::game::GameState;
use crate::options::SessionOptions;
use crate::pawn::PawnId;

/// A delayed action run by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// A computer player takes its turn.
    CpuTurn,
    /// A human turn with nothing to play is skipped.
    AutoSkip,
}

/// A game session: one snapshot, one dice source, and at most one pending
/// timer per [`Trigger`].
#[derive(Debug, Clone)]
pub struct Session<D = RngDice<ChaCha8Rng>> {
    state: GameState,
    dice: D,
    options: SessionOptions,
    joined: bool,
    now: Duration,
    cpu_due: Option<Duration>,
    skip_due: Option<Duration>,
}

impl Session {
    /// Creates a session with seeded dice.
    ///
    /// # Example
    ///
    /// ```
    /// use parcheesi::{Session, SessionOptions};
    ///
    /// let mut session = Session::new(SessionOptions::default(), 42);
    /// session.join("Ada").unwrap();
    /// session.roll().unwrap();
    /// assert!(!session.state().can_roll);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        Self::with_dice(options, RngDice::seeded(seed))
    }
}

impl<D: DiceSource> Session<D> {
    /// Creates a session rolling with `dice`.
    #[must_use]
    pub fn with_dice(options: SessionOptions, dice: D) -> Self {
        Self {
            state: GameState::new(),
            dice,
            options,
            joined: false,
            now: Duration::ZERO,
            cpu_due: None,
            skip_due: None,
        }
    }

    /// Replaces the snapshot, for resuming a saved game.
    #[must_use]
    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self.reschedule();
        self
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns whether the human player has joined.
    #[must_use]
    pub const fn is_joined(&self) -> bool {
        self.joined
    }

    /// Returns the session clock.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Returns when `trigger` is due, if it is pending.
    #[must_use]
    pub const fn pending(&self, trigger: Trigger) -> Option<Duration> {
        match trigger {
            Trigger::CpuTurn => self.cpu_due,
            Trigger::AutoSkip => self.skip_due,
        }
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.cpu_due, self.skip_due) {
            (Some(cpu), Some(skip)) => Some(cpu.min(skip)),
            (cpu, skip) => cpu.or(skip),
        }
    }

    /// Seats the human player under `name` and marks the join fee as paid.
    ///
    /// Computer turns are only scheduled once the human has joined. Joining
    /// again just renames the player.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or the game is already over.
    #[instrument(level = "debug", skip(self))]
    pub fn join(&mut self, name: &str) -> Result<(), SessionError> {
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        if self.state.winner.is_some() {
            return Err(SessionError::GameOver);
        }

        let mut next = self.state.clone();
        if let Some(human) = next.players.iter_mut().find(|player| !player.is_cpu) {
            human.name = name.to_string();
            human.has_paid = true;
        }
        self.state = next;
        self.joined = true;
        info!(name, "player joined");
        self.reschedule();
        Ok(())
    }

    /// Rolls the dice for the human player.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the human's turn or the dice were already
    /// rolled this turn.
    #[instrument(level = "debug", skip(self))]
    pub fn roll(&mut self) -> Result<(), SessionError> {
        self.ensure_human_turn()?;
        let next = self.state.try_roll_dice(&mut self.dice)?;
        self.replace(next);
        Ok(())
    }

    /// Plays the current roll with the pawn the human clicked.
    ///
    /// Pawns of other players are ignored, as are illegal moves; in both cases
    /// the snapshot stays as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the human's turn or nothing has been
    /// rolled yet.
    #[instrument(level = "debug", skip(self, id), fields(pawn = %id))]
    pub fn click_pawn(&mut self, id: PawnId) -> Result<(), SessionError> {
        self.ensure_human_turn()?;
        if !self.state.dice.is_rolled() {
            return Err(SessionError::NotRolled);
        }
        if id.color != self.state.current_player().color {
            debug!("pawn belongs to another player");
            return Ok(());
        }

        let next = self.state.move_pawn(id, self.state.dice.sum());
        self.replace(next);
        Ok(())
    }

    /// Records the host's pawn selection.
    pub fn select_pawn(&mut self, id: Option<PawnId>) {
        let next = self.state.with_selected_pawn(id);
        self.replace(next);
    }

    /// Gives up the human's current roll.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the human's turn or nothing has been
    /// rolled yet.
    #[instrument(level = "debug", skip(self))]
    pub fn skip(&mut self) -> Result<(), SessionError> {
        self.ensure_human_turn()?;
        if self.state.can_roll {
            return Err(SessionError::NotRolled);
        }
        let next = self.state.skip_turn();
        self.replace(next);
        Ok(())
    }

    /// Moves the session clock forward by `elapsed`, running every trigger
    /// that falls due on the way, in deadline order.
    ///
    /// Returns the triggers that ran.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Trigger> {
        let target = self.now.saturating_add(elapsed);
        let mut fired = Vec::new();

        while let Some((trigger, due)) = self.earliest_due(target) {
            self.now = due;
            self.fire(trigger);
            fired.push(trigger);
        }

        self.now = target;
        fired
    }

    fn earliest_due(&self, target: Duration) -> Option<(Trigger, Duration)> {
        let cpu = self.cpu_due.map(|due| (Trigger::CpuTurn, due));
        let skip = self.skip_due.map(|due| (Trigger::AutoSkip, due));
        let earliest = match (cpu, skip) {
            (Some(cpu), Some(skip)) if skip.1 < cpu.1 => Some(skip),
            (Some(cpu), _) => Some(cpu),
            (None, skip) => skip,
        };
        earliest.filter(|&(_, due)| due <= target)
    }

    fn ensure_human_turn(&self) -> Result<(), SessionError> {
        if !self.joined {
            return Err(SessionError::NotJoined);
        }
        if self.state.winner.is_some() {
            return Err(SessionError::GameOver);
        }
        if self.state.current_player().is_cpu {
            return Err(SessionError::NotYourTurn);
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self), fields(at = ?self.now))]
    fn fire(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::CpuTurn => {
                self.cpu_due = None;
                if !self.cpu_turn_wanted() {
                    return;
                }
                let mut next = self.state.perform_cpu_turn(&mut self.dice);
                if self.options.skip_stalled_cpu
                    && next.current_turn == self.state.current_turn
                    && !next.can_roll
                {
                    debug!("cpu move rejected, skipping turn");
                    next = next.skip_turn();
                }
                self.replace(next);
            }
            Trigger::AutoSkip => {
                self.skip_due = None;
                if !self.auto_skip_wanted() {
                    return;
                }
                let next = self.state.skip_turn();
                self.replace(next);
            }
        }
    }

    fn cpu_turn_wanted(&self) -> bool {
        self.joined && self.state.winner.is_none() && self.state.current_player().is_cpu
    }

    fn auto_skip_wanted(&self) -> bool {
        self.options.auto_skip
            && self.state.dice.is_rolled()
            && !self.state.current_player().is_cpu
            && !self.state.has_valid_moves()
    }

    /// Installs `next` as the current snapshot, re-deriving both timers when
    /// anything they depend on changed.
    fn replace(&mut self, next: GameState) {
        let changed = next.players != self.state.players
            || next.current_turn != self.state.current_turn
            || next.dice != self.state.dice
            || next.winner != self.state.winner;
        self.state = next;
        if changed {
            self.reschedule();
        }
    }

    fn reschedule(&mut self) {
        self.cpu_due = self
            .cpu_turn_wanted()
            .then(|| self.now.saturating_add(self.options.cpu_delay));
        self.skip_due = self
            .auto_skip_wanted()
            .then(|| self.now.saturating_add(self.options.auto_skip_delay));
        debug!(cpu = ?self.cpu_due, skip = ?self.skip_due, "rescheduled");
    }
}
