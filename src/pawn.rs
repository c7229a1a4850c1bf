//! Pawns and their movement rules.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::board::{ENTRY_ROLL, HOME_LANE_LENGTH, TRACK_LENGTH, distance_to_entrance, start_offset};
use crate::color::Color;
use crate::error::{MoveError, ParsePawnIdError};

/// Number of pawns each player owns.
pub const PAWNS_PER_PLAYER: usize = 4;

/// Identifier of a pawn, written `<color>-<index>` (e.g. `red-0`).
///
/// The index is not validated on construction; an id whose index is out of
/// range simply matches no pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct PawnId {
    /// Owning color.
    pub color: Color,
    /// Position in the owner's pawn list.
    pub index: u8,
}

impl PawnId {
    /// Creates a new pawn id.
    #[must_use]
    pub const fn new(color: Color, index: u8) -> Self {
        Self { color, index }
    }
}

impl fmt::Display for PawnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.color, self.index)
    }
}

impl FromStr for PawnId {
    type Err = ParsePawnIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (color, index) = s.split_once('-').ok_or(ParsePawnIdError::Malformed)?;
        let color = color.parse::<Color>()?;
        // Only the canonical spelling names a pawn: no sign, no leading zeros.
        let canonical = index.bytes().all(|b| b.is_ascii_digit())
            && (index == "0" || !index.starts_with('0'));
        if !canonical {
            return Err(ParsePawnIdError::Malformed);
        }
        let index = index
            .parse::<u8>()
            .map_err(|_| ParsePawnIdError::Malformed)?;
        Ok(Self { color, index })
    }
}

impl From<PawnId> for String {
    fn from(id: PawnId) -> Self {
        alloc::format!("{id}")
    }
}

impl TryFrom<String> for PawnId {
    type Error = ParsePawnIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where a pawn is.
///
/// Track positions and lane offsets live inside the variant that uses them,
/// so a pawn can never carry both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "kebab-case"))]
pub enum PawnStatus {
    /// Waiting in the start area.
    #[default]
    Start,
    /// On the shared track.
    OnTrack {
        /// Track position in `0..TRACK_LENGTH`.
        position: u8,
    },
    /// In the owner's home lane.
    InHomeLane {
        /// Lane offset in `0..HOME_LANE_LENGTH`.
        offset: u8,
    },
    /// Arrived. Terminal.
    Home,
}

/// A single pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pawn {
    /// The pawn's id.
    pub id: PawnId,
    /// Current status and position.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub status: PawnStatus,
}

impl Pawn {
    /// Creates a pawn in its start area.
    #[must_use]
    pub const fn new(id: PawnId) -> Self {
        Self {
            id,
            status: PawnStatus::Start,
        }
    }

    /// Returns the owning color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.id.color
    }

    /// Returns the track position if the pawn is on the track.
    #[must_use]
    pub const fn track_position(&self) -> Option<u8> {
        match self.status {
            PawnStatus::OnTrack { position } => Some(position),
            _ => None,
        }
    }

    /// Returns the home lane offset if the pawn is in its lane or home.
    ///
    /// A pawn at home reports [`HOME_LANE_LENGTH`].
    #[must_use]
    pub const fn home_lane_offset(&self) -> Option<u8> {
        match self.status {
            PawnStatus::InHomeLane { offset } => Some(offset),
            PawnStatus::Home => Some(HOME_LANE_LENGTH),
            _ => None,
        }
    }

    /// Returns whether the pawn has arrived.
    #[must_use]
    pub const fn is_home(&self) -> bool {
        matches!(self.status, PawnStatus::Home)
    }

    /// Computes where the pawn ends up after `steps`.
    ///
    /// Leaving the start area needs at least [`ENTRY_ROLL`] steps and always
    /// lands on the color's start offset, whatever the surplus. A move that
    /// turns into the home lane spends one step on the turn itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the roll is too low to enter, the move would go past
    /// home, or the pawn is already home.
    pub fn advance(&self, steps: u32) -> Result<Self, MoveError> {
        let color = self.color();
        let lane = u32::from(HOME_LANE_LENGTH);

        let status = match self.status {
            PawnStatus::Start => {
                if steps < ENTRY_ROLL {
                    return Err(MoveError::EntryRollTooLow { steps });
                }
                PawnStatus::OnTrack {
                    position: start_offset(color),
                }
            }
            PawnStatus::OnTrack { position } => {
                let dist = u32::from(distance_to_entrance(color, position));
                if steps <= dist {
                    let next = (u32::from(position) + steps) % u32::from(TRACK_LENGTH);
                    PawnStatus::OnTrack {
                        position: next as u8,
                    }
                } else {
                    let into = steps - dist - 1;
                    lane_status(into, lane)?
                }
            }
            PawnStatus::InHomeLane { offset } => {
                let next = u32::from(offset).saturating_add(steps);
                lane_status(next, lane)?
            }
            PawnStatus::Home => return Err(MoveError::AlreadyHome),
        };

        Ok(Self { status, ..*self })
    }

    /// Returns whether a move of `steps` counts as playable for the turn.
    ///
    /// This is the turn-level check used to decide whether the active player
    /// has anything to play. It is written against the board rules directly
    /// rather than through [`Pawn::advance`]; a turn into the lane is playable
    /// as long as it ends no further than home.
    #[must_use]
    pub fn can_move(&self, steps: u32) -> bool {
        let lane = u32::from(HOME_LANE_LENGTH);
        match self.status {
            PawnStatus::Start => steps >= ENTRY_ROLL,
            PawnStatus::Home => false,
            PawnStatus::InHomeLane { offset } => u32::from(offset).saturating_add(steps) <= lane,
            PawnStatus::OnTrack { position } => {
                let dist = u32::from(distance_to_entrance(self.color(), position));
                steps <= dist || steps - dist - 1 <= lane
            }
        }
    }
}

fn lane_status(offset: u32, lane: u32) -> Result<PawnStatus, MoveError> {
    match offset.cmp(&lane) {
        core::cmp::Ordering::Less => Ok(PawnStatus::InHomeLane {
            offset: offset as u8,
        }),
        core::cmp::Ordering::Equal => Ok(PawnStatus::Home),
        core::cmp::Ordering::Greater => Err(MoveError::Overshoot),
    }
}
