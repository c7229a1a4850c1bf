//! Board topology.
//!
//! The track is a circle of [`TRACK_LENGTH`] cells shared by everyone. Each
//! color enters the track at its start offset and leaves it right after its
//! home entrance, continuing into a private lane whose last offset,
//! [`HOME_LANE_LENGTH`], is home.

use crate::color::Color;

/// Number of cells on the shared circular track.
pub const TRACK_LENGTH: u8 = 52;

/// Terminal offset of every home lane. Offsets `0..HOME_LANE_LENGTH` are lane
/// cells, `HOME_LANE_LENGTH` itself means the pawn has arrived.
pub const HOME_LANE_LENGTH: u8 = 5;

/// Dice sum a pawn needs to leave its start area.
pub const ENTRY_ROLL: u32 = 5;

/// Track position where pawns of `color` enter the board.
#[must_use]
pub const fn start_offset(color: Color) -> u8 {
    match color {
        Color::Red => 4,
        Color::Green => 17,
        Color::Yellow => 30,
        Color::Blue => 43,
    }
}

/// Last track position pawns of `color` visit before turning into their home
/// lane.
#[must_use]
pub const fn home_entrance(color: Color) -> u8 {
    match color {
        Color::Red => 3,
        Color::Green => 16,
        Color::Yellow => 29,
        Color::Blue => 42,
    }
}

/// Number of forward steps from `position` to the home entrance of `color`.
///
/// A pawn standing on its entrance is at distance 0.
#[must_use]
pub const fn distance_to_entrance(color: Color, position: u8) -> u8 {
    (home_entrance(color) + TRACK_LENGTH - position % TRACK_LENGTH) % TRACK_LENGTH
}
