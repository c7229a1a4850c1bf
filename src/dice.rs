//! Dice and the sources that roll them.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// The dice of the current turn: either nothing rolled yet or a pair of faces.
///
/// Deserialized faces must not exceed [`DIE_FACES`]; zero is tolerated so
/// scripted replays survive a snapshot round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "Vec<u8>", try_from = "Vec<u8>"))]
pub struct Dice(Option<[u8; 2]>);

impl Dice {
    /// No dice rolled.
    pub const EMPTY: Self = Self(None);

    /// A rolled pair.
    #[must_use]
    pub const fn pair(first: u8, second: u8) -> Self {
        Self(Some([first, second]))
    }

    /// Returns the rolled faces in roll order. Empty before a roll.
    #[must_use]
    pub fn faces(&self) -> &[u8] {
        match &self.0 {
            Some(faces) => faces,
            None => &[],
        }
    }

    /// Returns whether dice have been rolled.
    #[must_use]
    pub const fn is_rolled(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the sum of the faces, 0 before a roll.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.faces().iter().map(|&face| u32::from(face)).sum()
    }
}

impl From<Dice> for Vec<u8> {
    fn from(dice: Dice) -> Self {
        dice.faces().to_vec()
    }
}

impl TryFrom<Vec<u8>> for Dice {
    type Error = &'static str;

    fn try_from(faces: Vec<u8>) -> Result<Self, Self::Error> {
        match faces.as_slice() {
            [] => Ok(Self::EMPTY),
            &[first, second] if first <= DIE_FACES && second <= DIE_FACES => {
                Ok(Self::pair(first, second))
            }
            [_, _] => Err("die face out of range"),
            _ => Err("dice must hold zero or two faces"),
        }
    }
}

/// Source of die faces.
pub trait DiceSource {
    /// Rolls a single die.
    fn roll_die(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }
}

/// Uniform dice backed by any random number generator.
#[derive(Debug, Clone)]
pub struct RngDice<R>(pub R);

impl RngDice<ChaCha8Rng> {
    /// Creates dice backed by a `ChaCha8Rng` seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DiceSource for RngDice<R> {
    fn roll_die(&mut self) -> u8 {
        self.0.random_range(1..=DIE_FACES)
    }
}

/// Dice that replay a fixed sequence of faces, starting over when exhausted.
///
/// Faces are returned as given, without range checks. An empty script rolls
/// ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Creates dice that roll `faces` in order, repeating.
    #[must_use]
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        Self {
            faces: faces.into(),
            cursor: 0,
        }
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor = self.cursor.wrapping_add(1);
        face
    }
}
