//! Rotation instruction definitions.
//!
//! Defines the direction and instruction value types consumed by the dial
//! simulator. Instructions are immutable once decoded; see
//! [`decode`](crate::instr::decode) for the text format.

use std::fmt;

/// Rotation direction of a single instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Rotate toward lower positions (the `L` symbol); each click is `-1`.
    Left,
    /// Rotate toward higher positions (the `R` symbol); each click is `+1`.
    Right,
}

impl Direction {
    /// Returns the direction letter used in instruction text.
    pub const fn symbol(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One rotation instruction: a direction and a click count.
///
/// The magnitude is the number of unit clicks to rotate. It may be zero
/// (a no-op rotation) and may exceed the dial modulus, in which case the
/// rotation wraps around the dial one or more times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Which way the dial is rotated.
    pub direction: Direction,
    /// How many clicks the rotation covers.
    pub magnitude: u32,
}

impl Instruction {
    /// Creates an instruction from its parts.
    pub const fn new(direction: Direction, magnitude: u32) -> Self {
        Self {
            direction,
            magnitude,
        }
    }
}

impl fmt::Display for Instruction {
    /// Formats the instruction in its text form, e.g. `R25`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction, self.magnitude)
    }
}
