//! Dial state and hit-counting operations.
//!
//! This module implements the circular dial the instructions drive. It provides:
//! 1. **Dial:** An immutable position/modulus pair with floored-modulo rotation.
//! 2. **Click counting:** A closed-form count of the unit steps of one rotation
//!    that land on a target, without stepping the rotation click by click.
//! 3. **Counting operations:** Endpoint-hit and per-click-hit counts over an
//!    instruction sequence, as pure folds returning the final position and counter.

use crate::instr::{Direction, Instruction};

/// A circular dial: a pointer position on a dial of `modulus` numbered positions.
///
/// `Dial` is a value type; rotation produces a new dial rather than mutating
/// shared state. The invariant `position < modulus` holds after every
/// operation, with negative intermediate values folded back onto the dial by
/// floored modulo (never a language-level negative remainder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    position: u32,
    modulus: u32,
}

impl Dial {
    /// Creates a dial pointing at `position` on a dial of `modulus` positions.
    ///
    /// The position is normalized into `[0, modulus)`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero. [`Config::validate`](crate::Config::validate)
    /// rejects such configurations before they reach the dial.
    pub const fn new(position: u32, modulus: u32) -> Self {
        Self {
            position: position % modulus,
            modulus,
        }
    }

    /// Returns the current pointer position, in `[0, modulus)`.
    pub const fn position(self) -> u32 {
        self.position
    }

    /// Returns the number of positions on the dial.
    pub const fn modulus(self) -> u32 {
        self.modulus
    }

    /// Applies one instruction in bulk, returning the resulting dial.
    ///
    /// The magnitude is added (right) or subtracted (left) and the result is
    /// normalized by floored modulo, so magnitudes beyond the modulus wrap
    /// correctly. A zero magnitude leaves the position unchanged.
    pub const fn rotate(self, instr: Instruction) -> Self {
        let m = self.modulus as i64;
        let p = self.position as i64;
        let k = instr.magnitude as i64;
        let moved = match instr.direction {
            Direction::Right => p + k,
            Direction::Left => p - k,
        };
        Self {
            position: moved.rem_euclid(m) as u32,
            modulus: self.modulus,
        }
    }

    /// Counts how many unit clicks of one rotation land on `target`.
    ///
    /// Equivalent to stepping the rotation click by click and checking the
    /// position after every step, but computed in closed form: the first
    /// click to land on the target is the forward step offset from the
    /// current position (a full turn when the pointer already rests on the
    /// target, since the pre-rotation position is not an observation), and
    /// every full turn after that lands on it again.
    ///
    /// A zero-magnitude rotation has no clicks and therefore counts nothing.
    pub const fn clicks_on(self, instr: Instruction, target: u32) -> u64 {
        let m = self.modulus as i64;
        let p = self.position as i64;
        let t = (target as i64).rem_euclid(m);
        let k = instr.magnitude as i64;

        let offset = match instr.direction {
            Direction::Right => (t - p).rem_euclid(m),
            Direction::Left => (p - t).rem_euclid(m),
        };
        let first = if offset == 0 { m } else { offset };
        if k < first {
            0
        } else {
            ((k - first) / m + 1) as u64
        }
    }
}

/// Final state of a counting run: where the pointer ended and how often it hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Pointer position after the last instruction, in `[0, modulus)`.
    pub position: u32,
    /// Number of observation points that landed on the target.
    pub hits: u64,
}

/// Counts the instructions whose final position lands on `target`.
///
/// Folds the sequence through [`Dial::rotate`], observing the position once
/// per instruction, after the whole rotation. Pure: same inputs, same outcome.
///
/// # Examples
///
/// ```
/// use dialsim_core::dial::count_endpoint_hits;
/// use dialsim_core::instr::decode_program;
///
/// let program = decode_program("R25\nR25").unwrap();
/// let outcome = count_endpoint_hits(&program, 100, 50, 0);
/// assert_eq!(outcome.hits, 1); // 50 → 75 → 0
/// assert_eq!(outcome.position, 0);
/// ```
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn count_endpoint_hits(
    instructions: &[Instruction],
    modulus: u32,
    start: u32,
    target: u32,
) -> RunOutcome {
    let (dial, hits) = instructions
        .iter()
        .fold((Dial::new(start, modulus), 0), |(dial, hits), &instr| {
            let dial = dial.rotate(instr);
            (dial, hits + u64::from(dial.position() == target % modulus))
        });
    RunOutcome {
        position: dial.position(),
        hits,
    }
}

/// Counts the unit clicks, across all instructions, that land on `target`.
///
/// Every click of a magnitude-`k` instruction is an observation point, so a
/// single instruction can contribute several hits when it wraps the dial more
/// than once. Runs in O(instruction count) via [`Dial::clicks_on`] rather
/// than O(total magnitude).
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn count_click_hits(
    instructions: &[Instruction],
    modulus: u32,
    start: u32,
    target: u32,
) -> RunOutcome {
    let (dial, hits) = instructions
        .iter()
        .fold((Dial::new(start, modulus), 0), |(dial, hits), &instr| {
            let hits = hits + dial.clicks_on(instr, target);
            (dial.rotate(instr), hits)
        });
    RunOutcome {
        position: dial.position(),
        hits,
    }
}
