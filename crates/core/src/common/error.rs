//! Error definitions for instruction decoding and configuration.
//!
//! This module defines the failure modes of the simulator's input surfaces:
//! 1. **Parse Errors:** Raised when an instruction line cannot be decoded.
//! 2. **Config Errors:** Raised when a configuration violates the dial invariants.
//!
//! A malformed instruction aborts the whole computation with no partial
//! results; silently skipping a line would corrupt the counts.

use thiserror::Error;

/// Error raised when instruction text cannot be decoded.
///
/// Each variant carries enough context to point at the offending input.
/// Whole-program decoding wraps line-level failures in [`ParseError::AtLine`]
/// so callers can report the 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line is empty; every line must carry a direction and a magnitude.
    #[error("empty instruction line")]
    EmptyLine,

    /// The leading symbol is not a recognized direction letter.
    #[error("unknown direction symbol {symbol:?} (expected 'L' or 'R')")]
    UnknownDirection {
        /// The symbol that was found in the direction position.
        symbol: char,
    },

    /// The direction letter is not followed by any magnitude digits.
    #[error("missing magnitude after direction in {line:?}")]
    MissingMagnitude {
        /// The full offending line.
        line: String,
    },

    /// The magnitude is not an unsigned decimal integer in range.
    #[error("invalid magnitude in {line:?} (expected an unsigned decimal integer)")]
    InvalidMagnitude {
        /// The full offending line.
        line: String,
    },

    /// A line-level failure annotated with its position in the input.
    #[error("line {number}: {source}")]
    AtLine {
        /// 1-based line number within the trimmed input.
        number: usize,
        /// The underlying line-level failure.
        #[source]
        source: Box<ParseError>,
    },
}

/// Error raised when a configuration violates the dial invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The dial modulus must be at least 1.
    #[error("dial modulus must be non-zero")]
    ZeroModulus,

    /// The starting position must lie on the dial.
    #[error("start position {start} is outside the dial range [0, {modulus})")]
    StartOutOfRange {
        /// The configured start position.
        start: u32,
        /// The configured dial modulus.
        modulus: u32,
    },

    /// The target value must lie on the dial.
    #[error("target value {target} is outside the dial range [0, {modulus})")]
    TargetOutOfRange {
        /// The configured target value.
        target: u32,
        /// The configured dial modulus.
        modulus: u32,
    },
}
