//! Instruction text decoding.
//!
//! Decodes the plain-text instruction format: one instruction per line, a
//! single direction letter followed immediately by an unsigned decimal
//! magnitude (`^[LR]\d+$`), lines separated by `\n` or `\r\n`. Decoding fails
//! fast on the first malformed line.

use std::str::FromStr;

use crate::common::ParseError;
use crate::instr::instruction::{Direction, Instruction};

/// Direction letter for left (decreasing) rotations.
pub const LEFT_SYMBOL: char = 'L';
/// Direction letter for right (increasing) rotations.
pub const RIGHT_SYMBOL: char = 'R';

impl FromStr for Direction {
    type Err = ParseError;

    /// Decodes a direction from its single-letter symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(LEFT_SYMBOL), None) => Ok(Self::Left),
            (Some(RIGHT_SYMBOL), None) => Ok(Self::Right),
            (Some(symbol), _) => Err(ParseError::UnknownDirection { symbol }),
            (None, _) => Err(ParseError::EmptyLine),
        }
    }
}

impl FromStr for Instruction {
    type Err = ParseError;

    /// Decodes one instruction line of the form `L<n>` or `R<n>`.
    ///
    /// The magnitude must be a plain unsigned decimal literal: no sign, no
    /// separators, no surrounding whitespace.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut chars = line.chars();
        let direction = match chars.next() {
            Some(LEFT_SYMBOL) => Direction::Left,
            Some(RIGHT_SYMBOL) => Direction::Right,
            Some(symbol) => return Err(ParseError::UnknownDirection { symbol }),
            None => return Err(ParseError::EmptyLine),
        };

        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(ParseError::MissingMagnitude {
                line: line.to_owned(),
            });
        }
        // u32::from_str would admit a leading '+'; the format does not.
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidMagnitude {
                line: line.to_owned(),
            });
        }
        let magnitude = digits
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidMagnitude {
                line: line.to_owned(),
            })?;

        Ok(Self::new(direction, magnitude))
    }
}

/// Decodes a whole instruction program from raw input text.
///
/// The input is trimmed as a whole, then split into lines on `\n` with any
/// trailing `\r` stripped (covering `\r\n` separators). An entirely empty
/// input decodes to an empty program.
///
/// # Errors
///
/// Returns [`ParseError::AtLine`] wrapping the first line-level failure;
/// no instructions are produced for a partially valid input.
pub fn decode_program(text: &str) -> Result<Vec<Instruction>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(index, line)| {
            line.parse().map_err(|source| ParseError::AtLine {
                number: index + 1,
                source: Box::new(source),
            })
        })
        .collect()
}
