//! Instruction set for the dial simulator.
//!
//! This module defines the rotation instruction format and its decoding. It provides:
//! 1. **Types:** Rotation direction and the immutable instruction value.
//! 2. **Decoding:** Line-level and whole-program decoding of `L<n>`/`R<n>` text.

/// Instruction text decoding.
pub mod decode;
/// Direction and instruction type definitions.
pub mod instruction;

pub use decode::decode_program;
pub use instruction::{Direction, Instruction};
