//! Circular-dial rotation simulator library.
//!
//! This crate simulates a numbered dial rotated by a sequence of left/right
//! instructions, counting how often the pointer lands on a target value. It provides:
//! 1. **Instructions:** Decoding of `L<n>`/`R<n>` rotation instructions from text.
//! 2. **Dial:** Circular position arithmetic with floored-modulo normalization.
//! 3. **Counting:** Endpoint-hit and per-click-hit counting over an instruction sequence.
//! 4. **Simulation:** Input loading, a `Simulator` driving both modes, and statistics.

/// Common types (parse and configuration errors).
pub mod common;
/// Simulator configuration (defaults, validation, JSON deserialization).
pub mod config;
/// Dial state, rotation arithmetic, and the counting operations.
pub mod dial;
/// Instruction set (direction symbols, instruction type, decoding).
pub mod instr;
/// Input loader and simulation driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Dial value type; circular position with floored-modulo rotation.
pub use crate::dial::Dial;
/// Simulation driver; runs both counting modes and collects statistics.
pub use crate::sim::Simulator;
