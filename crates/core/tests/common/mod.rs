//! Shared helpers for the simulator test suite.

use dialsim_core::instr::{Direction, Instruction};

/// Decodes a program from a list of instruction lines.
///
/// Panics on a malformed line; tests that exercise malformed input decode it
/// directly.
pub fn program(lines: &[&str]) -> Vec<Instruction> {
    lines
        .iter()
        .map(|line| line.parse().unwrap())
        .collect()
}

/// Reference model: counts target hits by stepping every click individually.
///
/// Mirrors the definition of the per-click observation policy literally, one
/// unit step and one check at a time. The library's closed-form counting must
/// agree with this on every input.
pub fn click_hits_by_stepping(
    instructions: &[Instruction],
    modulus: u32,
    start: u32,
    target: u32,
) -> u64 {
    let mut position = start % modulus;
    let mut hits = 0;
    for instr in instructions {
        for _ in 0..instr.magnitude {
            position = match instr.direction {
                Direction::Right => (position + 1) % modulus,
                Direction::Left => (position + modulus - 1) % modulus,
            };
            if position == target {
                hits += 1;
            }
        }
    }
    hits
}

/// Reference model: final position after stepping every click individually.
pub fn final_position_by_stepping(instructions: &[Instruction], modulus: u32, start: u32) -> u32 {
    let mut position = start % modulus;
    for instr in instructions {
        for _ in 0..instr.magnitude {
            position = match instr.direction {
                Direction::Right => (position + 1) % modulus,
                Direction::Left => (position + modulus - 1) % modulus,
            };
        }
    }
    position
}
