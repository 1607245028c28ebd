//! Instruction text loading.
//!
//! Reads the raw instruction text the decoder consumes. Reading is one-shot;
//! there are no retries, since the simulation is a pure transformation of the
//! in-memory instruction sequence.

use std::fs;
use std::process;

/// Loads instruction text from a file on disk.
///
/// Exits the process with an error message if the file cannot be read.
///
/// # Arguments
///
/// * `path` - Path to the instruction text file.
///
/// # Returns
///
/// The raw text of the file, undecoded and untrimmed.
pub fn load_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read file '{path}': {e}");
        process::exit(1);
    })
}
