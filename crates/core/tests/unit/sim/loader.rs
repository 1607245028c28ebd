//! # Loader Tests
//!
//! Round-trip tests for instruction text loading. The failure path exits the
//! process by contract, so only successful loads are exercised here.

use std::io::Write;

use dialsim_core::instr::decode_program;
use dialsim_core::sim::loader;

#[test]
fn loads_instruction_text_verbatim() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "R25\nL3\n").unwrap();

    let text = loader::load_input(file.path().to_str().unwrap());
    assert_eq!(text, "R25\nL3\n");
}

#[test]
fn loaded_text_decodes_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "R50\r\nL50\r\n").unwrap();

    let text = loader::load_input(file.path().to_str().unwrap());
    let program = decode_program(&text).unwrap();
    assert_eq!(program.len(), 2);
}
