//! Dial rotation simulator CLI.
//!
//! This binary is the single entry point for simulation runs. It performs:
//! 1. **Load:** Read the instruction file and decode it into a program.
//! 2. **Run:** Apply both counting modes (endpoint hits, per-click hits).
//! 3. **Report:** Print the two password lines, plus a stats table or JSON on request.

use clap::Parser;
use std::process;

use dialsim_core::config::Config;
use dialsim_core::instr::decode_program;
use dialsim_core::sim::Simulator;
use dialsim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "dialsim",
    author,
    version,
    about = "Circular-dial rotation simulator",
    long_about = "Run a dial rotation program and count target hits.\n\nThe input holds one rotation per line: a direction letter ('L' or 'R')\nfollowed by a click count, e.g. R25. The dial defaults to 100 positions,\nstart 50, target 0; override with a JSON config file.\n\nExamples:\n  dialsim input.txt\n  dialsim input.txt --stats\n  dialsim input.txt --config dial.json --json"
)]
struct Cli {
    /// Instruction file (one L<n>/R<n> rotation per line).
    input: String,

    /// JSON config file overriding the built-in dial defaults.
    #[arg(long)]
    config: Option<String>,

    /// Print the statistics table after the results.
    #[arg(long)]
    stats: bool,

    /// Emit statistics as JSON instead of the table.
    #[arg(long, conflicts_with = "stats")]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    cmd_run(&cli);
}

/// Runs the simulator: loads config and input, decodes, runs both modes, prints results.
///
/// Exits with code 1 on a malformed config or instruction line; the loader
/// exits on unreadable input files.
fn cmd_run(cli: &Cli) {
    let config = cli.config.as_deref().map_or_else(Config::default, |path| {
        let text = loader::load_input(path);
        serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("Error: invalid config '{path}': {e}");
            process::exit(1);
        })
    });

    let mut sim = Simulator::new(config).unwrap_or_else(|e| {
        eprintln!("Error: invalid config: {e}");
        process::exit(1);
    });

    let text = loader::load_input(&cli.input);
    let program = decode_program(&text).unwrap_or_else(|e| {
        eprintln!("Error: malformed instruction input: {e}");
        process::exit(1);
    });

    sim.run(&program);

    println!("Password (Part 1): {}", sim.stats.endpoint_hits);
    println!("Password (Part 2): {}", sim.stats.click_hits);

    if cli.json {
        match sim.stats.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: could not serialize stats: {e}");
                process::exit(1);
            }
        }
    } else if cli.stats {
        sim.stats.print();
    }
}
