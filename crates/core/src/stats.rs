//! Simulation statistics collection and reporting.
//!
//! This module tracks the results of a dial simulation run. It provides:
//! 1. **Counters:** Instructions decoded, total clicks, and per-mode hit counts.
//! 2. **Final state:** The pointer position after the last instruction.
//! 3. **Reporting:** A labeled table on stdout and a JSON export for scripting.

use std::time::Instant;

use serde::Serialize;

/// Statistics for one simulation run.
///
/// Collects the two hit counters together with run-size metrics and host
/// wall-clock time for reporting.
#[derive(Clone, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Number of instructions in the decoded program.
    pub instructions: u64,
    /// Total unit clicks across all instructions (sum of magnitudes).
    pub clicks: u64,
    /// Instructions whose final position landed on the target.
    pub endpoint_hits: u64,
    /// Unit clicks that landed on the target.
    pub click_hits: u64,
    /// Pointer position after the last instruction.
    pub final_position: u32,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions: 0,
            clicks: 0,
            endpoint_hits: 0,
            click_hits: 0,
            final_position: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"counters"`. Pass an empty slice
/// to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "counters"];

impl SimStats {
    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"` or
    /// `"counters"`. Pass an empty slice to print all sections (same as
    /// `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();

        if want("summary") {
            println!("\n==========================================================");
            println!("DIAL SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_instructions         {}", self.instructions);
            println!("sim_clicks               {}", self.clicks);
            println!("----------------------------------------------------------");
        }
        if want("counters") {
            println!("COUNTERS");
            println!("  hits.endpoint          {}", self.endpoint_hits);
            println!("  hits.click             {}", self.click_hits);
            println!("  dial.final_position    {}", self.final_position);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }

    /// Serializes the counters to a pretty-printed JSON string.
    ///
    /// The host start time is not part of the export.
    ///
    /// # Errors
    ///
    /// Returns any `serde_json` serialization error.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
