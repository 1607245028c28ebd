//! Simulator: owns the configuration and drives both counting modes.
//!
//! The two counting operations share the read-only instruction slice and keep
//! independent private state, so one pass over the program fills the whole
//! statistics structure.

use tracing::debug;

use crate::common::ConfigError;
use crate::config::Config;
use crate::dial::{count_click_hits, count_endpoint_hits};
use crate::instr::Instruction;
use crate::stats::SimStats;

/// Top-level simulator: validated configuration + run statistics.
pub struct Simulator {
    config: Config,
    /// Statistics of the most recent run.
    pub stats: SimStats,
}

impl Simulator {
    /// Creates a simulator for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration violates the dial
    /// invariants (zero modulus, start or target off the dial).
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SimStats::default(),
        })
    }

    /// Returns the configuration the simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the program through both counting modes and records the results.
    ///
    /// Replaces any statistics from a previous run; re-running the same
    /// program yields the same counters.
    pub fn run(&mut self, instructions: &[Instruction]) {
        let Config {
            modulus,
            start,
            target,
        } = self.config;

        debug!(
            instructions = instructions.len(),
            modulus, start, target, "running dial simulation"
        );

        let endpoint = count_endpoint_hits(instructions, modulus, start, target);
        let clicks = count_click_hits(instructions, modulus, start, target);

        self.stats.instructions = instructions.len() as u64;
        self.stats.clicks = instructions.iter().map(|i| u64::from(i.magnitude)).sum();
        self.stats.endpoint_hits = endpoint.hits;
        self.stats.click_hits = clicks.hits;
        self.stats.final_position = endpoint.position;

        debug!(
            endpoint_hits = self.stats.endpoint_hits,
            click_hits = self.stats.click_hits,
            final_position = self.stats.final_position,
            "simulation complete"
        );
    }
}
