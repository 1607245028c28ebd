//! Configuration system for the dial simulator.
//!
//! This module defines the configuration structure parameterizing a simulation run.
//! It provides:
//! 1. **Defaults:** The baseline dial instance (modulus 100, start 50, target 0).
//! 2. **Validation:** Range checks tying start and target to the dial modulus.
//!
//! Configuration is supplied via JSON (`--config` on the CLI) or use
//! `Config::default()`.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline dial instance when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    /// Number of positions on the dial.
    ///
    /// Positions are numbered `0..MODULUS`; every rotation result is
    /// normalized back into this range.
    pub const MODULUS: u32 = 100;

    /// Position the dial pointer starts at before any instruction runs.
    pub const START: u32 = 50;

    /// Position whose visits are counted.
    pub const TARGET: u32 = 0;
}

/// Root configuration structure for a simulation run.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use dialsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.modulus, 100);
/// assert_eq!(config.start, 50);
/// assert_eq!(config.target, 0);
/// ```
///
/// Deserializing from JSON, with omitted fields falling back to defaults:
///
/// ```
/// use dialsim_core::config::Config;
///
/// let config: Config = serde_json::from_str(r#"{ "start": 0 }"#).unwrap();
/// assert_eq!(config.start, 0);
/// assert_eq!(config.modulus, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Number of positions on the dial; positions run `0..modulus`.
    #[serde(default = "Config::default_modulus")]
    pub modulus: u32,

    /// Initial pointer position, in `[0, modulus)`.
    #[serde(default = "Config::default_start")]
    pub start: u32,

    /// Counted target position, in `[0, modulus)`.
    #[serde(default = "Config::default_target")]
    pub target: u32,
}

impl Config {
    /// Returns the default dial modulus.
    const fn default_modulus() -> u32 {
        defaults::MODULUS
    }

    /// Returns the default starting position.
    const fn default_start() -> u32 {
        defaults::START
    }

    /// Returns the default target position.
    const fn default_target() -> u32 {
        defaults::TARGET
    }

    /// Checks the dial invariants: a non-zero modulus and start/target on the dial.
    ///
    /// Deserialization does not validate; call this before handing the
    /// configuration to the simulator.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first violated invariant.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.modulus == 0 {
            return Err(ConfigError::ZeroModulus);
        }
        if self.start >= self.modulus {
            return Err(ConfigError::StartOutOfRange {
                start: self.start,
                modulus: self.modulus,
            });
        }
        if self.target >= self.modulus {
            return Err(ConfigError::TargetOutOfRange {
                target: self.target,
                modulus: self.modulus,
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modulus: defaults::MODULUS,
            start: defaults::START,
            target: defaults::TARGET,
        }
    }
}
