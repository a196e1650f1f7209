//! Configuration system for the UART model.
//!
//! This module defines the configuration structures used to parameterize the
//! transceiver and its simulator driver. It provides:
//! 1. **Defaults:** Reference clock, baud rate and driver bounds.
//! 2. **Structures:** `UartConfig` for timing, `SimConfig` for the driver and CLI.
//! 3. **Loading:** JSON text or a JSON file, with every field optional.
//!
//! Word length, stop bits and parity are fixed (8N1).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{MIN_CYCLES_PER_BIT, REFERENCE_BAUD, REFERENCE_CLOCK_HZ};
use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// System clock frequency (50 MHz).
    pub const CLOCK_HZ: u64 = super::REFERENCE_CLOCK_HZ;

    /// Line baud rate.
    pub const BAUD_RATE: u64 = super::REFERENCE_BAUD;

    /// Upper bound for any single wait in the simulator driver.
    ///
    /// A frame at the reference rate takes 4340 cycles, so this leaves
    /// room for twenty frames.
    pub const MAX_WAIT_CYCLES: u64 = 100_000;

    /// Idle cycles inserted between bytes of a transfer.
    pub const INTER_BYTE_GAP: u64 = 100;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use uartsim_core::config::Config;
///
/// let json = r#"{
///     "uart": { "clock_hz": 1000000, "baud_rate": 9600 },
///     "sim": { "trace": true }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.uart.cycles_per_bit().unwrap(), 104);
/// assert!(config.sim.trace);
/// assert_eq!(config.sim.max_wait_cycles, 100_000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Line timing.
    #[serde(default)]
    pub uart: UartConfig,
    /// Driver and front-end settings.
    #[serde(default)]
    pub sim: SimConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields,
    /// and any validation error from [`UartConfig::cycles_per_bit`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        let _ = config.uart.cycles_per_bit()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Line timing parameters, fixed for the lifetime of a transceiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UartConfig {
    /// System clock frequency in Hz.
    #[serde(default = "UartConfig::default_clock_hz")]
    pub clock_hz: u64,

    /// Line rate in bits per second.
    #[serde(default = "UartConfig::default_baud_rate")]
    pub baud_rate: u64,
}

impl UartConfig {
    /// Creates a timing configuration.
    pub const fn new(clock_hz: u64, baud_rate: u64) -> Self {
        Self {
            clock_hz,
            baud_rate,
        }
    }

    /// Returns the baud divisor N = `clock_hz / baud_rate` (truncating).
    ///
    /// # Errors
    ///
    /// Fails for a zero clock or baud rate, when N is below two cycles, or
    /// when N does not fit in a `u32`.
    pub fn cycles_per_bit(&self) -> Result<u32, ConfigError> {
        if self.clock_hz == 0 {
            return Err(ConfigError::ZeroClock);
        }
        if self.baud_rate == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }
        let cycles = self.clock_hz / self.baud_rate;
        if cycles < u64::from(MIN_CYCLES_PER_BIT) {
            return Err(ConfigError::BaudTooHigh {
                clock_hz: self.clock_hz,
                baud: self.baud_rate,
                cycles,
                min: MIN_CYCLES_PER_BIT,
            });
        }
        u32::try_from(cycles).map_err(|_| ConfigError::DivisorOverflow(cycles))
    }

    /// Returns the default clock frequency.
    const fn default_clock_hz() -> u64 {
        defaults::CLOCK_HZ
    }

    /// Returns the default baud rate.
    const fn default_baud_rate() -> u64 {
        defaults::BAUD_RATE
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            clock_hz: defaults::CLOCK_HZ,
            baud_rate: defaults::BAUD_RATE,
        }
    }
}

/// Simulator driver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SimConfig {
    /// Emit per-frame trace events (the CLI raises its log filter to `trace`).
    #[serde(default)]
    pub trace: bool,

    /// Cycle bound applied to every driver wait.
    #[serde(default = "SimConfig::default_max_wait_cycles")]
    pub max_wait_cycles: u64,

    /// Idle cycles between bytes of a transfer.
    #[serde(default = "SimConfig::default_inter_byte_gap")]
    pub inter_byte_gap: u64,
}

impl SimConfig {
    /// Returns the default wait bound.
    const fn default_max_wait_cycles() -> u64 {
        defaults::MAX_WAIT_CYCLES
    }

    /// Returns the default inter-byte gap.
    const fn default_inter_byte_gap() -> u64 {
        defaults::INTER_BYTE_GAP
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trace: false,
            max_wait_cycles: defaults::MAX_WAIT_CYCLES,
            inter_byte_gap: defaults::INTER_BYTE_GAP,
        }
    }
}
