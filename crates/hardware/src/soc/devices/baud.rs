//! Baud tick generator.
//!
//! Divides the system clock down to the line bit rate. The counter advances by
//! one every clock tick modulo N (cycles per bit); the tick on which it wraps
//! to zero carries a one-cycle enable pulse. Both engines receive the same
//! per-tick [`BaudTick`] snapshot, so the two directions share one bit rate.

use crate::common::constants::MIN_CYCLES_PER_BIT;
use crate::common::error::ConfigError;
use crate::config::UartConfig;
use crate::soc::traits::Component;

/// Snapshot of the generator for one clock tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaudTick {
    /// Baud enable pulse; high on exactly one tick out of every N.
    pub pulse: bool,
    /// The divisor N.
    pub cycles_per_bit: u32,
}

impl BaudTick {
    /// Cycles from a start edge to the start bit's center.
    #[inline]
    pub const fn half_bit(self) -> u32 {
        self.cycles_per_bit / 2
    }
}

/// Modulo-N clock divider.
#[derive(Clone, Debug)]
pub struct BaudGenerator {
    /// Divisor N.
    cycles_per_bit: u32,
    /// Position within the current bit period, `0..N`.
    counter: u32,
}

impl BaudGenerator {
    /// Creates a generator that pulses every `cycles_per_bit` ticks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DivisorTooSmall`] for a divisor below two.
    pub const fn new(cycles_per_bit: u32) -> Result<Self, ConfigError> {
        if cycles_per_bit < MIN_CYCLES_PER_BIT {
            return Err(ConfigError::DivisorTooSmall(cycles_per_bit));
        }
        Ok(Self {
            cycles_per_bit,
            counter: 0,
        })
    }

    /// Creates a generator from a clock/baud configuration.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`UartConfig::cycles_per_bit`].
    pub fn from_config(config: &UartConfig) -> Result<Self, ConfigError> {
        Self::new(config.cycles_per_bit()?)
    }

    /// Returns the divisor N.
    pub const fn cycles_per_bit(&self) -> u32 {
        self.cycles_per_bit
    }

    /// Returns the current counter value.
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    /// Advances the counter by one clock tick and returns this tick's snapshot.
    #[inline]
    pub const fn advance(&mut self) -> BaudTick {
        self.counter = if self.counter + 1 >= self.cycles_per_bit {
            0
        } else {
            self.counter + 1
        };
        BaudTick {
            pulse: self.counter == 0,
            cycles_per_bit: self.cycles_per_bit,
        }
    }
}

impl Component for BaudGenerator {
    fn name(&self) -> &'static str {
        "BAUDGEN"
    }

    fn reset(&mut self) {
        self.counter = 0;
    }
}
