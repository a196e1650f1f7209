//! Error definitions.
//!
//! This module defines the error types of the UART model. It provides:
//! 1. **Configuration Errors:** Invalid clock/baud combinations and unreadable config sources.
//! 2. **Frame Errors:** Malformed 10-bit frames handed to the decoder.
//! 3. **Driver Errors:** Bounded waits in the simulator driver that ran out of cycles.
//!
//! Run-time line conditions (framing error, break, request while busy) are not
//! errors: the engines report them as status flags and return to idle.

use std::io;

use thiserror::Error;

/// Errors raised while building or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The system clock frequency was zero.
    #[error("clock frequency must be non-zero")]
    ZeroClock,

    /// The baud rate was zero.
    #[error("baud rate must be non-zero")]
    ZeroBaudRate,

    /// The baud rate leaves fewer than the minimum cycles per bit.
    #[error("baud rate {baud} too high for a {clock_hz} Hz clock ({cycles} cycles per bit, need at least {min})")]
    BaudTooHigh {
        /// Configured clock frequency.
        clock_hz: u64,
        /// Configured baud rate.
        baud: u64,
        /// Resulting cycles per bit.
        cycles: u64,
        /// Minimum usable cycles per bit.
        min: u32,
    },

    /// A baud generator was built with a divisor below the minimum.
    #[error("{0} cycles per bit is below the minimum of {min}", min = crate::common::constants::MIN_CYCLES_PER_BIT)]
    DivisorTooSmall(u32),

    /// The divisor does not fit the 32-bit baud counter.
    #[error("cycles per bit {0} does not fit the baud counter")]
    DivisorOverflow(u64),

    /// The configuration text was not valid JSON for `Config`.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("cannot read configuration: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised when decoding a serialized frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Bit 0 of the frame was high.
    #[error("start bit is high in frame {0:#05x}")]
    StartBitHigh(u16),

    /// Bit 9 of the frame was low.
    #[error("stop bit is low in frame {0:#05x}")]
    StopBitLow(u16),
}

/// Errors raised by the simulator driver.
#[derive(Debug, Error)]
pub enum SimError {
    /// A bounded wait ran out of cycles.
    #[error("timed out after {waited} cycles waiting for {what}")]
    Timeout {
        /// Cycles spent waiting.
        waited: u64,
        /// Condition that never became true.
        what: &'static str,
    },

    /// The receiver discarded a frame while a byte was expected.
    #[error("framing error while waiting for a byte (discarded {0:#04x})")]
    Framing(u8),

    /// The simulator could not be built from its configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
