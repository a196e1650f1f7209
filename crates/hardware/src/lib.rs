//! UART transceiver model.
//!
//! This crate implements a cycle-accurate model of an 8N1 UART with the following:
//! 1. **Baud generator:** A modulo-N clock divider shared by both directions.
//! 2. **Transmit engine:** Serializes a byte as start bit, 8 data bits LSB-first, stop bit.
//! 3. **Receive engine:** Mid-bit sampling, one-tick valid pulse, break and framing error flags.
//! 4. **Transceiver:** The flat pin-level surface (`tx_data`, `tx_en`, `rx_en`, `rxd`, `txd`, ...).
//! 5. **Simulation:** Configuration, a clock-stepping driver with loopback wiring, and statistics.
//!
//! # Example
//!
//! ```
//! use uartsim_core::config::Config;
//! use uartsim_core::sim::{Simulator, Wiring};
//!
//! let mut sim = Simulator::new(&Config::default(), Wiring::Loopback).unwrap();
//! let received = sim.transfer(&[0x55, 0x00]).unwrap();
//! assert_eq!(received[0].data, 0x55);
//! assert!(received[1].brk);
//! ```

/// Frame constants, codec and error types.
pub mod common;
/// Line timing and driver configuration.
pub mod config;
/// Clock-stepping simulator driver.
pub mod sim;
/// Transceiver blocks and signal bundles.
pub mod soc;
/// Line statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Clock-stepping driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// The transceiver itself.
pub use crate::soc::Transceiver;
