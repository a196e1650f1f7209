//! Simulation driver.
//!
//! Provides a clocked driver around the transceiver: stepping, bounded waits,
//! byte-level send/receive helpers and loopback wiring.

/// Clock-stepping driver and loopback wiring.
pub mod simulator;

pub use simulator::{RxByte, Simulator, Wiring};
