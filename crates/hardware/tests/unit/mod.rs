//! # Unit Components
//!
//! This module serves as the central hub for the block-level tests of the
//! transceiver, its configuration, the simulator driver and statistics.




/// Simulator driver and loopback tests.
pub mod sim;
