//! Tests for the simulator driver.


/// Driver stepping, waits and timeouts.
pub mod simulator;
