//! UART Components.
//!
//! This module organizes the clocked blocks of the transceiver and the signal
//! bundles that form its external surface.

/// Baud generator, transmit/receive engines and the transceiver.
pub mod devices;

/// Pin-level input and output bundles.
pub mod signals;

/// Component trait shared by all clocked blocks.
pub mod traits;

pub use devices::Transceiver;
pub use signals::{UartInputs, UartOutputs};
