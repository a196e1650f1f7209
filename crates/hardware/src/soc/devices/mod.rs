//! Transceiver blocks.
//!
//! This module contains the clocked blocks of the UART: the baud tick
//! generator, the transmit and receive engines, and the transceiver that
//! composes them.

/// Baud tick generator (clock divider).
pub mod baud;

/// Receive engine (deserializer).
pub mod rx;

/// Transmit engine (serializer).
pub mod tx;

/// Transceiver composing the generator and both engines.
pub mod uart;

pub use baud::{BaudGenerator, BaudTick};
pub use rx::{RxEngine, RxEvent, RxState};
pub use tx::{TxEngine, TxEvent, TxState};
pub use uart::Transceiver;

pub use crate::soc::traits::Component;
