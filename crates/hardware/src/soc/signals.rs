//! Transceiver signal bundles.
//!
//! This module defines the flat pin-level surface of the transceiver. It performs:
//! 1. **Inputs:** Everything sampled on a rising edge (`reset`, `tx_data`, `tx_en`, `rx_en`, `rxd`).
//! 2. **Outputs:** Registered status and line outputs visible after the edge.

use crate::common::constants::LINE_IDLE;

/// Inputs sampled by the transceiver on one rising clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UartInputs {
    /// Synchronous, active-high reset.
    pub reset: bool,
    /// Byte to transmit; latched only when `tx_en` is high and the transmitter is idle.
    pub tx_data: u8,
    /// One-tick transmit strobe.
    pub tx_en: bool,
    /// Receive enable; gates detection of new start bits.
    pub rx_en: bool,
    /// Serial receive line.
    pub rxd: bool,
}

impl UartInputs {
    /// Quiet inputs: no reset, no strobe, receiver enabled, line idle.
    pub const fn idle() -> Self {
        Self {
            reset: false,
            tx_data: 0,
            tx_en: false,
            rx_en: true,
            rxd: LINE_IDLE,
        }
    }

    /// Quiet inputs with the reset line asserted.
    pub const fn reset() -> Self {
        Self {
            reset: true,
            ..Self::idle()
        }
    }

    /// Quiet inputs carrying a transmit strobe for `byte`.
    pub const fn transmit(byte: u8) -> Self {
        Self {
            tx_data: byte,
            tx_en: true,
            ..Self::idle()
        }
    }

    /// Returns a copy with the receive line driven to `level`.
    #[must_use]
    pub const fn with_rxd(self, level: bool) -> Self {
        Self { rxd: level, ..self }
    }

    /// Returns a copy with the receive enable set to `enabled`.
    #[must_use]
    pub const fn with_rx_en(self, enabled: bool) -> Self {
        Self {
            rx_en: enabled,
            ..self
        }
    }
}

impl Default for UartInputs {
    fn default() -> Self {
        Self::idle()
    }
}

/// Registered outputs of the transceiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UartOutputs {
    /// Serial transmit line.
    pub txd: bool,
    /// High while a transmit frame is in flight.
    pub tx_busy: bool,
    /// Last successfully received byte.
    pub rx_data: u8,
    /// One-tick pulse marking `rx_data` as fresh.
    pub rx_valid: bool,
    /// Asserted with `rx_valid` for an all-zero frame.
    pub rx_break: bool,
    /// One-tick pulse for a frame discarded on a low stop bit.
    pub rx_framing_error: bool,
}

impl Default for UartOutputs {
    fn default() -> Self {
        Self {
            txd: LINE_IDLE,
            tx_busy: false,
            rx_data: 0,
            rx_valid: false,
            rx_break: false,
            rx_framing_error: false,
        }
    }
}
