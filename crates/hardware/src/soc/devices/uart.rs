//! UART transceiver.
//!
//! Composes the baud generator and both engines behind the flat signal surface
//! of [`UartInputs`] / [`UartOutputs`]. One call to [`Transceiver::tick`] is one
//! rising clock edge: the generator is advanced once and the same
//! [`BaudTick`](super::baud::BaudTick) snapshot is handed to both engines.
//! Outputs are registered, so a strobe applied on one edge shows up in
//! [`Transceiver::outputs`] after that edge.
//!
//! The transmit and receive sides share nothing but the baud snapshot, so
//! full-duplex traffic and an external `txd` to `rxd` loopback work without
//! interference.

use tracing::trace;

use super::baud::BaudGenerator;
use super::rx::{RxEngine, RxEvent};
use super::tx::{TxEngine, TxEvent};
use crate::common::error::ConfigError;
use crate::config::UartConfig;
use crate::soc::signals::{UartInputs, UartOutputs};
use crate::soc::traits::Component;
use crate::stats::UartStats;

/// 8N1 transceiver.
#[derive(Clone, Debug)]
pub struct Transceiver {
    /// Shared bit-rate divider.
    baud: BaudGenerator,
    /// Transmit side.
    tx: TxEngine,
    /// Receive side.
    rx: RxEngine,
    /// Line statistics.
    pub stats: UartStats,
}

impl Transceiver {
    /// Creates a transceiver for the given clock and baud rate.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`UartConfig::cycles_per_bit`].
    pub fn new(config: &UartConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_generator(BaudGenerator::from_config(config)?))
    }

    /// Creates a transceiver with an explicit divisor N.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DivisorTooSmall`] for N below two.
    pub fn with_cycles_per_bit(cycles_per_bit: u32) -> Result<Self, ConfigError> {
        Ok(Self::with_generator(BaudGenerator::new(cycles_per_bit)?))
    }

    fn with_generator(baud: BaudGenerator) -> Self {
        Self {
            baud,
            tx: TxEngine::new(),
            rx: RxEngine::new(),
            stats: UartStats::default(),
        }
    }

    /// Applies one rising clock edge with `inputs` sampled on it.
    pub fn tick(&mut self, inputs: &UartInputs) {
        self.stats.cycles += 1;
        if inputs.reset {
            self.reset();
            return;
        }

        let baud = self.baud.advance();
        if baud.pulse {
            self.stats.baud_ticks += 1;
        }

        match self.tx.tick(inputs.tx_data, inputs.tx_en, baud) {
            Some(TxEvent::Loaded(_)) => self.stats.tx_started += 1,
            Some(TxEvent::Ignored(_)) => self.stats.tx_ignored += 1,
            Some(TxEvent::Completed { dropped }) => {
                self.stats.tx_frames += 1;
                if dropped.is_some() {
                    self.stats.tx_ignored += 1;
                }
            }
            None => {}
        }

        match self.rx.tick(inputs.rxd, inputs.rx_en, baud) {
            Some(RxEvent::Data(_)) => self.stats.rx_frames += 1,
            Some(RxEvent::Break { .. }) => {
                self.stats.rx_frames += 1;
                self.stats.rx_breaks += 1;
            }
            Some(RxEvent::FramingError(_)) => self.stats.rx_framing_errors += 1,
            Some(RxEvent::Glitch) => self.stats.rx_glitches += 1,
            None => {}
        }
    }

    /// Returns all registered outputs.
    pub const fn outputs(&self) -> UartOutputs {
        UartOutputs {
            txd: self.tx.txd(),
            tx_busy: self.tx.busy(),
            rx_data: self.rx.data(),
            rx_valid: self.rx.valid(),
            rx_break: self.rx.brk(),
            rx_framing_error: self.rx.framing_error(),
        }
    }

    /// Returns the serial transmit line.
    pub const fn txd(&self) -> bool {
        self.tx.txd()
    }

    /// Returns `true` while a transmit frame is in flight.
    pub const fn tx_busy(&self) -> bool {
        self.tx.busy()
    }

    /// Returns the last successfully received byte.
    pub const fn rx_data(&self) -> u8 {
        self.rx.data()
    }

    /// Returns the one-tick receive valid pulse.
    pub const fn rx_valid(&self) -> bool {
        self.rx.valid()
    }

    /// Returns the break flag (only high with `rx_valid`).
    pub const fn rx_break(&self) -> bool {
        self.rx.brk()
    }

    /// Returns the one-tick framing error pulse.
    pub const fn rx_framing_error(&self) -> bool {
        self.rx.framing_error()
    }

    /// Returns the divisor N.
    pub const fn cycles_per_bit(&self) -> u32 {
        self.baud.cycles_per_bit()
    }

    /// Returns the baud generator.
    pub const fn baud(&self) -> &BaudGenerator {
        &self.baud
    }

    /// Returns the transmit engine.
    pub const fn tx(&self) -> &TxEngine {
        &self.tx
    }

    /// Returns the receive engine.
    pub const fn rx(&self) -> &RxEngine {
        &self.rx
    }
}

impl Component for Transceiver {
    fn name(&self) -> &'static str {
        "UART0"
    }

    /// Returns every block to its power-on state. Statistics are kept.
    fn reset(&mut self) {
        self.baud.reset();
        self.tx.reset();
        self.rx.reset();
        trace!(
            blocks = ?[self.baud.name(), self.tx.name(), self.rx.name()],
            "uart reset"
        );
    }

    fn is_idle(&self) -> bool {
        self.tx.is_idle() && self.rx.is_idle()
    }
}
