//! Simulator: owns a transceiver and drives its clock.
//!
//! The simulator is a software driver for the transceiver's signal surface. It
//! provides the operations a firmware loop or test bench performs on the pins:
//! stepping the clock, strobing a byte once the transmitter is free, waiting
//! for a received byte, and optional loopback wiring of `txd` into `rxd`.
//! Every wait is bounded by [`SimConfig::max_wait_cycles`]; the transceiver
//! itself never times out.

use tracing::{debug, info};

use crate::common::error::SimError;
use crate::config::{Config, SimConfig};
use crate::soc::devices::Transceiver;
use crate::soc::signals::{UartInputs, UartOutputs};
use crate::soc::traits::Component;

/// How the receive line is driven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Wiring {
    /// `rxd` comes from the caller's inputs.
    #[default]
    External,
    /// `rxd` is the registered `txd` of the previous tick.
    Loopback,
}

/// A byte published by the receiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RxByte {
    /// Received data.
    pub data: u8,
    /// Break flag sampled with the valid pulse.
    pub brk: bool,
    /// Cycle on which the valid pulse was visible.
    pub cycle: u64,
}

/// Top-level simulator: transceiver plus clock and wiring.
#[derive(Debug)]
pub struct Simulator {
    /// The device under simulation.
    pub uart: Transceiver,
    /// Receive-line wiring.
    pub wiring: Wiring,
    /// Inputs held between ticks; strobes are cleared after each tick.
    inputs: UartInputs,
    /// Driver settings.
    config: SimConfig,
    /// Rising edges applied since construction.
    cycle: u64,
}

impl Simulator {
    /// Creates a simulator with the given configuration and wiring.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the line timing is invalid.
    pub fn new(config: &Config, wiring: Wiring) -> Result<Self, SimError> {
        let uart = Transceiver::new(&config.uart)?;
        info!(
            cycles_per_bit = uart.cycles_per_bit(),
            ?wiring,
            "uart simulator ready"
        );
        Ok(Self::from_transceiver(uart, config.sim, wiring))
    }

    /// Wraps an already built transceiver.
    pub const fn from_transceiver(uart: Transceiver, config: SimConfig, wiring: Wiring) -> Self {
        Self {
            uart,
            wiring,
            inputs: UartInputs::idle(),
            config,
            cycle: 0,
        }
    }

    /// Returns the number of rising edges applied so far.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Returns the transceiver outputs after the last edge.
    pub const fn outputs(&self) -> UartOutputs {
        self.uart.outputs()
    }

    /// Returns the held inputs that the next edge will sample.
    pub const fn inputs(&self) -> &UartInputs {
        &self.inputs
    }

    /// Drives the external receive line (ignored under [`Wiring::Loopback`]).
    pub const fn set_rxd(&mut self, level: bool) {
        self.inputs.rxd = level;
    }

    /// Sets the receive enable.
    pub const fn set_rx_en(&mut self, enabled: bool) {
        self.inputs.rx_en = enabled;
    }

    /// Applies one rising edge and returns the resulting outputs.
    ///
    /// One-tick strobes (`tx_en`, `reset`) are cleared afterwards.
    pub fn step(&mut self) -> UartOutputs {
        if self.wiring == Wiring::Loopback {
            self.inputs.rxd = self.uart.txd();
        }
        self.uart.tick(&self.inputs);
        self.cycle += 1;
        self.inputs.tx_en = false;
        self.inputs.reset = false;
        self.uart.outputs()
    }

    /// Applies `cycles` edges with the held inputs.
    pub fn idle(&mut self, cycles: u64) {
        for _ in 0..cycles {
            let _ = self.step();
        }
    }

    /// Holds reset for `cycles` edges, then releases it.
    pub fn reset(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.inputs.reset = true;
            let _ = self.step();
        }
        debug!(cycle = self.cycle, "reset released");
    }

    /// Steps until `done` holds for the outputs, at most `max_wait_cycles` edges.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Timeout`] naming `what` when the bound is reached.
    pub fn run_until(
        &mut self,
        what: &'static str,
        mut done: impl FnMut(&UartOutputs) -> bool,
    ) -> Result<UartOutputs, SimError> {
        for _ in 0..self.config.max_wait_cycles {
            let out = self.step();
            if done(&out) {
                return Ok(out);
            }
        }
        Err(SimError::Timeout {
            waited: self.config.max_wait_cycles,
            what,
        })
    }

    /// Waits for the transmitter to go idle.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Timeout`] if it stays busy past the bound.
    pub fn wait_tx_idle(&mut self) -> Result<(), SimError> {
        if !self.uart.tx_busy() {
            return Ok(());
        }
        let _ = self.run_until("tx idle", |out| !out.tx_busy)?;
        Ok(())
    }

    /// Waits until the transmitter is free, then strobes `byte` for one edge.
    ///
    /// After this returns `tx_busy` is high.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Timeout`] if the transmitter never frees up.
    pub fn send(&mut self, byte: u8) -> Result<(), SimError> {
        self.wait_tx_idle()?;
        self.inputs.tx_data = byte;
        self.inputs.tx_en = true;
        let _ = self.step();
        debug!(byte, cycle = self.cycle, "tx strobe");
        Ok(())
    }

    /// Waits for the next `rx_valid` pulse.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Framing`] if a frame is dropped first, or
    /// [`SimError::Timeout`] if nothing arrives within the bound.
    pub fn wait_for_rx(&mut self) -> Result<RxByte, SimError> {
        let out = self.run_until("rx valid", |out| out.rx_valid || out.rx_framing_error)?;
        if out.rx_framing_error {
            return Err(SimError::Framing(self.uart.rx().accumulator()));
        }
        Ok(RxByte {
            data: out.rx_data,
            brk: out.rx_break,
            cycle: self.cycle,
        })
    }

    /// Sends each byte and collects what the receiver publishes.
    ///
    /// Per byte: strobe, wait for `rx_valid`, wait for the transmitter to
    /// finish its stop bit, then idle for `inter_byte_gap` cycles. With
    /// [`Wiring::Loopback`] this reproduces `bytes` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first timeout or framing error.
    pub fn transfer(&mut self, bytes: &[u8]) -> Result<Vec<RxByte>, SimError> {
        let mut received = Vec::with_capacity(bytes.len());
        for &byte in bytes {
            self.send(byte)?;
            let rx = self.wait_for_rx()?;
            debug!(sent = byte, got = rx.data, brk = rx.brk, "transfer byte");
            received.push(rx);
            self.wait_tx_idle()?;
            self.idle(self.config.inter_byte_gap);
        }
        info!(
            bytes = received.len(),
            cycles = self.cycle,
            "transfer complete"
        );
        Ok(received)
    }

    /// Returns `true` when neither engine has a frame in flight.
    pub fn is_quiescent(&self) -> bool {
        self.uart.is_idle()
    }
}
