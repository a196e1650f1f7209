//! Simulator Driver Tests.
//!
//! Stepping, bounded waits, the send handshake and error reporting of the
//! clock-stepping driver with external wiring.

use pretty_assertions::assert_eq;
use uartsim_core::common::{ConfigError, SimError};
use uartsim_core::config::{Config, SimConfig, UartConfig};
use uartsim_core::sim::{Simulator, Wiring};

use crate::common::harness::init_tracing;
use crate::common::line::LineSource;

/// Sixteen cycles per bit with the given wait bound.
fn fast_config(max_wait_cycles: u64) -> Config {
    Config {
        uart: UartConfig::new(1_600, 100),
        sim: SimConfig {
            max_wait_cycles,
            inter_byte_gap: 0,
            ..SimConfig::default()
        },
    }
}

fn external(config: &Config) -> Simulator {
    init_tracing();
    let mut sim = Simulator::new(config, Wiring::External).unwrap();
    sim.reset(5);
    sim
}

#[test]
fn sim_rejects_invalid_timing() {
    let config = Config {
        uart: UartConfig::new(0, 9_600),
        ..Config::default()
    };
    assert!(matches!(
        Simulator::new(&config, Wiring::External),
        Err(SimError::Config(ConfigError::ZeroClock))
    ));
}

#[test]
fn sim_counts_cycles() {
    let mut sim = external(&fast_config(1_000));
    assert_eq!(sim.cycle(), 5);
    sim.idle(100);
    assert_eq!(sim.cycle(), 105);
    assert_eq!(sim.uart.stats.cycles, 105);
    assert!(sim.is_quiescent());
}

#[test]
fn sim_step_clears_strobes() {
    let mut sim = external(&fast_config(1_000));
    sim.send(0x21).unwrap();
    assert!(!sim.inputs().tx_en);
    assert!(!sim.inputs().reset);
    assert!(sim.outputs().tx_busy);
}

#[test]
fn sim_wait_for_rx_times_out_on_idle_line() {
    let mut sim = external(&fast_config(1_000));
    let err = sim.wait_for_rx().unwrap_err();
    assert!(matches!(
        err,
        SimError::Timeout {
            waited: 1_000,
            what: "rx valid"
        }
    ));
    assert_eq!(sim.cycle(), 1_005);
}

#[test]
fn sim_wait_tx_idle_times_out() {
    let mut sim = external(&fast_config(100));
    sim.send(0x01).unwrap();
    assert!(matches!(
        sim.wait_tx_idle(),
        Err(SimError::Timeout {
            what: "tx idle",
            ..
        })
    ));
}

#[test]
fn sim_send_waits_for_transmitter() {
    let mut sim = external(&fast_config(1_000));
    let before = sim.cycle();
    sim.send(0x12).unwrap();
    sim.send(0x34).unwrap();
    assert!(sim.cycle() - before > 10 * 16);
    assert_eq!(sim.uart.stats.tx_started, 2);
    assert_eq!(sim.uart.stats.tx_frames, 1);
    assert_eq!(sim.uart.stats.tx_ignored, 0);
}

#[test]
fn sim_back_to_back_sends_never_drop() {
    let mut sim = external(&fast_config(1_000));
    for byte in [0xDE, 0xAD, 0xBE, 0xEF] {
        sim.send(byte).unwrap();
    }
    sim.wait_tx_idle().unwrap();
    assert_eq!(sim.uart.stats.tx_frames, 4);
    assert_eq!(sim.uart.stats.tx_ignored, 0);
}

#[test]
fn sim_receives_from_external_line() {
    let mut sim = external(&fast_config(1_000));
    let src = LineSource::new(16);
    for level in src.frame(0xB4) {
        sim.set_rxd(level);
        let _ = sim.step();
    }
    sim.set_rxd(true);
    // The valid pulse already passed at the stop-bit center.
    assert_eq!(sim.outputs().rx_data, 0xB4);
    assert_eq!(sim.uart.stats.rx_frames, 1);
}

#[test]
fn sim_wait_for_rx_reports_cycle() {
    let mut sim = external(&fast_config(1_000));
    let src = LineSource::new(16);
    let wave = src.frame(0x66);
    let (head, _) = wave.split_at(9 * 16);
    for &level in head {
        sim.set_rxd(level);
        let _ = sim.step();
    }
    sim.set_rxd(true);
    let start = sim.cycle();
    let rx = sim.wait_for_rx().unwrap();
    assert_eq!(rx.data, 0x66);
    assert!(!rx.brk);
    // Edge at cycle 6, stop center 8 + 9 * 16 cycles later.
    assert_eq!(rx.cycle, 6 + 152);
    assert!(rx.cycle > start);
}

#[test]
fn sim_wait_for_rx_reports_framing_error() {
    let mut sim = external(&fast_config(1_000));
    let src = LineSource::new(16);
    let wave = src.frame(0x5A);
    let (head, _) = wave.split_at(9 * 16);
    for &level in head {
        sim.set_rxd(level);
        let _ = sim.step();
    }
    sim.set_rxd(false);
    assert!(matches!(sim.wait_for_rx(), Err(SimError::Framing(0x5A))));
    assert_eq!(sim.uart.stats.rx_framing_errors, 1);
}

#[test]
fn sim_rx_disabled_times_out() {
    let mut sim = external(&fast_config(400));
    sim.set_rx_en(false);
    let src = LineSource::new(16);
    for level in src.frame(0x10) {
        sim.set_rxd(level);
        let _ = sim.step();
    }
    sim.set_rxd(true);
    assert!(matches!(sim.wait_for_rx(), Err(SimError::Timeout { .. })));
    assert_eq!(sim.uart.stats.rx_frames, 0);
}
