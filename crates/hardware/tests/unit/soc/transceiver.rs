//! Transceiver Integration Tests.
//!
//! Reset behaviour, output registers, full-duplex operation and statistics of
//! the composed UART.

use pretty_assertions::assert_eq;
use uartsim_core::Transceiver;
use uartsim_core::common::ConfigError;
use uartsim_core::config::UartConfig;
use uartsim_core::soc::devices::{Component, RxState, TxState};
use uartsim_core::soc::{UartInputs, UartOutputs};

use crate::common::harness::{TestContext, published};
use crate::common::line::{LineSink, LineSource};

#[test]
fn uart_name() {
    let uart = Transceiver::with_cycles_per_bit(434).unwrap();
    assert_eq!(uart.name(), "UART0");
}

#[test]
fn uart_from_reference_config() {
    let uart = Transceiver::new(&UartConfig::default()).unwrap();
    assert_eq!(uart.cycles_per_bit(), 434);
    assert!(uart.is_idle());
}

#[test]
fn uart_rejects_unusable_config() {
    assert!(matches!(
        Transceiver::new(&UartConfig::new(100, 90)),
        Err(ConfigError::BaudTooHigh { .. })
    ));
    assert!(matches!(
        Transceiver::with_cycles_per_bit(1),
        Err(ConfigError::DivisorTooSmall(1))
    ));
}

#[test]
fn uart_outputs_after_reset() {
    let ctx = TestContext::new();
    assert_eq!(ctx.uart.outputs(), UartOutputs::default());
    assert!(ctx.uart.txd());
    assert!(!ctx.uart.tx_busy());
    assert!(!ctx.uart.rx_valid());
    assert!(!ctx.uart.rx_break());
    assert_eq!(ctx.uart.baud().counter(), 0);
}

#[test]
fn uart_reset_holds_everything_idle() {
    let mut uart = Transceiver::with_cycles_per_bit(4).unwrap();
    let held = UartInputs {
        reset: true,
        ..UartInputs::transmit(0x77).with_rxd(false)
    };
    for _ in 0..20 {
        uart.tick(&held);
    }
    assert_eq!(uart.outputs(), UartOutputs::default());
    assert_eq!(uart.tx().state(), TxState::Idle);
    assert_eq!(uart.rx().state(), RxState::Idle);
    assert_eq!(uart.stats.baud_ticks, 0);
    assert_eq!(uart.stats.tx_started, 0);
}

#[test]
fn uart_reset_mid_frame_recovers() {
    let mut ctx = TestContext::with_cycles_per_bit(16);
    let src = LineSource::new(16);
    ctx.inputs.tx_data = 0xE1;
    ctx.inputs.tx_en = true;
    let wave = src.frame(0x3A);
    let _ = ctx.drive_rx(&wave[..80]);
    assert!(!ctx.uart.is_idle());

    ctx.inputs.rxd = true;
    ctx.reset();
    assert!(ctx.uart.is_idle());
    assert!(ctx.uart.txd());

    let mut sink = LineSink::new(16);
    let _ = ctx.strobe(0x1E);
    ctx.capture_tx(&mut sink, 1_000);
    assert_eq!(sink.bytes(), vec![0x1E]);
}

#[test]
fn uart_full_duplex() {
    let mut ctx = TestContext::with_cycles_per_bit(16);
    let src = LineSource::new(16);
    let mut wave = src.frame(0x5A);
    wave.extend(src.idle(3));

    ctx.inputs.tx_data = 0xC3;
    ctx.inputs.tx_en = true;
    let outputs = ctx.drive_rx(&wave);

    let mut sink = LineSink::new(16);
    for out in &outputs {
        sink.observe(out.txd);
    }
    assert_eq!(sink.bytes(), vec![0xC3]);
    assert_eq!(published(&outputs), vec![(0x5A, false)]);
    assert!(!outputs.last().unwrap().tx_busy);
}

#[test]
fn uart_outputs_match_accessors() {
    let mut ctx = TestContext::with_cycles_per_bit(8);
    let _ = ctx.strobe(0x0C);
    for _ in 0..50 {
        let out = ctx.tick();
        assert_eq!(out.txd, ctx.uart.txd());
        assert_eq!(out.tx_busy, ctx.uart.tx_busy());
        assert_eq!(out.rx_data, ctx.uart.rx_data());
    }
}

#[test]
fn uart_framing_error_accessor_tracks_output() {
    let mut ctx = TestContext::with_cycles_per_bit(16);
    let src = LineSource::new(16);
    let mut wave = src.frame_with_stop(0x3C, false);
    wave.extend(src.idle(1));

    let mut pulses = 0;
    for level in wave {
        ctx.inputs.rxd = level;
        let out = ctx.tick();
        assert_eq!(out.rx_framing_error, ctx.uart.rx_framing_error());
        pulses += usize::from(out.rx_framing_error);
    }
    assert_eq!(pulses, 1);
    assert!(!ctx.uart.rx_framing_error());
}

#[test]
fn uart_stats_survive_reset() {
    let mut ctx = TestContext::with_cycles_per_bit(8);
    let mut sink = LineSink::new(8);
    let _ = ctx.strobe(0x44);
    ctx.capture_tx(&mut sink, 1_000);
    let before = ctx.uart.stats.tx_frames;
    ctx.reset();
    assert_eq!(before, 1);
    assert_eq!(ctx.uart.stats.tx_frames, 1);
    assert!(ctx.uart.stats.baud_ticks >= 10);
    assert_eq!(ctx.uart.stats.cycles, ctx.cycle);
}
