//! # Error Tests
//!
//! Display text and conversions of configuration, frame and driver errors.

use uartsim_core::common::{ConfigError, FrameError, SimError};

#[test]
fn test_config_error_zero_baud_display() {
    assert_eq!(ConfigError::ZeroBaudRate.to_string(), "baud rate must be non-zero");
}

#[test]
fn test_config_error_baud_too_high_display() {
    let err = ConfigError::BaudTooHigh {
        clock_hz: 100,
        baud: 90,
        cycles: 1,
        min: 2,
    };
    let text = err.to_string();
    assert!(text.contains("baud rate 90"));
    assert!(text.contains("1 cycles per bit"));
}

#[test]
fn test_config_error_divisor_too_small_display() {
    let text = ConfigError::DivisorTooSmall(1).to_string();
    assert!(text.contains("minimum of 2"), "{text}");
}

#[test]
fn test_config_error_from_json_error() {
    let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err: ConfigError = json_err.into();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid configuration"));
}

#[test]
fn test_frame_error_display() {
    assert_eq!(
        FrameError::StopBitLow(0x0AA).to_string(),
        "stop bit is low in frame 0x0aa"
    );
    assert_eq!(
        FrameError::StartBitHigh(0x3FF).to_string(),
        "start bit is high in frame 0x3ff"
    );
}

#[test]
fn test_sim_error_timeout_display() {
    let err = SimError::Timeout {
        waited: 1000,
        what: "rx valid",
    };
    assert_eq!(err.to_string(), "timed out after 1000 cycles waiting for rx valid");
}

#[test]
fn test_sim_error_wraps_config_error() {
    let err: SimError = ConfigError::ZeroClock.into();
    assert!(matches!(err, SimError::Config(ConfigError::ZeroClock)));
    assert_eq!(err.to_string(), "clock frequency must be non-zero");
}
