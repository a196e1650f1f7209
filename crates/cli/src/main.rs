//! UART model CLI.
//!
//! This binary is a thin front end over `uartsim-core`. It performs:
//! 1. **Frame:** Print the 8N1 serialization of a byte, start bit first.
//! 2. **Loopback:** Wire `txd` to `rxd`, transfer a byte sequence and report what was received.
//!
//! Configuration comes from built-in defaults, an optional JSON file (`--config`) and
//! command-line overrides for the clock and baud rate.

use std::process;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::error;
use tracing_subscriber::EnvFilter;

use uartsim_core::common::frame;
use uartsim_core::config::Config;
use uartsim_core::sim::{Simulator, Wiring};

/// Sequence used when `loopback` is given no bytes.
const DEFAULT_SEQUENCE: [u8; 6] = [0x00, 0x55, 0xAA, 0xFF, 0x12, 0x34];

#[derive(Parser, Debug)]
#[command(
    name = "uartsim",
    author,
    version,
    about = "Cycle-accurate 8N1 UART model",
    long_about = "Inspect frame serialization or run bytes through a loopback-wired transceiver.\n\nExamples:\n  uartsim frame 0x55\n  uartsim loopback 0x00 0x55 0xAA\n  uartsim --baud 9600 --clock 1000000 loopback --json 1 2 3"
)]
struct Cli {
    /// JSON configuration file (see `Config`).
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// System clock frequency in Hz (overrides the config file).
    #[arg(long, global = true)]
    clock: Option<u64>,

    /// Baud rate (overrides the config file).
    #[arg(long, global = true)]
    baud: Option<u64>,

    /// Enable per-frame trace logging.
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the line levels of a byte's frame.
    Frame {
        /// Byte value (decimal or 0x-prefixed hex).
        #[arg(value_parser = parse_byte)]
        byte: u8,
    },

    /// Transfer bytes through a transceiver with txd wired to rxd.
    Loopback {
        /// Bytes to send (decimal or 0x-prefixed hex); defaults to 00 55 AA FF 12 34.
        #[arg(value_parser = parse_byte)]
        bytes: Vec<u8>,

        /// Print results as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Print line statistics after the transfer.
        #[arg(long)]
        stats: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(2);
    });
    init_tracing(cli.trace || config.sim.trace);

    match cli.command {
        Commands::Frame { byte } => cmd_frame(byte),
        Commands::Loopback { bytes, json, stats } => {
            let bytes = if bytes.is_empty() {
                DEFAULT_SEQUENCE.to_vec()
            } else {
                bytes
            };
            cmd_loopback(&config, &bytes, json, stats);
        }
    }
}

/// Builds the configuration from defaults, the optional file and CLI overrides.
fn load_config(cli: &Cli) -> Result<Config, uartsim_core::common::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(clock) = cli.clock {
        config.uart.clock_hz = clock;
    }
    if let Some(baud) = cli.baud {
        config.uart.baud_rate = baud;
    }
    let _ = config.uart.cycles_per_bit()?;
    Ok(config)
}

/// Installs the fmt subscriber; `RUST_LOG` wins unless `--trace` is given.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prints the frame of `byte`, one level per bit.
fn cmd_frame(byte: u8) {
    let levels: Vec<&str> = frame::frame_bits(byte)
        .iter()
        .map(|&level| if level { "1" } else { "0" })
        .collect();
    println!(
        "{byte:#04x} -> start {} | data {} | stop {}  (frame {:#05x})",
        levels[0],
        levels[1..9].join(" "),
        levels[9],
        frame::encode(byte)
    );
}

/// Runs a loopback transfer and reports each received byte.
fn cmd_loopback(config: &Config, bytes: &[u8], as_json: bool, show_stats: bool) {
    let mut sim = Simulator::new(config, Wiring::Loopback).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(2);
    });
    sim.reset(5);

    let received = match sim.transfer(bytes) {
        Ok(received) => received,
        Err(e) => {
            error!(cycle = sim.cycle(), "loopback failed: {e}");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mismatches = bytes
        .iter()
        .zip(&received)
        .filter(|(sent, got)| **sent != got.data)
        .count();

    if as_json {
        let rows: Vec<_> = bytes
            .iter()
            .zip(&received)
            .map(|(sent, got)| {
                json!({
                    "sent": sent,
                    "received": got.data,
                    "break": got.brk,
                    "cycle": got.cycle,
                })
            })
            .collect();
        let report = json!({
            "cycles_per_bit": sim.uart.cycles_per_bit(),
            "cycles": sim.cycle(),
            "bytes": rows,
            "mismatches": mismatches,
        });
        println!("{report:#}");
    } else {
        println!(
            "Loopback: {} bytes at {} cycles/bit",
            bytes.len(),
            sim.uart.cycles_per_bit()
        );
        for (sent, got) in bytes.iter().zip(&received) {
            let status = if *sent == got.data { "OK" } else { "MISMATCH" };
            let brk = if got.brk { " [break]" } else { "" };
            println!(
                "  sent {sent:#04x}  received {:#04x}{brk}  @ cycle {:<8} {status}",
                got.data, got.cycle
            );
        }
    }

    if show_stats {
        sim.uart.stats.print();
    }
    if mismatches > 0 {
        process::exit(1);
    }
}

/// Parses a byte given in decimal or with a `0x` prefix.
fn parse_byte(text: &str) -> Result<u8, String> {
    let parsed = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .map_or_else(|| text.parse::<u8>(), |hex| u8::from_str_radix(hex, 16));
    parsed.map_err(|e| format!("invalid byte '{text}': {e}"))
}
