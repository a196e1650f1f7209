//! Simulation statistics collection and reporting.
//!
//! This module tracks line activity of a transceiver. It provides:
//! 1. **Time:** Clock cycles and baud pulses elapsed.
//! 2. **Transmit:** Completed frames and strobes dropped while busy.
//! 3. **Receive:** Published frames, breaks, framing errors and start glitches.

use std::time::Instant;

/// Line statistics for one transceiver.
#[derive(Clone, Debug)]
pub struct UartStats {
    start_time: Instant,
    /// Clock ticks elapsed (reset ticks included).
    pub cycles: u64,
    /// Baud enable pulses generated.
    pub baud_ticks: u64,

    /// Frames latched by the transmitter.
    pub tx_started: u64,
    /// Frames whose stop bit completed.
    pub tx_frames: u64,
    /// `tx_en` strobes dropped because the transmitter was busy.
    pub tx_ignored: u64,

    /// Frames published with `rx_valid` (breaks included).
    pub rx_frames: u64,
    /// Published frames flagged as break.
    pub rx_breaks: u64,
    /// Frames dropped on a low stop bit.
    pub rx_framing_errors: u64,
    /// Start edges rejected at mid-bit.
    pub rx_glitches: u64,
}

impl Default for UartStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            baud_ticks: 0,
            tx_started: 0,
            tx_frames: 0,
            tx_ignored: 0,
            rx_frames: 0,
            rx_breaks: 0,
            rx_framing_errors: 0,
            rx_glitches: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"tx"`, `"rx"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "tx", "rx"];

impl UartStats {
    /// Received frames lost to framing errors, as a percentage of all
    /// completed receive frames.
    pub fn rx_error_rate(&self) -> f64 {
        let total = self.rx_frames + self.rx_framing_errors;
        if total == 0 {
            0.0
        } else {
            (self.rx_framing_errors as f64 / total as f64) * 100.0
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`, `"tx"` or
    /// `"rx"`. Pass an empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();

        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.cycles as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("UART SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {khz:.2} kHz");
            println!("baud_ticks               {}", self.baud_ticks);
            println!("----------------------------------------------------------");
        }
        if want("tx") {
            println!("TRANSMIT");
            println!("  tx.started             {}", self.tx_started);
            println!("  tx.frames              {}", self.tx_frames);
            println!("  tx.ignored             {}", self.tx_ignored);
            println!("----------------------------------------------------------");
        }
        if want("rx") {
            println!("RECEIVE");
            println!("  rx.frames              {}", self.rx_frames);
            println!("  rx.breaks              {}", self.rx_breaks);
            println!(
                "  rx.framing_errors      {} ({:.2}%)",
                self.rx_framing_errors,
                self.rx_error_rate()
            );
            println!("  rx.glitches            {}", self.rx_glitches);
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
