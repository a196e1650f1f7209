//! Receive engine.
//!
//! Reconstructs bytes from `rxd` by sampling at bit centers. The sub-bit
//! counter is restarted on the start edge, so sampling is aligned to the
//! incoming frame rather than to the free-running baud pulse; only the divisor
//! N is taken from the shared [`BaudTick`].
//!
//! `BaudTick::pulse` is never read here: it paces the transmitter only.
//!
//! Timing, with the falling edge seen on tick `t0`:
//! 1. `t0 + N/2`: start bit re-sampled; a high line is a glitch.
//! 2. `t0 + N/2 + k*N` for k = 1..=8: data bit k-1, LSB first.
//! 3. `t0 + N/2 + 9*N`: stop bit; the frame ends here, half a bit before the
//!    earliest possible next start edge.
//!
//! A low stop bit on a non-zero byte is a framing error and the frame is
//! dropped. A low stop bit on an all-zero byte is a break and is published.

use tracing::{debug, trace};

use super::baud::BaudTick;
use crate::common::constants::{DATA_BITS, LINE_IDLE};
use crate::soc::traits::Component;

/// Receive frame state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RxState {
    /// Waiting for a falling edge.
    #[default]
    Idle,
    /// Edge seen; waiting for the start bit's center.
    StartDetect,
    /// Waiting for the center of data bit `bit`.
    Sampling {
        /// Index of the next data bit (0 = LSB).
        bit: u8,
    },
    /// Waiting for the center of the stop bit.
    StopCheck,
}

/// Frame outcomes reported by [`RxEngine::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RxEvent {
    /// A well-formed, non-zero byte was published.
    Data(u8),
    /// An all-zero byte was published with the break flag.
    Break {
        /// The stop bit was also low (a held-low line rather than a NUL byte).
        stop_bit_low: bool,
    },
    /// A non-zero byte arrived with a low stop bit and was dropped.
    FramingError(u8),
    /// The start bit was no longer low at its center.
    Glitch,
}

/// Frame deserializer.
#[derive(Clone, Debug)]
pub struct RxEngine {
    /// Current state.
    state: RxState,
    /// Data bits accumulated so far.
    shift: u8,
    /// Ticks since the last sample point.
    count: u32,
    /// Line level on the previous tick, for edge detection.
    prev_line: bool,
    /// Last published byte.
    data: u8,
    /// Valid pulse register.
    valid: bool,
    /// Break flag register.
    brk: bool,
    /// Framing error pulse register.
    framing_error: bool,
}

impl RxEngine {
    /// Creates an idle receiver.
    pub const fn new() -> Self {
        Self {
            state: RxState::Idle,
            shift: 0,
            count: 0,
            prev_line: LINE_IDLE,
            data: 0,
            valid: false,
            brk: false,
            framing_error: false,
        }
    }

    /// Returns the current state.
    pub const fn state(&self) -> RxState {
        self.state
    }

    /// Returns the last published byte.
    pub const fn data(&self) -> u8 {
        self.data
    }

    /// Returns the data bits of the current or most recent frame, including
    /// one that was dropped on a framing error.
    pub const fn accumulator(&self) -> u8 {
        self.shift
    }

    /// Returns the one-tick valid pulse.
    pub const fn valid(&self) -> bool {
        self.valid
    }

    /// Returns the break flag; only ever high together with `valid`.
    pub const fn brk(&self) -> bool {
        self.brk
    }

    /// Returns the one-tick framing error pulse.
    pub const fn framing_error(&self) -> bool {
        self.framing_error
    }

    /// Advances the engine by one clock tick.
    ///
    /// `rxd` is the line level sampled on this edge; `enable` gates the
    /// detection of new start edges but never aborts a frame in progress.
    pub fn tick(&mut self, rxd: bool, enable: bool, baud: BaudTick) -> Option<RxEvent> {
        self.valid = false;
        self.brk = false;
        self.framing_error = false;

        let event = match self.state {
            RxState::Idle => {
                if enable && self.prev_line && !rxd {
                    self.state = RxState::StartDetect;
                    self.count = 0;
                    trace!("rx start edge");
                }
                None
            }
            RxState::StartDetect => {
                self.count += 1;
                if self.count < baud.half_bit() {
                    None
                } else if rxd {
                    self.state = RxState::Idle;
                    debug!("rx start bit glitch");
                    Some(RxEvent::Glitch)
                } else {
                    self.state = RxState::Sampling { bit: 0 };
                    self.count = 0;
                    self.shift = 0;
                    None
                }
            }
            RxState::Sampling { bit } => {
                self.count += 1;
                if self.count >= baud.cycles_per_bit {
                    self.count = 0;
                    if rxd {
                        self.shift |= 1 << bit;
                    }
                    self.state = if bit + 1 >= DATA_BITS {
                        RxState::StopCheck
                    } else {
                        RxState::Sampling { bit: bit + 1 }
                    };
                }
                None
            }
            RxState::StopCheck => {
                self.count += 1;
                if self.count >= baud.cycles_per_bit {
                    self.state = RxState::Idle;
                    self.count = 0;
                    Some(self.finish(rxd))
                } else {
                    None
                }
            }
        };

        self.prev_line = rxd;
        event
    }

    /// Classifies a completed frame by its stop bit and data.
    fn finish(&mut self, stop_bit: bool) -> RxEvent {
        let byte = self.shift;
        if !stop_bit && byte != 0 {
            self.framing_error = true;
            debug!(byte, "rx framing error, frame dropped");
            return RxEvent::FramingError(byte);
        }

        self.data = byte;
        self.valid = true;
        if byte == 0 {
            self.brk = true;
            debug!(stop_bit, "rx break");
            RxEvent::Break {
                stop_bit_low: !stop_bit,
            }
        } else {
            debug!(byte, "rx byte");
            RxEvent::Data(byte)
        }
    }
}

impl Default for RxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RxEngine {
    fn name(&self) -> &'static str {
        "RX"
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn is_idle(&self) -> bool {
        self.state == RxState::Idle
    }
}
