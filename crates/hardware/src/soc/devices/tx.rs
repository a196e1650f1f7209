//! Transmit engine.
//!
//! Serializes one byte at a time onto `txd` as an 8N1 frame. The engine moves
//! through three states:
//!
//! * `Idle`: line high; a `tx_en` strobe loads the frame.
//! * `Loading`: frame latched and `tx_busy` raised, waiting for the next baud
//!   pulse to drive the start bit.
//! * `Shifting { bit }`: frame bit `bit` is on the line; each baud pulse
//!   advances to the next bit, and the pulse after the stop bit returns to
//!   `Idle`.
//!
//! Every frame bit therefore holds the line for exactly one baud period. A
//! strobe while busy is dropped and the in-flight frame continues untouched.

use tracing::{debug, trace};

use super::baud::BaudTick;
use crate::common::constants::{LINE_IDLE, STOP_BIT_INDEX};
use crate::common::frame;
use crate::soc::traits::Component;

/// Transmit frame state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TxState {
    /// No frame in flight.
    #[default]
    Idle,
    /// Frame latched; start bit goes out on the next baud pulse.
    Loading,
    /// Frame bit `bit` (0 = start, 9 = stop) is on the line.
    Shifting {
        /// Index of the bit currently driven.
        bit: u8,
    },
}

/// Milestones reported by [`TxEngine::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxEvent {
    /// A frame for this byte was latched.
    Loaded(u8),
    /// A strobe for this byte arrived while busy and was dropped.
    Ignored(u8),
    /// The stop bit finished and the line is idle again.
    Completed {
        /// Byte strobed on the same edge, dropped because `tx_busy` was
        /// still high when it was sampled.
        dropped: Option<u8>,
    },
}

/// Frame serializer.
#[derive(Clone, Debug)]
pub struct TxEngine {
    /// Current state.
    state: TxState,
    /// Latched 10-bit frame.
    frame: u16,
    /// Registered line output.
    txd: bool,
}

impl TxEngine {
    /// Creates an idle transmitter.
    pub const fn new() -> Self {
        Self {
            state: TxState::Idle,
            frame: 0,
            txd: LINE_IDLE,
        }
    }

    /// Returns the current state.
    pub const fn state(&self) -> TxState {
        self.state
    }

    /// Returns the registered `txd` level.
    pub const fn txd(&self) -> bool {
        self.txd
    }

    /// Returns `true` while a frame is latched or shifting.
    pub const fn busy(&self) -> bool {
        !matches!(self.state, TxState::Idle)
    }

    /// Returns the latched frame word (meaningful only while busy).
    pub const fn frame(&self) -> u16 {
        self.frame
    }

    /// Advances the engine by one clock tick.
    ///
    /// `start` is the `tx_en` strobe and `data` the `tx_data` bus sampled on
    /// this edge. A strobe while busy is dropped and reported as
    /// [`TxEvent::Ignored`], or inside [`TxEvent::Completed`] when the stop
    /// bit ends on the same edge.
    pub fn tick(&mut self, data: u8, start: bool, baud: BaudTick) -> Option<TxEvent> {
        let dropped = self.rejects(start).then_some(data);
        if dropped.is_some() {
            debug!(byte = data, state = ?self.state, "tx request ignored while busy");
        }
        match self.state {
            TxState::Idle if start => {
                self.frame = frame::encode(data);
                self.state = TxState::Loading;
                trace!(byte = data, frame = self.frame, "tx frame latched");
                Some(TxEvent::Loaded(data))
            }
            TxState::Loading if baud.pulse => {
                self.txd = frame::bit(self.frame, 0);
                self.state = TxState::Shifting { bit: 0 };
                dropped.map(TxEvent::Ignored)
            }
            TxState::Shifting { bit } if baud.pulse && bit >= STOP_BIT_INDEX => {
                self.txd = LINE_IDLE;
                self.state = TxState::Idle;
                trace!(frame = self.frame, "tx frame complete");
                Some(TxEvent::Completed { dropped })
            }
            TxState::Shifting { bit } if baud.pulse => {
                let next = bit + 1;
                self.txd = frame::bit(self.frame, next);
                self.state = TxState::Shifting { bit: next };
                dropped.map(TxEvent::Ignored)
            }
            TxState::Idle | TxState::Loading | TxState::Shifting { .. } => {
                dropped.map(TxEvent::Ignored)
            }
        }
    }

    /// Returns `true` if a strobe on this edge would be dropped.
    const fn rejects(&self, start: bool) -> bool {
        start && self.busy()
    }
}

impl Default for TxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TxEngine {
    fn name(&self) -> &'static str {
        "TX"
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn is_idle(&self) -> bool {
        !self.busy()
    }
}
