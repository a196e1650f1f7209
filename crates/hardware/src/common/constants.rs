//! Global Line Constants.
//!
//! This module defines the fixed framing parameters of the 8N1 line. It includes:
//! 1. **Frame Geometry:** Data bit count, frame length and bit positions.
//! 2. **Line Levels:** Idle, start and stop levels.
//! 3. **Reference Timing:** The clock and baud rate the model is characterised at.

/// Number of data bits per frame (word length is fixed at 8).
pub const DATA_BITS: u8 = 8;

/// Total bits on the line per frame: start + 8 data + stop.
pub const FRAME_BITS: u8 = 10;

/// Index of the start bit inside a frame.
pub const START_BIT_INDEX: u8 = 0;

/// Index of the stop bit inside a frame.
pub const STOP_BIT_INDEX: u8 = FRAME_BITS - 1;

/// Mask covering the ten valid bits of an encoded frame.
pub const FRAME_MASK: u16 = (1 << FRAME_BITS) - 1;

/// Level of an idle line (mark).
pub const LINE_IDLE: bool = true;

/// Level driven for the start bit (space).
pub const START_LEVEL: bool = false;

/// Level driven for the stop bit (mark).
pub const STOP_LEVEL: bool = true;

/// Reference system clock frequency (50 MHz).
pub const REFERENCE_CLOCK_HZ: u64 = 50_000_000;

/// Reference baud rate.
pub const REFERENCE_BAUD: u64 = 115_200;

/// Clock cycles per bit at the reference clock and baud (50 MHz / 115200).
pub const REFERENCE_CYCLES_PER_BIT: u32 = 434;

/// Smallest usable divisor: a half-bit delay must last at least one cycle.
pub const MIN_CYCLES_PER_BIT: u32 = 2;
