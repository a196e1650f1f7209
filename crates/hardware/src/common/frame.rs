//! 8N1 frame codec.
//!
//! A frame is held in the low ten bits of a `u16`, bit 0 first on the line:
//! bit 0 is the start bit (low), bits 1..=8 carry the data byte LSB-first and
//! bit 9 is the stop bit (high).

use super::constants::{
    FRAME_BITS, FRAME_MASK, START_BIT_INDEX, START_LEVEL, STOP_BIT_INDEX, STOP_LEVEL,
};
use super::error::FrameError;

/// Packs `byte` into a 10-bit frame.
#[inline]
pub const fn encode(byte: u8) -> u16 {
    ((byte as u16) << 1) | (1 << STOP_BIT_INDEX)
}

/// Returns the level of frame bit `index` (0 = start, 9 = stop).
#[inline]
pub const fn bit(frame: u16, index: u8) -> bool {
    (frame >> index) & 1 != 0
}

/// Returns the line levels of the frame for `byte`, in transmission order.
pub fn frame_bits(byte: u8) -> [bool; FRAME_BITS as usize] {
    let frame = encode(byte);
    std::array::from_fn(|i| bit(frame, i as u8))
}

/// Unpacks a 10-bit frame.
///
/// # Errors
///
/// Returns [`FrameError::StartBitHigh`] when bit 0 is set and
/// [`FrameError::StopBitLow`] when bit 9 is clear.
pub const fn decode(frame: u16) -> Result<u8, FrameError> {
    let frame = frame & FRAME_MASK;
    if bit(frame, START_BIT_INDEX) != START_LEVEL {
        return Err(FrameError::StartBitHigh(frame));
    }
    if bit(frame, STOP_BIT_INDEX) != STOP_LEVEL {
        return Err(FrameError::StopBitLow(frame));
    }
    Ok((frame >> 1) as u8)
}

/// Packs line levels (start bit first) back into a frame word.
pub fn pack_bits(levels: &[bool]) -> u16 {
    levels
        .iter()
        .take(FRAME_BITS as usize)
        .enumerate()
        .fold(0, |acc, (i, &level)| acc | (u16::from(level) << i))
}
