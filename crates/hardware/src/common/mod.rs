//! Common utilities and types used throughout the UART model.
//!
//! This module provides fundamental building blocks shared by all components. It includes:
//! 1. **Constants:** Frame geometry, line levels and reference timing.
//! 2. **Frame Codec:** Packing and unpacking of 10-bit 8N1 frames.
//! 3. **Error Handling:** Configuration, frame and driver error types.

/// Line and frame constants.
pub mod constants;

/// Error types.
pub mod error;

/// 8N1 frame encode/decode helpers.
pub mod frame;

pub use constants::{DATA_BITS, FRAME_BITS, REFERENCE_CYCLES_PER_BIT};
pub use error::{ConfigError, FrameError, SimError};
