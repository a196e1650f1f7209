//! Component trait for clocked UART blocks.
//!
//! This module defines the `Component` trait implemented by the baud generator,
//! both engines and the transceiver. It provides:
//! 1. **Identification:** `name` for log and report output.
//! 2. **Lifecycle:** Synchronous `reset` back to the power-on state.
//! 3. **Quiescence:** `is_idle` so drivers can wait for a block to settle.
//!
//! Clocking itself is not part of the trait: each block takes different inputs
//! on its rising edge, so `tick` stays an inherent method.

/// A clocked block of the transceiver.
pub trait Component {
    /// Returns a short name for this block (e.g., `"TX"`, `"BAUDGEN"`).
    fn name(&self) -> &str;

    /// Forces the block to its reset state, as an asserted `reset` input would.
    fn reset(&mut self);

    /// Returns `true` when no frame is in flight in this block.
    fn is_idle(&self) -> bool {
        true
    }
}
