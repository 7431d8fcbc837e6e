//! Advisory progress simulation.
//!
//! The percentage runs on its own clock, independent of when the transport
//! actually resolves. It is monotonically non-decreasing and capped at 100;
//! it exists purely for UI feedback.

use std::time::Duration;

/// Fixed tick interval for the simulated progress timer.
pub const TICK_INTERVAL: Duration = Duration::from_millis(400);

/// Smallest per-tick increment, in percentage points.
pub const MIN_INCREMENT: u8 = 3;

/// Largest per-tick increment, in percentage points.
pub const MAX_INCREMENT: u8 = 15;

/// Advance a progress percentage by one randomized tick, capping at 100.
pub fn advance(progress: u8, increment: u8) -> u8 {
    (progress as u16).saturating_add(increment as u16).min(100) as u8
}
