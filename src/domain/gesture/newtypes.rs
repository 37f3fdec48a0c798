// SPDX-License-Identifier: MPL-2.0
//! Gesture timing newtypes.
//!
//! This module provides type-safe wrappers for the timing windows used by
//! the gesture classifier, ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_LONG_PRESS_MS, MAX_DOUBLE_TAP_WINDOW_MS,
    MAX_LONG_PRESS_MS, MIN_DOUBLE_TAP_WINDOW_MS, MIN_LONG_PRESS_MS,
};

// =============================================================================
// DoubleTapWindow
// =============================================================================

/// Maximum gap between a tap's release and the next press for the two to
/// pair into a double-tap, in milliseconds (100–1000 ms).
///
/// The same window is the delay before a lone tap is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTapWindow(u32);

impl DoubleTapWindow {
    /// Creates a new double-tap window, clamping to valid range.
    #[must_use]
    pub fn new(ms: u32) -> Self {
        Self(ms.clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// True if a gap of `gap_ms` falls inside the window (strictly shorter).
    #[must_use]
    pub fn contains(self, gap_ms: i64) -> bool {
        gap_ms >= 0 && gap_ms < i64::from(self.0)
    }
}

impl Default for DoubleTapWindow {
    fn default() -> Self {
        Self(DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }
}

// =============================================================================
// LongPressDelay
// =============================================================================

/// How long a pointer must stay down without moving before it becomes a
/// long-press, in milliseconds (200–5000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongPressDelay(u32);

impl LongPressDelay {
    /// Creates a new long-press delay, clamping to valid range.
    #[must_use]
    pub fn new(ms: u32) -> Self {
        Self(ms.clamp(MIN_LONG_PRESS_MS, MAX_LONG_PRESS_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for LongPressDelay {
    fn default() -> Self {
        Self(DEFAULT_LONG_PRESS_MS)
    }
}
