// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use crate::config::{DEFAULT_SKIP_INTERVAL_MS, MAX_SKIP_INTERVAL_MS, MIN_SKIP_INTERVAL_MS};

// =============================================================================
// SkipInterval
// =============================================================================

/// Distance a double-tap seek jumps forward or backward, in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–120 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipInterval(u32);

impl SkipInterval {
    /// Creates a new skip interval, clamping to valid range.
    #[must_use]
    pub fn new(ms: u32) -> Self {
        Self(ms.clamp(MIN_SKIP_INTERVAL_MS, MAX_SKIP_INTERVAL_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for SkipInterval {
    fn default() -> Self {
        Self(DEFAULT_SKIP_INTERVAL_MS)
    }
}
