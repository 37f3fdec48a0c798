// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use crate::config::{DEFAULT_CONTROLS_TIMEOUT_MS, MAX_CONTROLS_TIMEOUT_MS};

// =============================================================================
// ControlsTimeout
// =============================================================================

/// Auto-hide timeout for the transport controls, in milliseconds.
///
/// Zero is meaningful: controls shown with a zero timeout stay visible
/// until hidden explicitly.
///
/// # Example
///
/// ```
/// use tapseek::domain::ui::ControlsTimeout;
///
/// let timeout = ControlsTimeout::new(5_000);
/// assert_eq!(timeout.value(), 5_000);
///
/// // Values outside range are clamped
/// let too_high = ControlsTimeout::new(600_000);
/// assert_eq!(too_high.value(), 60_000);
/// assert!(ControlsTimeout::NEVER.is_never());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsTimeout(u32);

impl ControlsTimeout {
    /// Controls stay visible until hidden explicitly.
    pub const NEVER: Self = Self(0);

    /// Creates a new controls timeout, clamping to valid range.
    #[must_use]
    pub fn new(ms: u32) -> Self {
        Self(ms.min(MAX_CONTROLS_TIMEOUT_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true if controls never auto-hide.
    #[must_use]
    pub fn is_never(self) -> bool {
        self.0 == 0
    }
}

impl Default for ControlsTimeout {
    fn default() -> Self {
        Self(DEFAULT_CONTROLS_TIMEOUT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_maximum() {
        assert_eq!(
            ControlsTimeout::new(u32::MAX).value(),
            MAX_CONTROLS_TIMEOUT_MS
        );
    }

    #[test]
    fn zero_means_never() {
        assert!(ControlsTimeout::new(0).is_never());
        assert!(ControlsTimeout::NEVER.is_never());
        assert!(!ControlsTimeout::default().is_never());
    }

    #[test]
    fn default_is_ten_seconds() {
        assert_eq!(ControlsTimeout::default().value(), 10_000);
    }
}
