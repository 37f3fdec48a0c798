// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Swipe**: Distance and velocity thresholds
//! - **Tap**: Touch slop, double-tap slop and timing windows
//! - **Seek**: Double-tap skip interval
//! - **Controls**: Transport controls and skip indicator timeouts

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Minimum dominant-axis displacement for a swipe (pixels, exclusive).
pub const DEFAULT_SWIPE_DISTANCE_PX: f32 = 100.0;

/// Minimum dominant-axis velocity for a swipe (pixels per second, exclusive).
pub const DEFAULT_SWIPE_VELOCITY_PX_PER_SEC: f32 = 100.0;

// ==========================================================================
// Tap Defaults
// ==========================================================================

/// Maximum travel from the down point for a press to still count as a tap.
pub const DEFAULT_TOUCH_SLOP_PX: f32 = 24.0;

/// Maximum distance between two taps for them to pair into a double-tap.
pub const DEFAULT_DOUBLE_TAP_SLOP_PX: f32 = 100.0;

/// Multiplier applied to every pixel threshold (1.0 = raw pixels).
pub const DEFAULT_DENSITY_SCALE: f32 = 1.0;

/// Default double-tap window (milliseconds).
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u32 = 300;

/// Minimum double-tap window (milliseconds).
pub const MIN_DOUBLE_TAP_WINDOW_MS: u32 = 100;

/// Maximum double-tap window (milliseconds).
pub const MAX_DOUBLE_TAP_WINDOW_MS: u32 = 1_000;

/// Default hold time before a press becomes a long-press (milliseconds).
pub const DEFAULT_LONG_PRESS_MS: u32 = 500;

/// Minimum long-press delay (milliseconds).
pub const MIN_LONG_PRESS_MS: u32 = 200;

/// Maximum long-press delay (milliseconds).
pub const MAX_LONG_PRESS_MS: u32 = 5_000;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default double-tap skip interval (milliseconds).
pub const DEFAULT_SKIP_INTERVAL_MS: u32 = 10_000;

/// Minimum skip interval (milliseconds).
pub const MIN_SKIP_INTERVAL_MS: u32 = 1_000;

/// Maximum skip interval (milliseconds).
pub const MAX_SKIP_INTERVAL_MS: u32 = 120_000;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Auto-hide timeout for transport controls shown by a tap in landscape.
pub const DEFAULT_CONTROLS_TIMEOUT_MS: u32 = 10_000;

/// Maximum controls timeout (milliseconds). Zero means "never hide".
pub const MAX_CONTROLS_TIMEOUT_MS: u32 = 60_000;

/// How long the skip-direction indicator stays visible after a double-tap.
pub const DEFAULT_SKIP_INDICATOR_MS: u32 = 1_000;

/// Horizontal bias of the skip indicator for fast-forward (right side).
pub const SKIP_INDICATOR_BIAS_FORWARD: f32 = 0.75;

/// Horizontal bias of the skip indicator for rewind (left side).
pub const SKIP_INDICATOR_BIAS_REWIND: f32 = 0.25;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SWIPE_DISTANCE_PX > 0.0);
    assert!(DEFAULT_SWIPE_VELOCITY_PX_PER_SEC > 0.0);
    assert!(DEFAULT_TOUCH_SLOP_PX > 0.0);
    assert!(DEFAULT_TOUCH_SLOP_PX < DEFAULT_SWIPE_DISTANCE_PX);
    assert!(DEFAULT_DOUBLE_TAP_SLOP_PX >= DEFAULT_TOUCH_SLOP_PX);
    assert!(DEFAULT_DENSITY_SCALE > 0.0);

    assert!(MIN_DOUBLE_TAP_WINDOW_MS > 0);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS >= MIN_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);

    assert!(MIN_LONG_PRESS_MS > 0);
    assert!(DEFAULT_LONG_PRESS_MS >= MIN_LONG_PRESS_MS);
    assert!(DEFAULT_LONG_PRESS_MS <= MAX_LONG_PRESS_MS);

    assert!(MIN_SKIP_INTERVAL_MS > 0);
    assert!(DEFAULT_SKIP_INTERVAL_MS >= MIN_SKIP_INTERVAL_MS);
    assert!(DEFAULT_SKIP_INTERVAL_MS <= MAX_SKIP_INTERVAL_MS);

    assert!(DEFAULT_CONTROLS_TIMEOUT_MS <= MAX_CONTROLS_TIMEOUT_MS);
    assert!(DEFAULT_SKIP_INDICATOR_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_defaults_are_valid() {
        assert_eq!(DEFAULT_SWIPE_DISTANCE_PX, 100.0);
        assert_eq!(DEFAULT_SWIPE_VELOCITY_PX_PER_SEC, 100.0);
    }

    #[test]
    fn tap_defaults_are_valid() {
        assert_eq!(DEFAULT_DOUBLE_TAP_WINDOW_MS, 300);
        assert_eq!(DEFAULT_LONG_PRESS_MS, 500);
        assert!(DEFAULT_TOUCH_SLOP_PX < DEFAULT_SWIPE_DISTANCE_PX);
    }

    #[test]
    fn seek_defaults_are_valid() {
        assert_eq!(DEFAULT_SKIP_INTERVAL_MS, 10_000);
        assert!(DEFAULT_SKIP_INTERVAL_MS >= MIN_SKIP_INTERVAL_MS);
        assert!(DEFAULT_SKIP_INTERVAL_MS <= MAX_SKIP_INTERVAL_MS);
    }

    #[test]
    fn indicator_biases_sit_on_opposite_halves() {
        assert!(SKIP_INDICATOR_BIAS_REWIND < 0.5);
        assert!(SKIP_INDICATOR_BIAS_FORWARD > 0.5);
    }
}
