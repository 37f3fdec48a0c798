// SPDX-License-Identifier: MPL-2.0
//! Thresholds injected into the gesture classifier at construction.

use crate::config::{
    DEFAULT_DENSITY_SCALE, DEFAULT_DOUBLE_TAP_SLOP_PX, DEFAULT_SWIPE_DISTANCE_PX,
    DEFAULT_SWIPE_VELOCITY_PX_PER_SEC, DEFAULT_TOUCH_SLOP_PX,
};
use crate::domain::gesture::{DoubleTapWindow, LongPressDelay};
use crate::error::ConfigError;

/// Distance, velocity and timing thresholds for gesture classification.
///
/// Pixel thresholds are raw surface pixels multiplied by `density_scale`.
/// With the default scale of 1.0 they are not density-independent; hosts
/// that want dp semantics pass the display density here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Dominant-axis displacement a swipe must exceed.
    pub swipe_distance_px: f32,
    /// Dominant-axis velocity (px/s) a swipe must exceed.
    pub swipe_velocity_px_per_sec: f32,
    /// Travel from the down point beyond which a press is no longer a tap.
    pub touch_slop_px: f32,
    /// Distance between two taps beyond which they do not pair.
    pub double_tap_slop_px: f32,
    pub density_scale: f32,
    pub double_tap_window: DoubleTapWindow,
    pub long_press: LongPressDelay,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_distance_px: DEFAULT_SWIPE_DISTANCE_PX,
            swipe_velocity_px_per_sec: DEFAULT_SWIPE_VELOCITY_PX_PER_SEC,
            touch_slop_px: DEFAULT_TOUCH_SLOP_PX,
            double_tap_slop_px: DEFAULT_DOUBLE_TAP_SLOP_PX,
            density_scale: DEFAULT_DENSITY_SCALE,
            double_tap_window: DoubleTapWindow::default(),
            long_press: LongPressDelay::default(),
        }
    }
}

impl GestureConfig {
    /// Checks every pixel threshold is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThreshold`] naming the first bad field.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let fields = [
            ("swipe_distance_px", self.swipe_distance_px),
            ("swipe_velocity_px_per_sec", self.swipe_velocity_px_per_sec),
            ("touch_slop_px", self.touch_slop_px),
            ("double_tap_slop_px", self.double_tap_slop_px),
            ("density_scale", self.density_scale),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn swipe_distance(&self) -> f32 {
        self.swipe_distance_px * self.density_scale
    }

    #[must_use]
    pub fn swipe_velocity(&self) -> f32 {
        self.swipe_velocity_px_per_sec * self.density_scale
    }

    #[must_use]
    pub fn touch_slop(&self) -> f32 {
        self.touch_slop_px * self.density_scale
    }

    #[must_use]
    pub fn double_tap_slop(&self) -> f32 {
        self.double_tap_slop_px * self.density_scale
    }
}
