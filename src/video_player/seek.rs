// SPDX-License-Identifier: MPL-2.0
//! Double-tap seek policy.
//!
//! A double-tap right of the surface midpoint skips forward, anything else
//! rewinds. Targets are clamped to the media range unless clamping is
//! disabled, in which case only the zero floor of the unsigned timeline
//! applies and the player is trusted to clamp the far end.

use crate::config::{SKIP_INDICATOR_BIAS_FORWARD, SKIP_INDICATOR_BIAS_REWIND};
use crate::domain::gesture::{SurfaceGeometry, TouchPoint};
use crate::domain::video::SkipInterval;

/// Which way a double-tap seeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Forward,
    Rewind,
}

impl SeekDirection {
    /// Forward iff the tap lies strictly right of the midpoint.
    #[must_use]
    pub fn from_tap(point: &TouchPoint, geometry: SurfaceGeometry) -> Self {
        if geometry.is_right_half(point.x) {
            Self::Forward
        } else {
            Self::Rewind
        }
    }

    #[must_use]
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }

    /// Horizontal placement of the skip indicator (0.0 = left edge).
    #[must_use]
    pub fn indicator_bias(self) -> f32 {
        match self {
            Self::Forward => SKIP_INDICATOR_BIAS_FORWARD,
            Self::Rewind => SKIP_INDICATOR_BIAS_REWIND,
        }
    }
}

/// A resolved seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekRequest {
    pub direction: SeekDirection,
    pub target_ms: u64,
}

/// Maps double-taps to seek targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekPolicy {
    pub skip_interval: SkipInterval,
    /// Clamp forward seeks to the known duration.
    pub clamp_to_duration: bool,
}

impl Default for SeekPolicy {
    fn default() -> Self {
        Self {
            skip_interval: SkipInterval::default(),
            clamp_to_duration: true,
        }
    }
}

impl SeekPolicy {
    /// Seek target for a skip from `position_ms`.
    #[must_use]
    pub fn target(
        &self,
        position_ms: u64,
        direction: SeekDirection,
        duration_ms: Option<u64>,
    ) -> u64 {
        let skip = u64::from(self.skip_interval.value());
        let target = match direction {
            SeekDirection::Forward => position_ms.saturating_add(skip),
            SeekDirection::Rewind => position_ms.saturating_sub(skip),
        };
        match duration_ms {
            Some(duration) if self.clamp_to_duration => target.min(duration),
            _ => target,
        }
    }

    /// Resolves a double-tap at `point` into a direction and target.
    #[must_use]
    pub fn for_double_tap(
        &self,
        point: &TouchPoint,
        geometry: SurfaceGeometry,
        position_ms: u64,
        duration_ms: Option<u64>,
    ) -> SeekRequest {
        let direction = SeekDirection::from_tap(point, geometry);
        SeekRequest {
            direction,
            target_ms: self.target(position_ms, direction, duration_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> SurfaceGeometry {
        SurfaceGeometry::new(1000, 600).unwrap()
    }

    fn tap_at(x: f32) -> TouchPoint {
        TouchPoint::new(x, 300.0, 0)
    }

    #[test]
    fn just_right_of_midpoint_skips_forward() {
        let request =
            SeekPolicy::default().for_double_tap(&tap_at(501.0), geometry(), 30_000, None);
        assert_eq!(request.direction, SeekDirection::Forward);
        assert_eq!(request.target_ms, 40_000);
    }

    #[test]
    fn just_left_of_midpoint_rewinds() {
        let request =
            SeekPolicy::default().for_double_tap(&tap_at(499.0), geometry(), 30_000, None);
        assert_eq!(request.direction, SeekDirection::Rewind);
        assert_eq!(request.target_ms, 20_000);
    }

    #[test]
    fn exact_midpoint_rewinds() {
        assert_eq!(
            SeekDirection::from_tap(&tap_at(500.0), geometry()),
            SeekDirection::Rewind
        );
    }

    #[test]
    fn rewind_floors_at_zero() {
        let policy = SeekPolicy::default();
        assert_eq!(policy.target(4_000, SeekDirection::Rewind, Some(60_000)), 0);
        let unclamped = SeekPolicy {
            clamp_to_duration: false,
            ..policy
        };
        assert_eq!(unclamped.target(4_000, SeekDirection::Rewind, None), 0);
    }

    #[test]
    fn forward_clamps_to_duration_when_enabled() {
        let policy = SeekPolicy::default();
        assert_eq!(
            policy.target(55_000, SeekDirection::Forward, Some(60_000)),
            60_000
        );
        let unclamped = SeekPolicy {
            clamp_to_duration: false,
            ..policy
        };
        assert_eq!(
            unclamped.target(55_000, SeekDirection::Forward, Some(60_000)),
            65_000
        );
    }

    #[test]
    fn unknown_duration_does_not_clamp_forward() {
        assert_eq!(
            SeekPolicy::default().target(55_000, SeekDirection::Forward, None),
            65_000
        );
    }

    #[test]
    fn custom_skip_interval_is_used() {
        let policy = SeekPolicy {
            skip_interval: SkipInterval::new(5_000),
            ..SeekPolicy::default()
        };
        assert_eq!(policy.target(20_000, SeekDirection::Forward, None), 25_000);
    }

    #[test]
    fn indicator_sits_on_the_tapped_side() {
        assert!(SeekDirection::Forward.indicator_bias() > 0.5);
        assert!(SeekDirection::Rewind.indicator_bias() < 0.5);
    }
}
