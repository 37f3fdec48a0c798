// SPDX-License-Identifier: MPL-2.0
//! Touch input and gesture intent value types.

use crate::error::ConfigError;

/// One sampled position of a pointer on the touch surface.
///
/// Timestamps are milliseconds on whatever monotonic clock the host uses;
/// only differences between them are meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: i64,
}

impl TouchPoint {
    #[must_use]
    pub fn new(x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self { x, y, timestamp_ms }
    }

    /// Euclidean distance to another point, ignoring time.
    #[must_use]
    pub fn distance_to(&self, other: &TouchPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Milliseconds from `earlier` to `self`. Negative if out of order,
    /// saturating at the `i64` bounds.
    #[must_use]
    pub fn elapsed_since(&self, earlier: &TouchPoint) -> i64 {
        self.timestamp_ms.saturating_sub(earlier.timestamp_ms)
    }
}

/// Low-level pointer events forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(TouchPoint),
    Move(TouchPoint),
    Up(TouchPoint),
    Cancel(TouchPoint),
}

impl PointerEvent {
    /// The sampled point carried by the event.
    #[must_use]
    pub fn point(&self) -> TouchPoint {
        match self {
            PointerEvent::Down(p)
            | PointerEvent::Move(p)
            | PointerEvent::Up(p)
            | PointerEvent::Cancel(p) => *p,
        }
    }
}

/// Direction of a swipe, by sign of the dominant-axis displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// High-level gesture produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// A single tap confirmed after the double-tap window expired.
    Tap,
    /// Second tap of a pair; carries the second press's down point.
    DoubleTap(TouchPoint),
    SwipeLeft,
    SwipeRight,
    /// Upward swipe (toward smaller y).
    SwipeUp,
    /// Downward swipe (toward larger y).
    SwipeDown,
    LongPress,
}

impl Intent {
    /// Builds the swipe intent for a direction.
    #[must_use]
    pub fn swipe(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Intent::SwipeLeft,
            SwipeDirection::Right => Intent::SwipeRight,
            SwipeDirection::Up => Intent::SwipeUp,
            SwipeDirection::Down => Intent::SwipeDown,
        }
    }

    /// Returns the swipe direction if this is a swipe intent.
    #[must_use]
    pub fn swipe_direction(&self) -> Option<SwipeDirection> {
        match self {
            Intent::SwipeLeft => Some(SwipeDirection::Left),
            Intent::SwipeRight => Some(SwipeDirection::Right),
            Intent::SwipeUp => Some(SwipeDirection::Up),
            Intent::SwipeDown => Some(SwipeDirection::Down),
            _ => None,
        }
    }

    /// Short name used in logs and trace output.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Tap => "tap",
            Intent::DoubleTap(_) => "double-tap",
            Intent::SwipeLeft => "swipe-left",
            Intent::SwipeRight => "swipe-right",
            Intent::SwipeUp => "swipe-up",
            Intent::SwipeDown => "swipe-down",
            Intent::LongPress => "long-press",
        }
    }
}

/// Size of the touch-responsive surface, in pixels.
///
/// Always strictly positive in both dimensions; construct with
/// [`SurfaceGeometry::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGeometry {
    width_px: i32,
    height_px: i32,
}

impl SurfaceGeometry {
    /// Validates and creates a surface geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGeometry`] if either dimension is zero
    /// or negative.
    pub fn new(width_px: i32, height_px: i32) -> Result<Self, ConfigError> {
        if width_px <= 0 || height_px <= 0 {
            return Err(ConfigError::InvalidGeometry {
                width: width_px,
                height: height_px,
            });
        }
        Ok(Self {
            width_px,
            height_px,
        })
    }

    #[must_use]
    pub fn width_px(self) -> i32 {
        self.width_px
    }

    #[must_use]
    pub fn height_px(self) -> i32 {
        self.height_px
    }

    /// Horizontal center of the surface.
    #[must_use]
    pub fn midpoint_x(self) -> f32 {
        self.width_px as f32 * 0.5
    }

    /// True when `x` lies strictly right of the midpoint.
    #[must_use]
    pub fn is_right_half(self, x: f32) -> bool {
        x > self.midpoint_x()
    }
}
