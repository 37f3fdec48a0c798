// SPDX-License-Identifier: MPL-2.0
//! Gesture domain types.
//!
//! Touch samples, pointer events, the intents the classifier produces and
//! the surface geometry used to split the screen into halves.

pub mod newtypes;
pub mod types;

// Re-export commonly used types
pub use newtypes::{DoubleTapWindow, LongPressDelay};
pub use types::{Intent, PointerEvent, SurfaceGeometry, SwipeDirection, TouchPoint};
