// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition for the video surface.
//!
//! ```text
//! host pointer events ─▶ classifier ─▶ IntentSink (Vec / Dispatcher / screen)
//!                           ▲
//!             tick(now) ────┘  (deferred tap, long-press)
//! ```

pub mod classifier;
pub mod config;
pub mod dispatch;
pub mod timer;
pub mod trace;

pub use classifier::GestureClassifier;
pub use config::GestureConfig;
pub use dispatch::{Dispatcher, IntentSink};
pub use timer::Deadline;
