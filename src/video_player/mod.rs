// SPDX-License-Identifier: MPL-2.0
//! Playback side of the gesture layer.
//!
//! The external player sits behind [`PlaybackController`]; [`seek`] turns
//! double-taps into seek targets for it.

pub mod controller;
pub mod seek;
pub mod simulated;

pub use crate::domain::video::{PlaybackState, SkipInterval};
pub use controller::PlaybackController;
pub use seek::{SeekDirection, SeekPolicy, SeekRequest};
pub use simulated::SimulatedPlayer;
