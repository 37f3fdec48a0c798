// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no presentation or player concerns.
//!
//! # Modules
//!
//! - [`gesture`]: Touch input and intents ([`TouchPoint`](gesture::TouchPoint),
//!   [`Intent`](gesture::Intent), [`SurfaceGeometry`](gesture::SurfaceGeometry))
//! - [`ui`]: UI value objects ([`ControlsTimeout`](ui::ControlsTimeout),
//!   [`Orientation`](ui::Orientation))
//! - [`video`]: Video playback types ([`PlaybackState`](video::PlaybackState),
//!   [`SkipInterval`](video::SkipInterval))

pub mod gesture;
pub mod ui;
pub mod video;
