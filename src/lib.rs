// SPDX-License-Identifier: MPL-2.0
//! `tapseek` recognises touch gestures on a video surface and maps them onto
//! an external media player.
//!
//! A single-pointer [`gesture::GestureClassifier`] turns `down`/`move`/`up`
//! events into taps, double-taps, swipes and long-presses. The
//! [`app::PlayerScreen`] bridges those intents to a
//! [`video_player::PlaybackController`]: a double-tap skips ten seconds
//! forward or back depending on which half of the surface was tapped, and a
//! single tap shows the transport controls.
//!
//! Decoding, networking and rendering stay with the host.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod gesture;
pub mod video_player;

#[cfg(test)]
mod test_utils;
