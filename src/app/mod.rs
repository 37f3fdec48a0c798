// SPDX-License-Identifier: MPL-2.0
//! Host-facing screens: the URL entry and the player screen.
//!
//! Neither renders anything. The player screen turns pointer events, timer
//! ticks and playback state changes into [`player_screen::Effect`]s, and
//! [`paths`] resolves where the settings file lives.

pub mod entry;
pub mod paths;
pub mod player_screen;

pub use entry::UrlEntry;
pub use player_screen::{Effect, Message, PlayerScreen, ScreenSettings};
