// SPDX-License-Identifier: MPL-2.0
//! Boundary to the external media player.
//!
//! Decoding, buffering and rendering all live behind [`PlaybackController`].
//! The player screen only ever prepares, starts, pauses, seeks and releases.

/// Operations the player screen needs from the external player.
///
/// State transitions (`Buffering`, `Ready`, `Ended`, `Error`) travel the
/// other way: the host reports them to the screen as
/// [`PlaybackState`](crate::domain::video::PlaybackState) values.
pub trait PlaybackController {
    /// Loads the media at `url`. Failures surface later as an error state.
    fn prepare(&mut self, url: &str);

    fn play(&mut self);

    fn pause(&mut self);

    /// Whether playback starts as soon as the player is ready.
    fn set_play_when_ready(&mut self, play_when_ready: bool);

    fn play_when_ready(&self) -> bool;

    fn seek_to(&mut self, position_ms: u64);

    fn current_position_ms(&self) -> u64;

    /// Media duration, if the player knows it yet.
    fn duration_ms(&self) -> Option<u64>;

    /// Frees the player's resources. Other calls may follow a new `prepare`.
    fn release(&mut self);
}
