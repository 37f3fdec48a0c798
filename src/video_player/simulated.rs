// SPDX-License-Identifier: MPL-2.0
//! In-memory player used by the trace replay tool and tests.

use super::controller::PlaybackController;

/// Records calls and keeps a position, without decoding anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulatedPlayer {
    url: Option<String>,
    position_ms: u64,
    duration_ms: Option<u64>,
    play_when_ready: bool,
    playing: bool,
    released: bool,
    seeks: Vec<u64>,
}

impl SimulatedPlayer {
    #[must_use]
    pub fn new(duration_ms: Option<u64>) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Moves the playhead as if playback had advanced.
    pub fn set_position(&mut self, position_ms: u64) {
        self.position_ms = position_ms;
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Every seek target requested so far, oldest first.
    #[must_use]
    pub fn seeks(&self) -> &[u64] {
        &self.seeks
    }
}

impl PlaybackController for SimulatedPlayer {
    fn prepare(&mut self, url: &str) {
        self.url = Some(url.to_string());
        self.released = false;
    }

    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn set_play_when_ready(&mut self, play_when_ready: bool) {
        self.play_when_ready = play_when_ready;
        self.playing = play_when_ready && !self.released;
    }

    fn play_when_ready(&self) -> bool {
        self.play_when_ready
    }

    fn seek_to(&mut self, position_ms: u64) {
        self.seeks.push(position_ms);
        self.position_ms = position_ms;
    }

    fn current_position_ms(&self) -> u64 {
        self.position_ms
    }

    fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }

    fn release(&mut self) {
        self.playing = false;
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_moves_position_and_is_recorded() {
        let mut player = SimulatedPlayer::new(Some(60_000));
        player.seek_to(12_000);
        player.seek_to(2_000);
        assert_eq!(player.current_position_ms(), 2_000);
        assert_eq!(player.seeks(), &[12_000, 2_000]);
    }

    #[test]
    fn prepare_after_release_revives_player() {
        let mut player = SimulatedPlayer::default();
        player.prepare("https://example.com/a.mp4");
        player.release();
        assert!(player.is_released());
        player.prepare("https://example.com/a.mp4");
        assert!(!player.is_released());
        assert_eq!(player.url(), Some("https://example.com/a.mp4"));
    }
}
