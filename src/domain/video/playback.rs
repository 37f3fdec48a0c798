// SPDX-License-Identifier: MPL-2.0
//! Video playback state machine.
//!
//! This module defines the playback states reported by the external player.

/// Represents the current playback state of the external player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing prepared, or the player was released.
    #[default]
    Idle,
    /// Waiting for enough media to start or continue playing.
    Buffering,
    /// Able to play immediately; whether it does depends on play-when-ready.
    Ready,
    /// Reached the end of the media.
    Ended,
    /// Playback failed. Not retried; the message is shown to the user.
    Error(String),
}

impl PlaybackState {
    /// Returns true while the player is buffering.
    #[must_use]
    pub fn is_buffering(&self) -> bool {
        matches!(self, Self::Buffering)
    }

    /// Returns true if the player can render immediately.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns true if playback reached the end.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Returns the error message if playback failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
