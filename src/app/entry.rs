// SPDX-License-Identifier: MPL-2.0
//! URL entry shown before the player screen opens.

use crate::error::{Error, Result};

/// Text typed into the URL field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlEntry {
    text: String,
}

impl UrlEntry {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Replaces the field contents.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Validates the current contents, see [`submit`].
    pub fn submit(&self) -> Result<String> {
        submit(&self.text)
    }
}

/// Returns the trimmed URL to hand to the player screen.
///
/// # Errors
///
/// Returns [`Error::EmptyUrl`] if nothing but whitespace was entered.
pub fn submit(text: &str) -> Result<String> {
    let url = text.trim();
    if url.is_empty() {
        return Err(Error::EmptyUrl);
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            submit("  https://example.com/video.mp4\n").unwrap(),
            "https://example.com/video.mp4"
        );
    }

    #[test]
    fn blank_entry_is_rejected() {
        assert_eq!(submit(""), Err(Error::EmptyUrl));
        assert_eq!(UrlEntry::new(" \t ").submit(), Err(Error::EmptyUrl));
    }

    #[test]
    fn entry_tracks_edits() {
        let mut entry = UrlEntry::default();
        entry.set_text("rtsp://camera.local/stream");
        assert_eq!(entry.text(), "rtsp://camera.local/stream");
        assert_eq!(entry.submit().unwrap(), "rtsp://camera.local/stream");
    }
}
