// SPDX-License-Identifier: MPL-2.0
//! Screen orientation.

/// Orientation of the host screen.
///
/// Only used to pick the tap behaviour for the transport controls; seek
/// direction depends on the surface width alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Derives the orientation from surface dimensions (square counts as portrait).
    #[must_use]
    pub fn from_dimensions(width: i32, height: i32) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    #[must_use]
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape)
    }
}
