// SPDX-License-Identifier: MPL-2.0
//! Cancellable deadlines on the touch-event timeline.
//!
//! Deferred actions (confirming a lone tap, firing a long-press, hiding the
//! skip indicator) are modelled as a [`Deadline`] that is armed, cancelled,
//! and polled with the host's current time. Nothing here sleeps or spawns;
//! the host decides when to call back, typically at [`Deadline::at`].

/// A single-shot deadline in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deadline {
    at_ms: Option<i64>,
}

impl Deadline {
    /// Arms the deadline `after_ms` after `now_ms`, replacing any previous one.
    pub fn arm(&mut self, now_ms: i64, after_ms: u32) {
        self.at_ms = Some(now_ms.saturating_add(i64::from(after_ms)));
    }

    /// Disarms the deadline. Returns true if it was armed.
    pub fn cancel(&mut self) -> bool {
        self.at_ms.take().is_some()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.at_ms.is_some()
    }

    /// Time at which the deadline fires, if armed.
    #[must_use]
    pub fn at(&self) -> Option<i64> {
        self.at_ms
    }

    /// True if armed and `now_ms` has reached the deadline.
    #[must_use]
    pub fn is_due(&self, now_ms: i64) -> bool {
        self.at_ms.is_some_and(|at| now_ms >= at)
    }

    /// Disarms and returns true if the deadline is due at `now_ms`.
    pub fn fire(&mut self, now_ms: i64) -> bool {
        if self.is_due(now_ms) {
            self.at_ms = None;
            true
        } else {
            false
        }
    }
}

/// Earliest of several optional deadlines.
#[must_use]
pub fn earliest(deadlines: &[&Deadline]) -> Option<i64> {
    deadlines.iter().filter_map(|d| d.at()).min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_disarmed() {
        let deadline = Deadline::default();
        assert!(!deadline.is_armed());
        assert!(!deadline.is_due(i64::MAX));
    }

    #[test]
    fn fires_once_at_or_after_deadline() {
        let mut deadline = Deadline::default();
        deadline.arm(100, 500);
        assert_eq!(deadline.at(), Some(600));
        assert!(!deadline.fire(599));
        assert!(deadline.fire(600));
        assert!(!deadline.fire(700));
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut deadline = Deadline::default();
        deadline.arm(0, 300);
        assert!(deadline.cancel());
        assert!(!deadline.cancel());
        assert!(!deadline.fire(1_000));
    }

    #[test]
    fn rearming_replaces_previous_deadline() {
        let mut deadline = Deadline::default();
        deadline.arm(0, 300);
        deadline.arm(200, 300);
        assert!(!deadline.is_due(300));
        assert!(deadline.is_due(500));
    }

    #[test]
    fn earliest_ignores_disarmed() {
        let mut a = Deadline::default();
        let b = Deadline::default();
        let mut c = Deadline::default();
        a.arm(0, 500);
        c.arm(0, 300);
        assert_eq!(earliest(&[&a, &b, &c]), Some(300));
        assert_eq!(earliest(&[&b]), None);
    }
}
