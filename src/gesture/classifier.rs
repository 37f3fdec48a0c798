// SPDX-License-Identifier: MPL-2.0
//! Single-pointer gesture classifier.
//!
//! Turns `down`/`move`/`up`/`cancel` events and timer firings into
//! [`Intent`]s. Swipes are tested before taps on every release. A tap is not
//! reported straight away: it waits out the double-tap window so a second
//! tap can turn the pair into a [`Intent::DoubleTap`]. Both the deferred tap
//! and the long-press are [`Deadline`]s the host fires through
//! [`GestureClassifier::tick`] or the explicit timeout methods.
//!
//! Malformed sequences (release without press, release timestamped before
//! its press) are logged and dropped; no method here fails.

use crate::domain::gesture::{Intent, PointerEvent, SwipeDirection, TouchPoint};
use crate::error::ConfigError;
use crate::gesture::config::GestureConfig;
use crate::gesture::dispatch::IntentSink;
use crate::gesture::timer::{self, Deadline};
use tracing::{debug, warn};

/// State held while a pointer is down.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureSession {
    down_point: TouchPoint,
    /// Release point of the earlier tap this press may pair with.
    last_tap: Option<TouchPoint>,
    /// Pointer left the touch slop at some point.
    moved: bool,
    long_pressed: bool,
}

/// Classifies one pointer's touch stream into intents.
///
/// Intents are delivered to the sink `S`; the methods that classify also
/// return the intent they produced for convenience.
#[derive(Debug)]
pub struct GestureClassifier<S: IntentSink> {
    config: GestureConfig,
    sink: S,
    session: Option<GestureSession>,
    pending_tap: Option<TouchPoint>,
    tap_deadline: Deadline,
    long_press_deadline: Deadline,
}

impl<S: IntentSink> GestureClassifier<S> {
    /// Creates a classifier with validated thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThreshold`] if a pixel threshold is not
    /// positive and finite.
    pub fn new(config: GestureConfig, sink: S) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.validated()?,
            sink,
            session: None,
            pending_tap: None,
            tap_deadline: Deadline::default(),
            long_press_deadline: Deadline::default(),
        })
    }

    /// Creates a classifier with the default thresholds.
    pub fn with_defaults(sink: S) -> Self {
        Self {
            config: GestureConfig::default(),
            sink,
            session: None,
            pending_tap: None,
            tap_deadline: Deadline::default(),
            long_press_deadline: Deadline::default(),
        }
    }

    /// Feeds one pointer event. Resulting intents go to the sink.
    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => self.on_pointer_down(p),
            PointerEvent::Move(p) => self.on_pointer_move(p),
            PointerEvent::Up(p) => {
                self.on_pointer_up(p);
            }
            PointerEvent::Cancel(p) => self.on_pointer_cancel(p),
        }
    }

    /// Starts a session.
    ///
    /// Cancels the pending-tap deadline. If that tap pairs with this press it
    /// is carried into the session as a double-tap candidate; otherwise it is
    /// confirmed as [`Intent::Tap`] right away.
    pub fn on_pointer_down(&mut self, p: TouchPoint) {
        if let Some(stale) = self.session.take() {
            debug!(
                down_ms = stale.down_point.timestamp_ms,
                "pointer down while a session is active; replacing it"
            );
            self.confirm_held_tap(&stale);
        }

        self.tap_deadline.cancel();
        let last_tap = match self.pending_tap.take() {
            Some(tap) if self.pairs_with(&tap, &p) => Some(tap),
            Some(_) => {
                self.emit(Intent::Tap);
                None
            }
            None => None,
        };

        self.long_press_deadline
            .arm(p.timestamp_ms, self.config.long_press.value());
        self.session = Some(GestureSession {
            down_point: p,
            last_tap,
            moved: false,
            long_pressed: false,
        });
    }

    /// Tracks movement; leaving the touch slop cancels the long-press.
    pub fn on_pointer_move(&mut self, p: TouchPoint) {
        let slop = self.config.touch_slop();
        let Some(session) = self.session.as_mut() else {
            debug!("pointer move without an active session; ignored");
            return;
        };
        if !session.moved && p.distance_to(&session.down_point) > slop {
            session.moved = true;
            self.long_press_deadline.cancel();
        }
    }

    /// Closes the session and classifies it.
    ///
    /// Returns `None` when there is no session, when the release is
    /// timestamped before the press, after a long-press, for a drag too small
    /// or slow to be a swipe, and for a first tap (which is confirmed later).
    pub fn on_pointer_up(&mut self, p: TouchPoint) -> Option<Intent> {
        let Some(session) = self.session.take() else {
            debug!("pointer up without an active session; ignored");
            return None;
        };
        self.long_press_deadline.cancel();

        let elapsed_ms = p.elapsed_since(&session.down_point);
        if elapsed_ms < 0 {
            warn!(elapsed_ms, "pointer up precedes its pointer down; discarded");
            self.confirm_held_tap(&session);
            return None;
        }

        if session.long_pressed {
            return None;
        }

        if let Some(direction) = self.detect_swipe(&session.down_point, &p, elapsed_ms) {
            self.confirm_held_tap(&session);
            return Some(self.emit(Intent::swipe(direction)));
        }

        let within_slop =
            !session.moved && p.distance_to(&session.down_point) <= self.config.touch_slop();
        if !within_slop {
            debug!(elapsed_ms, "drag below swipe thresholds; no intent");
            self.confirm_held_tap(&session);
            return None;
        }

        if session.last_tap.is_some() {
            return Some(self.emit(Intent::DoubleTap(session.down_point)));
        }

        self.pending_tap = Some(p);
        self.tap_deadline
            .arm(p.timestamp_ms, self.config.double_tap_window.value());
        None
    }

    /// Abandons the session. A tap it was pairing with is still confirmed.
    pub fn on_pointer_cancel(&mut self, p: TouchPoint) {
        self.long_press_deadline.cancel();
        if let Some(session) = self.session.take() {
            debug!(cancel_ms = p.timestamp_ms, "session cancelled");
            self.confirm_held_tap(&session);
        }
    }

    /// Fires the long-press for the active session.
    ///
    /// Emits [`Intent::LongPress`] at most once per session and only if the
    /// pointer never left the touch slop. The session's release then emits
    /// nothing.
    pub fn on_long_press_timeout(&mut self) -> Option<Intent> {
        self.long_press_deadline.cancel();
        let session = self.session.as_mut()?;
        if session.moved || session.long_pressed {
            return None;
        }
        session.long_pressed = true;
        if session.last_tap.take().is_some() {
            self.emit(Intent::Tap);
        }
        Some(self.emit(Intent::LongPress))
    }

    /// Confirms the pending single tap, if any.
    pub fn on_tap_timeout(&mut self) -> Option<Intent> {
        self.tap_deadline.cancel();
        self.pending_tap.take()?;
        Some(self.emit(Intent::Tap))
    }

    /// Fires every deadline due at `now_ms`.
    pub fn tick(&mut self, now_ms: i64) {
        if self.tap_deadline.fire(now_ms) {
            self.on_tap_timeout();
        }
        if self.long_press_deadline.fire(now_ms) {
            self.on_long_press_timeout();
        }
    }

    /// Earliest time at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<i64> {
        timer::earliest(&[&self.tap_deadline, &self.long_press_deadline])
    }

    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn has_pending_tap(&self) -> bool {
        self.pending_tap.is_some()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self, intent: Intent) -> Intent {
        debug!(intent = intent.name(), "gesture recognized");
        self.sink.emit(intent);
        intent
    }

    fn confirm_held_tap(&mut self, session: &GestureSession) {
        if session.last_tap.is_some() {
            self.emit(Intent::Tap);
        }
    }

    fn pairs_with(&self, tap: &TouchPoint, down: &TouchPoint) -> bool {
        self.config
            .double_tap_window
            .contains(down.elapsed_since(tap))
            && tap.distance_to(down) <= self.config.double_tap_slop()
    }

    fn detect_swipe(
        &self,
        down: &TouchPoint,
        up: &TouchPoint,
        elapsed_ms: i64,
    ) -> Option<SwipeDirection> {
        let dx = up.x - down.x;
        let dy = up.y - down.y;

        // Ties go to the horizontal axis.
        let horizontal = dx.abs() >= dy.abs();
        let delta = if horizontal { dx } else { dy };
        let displacement = delta.abs();

        if !(displacement > self.config.swipe_distance()) {
            return None;
        }

        let velocity = if elapsed_ms == 0 {
            f32::INFINITY
        } else {
            displacement * 1000.0 / elapsed_ms as f32
        };
        if !(velocity > self.config.swipe_velocity()) {
            return None;
        }

        Some(match (horizontal, delta > 0.0) {
            (true, true) => SwipeDirection::Right,
            (true, false) => SwipeDirection::Left,
            (false, true) => SwipeDirection::Down,
            (false, false) => SwipeDirection::Up,
        })
    }
}
