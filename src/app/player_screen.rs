// SPDX-License-Identifier: MPL-2.0
//! Player screen: bridges classified gestures to the external player.
//!
//! The screen owns a [`GestureClassifier`] and the player behind
//! [`PlaybackController`]. It renders nothing; visible changes are returned
//! as [`Effect`]s for the host to apply. Deferred work (tap confirmation,
//! long-press, skip indicator and controls auto-hide) runs from
//! [`PlayerScreen::tick`], which the host calls at [`PlayerScreen::next_deadline`].

use crate::app::entry;
use crate::config::DEFAULT_SKIP_INDICATOR_MS;
use crate::domain::gesture::{Intent, PointerEvent, SurfaceGeometry, TouchPoint};
use crate::domain::ui::{ControlsTimeout, Orientation};
use crate::domain::video::PlaybackState;
use crate::error::Result;
use crate::gesture::timer::{self, Deadline};
use crate::gesture::{GestureClassifier, GestureConfig};
use crate::video_player::{PlaybackController, SeekDirection, SeekPolicy, SeekRequest};
use tracing::{debug, info, warn};

/// Behaviour knobs for the screen, usually built from the settings file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSettings {
    pub gesture: GestureConfig,
    pub seek: SeekPolicy,
    /// Auto-hide timeout for controls toggled by a tap in landscape.
    pub landscape_controls_timeout: ControlsTimeout,
    pub skip_indicator_ms: u32,
    /// Initial play-when-ready.
    pub autoplay: bool,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            seek: SeekPolicy::default(),
            landscape_controls_timeout: ControlsTimeout::default(),
            skip_indicator_ms: DEFAULT_SKIP_INDICATOR_MS,
            autoplay: true,
        }
    }
}

/// Inputs to the screen, mirroring the host's lifecycle and event callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Start,
    Resume,
    Pause,
    Stop,
    Pointer(PointerEvent),
    Tick(i64),
    PlaybackStateChanged(PlaybackState),
    ConfigurationChanged {
        orientation: Orientation,
        geometry: SurfaceGeometry,
    },
}

/// Changes the host must apply to its views.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The player was asked to seek.
    Seek(SeekRequest),
    /// Show the transport controls; they hide themselves after `timeout`.
    ShowControls { timeout: ControlsTimeout },
    HideControls,
    /// Show the skip indicator at `bias` (0.0 left edge, 1.0 right edge).
    ShowSkipIndicator { direction: SeekDirection, bias: f32 },
    HideSkipIndicator,
    /// Buffering spinner visibility.
    ProgressVisible(bool),
    /// Hide system bars and go fullscreen.
    EnterImmersive,
    /// Leave the screen, showing `message` to the user.
    Close { message: String },
}

/// Gesture and lifecycle state of one playback screen.
#[derive(Debug)]
pub struct PlayerScreen<P: PlaybackController> {
    url: String,
    geometry: SurfaceGeometry,
    orientation: Orientation,
    settings: ScreenSettings,
    classifier: GestureClassifier<Vec<Intent>>,
    player: P,
    released: bool,
    resume_position_ms: u64,
    play_when_ready: bool,
    playback_state: PlaybackState,
    playing: bool,
    controls_visible: bool,
    controls_deadline: Deadline,
    skip_indicator: Option<SeekDirection>,
    skip_indicator_deadline: Deadline,
}

impl<P: PlaybackController> PlayerScreen<P> {
    /// Creates a screen for `url`. The player stays released until
    /// [`start`](Self::start) or [`resume`](Self::resume).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyUrl`](crate::error::Error::EmptyUrl) for a blank
    /// URL and a configuration error for invalid gesture thresholds.
    pub fn new(
        url: &str,
        geometry: SurfaceGeometry,
        orientation: Orientation,
        player: P,
        settings: ScreenSettings,
    ) -> Result<Self> {
        let url = entry::submit(url)?;
        let classifier = GestureClassifier::new(settings.gesture, Vec::new())?;
        Ok(Self {
            url,
            geometry,
            orientation,
            settings,
            classifier,
            player,
            released: true,
            resume_position_ms: 0,
            play_when_ready: settings.autoplay,
            playback_state: PlaybackState::Idle,
            playing: false,
            controls_visible: false,
            controls_deadline: Deadline::default(),
            skip_indicator: None,
            skip_indicator_deadline: Deadline::default(),
        })
    }

    /// Handles one message.
    pub fn handle(&mut self, msg: Message) -> Vec<Effect> {
        match msg {
            Message::Start => {
                self.start();
                Vec::new()
            }
            Message::Resume => vec![self.resume()],
            Message::Pause => {
                self.pause();
                Vec::new()
            }
            Message::Stop => {
                self.stop();
                Vec::new()
            }
            Message::Pointer(event) => self.on_pointer(event),
            Message::Tick(now_ms) => self.tick(now_ms),
            Message::PlaybackStateChanged(state) => match self.on_playback_state(state) {
                Effect::None => Vec::new(),
                effect => vec![effect],
            },
            Message::ConfigurationChanged {
                orientation,
                geometry,
            } => vec![self.on_configuration_changed(orientation, geometry)],
        }
    }

    /// Prepares the player if it is released.
    pub fn start(&mut self) {
        self.initialize_player();
    }

    /// Prepares the player if needed and requests immersive mode.
    pub fn resume(&mut self) -> Effect {
        self.initialize_player();
        Effect::EnterImmersive
    }

    /// Releases the player, keeping the resume point.
    pub fn pause(&mut self) {
        self.release_player();
    }

    /// Releases the player, keeping the resume point.
    pub fn stop(&mut self) {
        self.release_player();
    }

    /// Feeds a pointer event to the classifier and bridges any intents.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Vec<Effect> {
        let now_ms = event.point().timestamp_ms;
        self.classifier.handle(event);
        self.bridge_intents(now_ms)
    }

    /// Fires every deadline due at `now_ms`.
    pub fn tick(&mut self, now_ms: i64) -> Vec<Effect> {
        self.classifier.tick(now_ms);
        let mut effects = self.bridge_intents(now_ms);

        if self.skip_indicator_deadline.fire(now_ms) && self.skip_indicator.take().is_some() {
            effects.push(Effect::HideSkipIndicator);
        }
        if self.controls_deadline.fire(now_ms) && self.controls_visible {
            self.controls_visible = false;
            effects.push(Effect::HideControls);
        }
        effects
    }

    /// Earliest time at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<i64> {
        let screen = timer::earliest(&[&self.controls_deadline, &self.skip_indicator_deadline]);
        match (self.classifier.next_deadline(), screen) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Reacts to a state change reported by the player.
    pub fn on_playback_state(&mut self, state: PlaybackState) -> Effect {
        let effect = if state.is_buffering() {
            Effect::ProgressVisible(true)
        } else if state.is_ready() {
            self.playing = self.player.play_when_ready();
            debug!(playing = self.playing, "player ready");
            Effect::ProgressVisible(false)
        } else if state.is_ended() {
            self.playing = false;
            Effect::None
        } else if let Some(message) = state.error_message() {
            warn!(url = %self.url, error = %message, "playback failed");
            self.release_player();
            Effect::Close {
                message: format!("Failed to play media Error: {}", message),
            }
        } else {
            Effect::None
        };
        self.playback_state = state;
        effect
    }

    /// Applies a rotation or resize of the surface.
    pub fn on_configuration_changed(
        &mut self,
        orientation: Orientation,
        geometry: SurfaceGeometry,
    ) -> Effect {
        self.orientation = orientation;
        self.geometry = geometry;
        Effect::EnterImmersive
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn settings(&self) -> &ScreenSettings {
        &self.settings
    }

    #[must_use]
    pub fn playback_state(&self) -> &PlaybackState {
        &self.playback_state
    }

    /// Whether the player was playing when it last reported `Ready`.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Position restored on the next initialisation.
    #[must_use]
    pub fn resume_position_ms(&self) -> u64 {
        self.resume_position_ms
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Side of the visible skip indicator, if shown.
    #[must_use]
    pub fn skip_indicator(&self) -> Option<SeekDirection> {
        self.skip_indicator
    }

    pub fn controller(&self) -> &P {
        &self.player
    }

    pub fn controller_mut(&mut self) -> &mut P {
        &mut self.player
    }

    fn initialize_player(&mut self) {
        if !self.released {
            return;
        }
        self.player.prepare(&self.url);
        if self.resume_position_ms > 0 {
            self.player.seek_to(self.resume_position_ms);
        }
        self.player.set_play_when_ready(self.play_when_ready);
        self.released = false;
        debug!(url = %self.url, position_ms = self.resume_position_ms, "player initialised");
    }

    fn release_player(&mut self) {
        if self.released {
            return;
        }
        self.resume_position_ms = self.player.current_position_ms();
        self.play_when_ready = self.player.play_when_ready();
        self.player.release();
        self.released = true;
        self.playing = false;
        debug!(position_ms = self.resume_position_ms, "player released");
    }

    fn bridge_intents(&mut self, now_ms: i64) -> Vec<Effect> {
        let intents = std::mem::take(self.classifier.sink_mut());
        let mut effects = Vec::new();
        for intent in intents {
            match intent {
                Intent::DoubleTap(point) => self.on_double_tap(&point, now_ms, &mut effects),
                Intent::Tap => effects.push(self.on_tap(now_ms)),
                Intent::LongPress => info!("long press"),
                swipe => {
                    if let Some(direction) = swipe.swipe_direction() {
                        info!(direction = direction.as_str(), "swipe");
                    }
                }
            }
        }
        effects
    }

    fn on_double_tap(&mut self, point: &TouchPoint, now_ms: i64, effects: &mut Vec<Effect>) {
        if self.released {
            debug!("double tap while the player is released; ignored");
            return;
        }
        let request = self.settings.seek.for_double_tap(
            point,
            self.geometry,
            self.player.current_position_ms(),
            self.player.duration_ms(),
        );
        self.player.seek_to(request.target_ms);
        self.skip_indicator = Some(request.direction);
        self.skip_indicator_deadline
            .arm(now_ms, self.settings.skip_indicator_ms);

        effects.push(Effect::Seek(request));
        effects.push(Effect::ShowSkipIndicator {
            direction: request.direction,
            bias: request.direction.indicator_bias(),
        });
    }

    fn on_tap(&mut self, now_ms: i64) -> Effect {
        match self.orientation {
            Orientation::Landscape if self.controls_visible => {
                self.controls_visible = false;
                self.controls_deadline.cancel();
                Effect::HideControls
            }
            Orientation::Landscape => {
                let timeout = self.settings.landscape_controls_timeout;
                self.show_controls(timeout, now_ms)
            }
            Orientation::Portrait => self.show_controls(ControlsTimeout::NEVER, now_ms),
        }
    }

    fn show_controls(&mut self, timeout: ControlsTimeout, now_ms: i64) -> Effect {
        self.controls_visible = true;
        self.controls_deadline.cancel();
        if !timeout.is_never() {
            self.controls_deadline.arm(now_ms, timeout.value());
        }
        Effect::ShowControls { timeout }
    }
}
