// SPDX-License-Identifier: MPL-2.0
//! This module handles loading and saving gesture and playback preferences
//! from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gesture]` - Swipe, tap and long-press thresholds
//! - `[playback]` - Double-tap skip interval and seek clamping
//! - `[controls]` - Transport controls and skip indicator timeouts
//!
//! Every field is optional; missing fields take the values in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use tapseek::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.playback.skip_interval_ms = Some(5_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::app::player_screen::ScreenSettings;
use crate::domain::gesture::{DoubleTapWindow, LongPressDelay};
use crate::domain::ui::ControlsTimeout;
use crate::domain::video::SkipInterval;
use crate::error::{Error, Result};
use crate::gesture::GestureConfig;
use crate::video_player::SeekPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Gesture classification thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureSection {
    /// Minimum swipe displacement in pixels.
    #[serde(
        default = "default_swipe_distance_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_distance_px: Option<f32>,

    /// Minimum swipe velocity in pixels per second.
    #[serde(
        default = "default_swipe_velocity",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_velocity_px_per_sec: Option<f32>,

    /// Travel allowed before a press stops being a tap.
    #[serde(
        default = "default_touch_slop_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub touch_slop_px: Option<f32>,

    /// Maximum distance between the two taps of a double-tap.
    #[serde(
        default = "default_double_tap_slop_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_slop_px: Option<f32>,

    /// Multiplier for every pixel threshold (display density).
    #[serde(
        default = "default_density_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub density_scale: Option<f32>,

    /// Double-tap window in milliseconds.
    #[serde(
        default = "default_double_tap_window_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_window_ms: Option<u32>,

    /// Long-press delay in milliseconds.
    #[serde(
        default = "default_long_press_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_press_ms: Option<u32>,
}

impl Default for GestureSection {
    fn default() -> Self {
        Self {
            swipe_distance_px: default_swipe_distance_px(),
            swipe_velocity_px_per_sec: default_swipe_velocity(),
            touch_slop_px: default_touch_slop_px(),
            double_tap_slop_px: default_double_tap_slop_px(),
            density_scale: default_density_scale(),
            double_tap_window_ms: default_double_tap_window_ms(),
            long_press_ms: default_long_press_ms(),
        }
    }
}

/// Seek behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackSection {
    /// Double-tap skip interval in milliseconds.
    #[serde(
        default = "default_skip_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_interval_ms: Option<u32>,

    /// Clamp seek targets to the media duration.
    #[serde(default = "default_clamp_seek", skip_serializing_if = "Option::is_none")]
    pub clamp_seek: Option<bool>,

    /// Start playing as soon as the player is ready.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl Default for PlaybackSection {
    fn default() -> Self {
        Self {
            skip_interval_ms: default_skip_interval_ms(),
            clamp_seek: default_clamp_seek(),
            autoplay: default_autoplay(),
        }
    }
}

/// Transport controls and feedback overlays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsSection {
    /// Auto-hide timeout for controls toggled by a tap in landscape.
    #[serde(
        default = "default_controls_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub landscape_timeout_ms: Option<u32>,

    /// How long the skip indicator stays visible.
    #[serde(
        default = "default_skip_indicator_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_indicator_ms: Option<u32>,
}

impl Default for ControlsSection {
    fn default() -> Self {
        Self {
            landscape_timeout_ms: default_controls_timeout_ms(),
            skip_indicator_ms: default_skip_indicator_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gesture: GestureSection,

    #[serde(default)]
    pub playback: PlaybackSection,

    #[serde(default)]
    pub controls: ControlsSection,
}

impl Config {
    /// Builds validated classifier thresholds from the `[gesture]` section.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a pixel threshold is not positive.
    pub fn gesture_config(&self) -> Result<GestureConfig> {
        let g = &self.gesture;
        let config = GestureConfig {
            swipe_distance_px: g.swipe_distance_px.unwrap_or(DEFAULT_SWIPE_DISTANCE_PX),
            swipe_velocity_px_per_sec: g
                .swipe_velocity_px_per_sec
                .unwrap_or(DEFAULT_SWIPE_VELOCITY_PX_PER_SEC),
            touch_slop_px: g.touch_slop_px.unwrap_or(DEFAULT_TOUCH_SLOP_PX),
            double_tap_slop_px: g.double_tap_slop_px.unwrap_or(DEFAULT_DOUBLE_TAP_SLOP_PX),
            density_scale: g.density_scale.unwrap_or(DEFAULT_DENSITY_SCALE),
            double_tap_window: g
                .double_tap_window_ms
                .map(DoubleTapWindow::new)
                .unwrap_or_default(),
            long_press: g
                .long_press_ms
                .map(LongPressDelay::new)
                .unwrap_or_default(),
        };
        Ok(config.validated()?)
    }

    /// Seek policy from the `[playback]` section.
    #[must_use]
    pub fn seek_policy(&self) -> SeekPolicy {
        SeekPolicy {
            skip_interval: self
                .playback
                .skip_interval_ms
                .map(SkipInterval::new)
                .unwrap_or_default(),
            clamp_to_duration: self.playback.clamp_seek.unwrap_or(true),
        }
    }

    /// Player screen settings from the `[playback]` and `[controls]` sections.
    ///
    /// # Errors
    ///
    /// Propagates invalid gesture thresholds.
    pub fn screen_settings(&self) -> Result<ScreenSettings> {
        Ok(ScreenSettings {
            gesture: self.gesture_config()?,
            seek: self.seek_policy(),
            landscape_controls_timeout: self
                .controls
                .landscape_timeout_ms
                .map(ControlsTimeout::new)
                .unwrap_or_default(),
            skip_indicator_ms: self
                .controls
                .skip_indicator_ms
                .unwrap_or(DEFAULT_SKIP_INDICATOR_MS)
                .max(1),
            autoplay: self.playback.autoplay.unwrap_or(true),
        })
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_swipe_distance_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_DISTANCE_PX)
}

fn default_swipe_velocity() -> Option<f32> {
    Some(DEFAULT_SWIPE_VELOCITY_PX_PER_SEC)
}

fn default_touch_slop_px() -> Option<f32> {
    Some(DEFAULT_TOUCH_SLOP_PX)
}

fn default_double_tap_slop_px() -> Option<f32> {
    Some(DEFAULT_DOUBLE_TAP_SLOP_PX)
}

fn default_density_scale() -> Option<f32> {
    Some(DEFAULT_DENSITY_SCALE)
}

fn default_double_tap_window_ms() -> Option<u32> {
    Some(DEFAULT_DOUBLE_TAP_WINDOW_MS)
}

fn default_long_press_ms() -> Option<u32> {
    Some(DEFAULT_LONG_PRESS_MS)
}

fn default_skip_interval_ms() -> Option<u32> {
    Some(DEFAULT_SKIP_INTERVAL_MS)
}

fn default_clamp_seek() -> Option<bool> {
    Some(true)
}

fn default_autoplay() -> Option<bool> {
    Some(true)
}

fn default_controls_timeout_ms() -> Option<u32> {
    Some(DEFAULT_CONTROLS_TIMEOUT_MS)
}

fn default_skip_indicator_ms() -> Option<u32> {
    Some(DEFAULT_SKIP_INDICATOR_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            gesture: GestureSection {
                swipe_distance_px: Some(150.0),
                density_scale: Some(2.0),
                long_press_ms: Some(800),
                ..GestureSection::default()
            },
            playback: PlaybackSection {
                skip_interval_ms: Some(5_000),
                clamp_seek: Some(false),
                autoplay: Some(false),
            },
            controls: ControlsSection::default(),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(ConfigError::Parse(message))) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_fields_take_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[playback]\nskip_interval_ms = 15000\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.playback.skip_interval_ms, Some(15_000));
        assert_eq!(loaded.playback.clamp_seek, Some(true));
        assert_eq!(loaded.gesture, GestureSection::default());
        assert_eq!(loaded.controls, ControlsSection::default());
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gesture\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn gesture_config_rejects_negative_threshold() {
        let config = Config {
            gesture: GestureSection {
                touch_slop_px: Some(-1.0),
                ..GestureSection::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            config.gesture_config(),
            Err(Error::Config(ConfigError::InvalidThreshold {
                name: "touch_slop_px",
                ..
            }))
        ));
    }

    #[test]
    fn timing_values_are_clamped_into_range() {
        let config = Config {
            gesture: GestureSection {
                double_tap_window_ms: Some(5),
                ..GestureSection::default()
            },
            playback: PlaybackSection {
                skip_interval_ms: Some(u32::MAX),
                ..PlaybackSection::default()
            },
            ..Config::default()
        };
        let gesture = config.gesture_config().expect("valid thresholds");
        assert_eq!(gesture.double_tap_window.value(), MIN_DOUBLE_TAP_WINDOW_MS);
        assert_eq!(
            config.seek_policy().skip_interval.value(),
            MAX_SKIP_INTERVAL_MS
        );
    }

    #[test]
    fn default_config_produces_default_screen_settings() {
        let settings = Config::default()
            .screen_settings()
            .expect("defaults are valid");
        assert_eq!(settings, ScreenSettings::default());
    }
}
