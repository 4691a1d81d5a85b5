// SPDX-License-Identifier: MPL-2.0
//! This module handles the site's settings, loaded from a `settings.toml`
//! file in the config directory.
//!
//! # Configuration Sections
//!
//! - `[assets]` - Where gallery images and the audio track are read from
//! - `[gallery]` - Thumbnail window size, startup preload, transition dimming
//! - `[lightbox]` - Swipe threshold
//! - `[display]` - Mobile layout breakpoint
//! - `[cache]` - Decoded image cache bounds
//! - `[audio]` - Background track and volume
//!
//! Every key is optional; missing keys take the values in [`defaults`], and
//! out-of-range values are clamped by the accessor methods.
//!
//! # Examples
//!
//! ```no_run
//! use merkaba_site::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings not loaded: {key}");
//! }
//! assert!(config.gallery.window_size() >= 1);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing settings file cannot be parsed.
pub const WARNING_CONFIG_LOAD: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Asset location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfig {
    /// Root directory for `gallery/` and `audio/`.
    #[serde(default = "default_assets_root", skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_assets_root(),
        }
    }
}

impl AssetsConfig {
    #[must_use]
    pub fn root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_ROOT))
    }
}

/// Thumbnail strip settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Thumbnails shown per gallery.
    #[serde(default = "default_window_size", skip_serializing_if = "Option::is_none")]
    pub window_size: Option<usize>,

    /// Images per gallery decoded at startup.
    #[serde(
        default = "default_startup_preload",
        skip_serializing_if = "Option::is_none"
    )]
    pub startup_preload: Option<usize>,

    /// Opacity while a rotation is loading.
    #[serde(
        default = "default_transition_opacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_opacity: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            startup_preload: default_startup_preload(),
            transition_opacity: default_transition_opacity(),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
            .unwrap_or(DEFAULT_WINDOW_SIZE)
            .clamp(MIN_WINDOW_SIZE, MAX_WINDOW_SIZE)
    }

    #[must_use]
    pub fn startup_preload(&self) -> usize {
        self.startup_preload
            .unwrap_or(DEFAULT_STARTUP_PRELOAD)
            .min(MAX_STARTUP_PRELOAD)
    }

    #[must_use]
    pub fn transition_opacity(&self) -> f32 {
        self.transition_opacity
            .unwrap_or(DEFAULT_TRANSITION_OPACITY)
            .clamp(0.0, 1.0)
    }
}

/// Lightbox gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Minimum horizontal travel for a swipe, in logical pixels.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold(),
        }
    }
}

impl LightboxConfig {
    #[must_use]
    pub fn swipe_threshold_px(&self) -> f32 {
        self.swipe_threshold_px
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)
            .clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Width under which the mobile menu replaces the navigation bar.
    #[serde(
        default = "default_mobile_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_breakpoint_px: Option<u32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: default_mobile_breakpoint(),
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn mobile_breakpoint_px(&self) -> u32 {
        self.mobile_breakpoint_px
            .unwrap_or(DEFAULT_MOBILE_BREAKPOINT_PX)
    }
}

/// Decoded image cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    /// Number of decoded images kept.
    #[serde(default = "default_max_images", skip_serializing_if = "Option::is_none")]
    pub max_images: Option<usize>,

    /// Longest edge images are scaled to after decoding.
    #[serde(
        default = "default_max_decoded_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_decoded_dimension: Option<u32>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_images: default_max_images(),
            max_decoded_dimension: default_max_decoded_dimension(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub fn max_images(&self) -> usize {
        self.max_images
            .unwrap_or(DEFAULT_MAX_CACHED_IMAGES)
            .clamp(MIN_MAX_CACHED_IMAGES, MAX_MAX_CACHED_IMAGES)
    }

    #[must_use]
    pub fn max_decoded_dimension(&self) -> u32 {
        self.max_decoded_dimension
            .unwrap_or(DEFAULT_MAX_DECODED_DIMENSION)
            .clamp(MIN_MAX_DECODED_DIMENSION, MAX_MAX_DECODED_DIMENSION)
    }
}

/// Background audio settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioConfig {
    /// Track path relative to the assets root.
    #[serde(default = "default_audio_track", skip_serializing_if = "Option::is_none")]
    pub track: Option<PathBuf>,

    /// Playback volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            track: default_audio_track(),
            volume: default_volume(),
        }
    }
}

impl AudioConfig {
    #[must_use]
    pub fn track(&self) -> PathBuf {
        self.track
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_AUDIO_TRACK))
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.volume
            .unwrap_or(DEFAULT_VOLUME)
            .clamp(MIN_VOLUME, MAX_VOLUME)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Site configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub audio: AudioConfig,
}

impl Config {
    /// Absolute or working-directory-relative path of the audio track.
    #[must_use]
    pub fn audio_track_path(&self) -> PathBuf {
        self.assets.root().join(self.audio.track())
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_assets_root() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_ASSETS_ROOT))
}

fn default_window_size() -> Option<usize> {
    Some(DEFAULT_WINDOW_SIZE)
}

fn default_startup_preload() -> Option<usize> {
    Some(DEFAULT_STARTUP_PRELOAD)
}

fn default_transition_opacity() -> Option<f32> {
    Some(DEFAULT_TRANSITION_OPACITY)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_mobile_breakpoint() -> Option<u32> {
    Some(DEFAULT_MOBILE_BREAKPOINT_PX)
}

fn default_max_images() -> Option<usize> {
    Some(DEFAULT_MAX_CACHED_IMAGES)
}

fn default_max_decoded_dimension() -> Option<u32> {
    Some(DEFAULT_MAX_DECODED_DIMENSION)
}

fn default_audio_track() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_AUDIO_TRACK))
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable one yields the defaults plus
/// [`WARNING_CONFIG_LOAD`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to default settings");
            (Config::default(), Some(WARNING_CONFIG_LOAD.to_string()))
        }
    }
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
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.gallery.window_size(), 4);
        assert_eq!(config.gallery.startup_preload(), 6);
        assert!((config.gallery.transition_opacity() - 0.3).abs() < f32::EPSILON);
        assert!((config.lightbox.swipe_threshold_px() - 50.0).abs() < f32::EPSILON);
        assert_eq!(config.display.mobile_breakpoint_px(), 1150);
        assert_eq!(config.cache.max_images(), 48);
        assert!((config.audio.volume() - 0.25).abs() < f32::EPSILON);
        assert_eq!(
            config.audio_track_path(),
            PathBuf::from("assets").join("audio/background.mp3")
        );
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.assets.root = Some(PathBuf::from("/srv/merkaba"));
        config.gallery.window_size = Some(3);
        config.audio.volume = Some(0.5);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_keys_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gallery]\nwindow_size = 2\n").expect("write settings");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.gallery.window_size(), 2);
        assert_eq!(loaded.gallery.startup_preload(), DEFAULT_STARTUP_PRELOAD);
        assert_eq!(loaded.display, DisplayConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.gallery.window_size = Some(0);
        config.lightbox.swipe_threshold_px = Some(1.0);
        config.audio.volume = Some(3.0);
        config.cache.max_images = Some(100_000);

        assert_eq!(config.gallery.window_size(), MIN_WINDOW_SIZE);
        assert!((config.lightbox.swipe_threshold_px() - MIN_SWIPE_THRESHOLD_PX).abs() < f32::EPSILON);
        assert!((config.audio.volume() - MAX_VOLUME).abs() < f32::EPSILON);
        assert_eq!(config.cache.max_images(), MAX_MAX_CACHED_IMAGES);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\nbroken").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(WARNING_CONFIG_LOAD));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("config");

        let mut config = Config::default();
        config.display.mobile_breakpoint_px = Some(900);
        save_with_override(&config, Some(base.clone())).expect("save");

        let (loaded, warning) = load_with_override(Some(base));
        assert!(warning.is_none());
        assert_eq!(loaded.display.mobile_breakpoint_px(), 900);
    }
}
