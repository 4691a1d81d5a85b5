// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Thumbnail window and startup preload
//! - **Lightbox**: Swipe gesture threshold
//! - **Display**: Responsive layout breakpoint
//! - **Cache**: Decoded image cache bounds
//! - **Audio**: Background track volume

// ==========================================================================
// Assets Defaults
// ==========================================================================

/// Directory holding `gallery/` and `audio/`, relative to the working directory.
pub const DEFAULT_ASSETS_ROOT: &str = "assets";

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of thumbnails shown per gallery.
pub const DEFAULT_WINDOW_SIZE: usize = 4;

/// Minimum thumbnails per gallery.
pub const MIN_WINDOW_SIZE: usize = 1;

/// Maximum thumbnails per gallery.
pub const MAX_WINDOW_SIZE: usize = 8;

/// Images per gallery decoded ahead at startup.
pub const DEFAULT_STARTUP_PRELOAD: usize = 6;

/// Maximum images per gallery decoded ahead at startup.
pub const MAX_STARTUP_PRELOAD: usize = 32;

/// Opacity of a thumbnail window while its rotation preloads.
pub const DEFAULT_TRANSITION_OPACITY: f32 = 0.3;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Minimum horizontal travel, in logical pixels, for a swipe to navigate.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Smallest accepted swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Largest accepted swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Window width below which the navigation collapses into the mobile menu.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 1150;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default number of decoded images kept in memory.
pub const DEFAULT_MAX_CACHED_IMAGES: usize = 48;

/// Minimum number of cached images.
pub const MIN_MAX_CACHED_IMAGES: usize = 8;

/// Maximum number of cached images.
pub const MAX_MAX_CACHED_IMAGES: usize = 256;

/// Longest edge, in pixels, an image is scaled down to after decoding.
pub const DEFAULT_MAX_DECODED_DIMENSION: u32 = 1600;

/// Smallest accepted decode bound.
pub const MIN_MAX_DECODED_DIMENSION: u32 = 256;

/// Largest accepted decode bound.
pub const MAX_MAX_DECODED_DIMENSION: u32 = 8192;

// ==========================================================================
// Audio Defaults
// ==========================================================================

/// Background track, relative to the assets root.
pub const DEFAULT_AUDIO_TRACK: &str = "audio/background.mp3";

/// Background track volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.25;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Gallery window validation
    assert!(MIN_WINDOW_SIZE > 0);
    assert!(MAX_WINDOW_SIZE >= MIN_WINDOW_SIZE);
    assert!(DEFAULT_WINDOW_SIZE >= MIN_WINDOW_SIZE);
    assert!(DEFAULT_WINDOW_SIZE <= MAX_WINDOW_SIZE);
    assert!(DEFAULT_STARTUP_PRELOAD <= MAX_STARTUP_PRELOAD);
    assert!(DEFAULT_TRANSITION_OPACITY > 0.0);
    assert!(DEFAULT_TRANSITION_OPACITY < 1.0);

    // Swipe validation
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX > MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    // Cache validation
    assert!(MIN_MAX_CACHED_IMAGES > 0);
    assert!(MAX_MAX_CACHED_IMAGES >= MIN_MAX_CACHED_IMAGES);
    assert!(DEFAULT_MAX_CACHED_IMAGES >= MIN_MAX_CACHED_IMAGES);
    assert!(DEFAULT_MAX_CACHED_IMAGES <= MAX_MAX_CACHED_IMAGES);
    assert!(MIN_MAX_DECODED_DIMENSION > 0);
    assert!(DEFAULT_MAX_DECODED_DIMENSION >= MIN_MAX_DECODED_DIMENSION);
    assert!(DEFAULT_MAX_DECODED_DIMENSION <= MAX_MAX_DECODED_DIMENSION);

    // The cache must hold at least every thumbnail plus the lightbox pair.
    assert!(DEFAULT_MAX_CACHED_IMAGES >= MAX_WINDOW_SIZE + 2);

    // Volume validation
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
};
