// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::audio;
use crate::catalog::GalleryId;
use crate::error::Error;
use crate::gallery::ImageRef;
use crate::map;
use crate::media::ImageData;
use crate::ui::{gallery_view, lightbox_view, navbar};
use iced::Size;
use std::time::Instant;

/// Keyboard shortcuts the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Previous,
    Next,
    Close,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery_view::Message),
    Lightbox(lightbox_view::Message),
    Map(map::Message),
    Audio(audio::Message),
    /// The background track finished decoding, or failed to.
    TrackLoaded(Result<audio::Track, Error>),
    ToggleImpressum,
    /// One preload of a rotation batch finished.
    PreloadSettled {
        gallery: GalleryId,
        token: u64,
        slot: usize,
        image: ImageRef,
        result: Result<ImageData, Error>,
    },
    /// The image the lightbox asked for finished loading.
    LightboxImageLoaded {
        image: ImageRef,
        result: Result<ImageData, Error>,
    },
    /// Result from warming the cache in the background. When `gallery` is
    /// set, visible thumbnails of that gallery waiting on the image are
    /// filled in.
    ImagePrefetched {
        gallery: Option<GalleryId>,
        image: ImageRef,
        result: Result<ImageData, Error>,
    },
    Shortcut(Shortcut),
    TouchStarted(f32),
    TouchEnded(f32),
    TouchLost,
    /// A mouse button went down somewhere in the window. `captured` tells
    /// whether a widget consumed the press.
    PointerPressed {
        captured: bool,
    },
    WindowResized(Size),
    Tick(Instant), // Spinner animation while the lightbox loads
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional language override (`hu` or `en`).
    pub lang: Option<String>,
    /// Optional assets root, replacing `[assets] root` from the settings file.
    pub assets: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MERKABA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `MERKABA_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
}
