// SPDX-License-Identifier: MPL-2.0
//! Gallery image decoding (JPEG, PNG, GIF).
//!
//! Decoded images are scaled down so their longest edge fits the configured
//! bound, which keeps phone-camera originals from filling the cache.

use crate::error::{Error, Result};
use crate::gallery::ImageRef;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates an `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Bytes held by the decoded pixels.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Loads the image at `path`, scaling it so neither edge exceeds
/// `max_dimension`.
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::Image`] if the bytes are not a supported image
pub fn load_image<P: AsRef<Path>>(path: P, max_dimension: u32) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref())?;
    let mut img = image_rs::load_from_memory(&bytes)?;

    let (width, height) = img.dimensions();
    if width > max_dimension || height > max_dimension {
        img = img.thumbnail(max_dimension, max_dimension);
    }

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Decodes `image` under `root` on the blocking pool.
///
/// Returns the reference alongside the result so the caller can route the
/// settlement back to whoever asked for it.
pub async fn load_gallery_image(
    root: PathBuf,
    image: ImageRef,
    max_dimension: u32,
) -> (ImageRef, Result<ImageData>) {
    let path = root.join(&*image);
    let result = tokio::task::spawn_blocking(move || load_image(&path, max_dimension))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Image load task failed: {e}"))));

    (image, result)
}
