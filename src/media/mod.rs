// SPDX-License-Identifier: MPL-2.0
//! Image decoding and the decoded image cache.

pub mod image;
pub mod prefetch;

pub use image::{load_gallery_image, load_image, ImageData};
pub use prefetch::{CacheConfig, ImageCache};
