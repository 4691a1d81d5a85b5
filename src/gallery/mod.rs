// SPDX-License-Identifier: MPL-2.0
//! Gallery state: registry, thumbnail rotation and the lightbox.

pub mod lightbox;
pub mod registry;
pub mod rotator;
pub mod swipe;

pub use lightbox::{Lightbox, LightboxLoad, LightboxSession};
pub use registry::{Direction, Gallery, GalleryRegistry, ImageRef};
pub use rotator::{GalleryRotator, PreloadRequest, RotationWindow, Settlement, Slot};
pub use swipe::SwipeTracker;
