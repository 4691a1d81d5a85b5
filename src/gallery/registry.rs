// SPDX-License-Identifier: MPL-2.0
//! Per-gallery image lists and rotation cursors.

use crate::catalog::GalleryId;
use std::sync::Arc;

/// Path of a gallery image, relative to the assets root.
pub type ImageRef = Arc<str>;

/// Direction of a rotation or lightbox step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One step back (-1).
    Previous,
    /// One step forward (+1).
    Next,
}

impl Direction {
    /// Maps a raw step of -1 or +1 to a direction. Any other value is rejected.
    #[must_use]
    pub fn from_step(step: i32) -> Option<Self> {
        match step {
            -1 => Some(Direction::Previous),
            1 => Some(Direction::Next),
            _ => None,
        }
    }

    #[must_use]
    pub fn step(self) -> i32 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Previous => Direction::Next,
            Direction::Next => Direction::Previous,
        }
    }
}

/// Moves `index` one step in `direction` around a circular sequence of `len`.
///
/// Returns `None` for an empty sequence.
#[must_use]
pub fn step_index(index: usize, direction: Direction, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = index % len;
    Some(match direction {
        Direction::Next => (index + 1) % len,
        Direction::Previous => (index + len - 1) % len,
    })
}

/// Index shown in window slot `offset` for a gallery at `cursor`.
#[must_use]
pub fn window_index(cursor: usize, offset: usize, len: usize) -> usize {
    (cursor + offset) % len
}

/// A named, ordered image collection with its rotation cursor.
#[derive(Debug, Clone)]
pub struct Gallery {
    id: GalleryId,
    images: Vec<ImageRef>,
    cursor: usize,
}

impl Gallery {
    pub fn new<I, S>(id: GalleryId, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ImageRef>,
    {
        Self {
            id,
            images: images.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> GalleryId {
        self.id
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    /// The `size` images starting at `start`, wrapping around the end.
    #[must_use]
    pub fn window_from(&self, start: usize, size: usize) -> Vec<ImageRef> {
        if self.images.is_empty() {
            return Vec::new();
        }
        (0..size)
            .map(|offset| self.images[window_index(start, offset, self.len())].clone())
            .collect()
    }

    /// Only the rotator commits cursors.
    pub(super) fn set_cursor(&mut self, cursor: usize) {
        debug_assert!(cursor < self.len());
        self.cursor = cursor;
    }
}

/// Holds every gallery, in page order.
#[derive(Debug, Clone, Default)]
pub struct GalleryRegistry {
    galleries: Vec<Gallery>,
}

impl GalleryRegistry {
    pub fn new(galleries: impl IntoIterator<Item = Gallery>) -> Self {
        Self {
            galleries: galleries.into_iter().collect(),
        }
    }

    /// Registry seeded with the built-in catalog.
    #[must_use]
    pub fn from_catalog() -> Self {
        Self::new(
            GalleryId::ALL
                .into_iter()
                .map(|id| Gallery::new(id, id.images().iter().copied())),
        )
    }

    #[must_use]
    pub fn get(&self, id: GalleryId) -> Option<&Gallery> {
        self.galleries.iter().find(|gallery| gallery.id == id)
    }

    pub(super) fn get_mut(&mut self, id: GalleryId) -> Option<&mut Gallery> {
        self.galleries.iter_mut().find(|gallery| gallery.id == id)
    }

    #[must_use]
    pub fn images(&self, id: GalleryId) -> Option<&[ImageRef]> {
        self.get(id).map(Gallery::images)
    }

    #[must_use]
    pub fn cursor(&self, id: GalleryId) -> Option<usize> {
        self.get(id).map(Gallery::cursor)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gallery> {
        self.galleries.iter()
    }
}
