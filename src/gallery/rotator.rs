// SPDX-License-Identifier: MPL-2.0
//! Thumbnail window rotation with preload gating.
//!
//! A rotation computes the next window, issues one preload per slot and
//! dims the window. The swap is committed only once every preload of the
//! batch has settled, so the strip never shows a mix of old and new
//! images.
//!
//! Each batch is stamped with a token from a monotonically increasing
//! counter. Rotating again before the previous batch settles replaces it;
//! settlements still arriving for the replaced batch no longer match the
//! window's token and are dropped.

use super::registry::{step_index, window_index, Direction, GalleryRegistry, ImageRef};
use crate::catalog::GalleryId;
use crate::i18n::Language;
use iced::widget::image;

/// One visible thumbnail.
#[derive(Debug, Clone)]
pub struct Slot {
    pub image: ImageRef,
    /// Decoded image, `None` until loaded or when loading failed.
    pub handle: Option<image::Handle>,
}

/// Preload batch in flight for a window.
#[derive(Debug, Clone)]
struct Batch {
    token: u64,
    cursor: usize,
    targets: Vec<ImageRef>,
    resolved: Vec<Option<image::Handle>>,
    settled: Vec<bool>,
    remaining: usize,
}

/// The thumbnails currently shown for one gallery.
#[derive(Debug, Clone)]
pub struct RotationWindow {
    gallery: GalleryId,
    slots: Vec<Slot>,
    caption: &'static str,
    batch: Option<Batch>,
}

impl RotationWindow {
    #[must_use]
    pub fn gallery(&self) -> GalleryId {
        self.gallery
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn caption(&self) -> &'static str {
        self.caption
    }

    /// Whether a rotation is waiting for its preloads.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.batch.is_some()
    }

    /// Token of the batch in flight, if any.
    #[must_use]
    pub fn pending_token(&self) -> Option<u64> {
        self.batch.as_ref().map(|batch| batch.token)
    }

    /// Cursor the window will land on once the pending batch commits.
    #[must_use]
    pub fn pending_cursor(&self) -> Option<usize> {
        self.batch.as_ref().map(|batch| batch.cursor)
    }
}

/// A single image load requested by a rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadRequest {
    pub gallery: GalleryId,
    pub token: u64,
    pub slot: usize,
    pub image: ImageRef,
}

/// What a settlement did to its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Token no longer current, slot unknown or already settled.
    Stale,
    /// Counted; the batch still waits on `remaining` loads.
    Pending { remaining: usize },
    /// Last load of the batch; the window now shows `cursor`.
    Committed { cursor: usize },
}

/// Owns the rotation windows of every gallery.
#[derive(Debug, Clone)]
pub struct GalleryRotator {
    windows: Vec<RotationWindow>,
    window_size: usize,
    last_token: u64,
}

impl GalleryRotator {
    /// Builds one window per gallery. A `window_size` of zero is raised to
    /// one.
    pub fn new(registry: &GalleryRegistry, window_size: usize, language: Language) -> Self {
        let window_size = window_size.max(1);
        let windows = registry
            .iter()
            .map(|gallery| RotationWindow {
                gallery: gallery.id(),
                slots: gallery
                    .window_from(gallery.cursor(), window_size)
                    .into_iter()
                    .map(|image| Slot {
                        image,
                        handle: None,
                    })
                    .collect(),
                caption: language.text(gallery.id().caption_key()),
                batch: None,
            })
            .collect();

        Self {
            windows,
            window_size,
            last_token: 0,
        }
    }

    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    #[must_use]
    pub fn window(&self, id: GalleryId) -> Option<&RotationWindow> {
        self.windows.iter().find(|window| window.gallery == id)
    }

    pub fn windows(&self) -> impl Iterator<Item = &RotationWindow> {
        self.windows.iter()
    }

    fn window_mut(&mut self, id: GalleryId) -> Option<&mut RotationWindow> {
        self.windows.iter_mut().find(|window| window.gallery == id)
    }

    /// Starts a rotation of `id` one step in `direction`.
    ///
    /// The step is taken from the cursor of the batch still in flight, if
    /// any, so repeated clicks accumulate. Returns the preloads to issue;
    /// an empty list means nothing happened (unknown or empty gallery).
    pub fn rotate(
        &mut self,
        registry: &GalleryRegistry,
        id: GalleryId,
        direction: Direction,
    ) -> Vec<PreloadRequest> {
        let Some(gallery) = registry.get(id) else {
            return Vec::new();
        };
        let window_size = self.window_size;
        let token = self.last_token + 1;
        let Some(window) = self.window_mut(id) else {
            return Vec::new();
        };

        let base = window.pending_cursor().unwrap_or(gallery.cursor());
        let Some(cursor) = step_index(base, direction, gallery.len()) else {
            return Vec::new();
        };

        if let Some(replaced) = window.pending_token() {
            tracing::debug!(gallery = %id, replaced, token, "rotation superseded");
        }

        let targets = gallery.window_from(cursor, window_size);
        if targets.is_empty() {
            return Vec::new();
        }
        window.batch = Some(Batch {
            token,
            cursor,
            resolved: vec![None; targets.len()],
            settled: vec![false; targets.len()],
            remaining: targets.len(),
            targets: targets.clone(),
        });
        self.last_token = token;

        targets
            .into_iter()
            .enumerate()
            .map(|(slot, image)| PreloadRequest {
                gallery: id,
                token,
                slot,
                image,
            })
            .collect()
    }

    /// Records the outcome of one preload.
    ///
    /// Failed loads (`handle == None`) count toward the barrier like
    /// successful ones. When the last load of the current batch settles the
    /// registry cursor, slot images and caption are committed together.
    pub fn settle(
        &mut self,
        registry: &mut GalleryRegistry,
        id: GalleryId,
        token: u64,
        slot: usize,
        handle: Option<image::Handle>,
        language: Language,
    ) -> Settlement {
        let Some(window) = self.window_mut(id) else {
            return Settlement::Stale;
        };
        let Some(batch) = window.batch.as_mut().filter(|batch| batch.token == token) else {
            tracing::debug!(gallery = %id, token, "discarding stale preload");
            return Settlement::Stale;
        };
        if batch.settled.get(slot).copied() != Some(false) {
            return Settlement::Stale;
        }

        batch.settled[slot] = true;
        batch.resolved[slot] = handle;
        batch.remaining -= 1;
        if batch.remaining > 0 {
            return Settlement::Pending {
                remaining: batch.remaining,
            };
        }

        let Some(batch) = window.batch.take() else {
            return Settlement::Stale;
        };
        if let Some(gallery) = registry.get_mut(id) {
            gallery.set_cursor(batch.cursor);
        }
        window.slots = batch
            .targets
            .into_iter()
            .zip(batch.resolved)
            .map(|(image, handle)| Slot { image, handle })
            .collect();
        window.caption = language.text(id.caption_key());

        Settlement::Committed {
            cursor: batch.cursor,
        }
    }

    /// Gives a decoded image to every visible slot still waiting for it.
    pub fn fill(&mut self, id: GalleryId, image: &ImageRef, handle: &image::Handle) {
        if let Some(window) = self.window_mut(id) {
            for slot in window.slots.iter_mut().filter(|slot| slot.handle.is_none()) {
                if slot.image == *image {
                    slot.handle = Some(handle.clone());
                }
            }
        }
    }

    /// Re-renders every window caption in `language`.
    pub fn relabel(&mut self, language: Language) {
        for window in &mut self.windows {
            window.caption = language.text(window.gallery.caption_key());
        }
    }

    /// Gallery index shown in `slot` of the committed window.
    #[must_use]
    pub fn slot_index(&self, registry: &GalleryRegistry, id: GalleryId, slot: usize) -> Option<usize> {
        let gallery = registry.get(id)?;
        if gallery.is_empty() || slot >= self.window_size {
            return None;
        }
        Some(window_index(gallery.cursor(), slot, gallery.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::registry::Gallery;

    fn handle() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn registry() -> GalleryRegistry {
        GalleryRegistry::new([
            Gallery::new(GalleryId::Sun, (0..8).map(|i| format!("sun/{i}.jpg"))),
            Gallery::new(GalleryId::Mandula, (0..4).map(|i| format!("mandula/{i}.jpg"))),
            Gallery::new(GalleryId::Advent, Vec::<String>::new()),
        ])
    }

    fn settle_all(
        rotator: &mut GalleryRotator,
        registry: &mut GalleryRegistry,
        requests: &[PreloadRequest],
    ) -> Settlement {
        let mut last = Settlement::Stale;
        for request in requests {
            last = rotator.settle(
                registry,
                request.gallery,
                request.token,
                request.slot,
                Some(handle()),
                Language::Hu,
            );
        }
        last
    }

    fn shown(rotator: &GalleryRotator, id: GalleryId) -> Vec<String> {
        rotator
            .window(id)
            .unwrap()
            .slots()
            .iter()
            .map(|slot| slot.image.to_string())
            .collect()
    }

    #[test]
    fn rotate_sun_forward_commits_after_all_preloads() {
        let mut registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);

        let requests = rotator.rotate(&registry, GalleryId::Sun, Direction::Next);
        assert_eq!(requests.len(), 4);
        assert!(rotator.window(GalleryId::Sun).unwrap().is_transitioning());

        let outcome = settle_all(&mut rotator, &mut registry, &requests);
        assert_eq!(outcome, Settlement::Committed { cursor: 1 });
        assert_eq!(registry.cursor(GalleryId::Sun), Some(1));
        assert_eq!(
            shown(&rotator, GalleryId::Sun),
            ["sun/1.jpg", "sun/2.jpg", "sun/3.jpg", "sun/4.jpg"]
        );
        assert!(!rotator.window(GalleryId::Sun).unwrap().is_transitioning());
    }

    #[test]
    fn cursor_stays_until_the_batch_is_complete() {
        let mut registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);
        let requests = rotator.rotate(&registry, GalleryId::Sun, Direction::Next);

        let outcome = settle_all(&mut rotator, &mut registry, &requests[..3]);
        assert_eq!(outcome, Settlement::Pending { remaining: 1 });
        assert_eq!(registry.cursor(GalleryId::Sun), Some(0));
        assert_eq!(shown(&rotator, GalleryId::Sun)[0], "sun/0.jpg");
    }

    #[test]
    fn failed_loads_still_release_the_barrier() {
        let mut registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);
        let requests = rotator.rotate(&registry, GalleryId::Mandula, Direction::Previous);

        let mut outcome = Settlement::Stale;
        for request in &requests {
            outcome = rotator.settle(
                &mut registry,
                request.gallery,
                request.token,
                request.slot,
                None,
                Language::Hu,
            );
        }
        assert_eq!(outcome, Settlement::Committed { cursor: 3 });
        let window = rotator.window(GalleryId::Mandula).unwrap();
        assert!(window.slots().iter().all(|slot| slot.handle.is_none()));
        // Slots move to their targets and render as placeholders.
        assert_eq!(
            shown(&rotator, GalleryId::Mandula),
            ["mandula/3.jpg", "mandula/0.jpg", "mandula/1.jpg", "mandula/2.jpg"]
        );
    }

    #[test]
    fn superseded_batch_is_discarded() {
        let mut registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);

        let first = rotator.rotate(&registry, GalleryId::Sun, Direction::Next);
        let second = rotator.rotate(&registry, GalleryId::Sun, Direction::Next);
        assert!(second[0].token > first[0].token);

        for request in &first {
            let outcome = rotator.settle(
                &mut registry,
                request.gallery,
                request.token,
                request.slot,
                Some(handle()),
                Language::Hu,
            );
            assert_eq!(outcome, Settlement::Stale);
        }
        assert_eq!(registry.cursor(GalleryId::Sun), Some(0));

        let outcome = settle_all(&mut rotator, &mut registry, &second);
        assert_eq!(outcome, Settlement::Committed { cursor: 2 });
        assert_eq!(shown(&rotator, GalleryId::Sun)[0], "sun/2.jpg");
    }

    #[test]
    fn duplicate_settlement_is_ignored() {
        let mut registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);
        let requests = rotator.rotate(&registry, GalleryId::Sun, Direction::Next);
        let first = &requests[0];

        let settle = |rotator: &mut GalleryRotator, registry: &mut GalleryRegistry| {
            rotator.settle(
                registry,
                first.gallery,
                first.token,
                first.slot,
                None,
                Language::Hu,
            )
        };
        assert_eq!(settle(&mut rotator, &mut registry), Settlement::Pending { remaining: 3 });
        assert_eq!(settle(&mut rotator, &mut registry), Settlement::Stale);
    }

    #[test]
    fn n_rotations_land_on_modular_cursor() {
        let mut registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);
        for n in 1..=19usize {
            let requests = rotator.rotate(&registry, GalleryId::Sun, Direction::Previous);
            settle_all(&mut rotator, &mut registry, &requests);
            assert_eq!(registry.cursor(GalleryId::Sun), Some((8 * n - n) % 8));
        }
    }

    #[test]
    fn committed_slots_follow_the_cursor() {
        let mut registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);
        for _ in 0..6 {
            let requests = rotator.rotate(&registry, GalleryId::Sun, Direction::Next);
            settle_all(&mut rotator, &mut registry, &requests);
            let cursor = registry.cursor(GalleryId::Sun).unwrap();
            let images = registry.images(GalleryId::Sun).unwrap();
            let window = rotator.window(GalleryId::Sun).unwrap();
            for (j, slot) in window.slots().iter().enumerate() {
                assert_eq!(slot.image, images[(cursor + j) % images.len()]);
            }
        }
    }

    #[test]
    fn unknown_and_empty_galleries_are_no_ops() {
        let registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);
        assert!(rotator.rotate(&registry, GalleryId::Manas, Direction::Next).is_empty());
        assert!(rotator.rotate(&registry, GalleryId::Advent, Direction::Next).is_empty());
        assert!(!rotator.window(GalleryId::Advent).unwrap().is_transitioning());
    }

    #[test]
    fn commit_renders_caption_in_active_language() {
        let mut registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);
        assert_eq!(rotator.window(GalleryId::Sun).unwrap().caption(), "S.U.N. Fesztivál");

        let requests = rotator.rotate(&registry, GalleryId::Sun, Direction::Next);
        for request in &requests {
            rotator.settle(
                &mut registry,
                request.gallery,
                request.token,
                request.slot,
                Some(handle()),
                Language::En,
            );
        }
        assert_eq!(rotator.window(GalleryId::Sun).unwrap().caption(), "S.U.N. Festival");
    }

    #[test]
    fn relabel_updates_every_caption() {
        let registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);
        rotator.relabel(Language::En);
        assert_eq!(rotator.window(GalleryId::Mandula).unwrap().caption(), "Mandula Festival");
    }

    #[test]
    fn fill_populates_matching_slots() {
        let registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);
        let image: ImageRef = "sun/2.jpg".into();
        rotator.fill(GalleryId::Sun, &image, &handle());

        let window = rotator.window(GalleryId::Sun).unwrap();
        assert!(window.slots()[2].handle.is_some());
        assert!(window.slots()[0].handle.is_none());
    }

    #[test]
    fn slot_index_offsets_from_cursor() {
        let mut registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 4, Language::Hu);
        for _ in 0..3 {
            let requests = rotator.rotate(&registry, GalleryId::Mandula, Direction::Next);
            settle_all(&mut rotator, &mut registry, &requests);
        }
        assert_eq!(rotator.slot_index(&registry, GalleryId::Mandula, 2), Some(1));
        assert_eq!(rotator.slot_index(&registry, GalleryId::Mandula, 4), None);
    }

    #[test]
    fn zero_window_size_still_rotates_and_commits() {
        let mut registry = registry();
        let mut rotator = GalleryRotator::new(&registry, 0, Language::Hu);
        assert_eq!(rotator.window_size(), 1);

        let requests = rotator.rotate(&registry, GalleryId::Sun, Direction::Next);
        assert_eq!(requests.len(), 1);
        assert_eq!(
            settle_all(&mut rotator, &mut registry, &requests),
            Settlement::Committed { cursor: 1 }
        );

        let window = rotator.window(GalleryId::Sun).unwrap();
        assert!(!window.is_transitioning());
        assert_eq!(shown(&rotator, GalleryId::Sun), ["sun/1.jpg"]);
    }
}
