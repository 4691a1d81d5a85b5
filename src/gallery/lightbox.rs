// SPDX-License-Identifier: MPL-2.0
//! Full-screen single image viewer over a gallery.
//!
//! The lightbox is either closed or open on `(gallery, index)`. Opening and
//! navigating request the target image immediately and raise the loading
//! flag; the previously shown image stays visible until the request
//! settles. Only the most recent request may clear the flag or replace the
//! image, so rapid navigation resolves to the last target.

use super::registry::{step_index, Direction, GalleryRegistry, ImageRef};
use crate::catalog::GalleryId;
use crate::i18n::Language;
use iced::widget::image;

/// The gallery and index the lightbox points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxSession {
    pub gallery: GalleryId,
    pub index: usize,
}

/// Loads to issue after an open or a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxLoad {
    /// Image to display once loaded.
    pub target: ImageRef,
    /// Next image in increasing order, prefetched without waiting on it.
    pub prefetch: Option<ImageRef>,
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    session: Option<LightboxSession>,
    open: bool,
    loading: bool,
    target: Option<ImageRef>,
    handle: Option<image::Handle>,
    caption: &'static str,
}

impl Lightbox {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.open && self.loading
    }

    /// Last session, kept after closing.
    #[must_use]
    pub fn session(&self) -> Option<LightboxSession> {
        self.session
    }

    #[must_use]
    pub fn handle(&self) -> Option<&image::Handle> {
        self.handle.as_ref()
    }

    #[must_use]
    pub fn target(&self) -> Option<&ImageRef> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn caption(&self) -> &'static str {
        self.caption
    }

    /// Opens on `gallery` at `index`, or at the gallery's cursor when no
    /// index is given. Unknown or empty galleries leave the lightbox as is.
    pub fn open(
        &mut self,
        registry: &GalleryRegistry,
        gallery: GalleryId,
        index: Option<usize>,
        language: Language,
    ) -> Option<LightboxLoad> {
        let entry = registry.get(gallery)?;
        if entry.is_empty() {
            return None;
        }
        let index = index.unwrap_or(entry.cursor()) % entry.len();

        self.open = true;
        self.session = Some(LightboxSession { gallery, index });
        self.show(registry, language)
    }

    /// Steps one image in `direction`. Does nothing while closed.
    pub fn navigate(
        &mut self,
        registry: &GalleryRegistry,
        direction: Direction,
        language: Language,
    ) -> Option<LightboxLoad> {
        if !self.open {
            return None;
        }
        let session = self.session.as_mut()?;
        let len = registry.get(session.gallery)?.len();
        session.index = step_index(session.index, direction, len)?;
        self.show(registry, language)
    }

    /// Hides the view. The session is kept as the default for a reopen.
    pub fn close(&mut self) {
        self.open = false;
        self.loading = false;
    }

    /// Applies a finished load.
    ///
    /// Returns `false` when `image` is not the current target (a superseded
    /// request). A failed load clears the loading flag and keeps whatever
    /// image was shown before.
    pub fn settle(&mut self, image: &ImageRef, handle: Option<image::Handle>) -> bool {
        if self.target.as_ref() != Some(image) {
            return false;
        }
        self.loading = false;
        if let Some(handle) = handle {
            self.handle = Some(handle);
        }
        true
    }

    /// Re-derives the caption from the session's gallery in `language`.
    pub fn relabel(&mut self, language: Language) {
        if let Some(session) = self.session {
            self.caption = language.text(session.gallery.caption_key());
        }
    }

    fn show(&mut self, registry: &GalleryRegistry, language: Language) -> Option<LightboxLoad> {
        let session = self.session?;
        let gallery = registry.get(session.gallery)?;
        let target = gallery.image(session.index)?.clone();
        let prefetch = step_index(session.index, Direction::Next, gallery.len())
            .filter(|&next| next != session.index)
            .and_then(|next| gallery.image(next).cloned());

        self.loading = true;
        self.target = Some(target.clone());
        self.relabel(language);

        Some(LightboxLoad { target, prefetch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::registry::Gallery;

    fn registry() -> GalleryRegistry {
        GalleryRegistry::new([
            Gallery::new(GalleryId::Mandula, (0..4).map(|i| format!("mandula/{i}.jpg"))),
            Gallery::new(GalleryId::Galgaguta, (0..25).map(|i| format!("galgaguta/{i}.jpg"))),
            Gallery::new(GalleryId::Advent, ["advent/only.jpg"]),
        ])
    }

    fn handle() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![255, 255, 255, 255])
    }

    #[test]
    fn navigate_wraps_past_the_last_image() {
        let registry = registry();
        let mut lightbox = Lightbox::default();
        lightbox.open(&registry, GalleryId::Mandula, Some(3), Language::Hu);

        let load = lightbox.navigate(&registry, Direction::Next, Language::Hu);
        assert_eq!(lightbox.session().map(|s| s.index), Some(0));
        assert_eq!(load.map(|l| l.target.to_string()).as_deref(), Some("mandula/0.jpg"));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let registry = registry();
        let mut lightbox = Lightbox::default();
        lightbox.open(&registry, GalleryId::Galgaguta, Some(7), Language::Hu);
        for direction in [Direction::Next, Direction::Previous] {
            for _ in 0..25 {
                lightbox.navigate(&registry, direction, Language::Hu);
            }
            assert_eq!(lightbox.session().map(|s| s.index), Some(7));
        }
    }

    #[test]
    fn open_defaults_to_gallery_cursor_and_prefetches_next() {
        let registry = registry();
        let mut lightbox = Lightbox::default();
        let load = lightbox
            .open(&registry, GalleryId::Mandula, None, Language::Hu)
            .unwrap();

        assert_eq!(lightbox.session().map(|s| s.index), Some(0));
        assert!(lightbox.is_loading());
        assert_eq!(load.prefetch.as_deref(), Some("mandula/1.jpg"));
    }

    #[test]
    fn single_image_gallery_has_no_prefetch() {
        let registry = registry();
        let mut lightbox = Lightbox::default();
        let load = lightbox
            .open(&registry, GalleryId::Advent, None, Language::Hu)
            .unwrap();
        assert!(load.prefetch.is_none());
    }

    #[test]
    fn navigate_while_closed_does_nothing() {
        let registry = registry();
        let mut lightbox = Lightbox::default();
        assert!(lightbox.navigate(&registry, Direction::Next, Language::Hu).is_none());

        lightbox.open(&registry, GalleryId::Mandula, Some(1), Language::Hu);
        lightbox.close();
        assert!(lightbox.navigate(&registry, Direction::Next, Language::Hu).is_none());
        assert_eq!(lightbox.session().map(|s| s.index), Some(1));
    }

    #[test]
    fn unknown_gallery_does_not_open() {
        let registry = registry();
        let mut lightbox = Lightbox::default();
        assert!(lightbox.open(&registry, GalleryId::Sun, Some(0), Language::Hu).is_none());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn superseded_load_is_ignored() {
        let registry = registry();
        let mut lightbox = Lightbox::default();
        let first = lightbox
            .open(&registry, GalleryId::Mandula, Some(0), Language::Hu)
            .unwrap();
        let second = lightbox
            .navigate(&registry, Direction::Next, Language::Hu)
            .unwrap();

        assert!(!lightbox.settle(&first.target, Some(handle())));
        assert!(lightbox.is_loading());
        assert!(lightbox.handle().is_none());

        assert!(lightbox.settle(&second.target, Some(handle())));
        assert!(!lightbox.is_loading());
        assert!(lightbox.handle().is_some());
    }

    #[test]
    fn failed_load_clears_loading_and_keeps_previous_image() {
        let registry = registry();
        let mut lightbox = Lightbox::default();
        let first = lightbox
            .open(&registry, GalleryId::Mandula, Some(0), Language::Hu)
            .unwrap();
        lightbox.settle(&first.target, Some(handle()));

        let second = lightbox
            .navigate(&registry, Direction::Next, Language::Hu)
            .unwrap();
        assert!(lightbox.settle(&second.target, None));
        assert!(!lightbox.is_loading());
        assert!(lightbox.handle().is_some());
    }

    #[test]
    fn language_switch_updates_caption_only() {
        let registry = registry();
        let mut lightbox = Lightbox::default();
        let load = lightbox
            .open(&registry, GalleryId::Galgaguta, Some(5), Language::Hu)
            .unwrap();
        lightbox.settle(&load.target, Some(handle()));
        let shown = lightbox.handle().cloned();

        lightbox.relabel(Language::En);
        assert_eq!(lightbox.caption(), Language::En.text(GalleryId::Galgaguta.caption_key()));
        assert_eq!(lightbox.session().map(|s| s.index), Some(5));
        assert_eq!(lightbox.handle().cloned(), shown);
        assert!(!lightbox.is_loading());
    }

    #[test]
    fn caption_follows_gallery_change() {
        let registry = registry();
        let mut lightbox = Lightbox::default();
        lightbox.open(&registry, GalleryId::Mandula, None, Language::Hu);
        assert_eq!(lightbox.caption(), "Mandula Fesztivál");
        lightbox.open(&registry, GalleryId::Advent, None, Language::Hu);
        assert_eq!(lightbox.caption(), "Adventi Vásár");
    }
}
