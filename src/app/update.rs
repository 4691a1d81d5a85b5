// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] borrowing every piece of page
//! state and return the tasks to run next. Image loads always come back
//! as messages on a later update; nothing here blocks.

use super::message::Shortcut;
use super::persisted_state::AppState;
use super::{persistence, Message};
use crate::audio::{self, AudioPlayer};
use crate::catalog::{GalleryId, SectionId};
use crate::error::Error;
use crate::gallery::{
    Direction, GalleryRegistry, GalleryRotator, ImageRef, Lightbox, LightboxLoad, Settlement,
    SwipeTracker,
};
use crate::i18n::I18n;
use crate::map::{self, MapState};
use crate::media::{self, ImageCache, ImageData};
use crate::search::{self, Effect as SearchEffect, SearchState};
use crate::ui::navbar::{self, Event as NavbarEvent, MenuState};
use crate::ui::widgets::animated_spinner;
use crate::ui::{gallery_view, lightbox_view};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{image, operation, Id};
use iced::{Size, Task};
use std::path::{Path, PathBuf};

/// Identifier of the page scrollable, the target of section navigation.
pub const PAGE_SCROLL_ID: &str = "page";

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub app_state: &'a mut AppState,
    pub registry: &'a mut GalleryRegistry,
    pub rotator: &'a mut GalleryRotator,
    pub lightbox: &'a mut Lightbox,
    pub swipe: &'a mut SwipeTracker,
    pub cache: &'a mut ImageCache,
    pub menu: &'a mut MenuState,
    pub search: &'a mut SearchState,
    pub map: &'a mut MapState,
    pub audio: &'a mut AudioPlayer,
    pub impressum_open: &'a mut bool,
    pub window_size: &'a mut Size,
    pub spinner_rotation: &'a mut f32,
    pub assets_root: &'a Path,
    pub max_decoded_dimension: u32,
    pub mobile_breakpoint_px: u32,
}

impl UpdateContext<'_> {
    /// Whether the navigation is collapsed behind the menu toggle.
    fn is_compact(&self) -> bool {
        self.window_size.width <= self.mobile_breakpoint_px as f32
    }

    /// Builds a load of `image`, answered from the cache when possible.
    fn load<F>(&mut self, image: ImageRef, on_done: F) -> Task<Message>
    where
        F: FnOnce(ImageRef, Result<ImageData, Error>) -> Message + Send + 'static,
    {
        if let Some(data) = self.cache.get(&image) {
            return Task::done(on_done(image, Ok(data)));
        }
        let root: PathBuf = self.assets_root.to_path_buf();
        Task::perform(
            media::load_gallery_image(root, image, self.max_decoded_dimension),
            move |(image, result)| on_done(image, result),
        )
    }

    /// Stores a finished load and returns its handle, logging failures.
    fn absorb(
        &mut self,
        image: &ImageRef,
        result: Result<ImageData, Error>,
    ) -> Option<image::Handle> {
        match result {
            Ok(data) => {
                let handle = data.handle.clone();
                self.cache.insert(image.clone(), data);
                Some(handle)
            }
            Err(err) => {
                tracing::info!(image = %image, %err, "image failed to load");
                None
            }
        }
    }
}

// =============================================================================
// Galleries
// =============================================================================

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_view::Message,
) -> Task<Message> {
    match message {
        gallery_view::Message::Rotate(id, direction) => rotate(ctx, id, direction),
        gallery_view::Message::OpenSlot(id, slot) => {
            let index = ctx.rotator.slot_index(ctx.registry, id, slot);
            let load = ctx
                .lightbox
                .open(ctx.registry, id, index, ctx.i18n.language());
            issue_lightbox_load(ctx, load)
        }
    }
}

/// Starts a rotation and issues one preload per slot of the new window.
pub fn rotate(ctx: &mut UpdateContext<'_>, id: GalleryId, direction: Direction) -> Task<Message> {
    let requests = ctx.rotator.rotate(ctx.registry, id, direction);
    let mut tasks = Vec::with_capacity(requests.len());
    for request in requests {
        let (gallery, token, slot) = (request.gallery, request.token, request.slot);
        tasks.push(ctx.load(request.image, move |image, result| {
            Message::PreloadSettled {
                gallery,
                token,
                slot,
                image,
                result,
            }
        }));
    }
    Task::batch(tasks)
}

pub fn handle_preload_settled(
    ctx: &mut UpdateContext<'_>,
    gallery: GalleryId,
    token: u64,
    slot: usize,
    image: &ImageRef,
    result: Result<ImageData, Error>,
) {
    let handle = ctx.absorb(image, result);
    let language = ctx.i18n.language();
    if let Settlement::Committed { cursor } =
        ctx.rotator
            .settle(ctx.registry, gallery, token, slot, handle, language)
    {
        let stats = ctx.cache.stats();
        tracing::debug!(
            %gallery,
            cursor,
            hit_rate = stats.hit_rate(),
            cached_bytes = ctx.cache.memory_usage(),
            "rotation committed"
        );
    }
}

pub fn handle_image_prefetched(
    ctx: &mut UpdateContext<'_>,
    gallery: Option<GalleryId>,
    image: &ImageRef,
    result: Result<ImageData, Error>,
) {
    let Some(handle) = ctx.absorb(image, result) else {
        return;
    };
    if let Some(gallery) = gallery {
        ctx.rotator.fill(gallery, image, &handle);
    }
}

/// Warms the cache with the leading images of every gallery.
///
/// The initial windows are always included so they fill in as the loads
/// arrive, even when `startup_preload` is smaller than the window.
pub fn startup_preload(ctx: &mut UpdateContext<'_>, startup_preload: usize) -> Task<Message> {
    let mut wanted: Vec<(GalleryId, ImageRef)> = Vec::new();
    for gallery in ctx.registry.iter() {
        let leading = gallery.images().iter().take(startup_preload.min(gallery.len()));
        let window = ctx
            .rotator
            .window(gallery.id())
            .into_iter()
            .flat_map(|window| window.slots().iter().map(|slot| &slot.image));
        for image in window.chain(leading) {
            if !wanted.iter().any(|(_, known)| known == image) {
                wanted.push((gallery.id(), image.clone()));
            }
        }
    }

    let mut tasks = Vec::with_capacity(wanted.len());
    for (gallery, image) in wanted {
        tasks.push(ctx.load(image, move |image, result| Message::ImagePrefetched {
            gallery: Some(gallery),
            image,
            result,
        }));
    }
    Task::batch(tasks)
}

// =============================================================================
// Lightbox
// =============================================================================

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox_view::Message,
) -> Task<Message> {
    match message {
        lightbox_view::Message::Previous => navigate_lightbox(ctx, Direction::Previous),
        lightbox_view::Message::Next => navigate_lightbox(ctx, Direction::Next),
        lightbox_view::Message::Close => {
            ctx.lightbox.close();
            ctx.swipe.cancel();
            Task::none()
        }
    }
}

fn navigate_lightbox(ctx: &mut UpdateContext<'_>, direction: Direction) -> Task<Message> {
    let load = ctx
        .lightbox
        .navigate(ctx.registry, direction, ctx.i18n.language());
    issue_lightbox_load(ctx, load)
}

fn issue_lightbox_load(ctx: &mut UpdateContext<'_>, load: Option<LightboxLoad>) -> Task<Message> {
    let Some(LightboxLoad { target, prefetch }) = load else {
        return Task::none();
    };

    let shown = ctx.load(target, |image, result| Message::LightboxImageLoaded { image, result });
    let ahead = match prefetch {
        Some(image) if !ctx.cache.contains(&image) => ctx.load(image, |image, result| {
            Message::ImagePrefetched {
                gallery: None,
                image,
                result,
            }
        }),
        _ => Task::none(),
    };
    Task::batch([shown, ahead])
}

pub fn handle_lightbox_image_loaded(
    ctx: &mut UpdateContext<'_>,
    image: &ImageRef,
    result: Result<ImageData, Error>,
) {
    let handle = ctx.absorb(image, result);
    if !ctx.lightbox.settle(image, handle) {
        tracing::debug!(image = %image, "superseded lightbox load");
    }
}

// =============================================================================
// Keyboard and pointer input
// =============================================================================

pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    let direction = match shortcut {
        Shortcut::Close => {
            if ctx.lightbox.is_open() {
                ctx.lightbox.close();
                ctx.swipe.cancel();
            } else {
                ctx.search.close();
                ctx.menu.close();
            }
            return Task::none();
        }
        Shortcut::Previous => Direction::Previous,
        Shortcut::Next => Direction::Next,
    };

    if ctx.lightbox.is_open() {
        return navigate_lightbox(ctx, direction);
    }

    let mut tasks = Vec::with_capacity(GalleryId::ALL.len());
    for id in GalleryId::ALL {
        tasks.push(rotate(ctx, id, direction));
    }
    Task::batch(tasks)
}

pub fn handle_touch_started(ctx: &mut UpdateContext<'_>, x: f32) {
    ctx.audio.update(audio::Message::Interaction);
    if ctx.lightbox.is_open() {
        ctx.swipe.begin(x);
    }
}

pub fn handle_touch_ended(ctx: &mut UpdateContext<'_>, x: f32) -> Task<Message> {
    match ctx.swipe.end(x) {
        Some(direction) if ctx.lightbox.is_open() => navigate_lightbox(ctx, direction),
        _ => Task::none(),
    }
}

pub fn handle_pointer_pressed(ctx: &mut UpdateContext<'_>, captured: bool) {
    ctx.audio.update(audio::Message::Interaction);
    if !captured {
        ctx.search.handle(search::Message::Dismissed, ctx.i18n.language());
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    *ctx.window_size = size;
    if !ctx.is_compact() {
        ctx.menu.close();
    }
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) {
    *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
}

// =============================================================================
// Navigation, search, language
// =============================================================================

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    let compact = ctx.is_compact();
    match navbar::update(message, ctx.menu, compact) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(section) => scroll_to(ctx, section),
        NavbarEvent::LanguageSelected(language) => {
            apply_language_change(ctx, language.code());
            Task::none()
        }
        NavbarEvent::Search(message) => match ctx.search.handle(message, ctx.i18n.language()) {
            SearchEffect::ScrollTo(section) => scroll_to(ctx, section),
            SearchEffect::None => Task::none(),
        },
        NavbarEvent::Audio(message) => {
            ctx.audio.update(message);
            Task::none()
        }
    }
}

/// Scrolls the page to `section`, closing the search results and the menu.
pub fn scroll_to(ctx: &mut UpdateContext<'_>, section: SectionId) -> Task<Message> {
    ctx.search.close();
    ctx.menu.close();
    operation::snap_to(
        Id::new(PAGE_SCROLL_ID),
        RelativeOffset {
            x: 0.0,
            y: section.scroll_fraction(),
        },
    )
}

/// Switches language and relabels every caption and label the page owns.
pub fn apply_language_change(ctx: &mut UpdateContext<'_>, code: &str) {
    let Some(language) = persistence::apply_language_change(ctx.i18n, ctx.app_state, code) else {
        return;
    };
    ctx.rotator.relabel(language);
    ctx.lightbox.relabel(language);
    ctx.map.relabel(language);
    ctx.search.relabel(language);
}

pub fn handle_map_message(ctx: &mut UpdateContext<'_>, message: map::Message) {
    ctx.map.update(message);
}
