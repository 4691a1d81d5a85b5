// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the page.
//!
//! The `App` struct owns every piece of page state (localization, gallery
//! rotation, lightbox, search, map, audio) and translates messages into
//! side effects such as image loads or language persistence. Handlers live
//! in [`update`] and borrow the state through an `UpdateContext`.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};

use crate::audio::{self, AudioPlayer, CpalBackend};
use crate::gallery::{GalleryRegistry, GalleryRotator, Lightbox, SwipeTracker};
use crate::i18n::{I18n, TextKey};
use crate::map::MapState;
use crate::media::{CacheConfig, ImageCache};
use crate::search::SearchState;
use crate::ui::navbar::MenuState;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: config::Config,
    assets_root: PathBuf,
    registry: GalleryRegistry,
    rotator: GalleryRotator,
    lightbox: Lightbox,
    swipe: SwipeTracker,
    cache: ImageCache,
    menu: MenuState,
    search: SearchState,
    map: MapState,
    audio: AudioPlayer,
    impressum_open: bool,
    window_size: Size,
    /// Lightbox spinner angle, advanced by the tick subscription.
    spinner_rotation: f32,
    /// Persisted application state (language preference).
    app_state: persisted_state::AppState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.i18n.language())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("audio_playing", &self.audio.is_playing())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the page state from already loaded settings, without touching
    /// the audio device or issuing loads.
    fn with_config(
        config: config::Config,
        i18n: I18n,
        app_state: persisted_state::AppState,
    ) -> Self {
        let language = i18n.language();
        let registry = GalleryRegistry::from_catalog();
        let rotator = GalleryRotator::new(&registry, config.gallery.window_size(), language);
        let cache = ImageCache::new(CacheConfig {
            max_images: config.cache.max_images(),
            ..CacheConfig::default()
        });
        let audio = AudioPlayer::new(CpalBackend::new(config.audio.volume()));

        Self {
            assets_root: config.assets.root(),
            swipe: SwipeTracker::new(config.lightbox.swipe_threshold_px()),
            map: MapState::new(language),
            i18n,
            registry,
            rotator,
            lightbox: Lightbox::default(),
            cache,
            menu: MenuState::default(),
            search: SearchState::default(),
            audio,
            impressum_open: false,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            spinner_rotation: 0.0,
            app_state,
            config,
        }
    }

    /// Loads settings and the persisted language, then starts the startup
    /// preload and the background track decode.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (mut config, config_warning) = config::load();
        if let Some(key) = config_warning {
            tracing::warn!(warning = %key, "using default settings");
        }
        if let Some(assets) = flags.assets {
            config.assets.root = Some(PathBuf::from(assets));
        }

        let (app_state, state_warning) = persisted_state::AppState::load();
        if let Some(key) = state_warning {
            tracing::warn!(warning = %key, "ignoring persisted state");
        }

        let i18n = I18n::new(flags.lang, app_state.language.as_deref());
        tracing::info!(
            language = i18n.language().code(),
            assets = %config.assets.root().display(),
            "starting"
        );

        let mut app = Self::with_config(config, i18n, app_state);

        let track = Task::perform(
            audio::load_track(app.config.audio_track_path()),
            Message::TrackLoaded,
        );
        let startup_preload = app.config.gallery.startup_preload();
        let preload = update::startup_preload(&mut app.context(), startup_preload);
        (app, Task::batch([track, preload]))
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            app_state: &mut self.app_state,
            registry: &mut self.registry,
            rotator: &mut self.rotator,
            lightbox: &mut self.lightbox,
            swipe: &mut self.swipe,
            cache: &mut self.cache,
            menu: &mut self.menu,
            search: &mut self.search,
            map: &mut self.map,
            audio: &mut self.audio,
            impressum_open: &mut self.impressum_open,
            window_size: &mut self.window_size,
            spinner_rotation: &mut self.spinner_rotation,
            assets_root: &self.assets_root,
            max_decoded_dimension: self.config.cache.max_decoded_dimension(),
            mobile_breakpoint_px: self.config.display.mobile_breakpoint_px(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr(TextKey::HeroTitle).to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.lightbox.is_loading()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::Gallery(message) => update::handle_gallery_message(&mut ctx, message),
            Message::Lightbox(message) => update::handle_lightbox_message(&mut ctx, message),
            Message::Map(message) => {
                update::handle_map_message(&mut ctx, message);
                Task::none()
            }
            Message::Audio(message) => {
                ctx.audio.update(message);
                Task::none()
            }
            Message::TrackLoaded(result) => {
                ctx.audio.track_loaded(result);
                Task::none()
            }
            Message::ToggleImpressum => {
                *ctx.impressum_open = !*ctx.impressum_open;
                Task::none()
            }
            Message::PreloadSettled {
                gallery,
                token,
                slot,
                image,
                result,
            } => {
                update::handle_preload_settled(&mut ctx, gallery, token, slot, &image, result);
                Task::none()
            }
            Message::LightboxImageLoaded { image, result } => {
                update::handle_lightbox_image_loaded(&mut ctx, &image, result);
                Task::none()
            }
            Message::ImagePrefetched {
                gallery,
                image,
                result,
            } => {
                update::handle_image_prefetched(&mut ctx, gallery, &image, result);
                Task::none()
            }
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut),
            Message::TouchStarted(x) => {
                update::handle_touch_started(&mut ctx, x);
                Task::none()
            }
            Message::TouchEnded(x) => update::handle_touch_ended(&mut ctx, x),
            Message::TouchLost => {
                ctx.swipe.cancel();
                Task::none()
            }
            Message::PointerPressed { captured } => {
                update::handle_pointer_pressed(&mut ctx, captured);
                Task::none()
            }
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size);
                Task::none()
            }
            Message::Tick(_) => {
                update::handle_tick(&mut ctx);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            rotator: &self.rotator,
            lightbox: &self.lightbox,
            menu: self.menu,
            search: &self.search,
            map: &self.map,
            audio_muted: self.audio.is_muted(),
            impressum_open: self.impressum_open,
            compact: self.window_size.width <= self.config.display.mobile_breakpoint_px() as f32,
            transition_opacity: self.config.gallery.transition_opacity(),
            spinner_rotation: self.spinner_rotation,
            assets_root: &self.assets_root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GalleryId, SectionId};
    use crate::error::Error;
    use crate::gallery::Direction;
    use crate::i18n::Language;
    use crate::media::ImageData;
    use crate::ui::{gallery_view, lightbox_view, navbar};

    fn app() -> App {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut config = config::Config::default();
        config.assets.root = Some(dir.path().to_path_buf());
        App::with_config(config, I18n::default(), persisted_state::AppState::default())
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    /// Settles every pending preload of `id` successfully.
    fn settle_window(app: &mut App, id: GalleryId) {
        let window = app.rotator.window(id).expect("window").clone();
        let token = window.pending_token().expect("pending batch");
        let cursor = window.pending_cursor().expect("pending cursor");
        let gallery = app.registry.get(id).expect("gallery").clone();
        for slot in 0..app.rotator.window_size() {
            let image = gallery.image((cursor + slot) % gallery.len()).expect("image").clone();
            let _ = app.update(Message::PreloadSettled {
                gallery: id,
                token,
                slot,
                image,
                result: Ok(pixel()),
            });
        }
    }

    #[test]
    fn rotation_commits_after_every_preload_settles() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery_view::Message::Rotate(
            GalleryId::Sun,
            Direction::Next,
        )));
        assert!(app.rotator.window(GalleryId::Sun).expect("sun").is_transitioning());

        settle_window(&mut app, GalleryId::Sun);

        let window = app.rotator.window(GalleryId::Sun).expect("sun");
        assert!(!window.is_transitioning());
        assert_eq!(app.registry.cursor(GalleryId::Sun), Some(1));
        assert_eq!(&*window.slots()[0].image, "gallery/S.U.N./2.jpg");
    }

    #[test]
    fn failed_preloads_still_commit() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery_view::Message::Rotate(
            GalleryId::Mandula,
            Direction::Previous,
        )));
        let window = app.rotator.window(GalleryId::Mandula).expect("mandula").clone();
        let token = window.pending_token().expect("token");
        for slot in 0..app.rotator.window_size() {
            let _ = app.update(Message::PreloadSettled {
                gallery: GalleryId::Mandula,
                token,
                slot,
                image: "missing.jpg".into(),
                result: Err(Error::Io("missing".into())),
            });
        }
        assert_eq!(app.registry.cursor(GalleryId::Mandula), Some(3));
    }

    #[test]
    fn thumbnail_click_opens_lightbox_at_window_offset() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery_view::Message::OpenSlot(
            GalleryId::Manas,
            2,
        )));
        let session = app.lightbox.session().expect("session");
        assert!(app.lightbox.is_open());
        assert_eq!(session.gallery, GalleryId::Manas);
        assert_eq!(session.index, 2);
        assert!(app.lightbox.is_loading());
    }

    #[test]
    fn lightbox_shows_only_the_latest_target() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery_view::Message::OpenSlot(
            GalleryId::Mandula,
            0,
        )));
        let _ = app.update(Message::Lightbox(lightbox_view::Message::Next));

        let _ = app.update(Message::LightboxImageLoaded {
            image: "gallery/Mandula/1.jpeg".into(),
            result: Ok(pixel()),
        });
        assert!(app.lightbox.is_loading());
        assert!(app.lightbox.handle().is_none());

        let _ = app.update(Message::LightboxImageLoaded {
            image: "gallery/Mandula/2.jpeg".into(),
            result: Ok(pixel()),
        });
        assert!(!app.lightbox.is_loading());
        assert!(app.lightbox.handle().is_some());
    }

    #[test]
    fn arrow_keys_drive_lightbox_or_every_gallery() {
        let mut app = app();
        let _ = app.update(Message::Shortcut(Shortcut::Next));
        assert!(app
            .rotator
            .windows()
            .all(|window| window.is_transitioning()));

        let _ = app.update(Message::Gallery(gallery_view::Message::OpenSlot(
            GalleryId::Mandula,
            0,
        )));
        let _ = app.update(Message::Shortcut(Shortcut::Previous));
        assert_eq!(app.lightbox.session().map(|s| s.index), Some(3));

        let _ = app.update(Message::Shortcut(Shortcut::Close));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn swipe_navigates_only_past_threshold() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery_view::Message::OpenSlot(
            GalleryId::Sun,
            0,
        )));

        let _ = app.update(Message::TouchStarted(300.0));
        let _ = app.update(Message::TouchEnded(260.0));
        assert_eq!(app.lightbox.session().map(|s| s.index), Some(0));

        let _ = app.update(Message::TouchStarted(300.0));
        let _ = app.update(Message::TouchEnded(250.0));
        assert_eq!(app.lightbox.session().map(|s| s.index), Some(1));

        let _ = app.update(Message::TouchStarted(100.0));
        let _ = app.update(Message::TouchEnded(180.0));
        assert_eq!(app.lightbox.session().map(|s| s.index), Some(0));
    }

    #[test]
    fn language_switch_relabels_open_lightbox() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery_view::Message::OpenSlot(
            GalleryId::Galgaguta,
            1,
        )));
        let before = app.lightbox.session();

        let _ = app.update(Message::Navbar(navbar::Message::SelectLanguage(
            Language::En,
        )));
        assert_eq!(app.i18n.language(), Language::En);
        assert_eq!(app.lightbox.caption(), Language::En.text(TextKey::CaptionGalgaguta));
        assert_eq!(app.lightbox.session(), before);
        assert_eq!(app.app_state.language.as_deref(), Some("en"));
    }

    #[test]
    fn navigation_closes_menu_and_search() {
        let mut app = app();
        app.window_size = Size::new(800.0, 600.0);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu.open);

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(SectionId::Contact)));
        assert!(!app.menu.open);
        assert!(!app.search.results().is_open());
    }

    #[test]
    fn widening_the_window_closes_the_mobile_menu() {
        let mut app = app();
        app.window_size = Size::new(800.0, 600.0);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        let _ = app.update(Message::WindowResized(Size::new(1400.0, 900.0)));
        assert!(!app.menu.open);
    }

    #[test]
    fn impressum_toggles() {
        let mut app = app();
        let _ = app.update(Message::ToggleImpressum);
        assert!(app.impressum_open);
        let _ = app.update(Message::ToggleImpressum);
        assert!(!app.impressum_open);
    }

    #[test]
    fn view_renders_with_open_lightbox() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery_view::Message::OpenSlot(
            GalleryId::Advent,
            0,
        )));
        let _ = app.view();
    }

    #[test]
    fn failed_track_load_leaves_audio_off() {
        let mut app = app();
        let _ = app.update(Message::TrackLoaded(Err(Error::Audio(
            crate::error::AudioError::Decode("no such file".into()),
        ))));
        assert!(app.audio.is_unavailable());

        let _ = app.update(Message::PointerPressed { captured: false });
        let _ = app.update(Message::Audio(audio::Message::ToggleMute));
        assert!(!app.audio.is_playing());
        assert!(app.audio.is_muted());
    }
}
