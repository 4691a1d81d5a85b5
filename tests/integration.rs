// SPDX-License-Identifier: MPL-2.0
use merkaba_site::app::config::{self, Config, DEFAULT_WINDOW_SIZE};
use merkaba_site::app::persisted_state::AppState;
use merkaba_site::audio::{OutputFormat, Track};
use merkaba_site::catalog::GalleryId;
use merkaba_site::gallery::{
    swipe, Direction, GalleryRegistry, GalleryRotator, Lightbox, PreloadRequest, Settlement,
};
use merkaba_site::i18n::{I18n, Language, TextKey};
use merkaba_site::media::{self, ImageCache};
use iced::widget::image;
use tempfile::tempdir;

fn pixel() -> image::Handle {
    image::Handle::from_rgba(1, 1, vec![255, 255, 255, 255])
}

fn settle(
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
            Some(pixel()),
            Language::Hu,
        );
    }
    last
}

#[test]
fn sun_rotation_commits_next_window() {
    let mut registry = GalleryRegistry::from_catalog();
    let mut rotator = GalleryRotator::new(&registry, DEFAULT_WINDOW_SIZE, Language::Hu);

    let requests = rotator.rotate(&registry, GalleryId::Sun, Direction::Next);
    assert_eq!(requests.len(), 4);
    assert_eq!(
        settle(&mut rotator, &mut registry, &requests),
        Settlement::Committed { cursor: 1 }
    );

    let shown: Vec<&str> = rotator
        .window(GalleryId::Sun)
        .expect("sun window")
        .slots()
        .iter()
        .map(|slot| &*slot.image)
        .collect();
    assert_eq!(
        shown,
        [
            "gallery/S.U.N./2.jpg",
            "gallery/S.U.N./3.jpg",
            "gallery/S.U.N./4.jpg",
            "gallery/S.U.N./5.jpg",
        ]
    );
}

#[test]
fn repeated_rotations_land_on_modular_cursor() {
    let mut registry = GalleryRegistry::from_catalog();
    let mut rotator = GalleryRotator::new(&registry, DEFAULT_WINDOW_SIZE, Language::En);
    let len = registry.images(GalleryId::Microasis).expect("microasis").len();

    for _ in 0..13 {
        let requests = rotator.rotate(&registry, GalleryId::Microasis, Direction::Previous);
        settle(&mut rotator, &mut registry, &requests);
    }
    assert_eq!(
        registry.cursor(GalleryId::Microasis),
        Some((len * 2 - 13) % len)
    );
}

#[test]
fn superseded_batch_cannot_commit() {
    let mut registry = GalleryRegistry::from_catalog();
    let mut rotator = GalleryRotator::new(&registry, DEFAULT_WINDOW_SIZE, Language::Hu);

    let first = rotator.rotate(&registry, GalleryId::Indian, Direction::Next);
    let second = rotator.rotate(&registry, GalleryId::Indian, Direction::Next);

    assert_eq!(settle(&mut rotator, &mut registry, &first), Settlement::Stale);
    assert_eq!(registry.cursor(GalleryId::Indian), Some(0));
    assert_eq!(
        settle(&mut rotator, &mut registry, &second),
        Settlement::Committed { cursor: 2 }
    );
}

#[test]
fn lightbox_wraps_and_returns_to_start() {
    let registry = GalleryRegistry::from_catalog();
    let mut lightbox = Lightbox::default();
    lightbox
        .open(&registry, GalleryId::Mandula, Some(3), Language::Hu)
        .expect("mandula opens");

    lightbox.navigate(&registry, Direction::Next, Language::Hu);
    assert_eq!(lightbox.session().map(|s| s.index), Some(0));

    let len = registry.images(GalleryId::Galgaguta).expect("galgaguta").len();
    lightbox.open(&registry, GalleryId::Galgaguta, Some(2), Language::Hu);
    for _ in 0..len {
        lightbox.navigate(&registry, Direction::Previous, Language::Hu);
    }
    assert_eq!(lightbox.session().map(|s| s.index), Some(2));
}

#[test]
fn swipe_threshold_is_inclusive() {
    assert_eq!(swipe::classify(200.0, 151.0, 50.0), None);
    assert_eq!(swipe::classify(200.0, 150.0, 50.0), Some(Direction::Next));
    assert_eq!(swipe::classify(150.0, 200.0, 50.0), Some(Direction::Previous));
}

#[test]
fn language_preference_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut state = AppState::default();
    let mut i18n = I18n::default();
    let language = i18n.set_language("en").expect("en is known");
    state.set_language(language);
    assert_eq!(state.save_to(Some(dir.path().to_path_buf())), None);

    let (restored, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);
    let i18n = I18n::new(None, restored.language.as_deref());
    assert_eq!(i18n.language(), Language::En);
    assert_eq!(i18n.tr(TextKey::NavContact), "Contact Us");
}

#[test]
fn unknown_language_changes_nothing() {
    let mut i18n = I18n::new(None, Some("en"));
    assert_eq!(i18n.set_language("fr"), None);
    assert_eq!(i18n.language(), Language::En);
}

#[test]
fn settings_file_round_trips_and_clamps() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.gallery.window_size = Some(3);
    settings.audio.volume = Some(4.0);
    config::save_to_path(&settings, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to read config");
    assert_eq!(loaded.gallery.window_size(), 3);
    assert!((loaded.audio.volume() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn broken_settings_fall_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[gallery\nwindow_size = ").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning.as_deref(), Some(config::WARNING_CONFIG_LOAD));
    assert_eq!(loaded.gallery.window_size(), DEFAULT_WINDOW_SIZE);
}

#[tokio::test]
async fn gallery_image_loads_into_cache() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::create_dir_all(dir.path().join("gallery")).expect("mkdir");
    image_rs::RgbaImage::from_pixel(8, 4, image_rs::Rgba([10, 20, 30, 255]))
        .save(dir.path().join("gallery/one.png"))
        .expect("write png");

    let (image, result) =
        media::load_gallery_image(dir.path().to_path_buf(), "gallery/one.png".into(), 1600).await;
    let data = result.expect("png decodes");
    assert_eq!((data.width, data.height), (8, 4));

    let mut cache = ImageCache::with_defaults();
    cache.insert(image.clone(), data);
    assert!(cache.contains(&image));

    let (_, missing) =
        media::load_gallery_image(dir.path().to_path_buf(), "gallery/two.png".into(), 1600).await;
    assert!(missing.is_err());
}

#[test]
fn track_is_resampled_to_the_device_rate() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("track.wav");

    // 0.2 s of a mono triangle wave at 22.05 kHz.
    let samples: Vec<i16> = (0..4_410).map(|i| ((i % 50) * 600 - 15_000) as i16).collect();
    let data: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVEfmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&22_050u32.to_le_bytes());
    wav.extend_from_slice(&44_100u32.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data.len() as u32).to_le_bytes());
    wav.extend_from_slice(&data);
    std::fs::write(&path, wav).expect("write wav");

    let target = OutputFormat {
        sample_rate: 44_100,
        channels: 1,
    };
    let track = Track::decode(&path, target).expect("track decodes");
    assert_eq!(track.format(), target);
    assert!(
        (8_000..=9_700).contains(&track.frames()),
        "expected about 8820 frames, got {}",
        track.frames()
    );
}

#[test]
fn mp3_named_garbage_is_rejected() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("background.mp3");
    std::fs::write(&path, b"definitely not mpeg audio").expect("write file");

    let target = OutputFormat {
        sample_rate: 48_000,
        channels: 2,
    };
    assert!(Track::decode(&path, target).is_err());
}
