// SPDX-License-Identifier: MPL-2.0
//! Background music player state.
//!
//! The track is decoded off the update thread and handed over with
//! [`AudioPlayer::track_loaded`], which attempts autoplay. If the output
//! refuses, the refusal is logged and playback is retried on the first user
//! interaction of any kind. The mute and restart buttons also retry while
//! nothing plays. A track that failed to load is never retried.

use super::output::AudioOutput;
use super::track::Track;
use crate::error::{AudioError, Result};

/// The device side of the player.
pub trait Backend {
    /// Takes the decoded track. Playback does not start yet.
    fn attach(&mut self, track: Track);

    /// Starts playback, or resumes it if already started.
    ///
    /// # Errors
    ///
    /// Returns an error when playback cannot begin.
    fn play(&mut self) -> Result<()>;

    fn set_muted(&mut self, muted: bool);

    /// Seeks back to the start of the track.
    fn rewind(&mut self);
}

/// Plays the attached track through cpal, opening the device lazily.
#[derive(Debug)]
pub struct CpalBackend {
    volume: f32,
    track: Option<Track>,
    output: Option<AudioOutput>,
    muted: bool,
}

impl CpalBackend {
    #[must_use]
    pub fn new(volume: f32) -> Self {
        Self {
            volume,
            track: None,
            output: None,
            muted: false,
        }
    }
}

impl Backend for CpalBackend {
    fn attach(&mut self, track: Track) {
        self.output = None;
        self.track = Some(track);
    }

    fn play(&mut self) -> Result<()> {
        if let Some(output) = &self.output {
            output.resume();
            return Ok(());
        }

        let track = self
            .track
            .as_ref()
            .ok_or_else(|| AudioError::PlaybackRefused("no track attached".into()))?;
        let output = AudioOutput::open(track, self.volume)?;
        output.set_muted(self.muted);
        self.output = Some(output);
        Ok(())
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(output) = &self.output {
            output.set_muted(muted);
        }
    }

    fn rewind(&mut self) {
        if let Some(output) = &self.output {
            output.rewind();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Any click, touch or mouse press anywhere in the window.
    Interaction,
    ToggleMute,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackState {
    Loading,
    Ready,
    Unavailable,
}

#[derive(Debug)]
pub struct AudioPlayer<B: Backend = CpalBackend> {
    backend: B,
    track: TrackState,
    playing: bool,
    muted: bool,
    awaiting_interaction: bool,
}

impl<B: Backend> AudioPlayer<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            track: TrackState::Loading,
            playing: false,
            muted: false,
            awaiting_interaction: false,
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether a refused autoplay is waiting for the first interaction.
    #[must_use]
    pub fn is_awaiting_interaction(&self) -> bool {
        self.awaiting_interaction
    }

    /// Whether the track failed to load and playback is off for good.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.track == TrackState::Unavailable
    }

    /// Receives the startup decode and attempts autoplay.
    pub fn track_loaded(&mut self, result: Result<Track>) {
        match result {
            Ok(track) => {
                tracing::debug!(
                    frames = track.frames(),
                    sample_rate = track.sample_rate(),
                    "background track decoded"
                );
                self.backend.attach(track);
                self.backend.set_muted(self.muted);
                self.track = TrackState::Ready;
                if !self.try_play() {
                    self.awaiting_interaction = true;
                }
            }
            Err(err) => {
                tracing::info!("background track unavailable: {err}");
                self.track = TrackState::Unavailable;
            }
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Interaction => {
                if std::mem::take(&mut self.awaiting_interaction) {
                    self.try_play();
                }
            }
            Message::ToggleMute => {
                self.muted = !self.muted;
                self.backend.set_muted(self.muted);
                self.retry_if_stopped();
            }
            Message::Restart => {
                self.backend.rewind();
                self.retry_if_stopped();
            }
        }
    }

    fn retry_if_stopped(&mut self) {
        if self.track == TrackState::Ready && !self.playing {
            self.try_play();
        }
    }

    fn try_play(&mut self) -> bool {
        match self.backend.play() {
            Ok(()) => {
                self.playing = true;
                true
            }
            Err(err) => {
                tracing::info!("autoplay blocked, waiting for interaction: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Debug, Default)]
    struct FakeBackend {
        refusals_left: usize,
        attached: usize,
        plays: usize,
        rewinds: usize,
        muted: bool,
    }

    impl Backend for FakeBackend {
        fn attach(&mut self, _track: Track) {
            self.attached += 1;
        }

        fn play(&mut self) -> Result<()> {
            if self.refusals_left > 0 {
                self.refusals_left -= 1;
                return Err(Error::Audio(AudioError::NoOutputDevice));
            }
            self.plays += 1;
            Ok(())
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn rewind(&mut self) {
            self.rewinds += 1;
        }
    }

    fn track() -> Track {
        Track::new(vec![0.0; 96], 48_000, 2)
    }

    fn refusing(times: usize) -> AudioPlayer<FakeBackend> {
        AudioPlayer::new(FakeBackend {
            refusals_left: times,
            ..FakeBackend::default()
        })
    }

    #[test]
    fn autoplay_succeeds_once_the_track_arrives() {
        let mut player = refusing(0);
        assert!(!player.is_playing());

        player.track_loaded(Ok(track()));
        assert_eq!(player.backend.attached, 1);
        assert!(player.is_playing());
        assert!(!player.is_awaiting_interaction());
    }

    #[test]
    fn refused_autoplay_retries_on_first_interaction_only() {
        let mut player = refusing(1);
        player.track_loaded(Ok(track()));
        assert!(!player.is_playing());
        assert!(player.is_awaiting_interaction());

        player.update(Message::Interaction);
        assert!(player.is_playing());

        player.update(Message::Interaction);
        assert_eq!(player.backend.plays, 1);
    }

    #[test]
    fn mute_toggles_and_retries_when_not_playing() {
        let mut player = refusing(2);
        player.track_loaded(Ok(track()));
        player.update(Message::Interaction);
        assert!(!player.is_playing());

        player.update(Message::ToggleMute);
        assert!(player.is_muted());
        assert!(player.backend.muted);
        assert!(player.is_playing());

        player.update(Message::ToggleMute);
        assert!(!player.is_muted());
        assert_eq!(player.backend.plays, 1);
    }

    #[test]
    fn restart_rewinds_and_plays_if_stopped() {
        let mut player = refusing(1);
        player.track_loaded(Ok(track()));
        player.update(Message::Restart);
        assert_eq!(player.backend.rewinds, 1);
        assert!(player.is_playing());

        player.update(Message::Restart);
        assert_eq!(player.backend.rewinds, 2);
        assert_eq!(player.backend.plays, 1);
    }

    #[test]
    fn mute_before_the_track_arrives_carries_over() {
        let mut player = refusing(0);
        player.update(Message::ToggleMute);
        assert_eq!(player.backend.plays, 0);

        player.track_loaded(Ok(track()));
        assert!(player.backend.muted);
        assert!(player.is_playing());
    }

    #[test]
    fn failed_load_is_remembered() {
        let mut player = refusing(0);
        player.track_loaded(Err(Error::Audio(AudioError::Decode("missing".into()))));
        assert!(player.is_unavailable());
        assert!(!player.is_awaiting_interaction());

        for message in [Message::Interaction, Message::ToggleMute, Message::Restart] {
            player.update(message);
        }
        assert_eq!(player.backend.plays, 0);
        assert_eq!(player.backend.attached, 0);
        assert!(!player.is_playing());
    }

    #[test]
    fn cpal_backend_refuses_without_a_track() {
        let mut backend = CpalBackend::new(0.25);
        assert!(matches!(
            backend.play(),
            Err(Error::Audio(AudioError::PlaybackRefused(_)))
        ));
    }

    #[tokio::test]
    async fn missing_track_file_is_not_fatal() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = crate::audio::load_track(dir.path().join("none.mp3")).await;
        assert!(result.is_err());

        let mut player = AudioPlayer::new(CpalBackend::new(0.25));
        player.track_loaded(result);
        assert!(player.is_unavailable());
        assert!(!player.is_playing());
    }
}
