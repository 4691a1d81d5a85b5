// SPDX-License-Identifier: MPL-2.0
//! Looping track output using cpal.
//!
//! The stream lives on a dedicated thread because `cpal::Stream` is not
//! `Send`. The update thread and the device callback share only atomics:
//! volume, mute, pause and the playback position.

use super::track::{OutputFormat, Track};
use crate::error::AudioError;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Arc;

/// Shared state between the audio callback and the update thread.
struct SharedState {
    /// Stored as `f32` bits.
    volume_bits: AtomicU32,
    muted: AtomicBool,
    paused: AtomicBool,
    /// Next interleaved sample index to play.
    position: AtomicUsize,
}

impl SharedState {
    fn new(volume: f32) -> Self {
        Self {
            volume_bits: AtomicU32::new(volume.to_bits()),
            muted: AtomicBool::new(false),
            paused: AtomicBool::new(false),
            position: AtomicUsize::new(0),
        }
    }

    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    fn set_volume(&self, volume: f32) {
        self.volume_bits.store(volume.to_bits(), Ordering::Relaxed);
    }

    fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::Relaxed);
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    fn position(&self) -> usize {
        self.position.load(Ordering::Relaxed)
    }

    fn set_position(&self, position: usize) {
        self.position.store(position, Ordering::Relaxed);
    }

    /// Fills `out` from `samples`, wrapping to the start at the end.
    fn render(&self, samples: &[f32], out: &mut [f32]) {
        if self.is_paused() || samples.is_empty() {
            out.fill(0.0);
            return;
        }

        let gain = if self.is_muted() { 0.0 } else { self.volume() };
        let mut position = self.position() % samples.len();
        for sample in out.iter_mut() {
            *sample = (samples[position] * gain).clamp(-1.0, 0.999_999_9);
            position = (position + 1) % samples.len();
        }
        self.set_position(position);
    }
}

/// A running output stream for one looping track.
///
/// Dropping it closes the shutdown channel, which ends the stream thread.
pub struct AudioOutput {
    shared: Arc<SharedState>,
    _shutdown: mpsc::Sender<()>,
    sample_rate: u32,
    channels: u16,
}

impl std::fmt::Debug for AudioOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioOutput")
            .field("sample_rate", &self.sample_rate)
            .field("channels", &self.channels)
            .field("volume", &self.volume())
            .field("muted", &self.is_muted())
            .finish_non_exhaustive()
    }
}

impl AudioOutput {
    /// Opens the default output device and starts looping `track`, which
    /// must already be decoded to [`default_format`].
    ///
    /// # Errors
    ///
    /// Returns an error if no output device exists, the device rejects the
    /// stream configuration, or the stream refuses to start.
    pub fn open(track: &Track, volume: f32) -> Result<Self, AudioError> {
        let shared = Arc::new(SharedState::new(volume));
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(u32, u16), AudioError>>();
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let stream_shared = Arc::clone(&shared);
        let track = track.clone();
        std::thread::Builder::new()
            .name("audio-output".into())
            .spawn(move || {
                let stream = match start_stream(&track, stream_shared) {
                    Ok((stream, rate, channels)) => {
                        let _ = ready_tx.send(Ok((rate, channels)));
                        stream
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                        return;
                    }
                };
                // Keep the stream alive until the owner goes away.
                let _ = shutdown_rx.recv();
                drop(stream);
            })
            .map_err(|e| AudioError::PlaybackRefused(e.to_string()))?;

        let (sample_rate, channels) = ready_rx
            .recv()
            .map_err(|_| AudioError::PlaybackRefused("audio thread exited".into()))??;

        Ok(Self {
            shared,
            _shutdown: shutdown_tx,
            sample_rate,
            channels,
        })
    }

    pub fn set_volume(&self, volume: f32) {
        self.shared.set_volume(volume);
    }

    pub fn set_muted(&self, muted: bool) {
        self.shared.set_muted(muted);
    }

    pub fn pause(&self) {
        self.shared.set_paused(true);
    }

    pub fn resume(&self) {
        self.shared.set_paused(false);
    }

    /// Seeks back to the first sample.
    pub fn rewind(&self) {
        self.shared.set_position(0);
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.shared.volume()
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.shared.is_muted()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.shared.is_paused()
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[must_use]
    pub fn channels(&self) -> u16 {
        self.channels
    }
}

/// Format of the default output device, narrowed to mono or stereo.
///
/// # Errors
///
/// Returns an error if there is no output device or its configuration
/// cannot be read.
pub fn default_format() -> Result<OutputFormat, AudioError> {
    let device = cpal::default_host()
        .default_output_device()
        .ok_or(AudioError::NoOutputDevice)?;
    let supported_config = device
        .default_output_config()
        .map_err(|e| AudioError::StreamConfig(e.to_string()))?;

    Ok(OutputFormat {
        sample_rate: supported_config.sample_rate(),
        channels: supported_config.channels().clamp(1, 2),
    })
}

fn start_stream(
    track: &Track,
    shared: Arc<SharedState>,
) -> Result<(cpal::Stream, u32, u16), AudioError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or(AudioError::NoOutputDevice)?;

    let supported_config = device
        .default_output_config()
        .map_err(|e| AudioError::StreamConfig(e.to_string()))?;

    let sample_rate = supported_config.sample_rate();
    if sample_rate != track.sample_rate() {
        return Err(AudioError::StreamConfig(format!(
            "device rate changed from {} to {sample_rate} Hz",
            track.sample_rate()
        )));
    }
    let channels = track.channels();
    let samples = Arc::clone(track.samples());

    let mut config: cpal::StreamConfig = supported_config.config();
    config.channels = channels;
    let stream = match supported_config.sample_format() {
        cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, samples, shared)?,
        cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, samples, shared)?,
        cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, samples, shared)?,
        other => {
            return Err(AudioError::StreamConfig(format!(
                "unsupported sample format {other:?}"
            )))
        }
    };

    stream
        .play()
        .map_err(|e| AudioError::PlaybackRefused(e.to_string()))?;

    Ok((stream, sample_rate, channels))
}

fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    samples: Arc<Vec<f32>>,
    shared: Arc<SharedState>,
) -> Result<cpal::Stream, AudioError> {
    let mut scratch: Vec<f32> = Vec::new();
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                scratch.resize(data.len(), 0.0);
                shared.render(&samples, &mut scratch);
                for (out, sample) in data.iter_mut().zip(scratch.iter()) {
                    *out = T::from_sample(*sample);
                }
            },
            |err| {
                tracing::warn!("audio output error: {err}");
            },
            None,
        )
        .map_err(|e| AudioError::StreamConfig(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_state_volume_and_flags() {
        let state = SharedState::new(0.25);
        assert!((state.volume() - 0.25).abs() < f32::EPSILON);
        state.set_volume(0.5);
        assert!((state.volume() - 0.5).abs() < f32::EPSILON);

        assert!(!state.is_muted());
        state.set_muted(true);
        assert!(state.is_muted());

        assert!(!state.is_paused());
        state.set_paused(true);
        assert!(state.is_paused());
    }

    #[test]
    fn render_applies_volume_and_loops() {
        let state = SharedState::new(0.5);
        let samples = [1.0, -1.0, 0.5];
        let mut out = [0.0f32; 5];
        state.render(&samples, &mut out);
        assert_eq!(out, [0.5, -0.5, 0.25, 0.5, -0.5]);
        assert_eq!(state.position(), 2);
    }

    #[test]
    fn render_outputs_silence_when_muted_or_paused() {
        let state = SharedState::new(1.0);
        let samples = [0.8, 0.8, 0.8];
        let mut out = [1.0f32; 2];

        state.set_muted(true);
        state.render(&samples, &mut out);
        assert_eq!(out, [0.0, 0.0]);
        // Muted playback keeps advancing.
        assert_eq!(state.position(), 2);

        state.set_muted(false);
        state.set_paused(true);
        out = [1.0; 2];
        state.render(&samples, &mut out);
        assert_eq!(out, [0.0, 0.0]);
        assert_eq!(state.position(), 2);
    }

    #[test]
    #[ignore = "requires audio hardware"]
    fn output_can_be_opened() {
        let track = Track::new(vec![0.0; 4_800], 48_000, 1);
        if let Ok(output) = AudioOutput::open(&track, 0.25) {
            assert!((output.volume() - 0.25).abs() < f32::EPSILON);
            assert!(output.sample_rate() > 0);
            assert!(output.channels() > 0);
        }
    }
}
