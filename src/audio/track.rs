// SPDX-License-Identifier: MPL-2.0
//! Background track decoding.
//!
//! Any container and codec FFmpeg understands is decoded and resampled in
//! one pass to interleaved `f32` at the output device's rate and channel
//! count, so the stream callback only has to copy samples.

use crate::error::{AudioError, Error, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};

static FFMPEG_INIT: Once = Once::new();

/// Initializes FFmpeg once and quiets its console logging.
fn init_ffmpeg() -> std::result::Result<(), AudioError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(AudioError::Decode(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Sample rate and channel count the track must be decoded to.
///
/// `channels` is 1 or 2; wider devices receive a stereo stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

/// Decoded interleaved samples.
#[derive(Debug, Clone)]
pub struct Track {
    samples: Arc<Vec<f32>>,
    sample_rate: u32,
    channels: u16,
}

impl Track {
    #[must_use]
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples: Arc::new(samples),
            sample_rate,
            channels,
        }
    }

    /// Decodes the first audio stream of `path` into `format`.
    ///
    /// # Errors
    ///
    /// - [`AudioError::UnsupportedTrack`] if the file has no audio stream
    /// - [`AudioError::Decode`] if FFmpeg cannot open, decode or resample it
    pub fn decode(path: &Path, format: OutputFormat) -> std::result::Result<Self, AudioError> {
        init_ffmpeg()?;

        let mut ictx = ffmpeg_next::format::input(path)
            .map_err(|e| AudioError::Decode(format!("Failed to open track: {e}")))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Audio)
            .ok_or_else(|| AudioError::UnsupportedTrack("no audio stream".to_string()))?;
        let stream_index = input.index();

        let context = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
            .map_err(|e| AudioError::Decode(format!("Failed to create codec context: {e}")))?;
        let mut decoder = context
            .decoder()
            .audio()
            .map_err(|e| AudioError::Decode(format!("Failed to create audio decoder: {e}")))?;

        let mut resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
            channel_layout(format.channels),
            format.sample_rate,
        )
        .map_err(|e| AudioError::Decode(format!("Failed to create resampler: {e}")))?;

        let mut samples = Vec::new();
        for (stream, packet) in ictx.packets() {
            if stream.index() != stream_index {
                continue;
            }
            if let Err(e) = decoder.send_packet(&packet) {
                tracing::debug!("skipping undecodable audio packet: {e}");
                continue;
            }
            drain_decoder(&mut decoder, &mut resampler, format.channels, &mut samples)?;
        }

        decoder
            .send_eof()
            .map_err(|e| AudioError::Decode(format!("Failed to flush decoder: {e}")))?;
        drain_decoder(&mut decoder, &mut resampler, format.channels, &mut samples)?;

        let mut tail = ffmpeg_next::frame::Audio::empty();
        if resampler.flush(&mut tail).is_ok() {
            extend_samples(&tail, format.channels, &mut samples);
        }

        if samples.is_empty() {
            return Err(AudioError::UnsupportedTrack(
                "audio stream decoded to silence".to_string(),
            ));
        }

        Ok(Self::new(samples, format.sample_rate, format.channels))
    }

    #[must_use]
    pub fn samples(&self) -> &Arc<Vec<f32>> {
        &self.samples
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[must_use]
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Number of frames (one sample per channel).
    #[must_use]
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.channels.max(1))
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        OutputFormat {
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }
}

/// Output layout for a channel count; anything above mono is stereo.
fn channel_layout(channels: u16) -> ffmpeg_next::ChannelLayout {
    match channels {
        1 => ffmpeg_next::ChannelLayout::MONO,
        _ => ffmpeg_next::ChannelLayout::STEREO,
    }
}

/// Resamples every frame the decoder has ready.
fn drain_decoder(
    decoder: &mut ffmpeg_next::decoder::Audio,
    resampler: &mut ffmpeg_next::software::resampling::Context,
    channels: u16,
    samples: &mut Vec<f32>,
) -> std::result::Result<(), AudioError> {
    let mut decoded = ffmpeg_next::frame::Audio::empty();
    while decoder.receive_frame(&mut decoded).is_ok() {
        let mut resampled = ffmpeg_next::frame::Audio::empty();
        resampler
            .run(&decoded, &mut resampled)
            .map_err(|e| AudioError::Decode(format!("Resampling failed: {e}")))?;
        extend_samples(&resampled, channels, samples);
    }
    Ok(())
}

/// Appends the packed `f32` samples of `frame`.
fn extend_samples(frame: &ffmpeg_next::frame::Audio, channels: u16, samples: &mut Vec<f32>) {
    if frame.samples() == 0 {
        return;
    }
    let count = frame.samples() * usize::from(channels);
    samples.extend(
        frame
            .data(0)
            .chunks_exact(4)
            .take(count)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]])),
    );
}

/// Probes the default output device, then decodes `path` to its format on
/// the blocking pool.
///
/// # Errors
///
/// Returns an error if there is no usable output device or the track
/// cannot be decoded.
pub async fn load_track(path: PathBuf) -> Result<Track> {
    tokio::task::spawn_blocking(move || -> Result<Track> {
        let format = super::output::default_format()?;
        Ok(Track::decode(&path, format)?)
    })
    .await
    .map_err(|e| Error::Io(format!("Track loading task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a 16-bit PCM WAV file in memory.
    fn wav_16bit(samples: &[i16], sample_rate: u32, channels: u16) -> Vec<u8> {
        let data_len = (samples.len() * 2) as u32;
        let block_align = channels * 2;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&channels.to_le_bytes());
        bytes.extend_from_slice(&sample_rate.to_le_bytes());
        bytes.extend_from_slice(&(sample_rate * u32::from(block_align)).to_le_bytes());
        bytes.extend_from_slice(&block_align.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    const STEREO_48K: OutputFormat = OutputFormat {
        sample_rate: 48_000,
        channels: 2,
    };

    #[test]
    fn decodes_and_upmixes_to_the_output_format() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tone.wav");
        let tone: Vec<i16> = (0..800).map(|i| ((i % 40) * 400 - 8_000) as i16).collect();
        std::fs::write(&path, wav_16bit(&tone, 8_000, 1)).expect("write wav");

        let track = Track::decode(&path, STEREO_48K).expect("wav decodes");
        assert_eq!(track.format(), STEREO_48K);
        assert_eq!(track.samples().len() % 2, 0);
        // 800 frames at 8 kHz is 0.1 s, or about 4800 frames at 48 kHz.
        assert!(track.frames() > 4_000, "got {} frames", track.frames());
        assert!(track.samples().iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn rejects_files_without_audio() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"not audio at all").expect("write file");
        assert!(Track::decode(&path, STEREO_48K).is_err());
    }

    #[test]
    fn reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = Track::decode(&dir.path().join("missing.mp3"), STEREO_48K);
        assert!(matches!(result, Err(AudioError::Decode(_))));
    }

    #[test]
    fn frames_count_whole_channel_groups() {
        let track = Track::new(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6], 44_100, 2);
        assert_eq!(track.frames(), 3);
    }
}
