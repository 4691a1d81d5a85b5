// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Audio(AudioError),
}

/// Reasons the background track could not start.
///
/// None of these are fatal: the player stays idle and retries on the next
/// user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The host exposes no default output device.
    NoOutputDevice,

    /// The device refused the stream configuration.
    StreamConfig(String),

    /// The stream was built but could not be started.
    PlaybackRefused(String),

    /// The track file holds no playable audio stream.
    UnsupportedTrack(String),

    /// FFmpeg could not open, decode or resample the track.
    Decode(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoOutputDevice => write!(f, "No audio output device found"),
            AudioError::StreamConfig(msg) => write!(f, "Audio stream configuration failed: {}", msg),
            AudioError::PlaybackRefused(msg) => write!(f, "Playback refused: {}", msg),
            AudioError::UnsupportedTrack(msg) => write!(f, "Unsupported track: {}", msg),
            AudioError::Decode(msg) => write!(f, "Track decoding failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AudioError> for Error {
    fn from(err: AudioError) -> Self {
        Error::Audio(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
