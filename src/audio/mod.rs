// SPDX-License-Identifier: MPL-2.0
//! Background music: FFmpeg track decoding, cpal output and the player state.

pub mod output;
pub mod player;
pub mod track;

pub use output::{default_format, AudioOutput};
pub use player::{AudioPlayer, Backend, CpalBackend, Message};
pub use track::{load_track, OutputFormat, Track};
