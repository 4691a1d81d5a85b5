// SPDX-License-Identifier: MPL-2.0
//! `merkaba_site` is the Merkaba Coffee site client built with the Iced GUI
//! framework.
//!
//! It renders a bilingual (Hungarian/English) single page: festival photo
//! galleries whose thumbnail strips rotate only once every preload of the
//! next window has settled, a lightbox with keyboard, button and swipe
//! navigation, a location map, in-page search and a background track.

pub mod app;
pub mod audio;
pub mod catalog;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod map;
pub mod media;
pub mod search;
pub mod ui;
