// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! takes a `ViewContext` borrowing the state it renders and emits its own
//! `Message` type, which the application maps into its top-level message.
//!
//! # Page components
//!
//! - [`navbar`] - Header with links, search, language switch and mobile menu
//! - [`gallery_view`] - Festival card with the rotating thumbnail strip
//! - [`lightbox_view`] - Full-window image overlay
//! - [`map_view`] - Location list and the projected map canvas
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery_view;
pub mod lightbox_view;
pub mod map_view;
pub mod navbar;
pub mod styles;
pub mod widgets;
