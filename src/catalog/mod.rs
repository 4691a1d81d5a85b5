// SPDX-License-Identifier: MPL-2.0
//! Static site content: gallery image lists, map locations and page sections.

pub mod galleries;
pub mod locations;
pub mod sections;

pub use galleries::{GalleryId, Season};
pub use locations::{Location, LOCATIONS};
pub use sections::SectionId;
