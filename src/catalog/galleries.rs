// SPDX-License-Identifier: MPL-2.0
//! Gallery categories and their image lists.
//!
//! Paths are relative to the configured assets root.

use crate::i18n::TextKey;
use std::fmt;
use std::str::FromStr;

/// Named gallery category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GalleryId {
    Sun,
    Manas,
    Microasis,
    Indian,
    Mandula,
    Advent,
    Galgaguta,
}

/// Page section a gallery is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
}

impl GalleryId {
    /// Every gallery in page order.
    pub const ALL: [GalleryId; 7] = [
        GalleryId::Sun,
        GalleryId::Manas,
        GalleryId::Microasis,
        GalleryId::Indian,
        GalleryId::Mandula,
        GalleryId::Advent,
        GalleryId::Galgaguta,
    ];

    /// Short identifier used in asset names and CLI/config values.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GalleryId::Sun => "sun",
            GalleryId::Manas => "manas",
            GalleryId::Microasis => "microasis",
            GalleryId::Indian => "indian",
            GalleryId::Mandula => "mandula",
            GalleryId::Advent => "advent",
            GalleryId::Galgaguta => "galgaguta",
        }
    }

    /// Festival heading shown above the thumbnail strip.
    #[must_use]
    pub fn title_key(self) -> TextKey {
        match self {
            GalleryId::Sun => TextKey::FestSun,
            GalleryId::Manas => TextKey::FestManas,
            GalleryId::Microasis => TextKey::FestMicroasis,
            GalleryId::Indian => TextKey::FestIndian,
            GalleryId::Mandula => TextKey::FestMandula,
            GalleryId::Advent => TextKey::FestAdvent,
            GalleryId::Galgaguta => TextKey::FestGalgaguta,
        }
    }

    /// Caption written under thumbnails and in the lightbox.
    #[must_use]
    pub fn caption_key(self) -> TextKey {
        match self {
            GalleryId::Sun => TextKey::GalSun,
            GalleryId::Manas => TextKey::GalManas,
            GalleryId::Microasis => TextKey::GalMicroasis,
            GalleryId::Indian => TextKey::GalIndian,
            GalleryId::Mandula => TextKey::GalMandula,
            GalleryId::Advent => TextKey::GalAdvent,
            GalleryId::Galgaguta => TextKey::GalGalgaguta,
        }
    }

    /// Whether the festival card carries the "coming soon" badge.
    #[must_use]
    pub fn upcoming(self) -> bool {
        matches!(self, GalleryId::Advent)
    }

    #[must_use]
    pub fn season(self) -> Season {
        match self {
            GalleryId::Advent | GalleryId::Galgaguta => Season::Winter,
            _ => Season::Summer,
        }
    }

    /// Image paths of this gallery in display order.
    #[must_use]
    pub fn images(self) -> &'static [&'static str] {
        match self {
            GalleryId::Sun => SUN,
            GalleryId::Manas => MANAS,
            GalleryId::Microasis => MICROASIS,
            GalleryId::Indian => INDIAN,
            GalleryId::Mandula => MANDULA,
            GalleryId::Advent => ADVENT,
            GalleryId::Galgaguta => GALGAGUTA,
        }
    }
}

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalleryId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GalleryId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

const SUN: &[&str] = &[
    "gallery/S.U.N./1.jpg",
    "gallery/S.U.N./2.jpg",
    "gallery/S.U.N./3.jpg",
    "gallery/S.U.N./4.jpg",
    "gallery/S.U.N./5.jpg",
    "gallery/S.U.N./6.jpg",
    "gallery/S.U.N./7.jpg",
    "gallery/S.U.N./8.JPG",
];

const MANAS: &[&str] = &[
    "gallery/Manas/1.jpeg",
    "gallery/Manas/2.JPG",
    "gallery/Manas/3.jpeg",
    "gallery/Manas/4.JPG",
    "gallery/Manas/5.JPG",
    "gallery/Manas/6.JPG",
    "gallery/Manas/7.JPG",
];

const MICROASIS: &[&str] = &[
    "gallery/Microasis/1.jpg",
    "gallery/Microasis/2.JPG",
    "gallery/Microasis/3.JPG",
    "gallery/Microasis/4.JPG",
    "gallery/Microasis/5.JPG",
    "gallery/Microasis/6.jpg",
    "gallery/Microasis/7.JPG",
    "gallery/Microasis/8.JPG",
    "gallery/Microasis/9.JPG",
    "gallery/Microasis/10.JPG",
];

const INDIAN: &[&str] = &[
    "gallery/Indian Summer/1.jpeg",
    "gallery/Indian Summer/2.jpeg",
    "gallery/Indian Summer/3.jpeg",
    "gallery/Indian Summer/4.jpeg",
    "gallery/Indian Summer/5.JPG",
    "gallery/Indian Summer/6.jpeg",
    "gallery/Indian Summer/7.jpeg",
    "gallery/Indian Summer/8.jpeg",
    "gallery/Indian Summer/9.jpeg",
    "gallery/Indian Summer/10.jpeg",
    "gallery/Indian Summer/10.1.jpeg",
    "gallery/Indian Summer/11.gif",
];

const MANDULA: &[&str] = &[
    "gallery/Mandula/1.jpeg",
    "gallery/Mandula/2.jpeg",
    "gallery/Mandula/7.JPG",
    "gallery/Mandula/8.jpeg",
];

const ADVENT: &[&str] = &[
    "gallery/Advent/1.jpeg",
    "gallery/Advent/2.JPG",
    "gallery/Advent/3.JPG",
    "gallery/Advent/4.JPG",
];

const GALGAGUTA: &[&str] = &[
    "gallery/Galgaguta/1.gif",
    "gallery/Galgaguta/2.JPG",
    "gallery/Galgaguta/3.JPG",
    "gallery/Galgaguta/5.JPG",
    "gallery/Galgaguta/6.JPG",
    "gallery/Galgaguta/7.1.JPG",
    "gallery/Galgaguta/8.JPG",
    "gallery/Galgaguta/9.JPG",
    "gallery/Galgaguta/10.JPG",
    "gallery/Galgaguta/11.JPG",
    "gallery/Galgaguta/12.JPG",
    "gallery/Galgaguta/13.JPG",
    "gallery/Galgaguta/14.JPG",
    "gallery/Galgaguta/15.JPG",
    "gallery/Galgaguta/16.JPG",
    "gallery/Galgaguta/17.JPG",
    "gallery/Galgaguta/18.JPG",
    "gallery/Galgaguta/19.JPG",
    "gallery/Galgaguta/20.JPG",
    "gallery/Galgaguta/21.JPG",
    "gallery/Galgaguta/22.JPG",
    "gallery/Galgaguta/23.JPG",
    "gallery/Galgaguta/24.JPG",
    "gallery/Galgaguta/25.JPG",
    "gallery/Galgaguta/26.JPG",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for id in GalleryId::ALL {
            assert_eq!(id.as_str().parse::<GalleryId>(), Ok(id));
        }
        assert!("winter".parse::<GalleryId>().is_err());
    }

    #[test]
    fn gallery_sizes_match_asset_folders() {
        assert_eq!(GalleryId::Sun.images().len(), 8);
        assert_eq!(GalleryId::Mandula.images().len(), 4);
        assert_eq!(GalleryId::Galgaguta.images().len(), 25);
        assert!(GalleryId::ALL.iter().all(|id| !id.images().is_empty()));
    }

    #[test]
    fn winter_holds_advent_and_galgaguta() {
        let winter: Vec<_> = GalleryId::ALL
            .into_iter()
            .filter(|id| id.season() == Season::Winter)
            .collect();
        assert_eq!(winter, vec![GalleryId::Advent, GalleryId::Galgaguta]);
    }
}
