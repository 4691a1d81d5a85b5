// SPDX-License-Identifier: MPL-2.0
//! Page sections, in scroll order.

use crate::catalog::galleries::{GalleryId, Season};
use crate::i18n::TextKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Summer,
    Winter,
    Menu,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Summer,
        SectionId::Winter,
        SectionId::Menu,
        SectionId::Contact,
    ];

    /// Sections offered by the in-page search, in result order.
    pub const SEARCHABLE: [SectionId; 5] = [
        SectionId::About,
        SectionId::Summer,
        SectionId::Winter,
        SectionId::Contact,
        SectionId::Menu,
    ];

    /// Anchor name, matching the fragment used by navigation links.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Summer => "summer-section",
            SectionId::Winter => "winter-section",
            SectionId::Menu => "menu",
            SectionId::Contact => "contact",
        }
    }

    /// Vertical position of the section inside the page scrollable, as a
    /// fraction of the scrollable range.
    #[must_use]
    pub fn scroll_fraction(self) -> f32 {
        match self {
            SectionId::Home => 0.0,
            SectionId::About => 0.12,
            SectionId::Summer => 0.3,
            SectionId::Winter => 0.58,
            SectionId::Menu => 0.72,
            SectionId::Contact => 0.86,
        }
    }

    /// Title listed in search results.
    #[must_use]
    pub fn search_title_key(self) -> TextKey {
        match self {
            SectionId::Home => TextKey::NavHome,
            SectionId::About => TextKey::SearchAbout,
            SectionId::Summer => TextKey::SearchSummer,
            SectionId::Winter => TextKey::SearchWinter,
            SectionId::Menu => TextKey::SearchMenu,
            SectionId::Contact => TextKey::SearchContact,
        }
    }

    /// Every text key rendered inside the section.
    #[must_use]
    pub fn text_keys(self) -> Vec<TextKey> {
        match self {
            SectionId::Home => vec![TextKey::HeroTitle, TextKey::HeroSubtitle],
            SectionId::About => vec![
                TextKey::TitleAbout,
                TextKey::AboutPara1,
                TextKey::AboutPara2,
                TextKey::AboutPara3,
                TextKey::AboutPara4,
                TextKey::AboutPara5,
                TextKey::AboutPara6,
            ],
            SectionId::Summer => season_keys(Season::Summer, TextKey::SummerTitle, TextKey::SummerDesc),
            SectionId::Winter => season_keys(Season::Winter, TextKey::WinterTitle, TextKey::WinterDesc),
            SectionId::Menu => vec![TextKey::TitleMenu],
            SectionId::Contact => vec![
                TextKey::TitleContact,
                TextKey::ContactSubtitle,
                TextKey::ContactLocation,
                TextKey::MapTitle,
                TextKey::MapInstruct,
            ],
        }
    }
}

fn season_keys(season: Season, title: TextKey, description: TextKey) -> Vec<TextKey> {
    let mut keys = vec![title, description];
    for id in GalleryId::ALL.into_iter().filter(|id| id.season() == season) {
        keys.push(id.title_key());
        keys.push(id.caption_key());
    }
    keys
}
