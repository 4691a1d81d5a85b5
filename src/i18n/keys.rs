// SPDX-License-Identifier: MPL-2.0
//! The closed set of translatable text keys.

/// Identifies one piece of translatable page text.
///
/// Every language table matches on this enum exhaustively, so adding a
/// variant without translating it fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextKey {
    NavHome,
    NavAbout,
    NavGallery,
    NavGalleryOpen,
    NavSummer,
    NavWinter,
    NavContact,
    HeroTitle,
    HeroSubtitle,
    TitleAbout,
    AboutPara1,
    AboutPara2,
    AboutPara3,
    AboutPara4,
    AboutPara5,
    AboutPara6,
    GalleryIntro,
    SummerTitle,
    SummerDesc,
    WinterTitle,
    WinterDesc,
    TitleMenu,
    TitleContact,
    ContactSubtitle,
    ContactLocation,
    FestSun,
    CaptionSun,
    FestManas,
    FestMicroasis,
    FestIndian,
    CaptionIndian,
    FestMandula,
    CaptionMandula,
    FestAdvent,
    CaptionAdvent,
    BadgeComing,
    FestGalgaguta,
    CaptionGalgaguta,
    MapTitle,
    MapInstruct,
    ImpressumLabel,
    ImpressumOwnerLabel,
    LabelName,
    LabelAddress,
    LabelCopyrightTitle,
    ImpressumCopyrightText,
    FooterRights,
    GalSun,
    GalManas,
    GalMicroasis,
    GalIndian,
    GalMandula,
    GalAdvent,
    GalGalgaguta,
    SearchAbout,
    SearchSummer,
    SearchWinter,
    SearchContact,
    SearchMenu,
    SearchNoResults,
    SearchPlaceholder,
    AudioMute,
    AudioUnmute,
    AudioRestart,
}

impl TextKey {
    pub const ALL: [TextKey; 64] = [
        TextKey::NavHome,
        TextKey::NavAbout,
        TextKey::NavGallery,
        TextKey::NavGalleryOpen,
        TextKey::NavSummer,
        TextKey::NavWinter,
        TextKey::NavContact,
        TextKey::HeroTitle,
        TextKey::HeroSubtitle,
        TextKey::TitleAbout,
        TextKey::AboutPara1,
        TextKey::AboutPara2,
        TextKey::AboutPara3,
        TextKey::AboutPara4,
        TextKey::AboutPara5,
        TextKey::AboutPara6,
        TextKey::GalleryIntro,
        TextKey::SummerTitle,
        TextKey::SummerDesc,
        TextKey::WinterTitle,
        TextKey::WinterDesc,
        TextKey::TitleMenu,
        TextKey::TitleContact,
        TextKey::ContactSubtitle,
        TextKey::ContactLocation,
        TextKey::FestSun,
        TextKey::CaptionSun,
        TextKey::FestManas,
        TextKey::FestMicroasis,
        TextKey::FestIndian,
        TextKey::CaptionIndian,
        TextKey::FestMandula,
        TextKey::CaptionMandula,
        TextKey::FestAdvent,
        TextKey::CaptionAdvent,
        TextKey::BadgeComing,
        TextKey::FestGalgaguta,
        TextKey::CaptionGalgaguta,
        TextKey::MapTitle,
        TextKey::MapInstruct,
        TextKey::ImpressumLabel,
        TextKey::ImpressumOwnerLabel,
        TextKey::LabelName,
        TextKey::LabelAddress,
        TextKey::LabelCopyrightTitle,
        TextKey::ImpressumCopyrightText,
        TextKey::FooterRights,
        TextKey::GalSun,
        TextKey::GalManas,
        TextKey::GalMicroasis,
        TextKey::GalIndian,
        TextKey::GalMandula,
        TextKey::GalAdvent,
        TextKey::GalGalgaguta,
        TextKey::SearchAbout,
        TextKey::SearchSummer,
        TextKey::SearchWinter,
        TextKey::SearchContact,
        TextKey::SearchMenu,
        TextKey::SearchNoResults,
        TextKey::SearchPlaceholder,
        TextKey::AudioMute,
        TextKey::AudioUnmute,
        TextKey::AudioRestart,
    ];

    /// Stable element identifier for the key (`nav-home`, `gal-sun`, ...).
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            TextKey::NavHome => "nav-home",
            TextKey::NavAbout => "nav-about",
            TextKey::NavGallery => "nav-gallery",
            TextKey::NavGalleryOpen => "nav-gallery-open",
            TextKey::NavSummer => "nav-summer",
            TextKey::NavWinter => "nav-winter",
            TextKey::NavContact => "nav-contact",
            TextKey::HeroTitle => "hero-title",
            TextKey::HeroSubtitle => "hero-subtitle",
            TextKey::TitleAbout => "title-about",
            TextKey::AboutPara1 => "about-para-1",
            TextKey::AboutPara2 => "about-para-2",
            TextKey::AboutPara3 => "about-para-3",
            TextKey::AboutPara4 => "about-para-4",
            TextKey::AboutPara5 => "about-para-5",
            TextKey::AboutPara6 => "about-para-6",
            TextKey::GalleryIntro => "gallery-intro",
            TextKey::SummerTitle => "summer-title",
            TextKey::SummerDesc => "summer-desc",
            TextKey::WinterTitle => "winter-title",
            TextKey::WinterDesc => "winter-desc",
            TextKey::TitleMenu => "title-menu",
            TextKey::TitleContact => "title-contact",
            TextKey::ContactSubtitle => "contact-subtitle",
            TextKey::ContactLocation => "contact-location",
            TextKey::FestSun => "fest-sun",
            TextKey::CaptionSun => "caption-sun",
            TextKey::FestManas => "fest-manas",
            TextKey::FestMicroasis => "fest-microasis",
            TextKey::FestIndian => "fest-indian",
            TextKey::CaptionIndian => "caption-indian",
            TextKey::FestMandula => "fest-mandula",
            TextKey::CaptionMandula => "caption-mandula",
            TextKey::FestAdvent => "fest-advent",
            TextKey::CaptionAdvent => "caption-advent",
            TextKey::BadgeComing => "badge-coming",
            TextKey::FestGalgaguta => "fest-galgaguta",
            TextKey::CaptionGalgaguta => "caption-galgaguta",
            TextKey::MapTitle => "map-title",
            TextKey::MapInstruct => "map-instruct",
            TextKey::ImpressumLabel => "impressum-label",
            TextKey::ImpressumOwnerLabel => "impressum-owner-label",
            TextKey::LabelName => "label-name",
            TextKey::LabelAddress => "label-address",
            TextKey::LabelCopyrightTitle => "label-copyright-title",
            TextKey::ImpressumCopyrightText => "impressum-copyright-text",
            TextKey::FooterRights => "footer-rights",
            TextKey::GalSun => "gal-sun",
            TextKey::GalManas => "gal-manas",
            TextKey::GalMicroasis => "gal-microasis",
            TextKey::GalIndian => "gal-indian",
            TextKey::GalMandula => "gal-mandula",
            TextKey::GalAdvent => "gal-advent",
            TextKey::GalGalgaguta => "gal-galgaguta",
            TextKey::SearchAbout => "search-about",
            TextKey::SearchSummer => "search-summer",
            TextKey::SearchWinter => "search-winter",
            TextKey::SearchContact => "search-contact",
            TextKey::SearchMenu => "search-menu",
            TextKey::SearchNoResults => "search-no-results",
            TextKey::SearchPlaceholder => "search-placeholder",
            TextKey::AudioMute => "audio-mute",
            TextKey::AudioUnmute => "audio-unmute",
            TextKey::AudioRestart => "audio-restart",
        }
    }

    /// Looks a key up by its element identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = TextKey::ALL.iter().map(|key| key.id()).collect();
        assert_eq!(ids.len(), TextKey::ALL.len());
    }

    #[test]
    fn all_lists_every_key_once() {
        let keys: HashSet<TextKey> = TextKey::ALL.into_iter().collect();
        assert_eq!(keys.len(), TextKey::ALL.len());
    }

    #[test]
    fn from_id_resolves_known_and_rejects_unknown() {
        assert_eq!(TextKey::from_id("gal-galgaguta"), Some(TextKey::GalGalgaguta));
        assert_eq!(TextKey::from_id("gal-unknown"), None);
    }
}
