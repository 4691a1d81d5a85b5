// SPDX-License-Identifier: MPL-2.0
//! English text table.

use super::TextKey;

pub(super) fn text(key: TextKey) -> &'static str {
    match key {
        TextKey::NavHome => "Home",
        TextKey::NavAbout => "About Us",
        TextKey::NavGallery => "Gallery ▾",
        TextKey::NavGalleryOpen => "Gallery ▴",
        TextKey::NavSummer => "Summer",
        TextKey::NavWinter => "Winter",
        TextKey::NavContact => "Contact Us",
        TextKey::HeroTitle => "MERKABA COFFEE",
        TextKey::HeroSubtitle => "Mobile Coffee • Vintage La Cimbali • Piaggio Ape",
        TextKey::TitleAbout => "About Us",
        TextKey::AboutPara1 => "Our little mobile café, Merkaba Coffee, began its adventurous journey on June 30, 2025, at the SUN Festival. Since then, we've traveled to Manas, Microasis, Everness Indian Summer, Balatonakali - at the local Almond Festival, and Rétság at the Farmers' Market.",
        TextKey::AboutPara2 => "Currently, you can find our cozy little Piaggio, Merkaba Coffee, in the charming park between the post office and the church in Galgaguta.",
        TextKey::AboutPara3 => "Merkaba is an ancient Egyptian sacred symbol representing the perfect harmony of body, mind, and spirit – a starlight \"vehicle\" that invites you on a spiritual journey. We see this magic in every cup of coffee.",
        TextKey::AboutPara4 => "The secret to our coffee lies in our vintage two-handled La Cimbali machine – a true 1980s analog icon that passionately brews creamy espresso, cappuccino, and other delights.",
        TextKey::AboutPara5 => "Our goal is to bring warmhearted moments to our guests with a delicious hot coffee, tea, or hot chocolate.",
        TextKey::AboutPara6 => "Feel free to contact us if we've sparked your interest, or visit us for a great coffee in Galgaguta.",
        TextKey::GalleryIntro => "Our Adventures",
        TextKey::SummerTitle => "Summer 2025",
        TextKey::SummerDesc => "Summer was a time of freedom and endless roads for us. Sunny festivals and nature's embrace provided the backdrop for our coffee experiences.",
        TextKey::WinterTitle => "Winter 2025",
        TextKey::WinterDesc => "Winter is a time of coziness. Among snowy hills, over hot coffee, we share the magic of winter warmth with our guests.",
        TextKey::TitleMenu => "The Menu",
        TextKey::TitleContact => "Contact Us",
        TextKey::ContactSubtitle => "Adventure Locations",
        TextKey::ContactLocation => "Currently in Galgaguta",
        TextKey::FestSun => "S.U.N. Festival",
        TextKey::CaptionSun => "S.U.N.",
        TextKey::FestManas => "Manas Festival",
        TextKey::FestMicroasis => "Microasis Festival",
        TextKey::FestIndian => "Everness Indian Summer Festival",
        TextKey::CaptionIndian => "Everness Indian Summer",
        TextKey::FestMandula => "Mandula Festival",
        TextKey::CaptionMandula => "Mandula Festival",
        TextKey::FestAdvent => "Advent Market",
        TextKey::CaptionAdvent => "Advent",
        TextKey::BadgeComing => "Coming Soon",
        TextKey::FestGalgaguta => "Galgaguta",
        TextKey::CaptionGalgaguta => "Galgaguta",
        TextKey::MapTitle => "Adventures",
        TextKey::MapInstruct => "Click to activate map",
        TextKey::ImpressumLabel => "IMPRESSUM",
        TextKey::ImpressumOwnerLabel => "Operator Details:",
        TextKey::LabelName => "Name",
        TextKey::LabelAddress => "Address",
        TextKey::LabelCopyrightTitle => "Copyright:",
        TextKey::ImpressumCopyrightText => "All content appearing on the website (text, images, music, graphics, logo) is the intellectual property of Merkaba Coffee. All rights reserved. Copying or using the content of the site is only possible with prior written permission.",
        TextKey::FooterRights => "© 2025 Merkaba Coffee. All rights reserved.",
        TextKey::GalSun => "S.U.N. Festival",
        TextKey::GalManas => "Manas Festival",
        TextKey::GalMicroasis => "Microasis Festival",
        TextKey::GalIndian => "Everness Indian Summer",
        TextKey::GalMandula => "Mandula Festival",
        TextKey::GalAdvent => "Advent Market",
        TextKey::GalGalgaguta => "Galgaguta",
        TextKey::SearchAbout => "About Us",
        TextKey::SearchSummer => "Summer Gallery",
        TextKey::SearchWinter => "Winter Gallery",
        TextKey::SearchContact => "Contact Us",
        TextKey::SearchMenu => "Menu",
        TextKey::SearchNoResults => "No results...",
        TextKey::SearchPlaceholder => "Search...",
        TextKey::AudioMute => "Mute",
        TextKey::AudioUnmute => "Unmute",
        TextKey::AudioRestart => "Restart",
    }
}
