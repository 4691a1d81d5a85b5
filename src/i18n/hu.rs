// SPDX-License-Identifier: MPL-2.0
//! Hungarian text table.

use super::TextKey;

pub(super) fn text(key: TextKey) -> &'static str {
    match key {
        TextKey::NavHome => "Kezdőlap",
        TextKey::NavAbout => "Rólunk",
        TextKey::NavGallery => "Galéria ▾",
        TextKey::NavGalleryOpen => "Galéria ▴",
        TextKey::NavSummer => "Nyár",
        TextKey::NavWinter => "Tél",
        TextKey::NavContact => "Kapcsolat",
        TextKey::HeroTitle => "MERKABA COFFEE",
        TextKey::HeroSubtitle => "Mobil kávézó • Vintage La Cimbali • Piaggio Ape",
        TextKey::TitleAbout => "Rólunk",
        TextKey::AboutPara1 => "Kis mobil kávézónk, a Merkaba Coffee, 2025. június 30-án indult kalandos útjára a SUN Festivalon. Azóta megfordult a Manason, a Microasison, az Everness Indián Nyáron, Balatonakalin - a helyi Mandula Festivalon és Rétságon, a Termelői piacon.",
        TextKey::AboutPara2 => "Jelenleg Galgagután, a posta és a templom közötti hangulatos parkban találod meg a kis Piaggio-t, a Merkaba Coffee-t.",
        TextKey::AboutPara3 => "A Merkaba ősi, egyiptomi szent szimbólum, a test, lélek és szellem tökéletes harmóniáját jelképezi – egy csillagfényű \"jármű\", ami spirituális utazásra hív. Mi ezt a varázst látjuk egy csésze kávéban.",
        TextKey::AboutPara4 => "A kávénk titka a vintage kétkaros La Cimbali gépünkben rejlik – egy igazi 80-as évekbeli analóg ikon, ami szenvedéllyel átitatva főzi a krémes espresso-t, cappuccino-t és egyéb finomságokat.",
        TextKey::AboutPara5 => "Célunk, hogy szívmelengető pillanatokat szerezhessünk vendégeinknek egy finom meleg kávé, tea vagy forró csoki mellett.",
        TextKey::AboutPara6 => "Keress minket bátran elérhetőségeinken, ha felkeltettük érdeklődésedet, vagy nézz el hozzánk egy jó kávéra Galgagután.",
        TextKey::GalleryIntro => "Kalandjaink",
        TextKey::SummerTitle => "Nyár 2025",
        TextKey::SummerDesc => "A nyár a szabadság és a végtelen utak ideje volt számunkra. A napsütötte fesztiválok és a természet lágy ölelése adta a hátteret a kávézás élményéhez.",
        TextKey::WinterTitle => "Tél 2025",
        TextKey::WinterDesc => "A tél a meghittség időszaka. Havas dombok között, forró kávé mellett osztjuk meg vendégeinkkel a téli melegség varázsát.",
        TextKey::TitleMenu => "Menü",
        TextKey::TitleContact => "Kapcsolat",
        TextKey::ContactSubtitle => "Kalandok helyszíne",
        TextKey::ContactLocation => "Jelenleg Galgagután",
        TextKey::FestSun => "S.U.N. Festival",
        TextKey::CaptionSun => "S.U.N.",
        TextKey::FestManas => "Manas Festival",
        TextKey::FestMicroasis => "Microasis Festival",
        TextKey::FestIndian => "Everness Indián Nyár",
        TextKey::CaptionIndian => "Everness Indian Summer",
        TextKey::FestMandula => "Mandula Festival",
        TextKey::CaptionMandula => "Mandula Festival",
        TextKey::FestAdvent => "Adventi Vásár",
        TextKey::CaptionAdvent => "Advent",
        TextKey::BadgeComing => "Hamarosan",
        TextKey::FestGalgaguta => "Galgaguta",
        TextKey::CaptionGalgaguta => "Galgaguta",
        TextKey::MapTitle => "Kalandok",
        TextKey::MapInstruct => "Kattints a térkép aktiválásához",
        TextKey::ImpressumLabel => "IMPRESSZUM",
        TextKey::ImpressumOwnerLabel => "Üzemeltető adatai:",
        TextKey::LabelName => "Név",
        TextKey::LabelAddress => "Székhely",
        TextKey::LabelCopyrightTitle => "Szerzői jogok:",
        TextKey::ImpressumCopyrightText => "A weboldalon megjelenő minden tartalom (szöveg, kép, zene, grafika, logó) a Merkaba Coffee szellemi tulajdona. Minden jog fenntartva. Az oldal tartalmának másolása vagy felhasználása csak előzetes írásbeli engedéllyel lehetséges.",
        TextKey::FooterRights => "© 2025 Merkaba Coffee. Minden jog fenntartva.",
        TextKey::GalSun => "S.U.N. Fesztivál",
        TextKey::GalManas => "Manas Fesztivál",
        TextKey::GalMicroasis => "Microasis Fesztivál",
        TextKey::GalIndian => "Everness Indián Nyár",
        TextKey::GalMandula => "Mandula Fesztivál",
        TextKey::GalAdvent => "Adventi Vásár",
        TextKey::GalGalgaguta => "Galgaguta",
        TextKey::SearchAbout => "Rólunk",
        TextKey::SearchSummer => "Nyári Galéria",
        TextKey::SearchWinter => "Téli Galéria",
        TextKey::SearchContact => "Kapcsolat",
        TextKey::SearchMenu => "Menü",
        TextKey::SearchNoResults => "Nincs találat...",
        TextKey::SearchPlaceholder => "Keresés...",
        TextKey::AudioMute => "Némítás",
        TextKey::AudioUnmute => "Hang be",
        TextKey::AudioRestart => "Újraindítás",
    }
}
