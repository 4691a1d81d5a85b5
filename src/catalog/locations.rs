// SPDX-License-Identifier: MPL-2.0
//! Places the coffee van has visited, shown as map markers.

use crate::i18n::Language;

/// A map marker with bilingual labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    name_hu: &'static str,
    name_en: &'static str,
    address_hu: &'static str,
    address_en: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    #[must_use]
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Hu => self.name_hu,
            Language::En => self.name_en,
        }
    }

    #[must_use]
    pub fn address(&self, language: Language) -> &'static str {
        match language {
            Language::Hu => self.address_hu,
            Language::En => self.address_en,
        }
    }
}

pub const LOCATIONS: [Location; 6] = [
    Location {
        name_hu: "Csobánkapuszta",
        name_en: "Csobánkapuszta",
        address_hu: "Bér, Csobánkapuszta, 3045 Magyarország",
        address_en: "Bér, Csobánkapuszta, 3045 Hungary",
        lat: 47.894_155_7,
        lng: 19.472_228_2,
    },
    Location {
        name_hu: "Lengyeltóti",
        name_en: "Lengyeltóti",
        address_hu: "Lengyeltóti, 8693 Magyarország",
        address_en: "Lengyeltóti, 8693 Hungary",
        lat: 46.666_832_5,
        lng: 17.643_403_7,
    },
    Location {
        name_hu: "Sóstó",
        name_en: "Sóstó",
        address_hu: "Siófok, Sóstó, 8600 Magyarország",
        address_en: "Siófok, Sóstó, 8600 Hungary",
        lat: 46.939_722_9,
        lng: 18.134_958_9,
    },
    Location {
        name_hu: "Balatonakali",
        name_en: "Balatonakali",
        address_hu: "Balatonakali, 8243 Magyarország",
        address_en: "Balatonakali, 8243 Hungary",
        lat: 46.882_194_1,
        lng: 17.746_493_7,
    },
    Location {
        name_hu: "Rétság",
        name_en: "Rétság",
        address_hu: "Rétság, 2651 Magyarország",
        address_en: "Rétság, 2651 Hungary",
        lat: 47.928_993_8,
        lng: 19.137_528_1,
    },
    Location {
        name_hu: "Galgaguta",
        name_en: "Galgaguta",
        address_hu: "Galgaguta, 2686 Magyarország",
        address_en: "Galgaguta, 2686 Hungary",
        lat: 47.849_28,
        lng: 19.387_765_8,
    },
];
