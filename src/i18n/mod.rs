// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! Text lives in per-language tables that match exhaustively on
//! [`TextKey`], so a missing translation is a compile error instead of a
//! runtime fallback.
//!
//! # Features
//!
//! - Language resolution from the CLI or the persisted application state
//! - Runtime language switching; unknown codes leave the store untouched
//! - Hungarian is the default language

mod en;
mod hu;
pub mod keys;

pub use keys::TextKey;

use std::fmt;
use std::str::FromStr;

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Hu,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Hu, Language::En];

    /// Two-letter code used for persistence and the CLI.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Hu => "hu",
            Language::En => "en",
        }
    }

    /// Label shown on the language switch buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Language::Hu => "HU",
            Language::En => "EN",
        }
    }

    /// Looks up `key` in this language's table.
    #[must_use]
    pub fn text(self, key: TextKey) -> &'static str {
        match self {
            Language::Hu => hu::text(key),
            Language::En => en::text(key),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a language code is not one of the supported ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language code '{}'", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hu" => Ok(Language::Hu),
            "en" => Ok(Language::En),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// The localization store: the current language plus text lookup.
#[derive(Debug, Clone, Default)]
pub struct I18n {
    current: Language,
}

impl I18n {
    /// Builds the store, preferring the CLI language over the persisted one.
    pub fn new(cli_lang: Option<String>, persisted: Option<&str>) -> Self {
        Self {
            current: resolve_language(cli_lang.as_deref(), persisted).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.current
    }

    /// Switches to the language named by `code`.
    ///
    /// Returns the newly active language, or `None` when the code is
    /// unknown, in which case nothing changes.
    pub fn set_language(&mut self, code: &str) -> Option<Language> {
        match code.parse::<Language>() {
            Ok(language) => {
                self.current = language;
                Some(language)
            }
            Err(err) => {
                tracing::debug!(%err, "ignoring language switch");
                None
            }
        }
    }

    /// Text for `key` in the current language.
    #[must_use]
    pub fn tr(&self, key: TextKey) -> &'static str {
        self.current.text(key)
    }
}

fn resolve_language(cli_lang: Option<&str>, persisted: Option<&str>) -> Option<Language> {
    // 1. CLI argument
    if let Some(language) = cli_lang.and_then(|code| code.parse().ok()) {
        return Some(language);
    }

    // 2. Persisted choice from the last session
    persisted.and_then(|code| code.parse().ok())
}
