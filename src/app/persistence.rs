// SPDX-License-Identifier: MPL-2.0
//! Language preference persistence.
//!
//! Switching language updates the store, records the choice in the
//! persisted state and writes it to disk.

use super::persisted_state::AppState;
use crate::i18n::{I18n, Language};

/// Applies the language named by `code` and persists it.
///
/// Unknown codes change nothing, on screen or on disk. Returns the newly
/// active language so the caller can relabel what it owns.
///
/// Writing is skipped under `cfg(test)` to keep unit tests off the real
/// data directory; tests exercise [`AppState::save_to`] directly.
pub fn apply_language_change(
    i18n: &mut I18n,
    app_state: &mut AppState,
    code: &str,
) -> Option<Language> {
    let language = i18n.set_language(code)?;
    app_state.set_language(language);

    if !cfg!(test) {
        if let Some(key) = app_state.save() {
            tracing::warn!(warning = %key, "could not persist language preference");
        }
    }

    Some(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_switches_and_records() {
        let mut i18n = I18n::default();
        let mut state = AppState::default();

        assert_eq!(
            apply_language_change(&mut i18n, &mut state, "en"),
            Some(Language::En)
        );
        assert_eq!(i18n.language(), Language::En);
        assert_eq!(state.language.as_deref(), Some("en"));
    }

    #[test]
    fn unknown_code_changes_nothing() {
        let mut i18n = I18n::default();
        let mut state = AppState {
            language: Some("hu".into()),
        };

        assert_eq!(apply_language_change(&mut i18n, &mut state, "de"), None);
        assert_eq!(i18n.language(), Language::Hu);
        assert_eq!(state.language.as_deref(), Some("hu"));
    }
}
