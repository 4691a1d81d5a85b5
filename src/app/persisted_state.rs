// SPDX-License-Identifier: MPL-2.0
//! Persisted language preference, stored as CBOR.
//!
//! The only thing the site remembers between sessions is the chosen
//! language. It lives in `state.cbor` under the data directory, apart from
//! the hand-edited `settings.toml`.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with an explicit directory
//! 2. Set the `MERKABA_DATA_DIR` environment variable
//! 3. Falls back to the platform data directory

use super::paths;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

pub const WARNING_STATE_PARSE: &str = "state-parse-error";
pub const WARNING_STATE_READ: &str = "state-read-error";
pub const WARNING_STATE_PATH: &str = "state-path-error";
pub const WARNING_STATE_DIR: &str = "state-dir-error";
pub const WARNING_STATE_WRITE: &str = "state-write-error";
pub const WARNING_STATE_CREATE: &str = "state-create-error";

/// State that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last explicitly chosen language code (`hu` or `en`).
    #[serde(default)]
    pub language: Option<String>,
}

impl AppState {
    /// Loads the state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). A missing file is not
    /// a problem; a broken one yields the default state plus a warning key.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the state from `base_dir`, or the default location when `None`.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot open state file");
                return (Self::default(), Some(WARNING_STATE_READ.to_string()));
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot parse state file");
                (Self::default(), Some(WARNING_STATE_PARSE.to_string()))
            }
        }
    }

    /// Saves the state to the default location.
    ///
    /// Returns a warning key if saving failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the state into `base_dir`, creating it if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some(WARNING_STATE_PATH.to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some(WARNING_STATE_DIR.to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some(WARNING_STATE_WRITE.to_string());
                }
                None
            }
            Err(_) => Some(WARNING_STATE_CREATE.to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
    }

    /// Records `language` as the preferred one.
    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language.code().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_language() {
        assert!(AppState::default().language.is_none());
    }

    #[test]
    fn set_language_stores_the_code() {
        let mut state = AppState::default();
        state.set_language(Language::En);
        assert_eq!(state.language.as_deref(), Some("en"));
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            language: Some("en".to_string()),
        };
        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some(WARNING_STATE_PARSE));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            language: Some("hu".to_string()),
        };
        assert!(state.save_to(Some(nested_dir.clone())).is_none());
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}
