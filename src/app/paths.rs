// SPDX-License-Identifier: MPL-2.0
//! Resolution of the config and data directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to the `_with_override()` functions (tests)
//! 2. **CLI arguments** (`--config-dir`, `--data-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`MERKABA_CONFIG_DIR`, `MERKABA_DATA_DIR`)
//! 4. **Platform default** - via the `dirs` crate, with [`APP_NAME`] appended
//!
//! Settings (`settings.toml`) live in the config directory; the persisted
//! language choice (`state.cbor`) lives in the data directory.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name used under the platform config/data roots.
pub const APP_NAME: &str = "MerkabaCoffee";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "MERKABA_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "MERKABA_CONFIG_DIR";

/// CLI overrides, set once at startup.
#[derive(Debug, Default)]
struct CliOverrides {
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` arguments.
///
/// Only the first call has an effect.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let overrides = CliOverrides {
        data_dir: data_dir.map(PathBuf::from),
        config_dir: config_dir.map(PathBuf::from),
    };
    if CLI_OVERRIDES.set(overrides).is_err() {
        tracing::warn!("directory overrides already initialized, ignoring");
    }
}

/// Which application directory to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppDir {
    Config,
    Data,
}

impl AppDir {
    fn env_var(self) -> &'static str {
        match self {
            AppDir::Config => ENV_CONFIG_DIR,
            AppDir::Data => ENV_DATA_DIR,
        }
    }

    fn cli_override(self) -> Option<PathBuf> {
        let overrides = CLI_OVERRIDES.get()?;
        match self {
            AppDir::Config => overrides.config_dir.clone(),
            AppDir::Data => overrides.data_dir.clone(),
        }
    }

    fn platform_root(self) -> Option<PathBuf> {
        match self {
            AppDir::Config => dirs::config_dir(),
            AppDir::Data => dirs::data_dir(),
        }
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = override_path {
            return Some(path);
        }

        if let Some(path) = self.cli_override() {
            return Some(path);
        }

        if let Ok(env_path) = std::env::var(self.env_var()) {
            if !env_path.is_empty() {
                return Some(PathBuf::from(env_path));
            }
        }

        self.platform_root().map(|root| root.join(APP_NAME))
    }
}

/// Returns the directory holding the persisted application state.
///
/// Returns `None` if no directory can be determined (rare edge case).
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    AppDir::Data.resolve(override_path)
}

/// Returns the directory holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    AppDir::Config.resolve(override_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests touching process environment variables.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn platform_default_ends_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);

        for path in [get_app_data_dir(), get_app_config_dir()].into_iter().flatten() {
            assert!(path.ends_with(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/data");

        let override_path = PathBuf::from("/override/data");
        assert_eq!(
            get_app_data_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_overrides_platform_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/merkaba/config");

        assert_eq!(
            get_app_config_dir(),
            Some(PathBuf::from("/test/merkaba/config"))
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir() {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }
}
