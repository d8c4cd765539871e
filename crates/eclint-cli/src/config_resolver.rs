//! Locating the `eclint.toml` tool configuration.
//!
//! Lookup order: the `--config` flag, then `eclint.toml` or `.eclint.toml` in
//! the working directory or its nearest ancestor holding one, then
//! `config.toml` in the user directory (`$ECLINT_CONFIG_DIR`, else
//! `~/.eclint`). Without any of them the built-in defaults apply.

use anyhow::{Context, Result};
use eclint_core::Config;
use std::path::{Path, PathBuf};

/// Environment variable overriding the user configuration directory.
pub const CONFIG_DIR_ENV: &str = "ECLINT_CONFIG_DIR";

/// Project file names; the plain name wins within one directory.
const PROJECT_FILES: [&str; 2] = ["eclint.toml", ".eclint.toml"];

const USER_FILE: &str = "config.toml";

/// The configuration file a run uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `--config`; not checked for existence.
    Flag(PathBuf),
    /// Found next to the checked tree.
    Project(PathBuf),
    /// Found in the user configuration directory.
    User(PathBuf),
    /// Nothing found.
    BuiltIn,
}

impl ConfigSource {
    /// Reads and parses the file this source names.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        let path = match self {
            Self::BuiltIn => return Ok(Config::default()),
            Self::User(path) => {
                tracing::info!("Using user config: {}", path.display());
                path
            }
            Self::Flag(path) | Self::Project(path) => path,
        };
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Decides which [`ConfigSource`] applies to a starting directory.
#[derive(Debug, Clone, Default)]
pub struct ConfigLocator {
    flag: Option<PathBuf>,
    user_dir: Option<PathBuf>,
}

impl ConfigLocator {
    /// Locator honoring `--config` and the user directory of this process.
    #[must_use]
    pub fn from_env(flag: Option<&Path>) -> Self {
        Self {
            flag: flag.map(Path::to_path_buf),
            user_dir: user_config_dir(),
        }
    }

    /// Finds the configuration for a run started in `start`.
    #[must_use]
    pub fn locate(&self, start: &Path) -> ConfigSource {
        if let Some(path) = &self.flag {
            return ConfigSource::Flag(path.clone());
        }

        let project = start
            .ancestors()
            .flat_map(|dir| PROJECT_FILES.iter().map(move |name| dir.join(name)))
            .find(|candidate| candidate.is_file());
        if let Some(path) = project {
            tracing::debug!("Found project config: {}", path.display());
            return ConfigSource::Project(path);
        }

        self.user_dir
            .as_ref()
            .map(|dir| dir.join(USER_FILE))
            .filter(|path| path.is_file())
            .map_or(ConfigSource::BuiltIn, ConfigSource::User)
    }
}

fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".eclint")))
}
