//! `.editorconfig` cascade lookup.
//!
//! The cascade itself (file discovery up to `root = true`, section globs,
//! precedence) is done by `ec4rs`. This module turns its properties into the
//! flat map the core resolves into a [`RawDefinition`].

use eclint_core::{LintError, RawDefinition};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Properties whose values are case-insensitive and normalized to lower case.
const CASE_INSENSITIVE_KEYS: &[&str] = &[
    "indent_style",
    "indent_size",
    "tab_width",
    "end_of_line",
    "charset",
    "trim_trailing_whitespace",
    "insert_final_newline",
    "max_line_length",
];

/// Lower-cases the value of a standard key, prefixed overrides included.
fn normalize_value(key: &str, value: &str) -> String {
    if CASE_INSENSITIVE_KEYS.iter().any(|k| key.ends_with(k)) {
        value.to_lowercase()
    } else {
        value.to_string()
    }
}

/// Looks up the settings of files relative to a working directory.
#[derive(Debug, Clone)]
pub struct Resolver {
    cwd: PathBuf,
}

impl Resolver {
    /// Creates a resolver; relative paths are taken from `cwd`.
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Returns the flat properties applying to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if an `.editorconfig` on the way up cannot be read
    /// or parsed.
    pub fn properties(&self, path: &Path) -> Result<BTreeMap<String, String>, LintError> {
        let absolute = normalize(&self.cwd.join(path));

        let properties = ec4rs::properties_of(&absolute).map_err(|e| LintError::EditorConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let properties: BTreeMap<String, String> = properties
            .iter()
            .map(|(key, value)| {
                let key = key.to_ascii_lowercase();
                let value = normalize_value(&key, value.into_str());
                (key, value)
            })
            .collect();

        debug!("{}: {} properties", path.display(), properties.len());
        Ok(properties)
    }

    /// Returns the raw definition for `path`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unusable `.editorconfig` and a configuration
    /// error for a malformed `tab_width`.
    pub fn resolve(&self, path: &Path) -> Result<RawDefinition, LintError> {
        let properties = self.properties(path)?;
        Ok(RawDefinition::from_properties(properties)?)
    }
}

/// Drops `.` and folds `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
