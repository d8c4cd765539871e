//! Per-file checking: resolve the definition, stream the file, scan it.

use crate::config::Config;
use crate::definition::{Definition, RawDefinition};
use crate::engine::Engine;
use crate::lines::LineReader;
use crate::rule::{Rule, RuleBox};
use crate::types::{FileReport, LintError};

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while setting up a checker.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// Glob pattern error.
    #[error("Invalid exclude pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    override_prefix: Option<String>,
    config: Option<Config>,
}

impl CheckerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the checker.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the checker.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the override prefix, taking precedence over the configuration.
    #[must_use]
    pub fn override_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.override_prefix = Some(prefix.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the checker, dropping rules the configuration disables.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Checker, CheckerError> {
        let config = self.config.unwrap_or_default();

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.exclude.iter().cloned());
        let exclude = exclude_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let override_prefix = self
            .override_prefix
            .unwrap_or_else(|| config.override_prefix().to_string());

        let rules = self.rules.into_iter().filter(|rule| {
            let enabled = config.is_rule_enabled(rule.name(), rule.code());
            if !enabled {
                debug!("Skipping disabled rule: {}", rule.name());
            }
            enabled
        });

        Ok(Checker {
            engine: Engine::builder().rules(rules).build(),
            exclude,
            override_prefix,
        })
    }
}

/// Checks files against their resolved definitions.
///
/// Use [`Checker::builder()`] to construct an instance. A checker holds no
/// per-file state and can be shared across threads.
pub struct Checker {
    engine: Engine,
    exclude: Vec<glob::Pattern>,
    override_prefix: String,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the number of active rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.engine.rule_count()
    }

    /// Returns the rule engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Checks if a path matches an exclude pattern.
    ///
    /// Patterns are tried against the whole path (without a leading `./`)
    /// and against the file name.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.strip_prefix(".").unwrap_or(path);
        let full = path.to_string_lossy();
        let name = path.file_name().map(|n| n.to_string_lossy());

        self.exclude.iter().any(|pattern| {
            pattern.matches(&full) || name.as_deref().is_some_and(|n| pattern.matches(n))
        })
    }

    /// Resolves the definition for a file, applying prefixed overrides.
    ///
    /// # Errors
    ///
    /// Returns a configuration or unsupported-operation error.
    pub fn resolve(&self, mut raw: RawDefinition) -> Result<Definition, LintError> {
        raw.override_with_prefix(&self.override_prefix)?;
        Ok(Definition::resolve(&raw)?)
    }

    /// Checks one file on disk.
    pub fn check_file(&self, path: &Path, raw: RawDefinition) -> FileReport {
        let definition = match self.resolve(raw) {
            Ok(definition) => definition,
            Err(e) => {
                warn!("Cannot resolve settings for {}: {}", path.display(), e);
                return FileReport::failed(path, e);
            }
        };

        let opened = File::open(path).and_then(|file| {
            let size = file.metadata()?.len();
            Ok((file, size))
        });

        match opened {
            Ok((file, size)) => self.check_definition(path, &definition, file, size),
            Err(e) => {
                warn!("Cannot open {}: {}", path.display(), e);
                FileReport::failed(path, io_error(path, e))
            }
        }
    }

    /// Checks content from any reader; `size` is its full length in bytes.
    pub fn check_reader<R: Read>(
        &self,
        path: impl Into<PathBuf>,
        raw: RawDefinition,
        reader: R,
        size: u64,
    ) -> FileReport {
        let path = path.into();
        match self.resolve(raw) {
            Ok(definition) => self.check_definition(&path, &definition, reader, size),
            Err(e) => FileReport::failed(path, e),
        }
    }

    fn check_definition<R: Read>(
        &self,
        path: &Path,
        definition: &Definition,
        reader: R,
        size: u64,
    ) -> FileReport {
        debug!("Checking: {}", path.display());

        let outcome = self.engine.scan(definition, LineReader::new(reader, size));
        let report = FileReport {
            path: path.to_path_buf(),
            violations: outcome.violations,
            error: outcome.error.map(|e| io_error(path, e)),
        };

        debug!(
            "Checked {}: {} violations",
            path.display(),
            report.violations.len()
        );
        report
    }
}

fn io_error(path: &Path, source: std::io::Error) -> LintError {
    LintError::Io {
        path: path.to_path_buf(),
        source,
    }
}
