//! Core types for violations, per-file outcomes and results.

use miette::Diagnostic;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::definition::DefinitionError;

/// A rule failure on a specific line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Rule code (e.g., "EC002").
    pub code: String,
    /// Rule name (e.g., "trim-trailing-whitespace").
    pub rule: String,
    /// Zero-based line index.
    pub line_index: usize,
    /// 1-based byte column within the line; `0` for file-level findings.
    pub position: usize,
    /// Human-readable message.
    pub message: String,
    /// The offending line, terminator included, kept for rendering.
    #[serde(skip)]
    pub line: Vec<u8>,
    /// 0-based byte offset to highlight when `position` is not a byte column.
    #[serde(skip)]
    pub highlight: Option<usize>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        line_index: usize,
        position: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            line_index,
            position,
            message: message.into(),
            line: Vec::new(),
            highlight: None,
        }
    }

    /// Attaches the offending line's bytes.
    #[must_use]
    pub fn with_line(mut self, line: impl Into<Vec<u8>>) -> Self {
        self.line = line.into();
        self
    }

    /// Points the rendered highlight at a byte offset of the line.
    #[must_use]
    pub fn with_highlight(mut self, offset: usize) -> Self {
        self.highlight = Some(offset);
        self
    }

    /// 0-based byte offset the renderer highlights.
    #[must_use]
    pub fn highlight_offset(&self) -> usize {
        self.highlight
            .unwrap_or_else(|| self.position.saturating_sub(1))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line_index, self.position, self.message)
    }
}

/// Broad classification of a per-file failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or contradictory style settings.
    Configuration,
    /// An override against a setting that does not support it.
    UnsupportedOperation,
    /// The file could not be read.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration error"),
            Self::UnsupportedOperation => write!(f, "unsupported operation"),
            Self::Io => write!(f, "io error"),
        }
    }
}

/// Failure that prevents a file from being fully evaluated.
#[derive(Debug, Error, Diagnostic)]
pub enum LintError {
    /// The style settings could not be resolved.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Definition(#[from] DefinitionError),

    /// Reading the file (or its settings) failed.
    #[error("failed to read {path}: {source}")]
    #[diagnostic(code(eclint::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The `.editorconfig` files governing the path could not be parsed.
    #[error("cannot resolve .editorconfig for {path}: {message}")]
    #[diagnostic(code(eclint::editorconfig))]
    EditorConfig {
        /// Path whose settings were requested.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl LintError {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Definition(e) => e.kind(),
            Self::Io { .. } => ErrorKind::Io,
            Self::EditorConfig { .. } => ErrorKind::Configuration,
        }
    }
}

/// One entry of a file's output: either a violation or a failure.
#[derive(Debug, Clone, Copy)]
pub enum Finding<'a> {
    /// A rule failure.
    Violation(&'a Violation),
    /// A configuration or IO failure.
    Error(&'a LintError),
}

/// Overall outcome of checking a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// No violation, no failure.
    Clean,
    /// Fully scanned with this many violations.
    Violations(usize),
    /// The file could not be (fully) evaluated.
    Failed,
}

/// Everything found in a single file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path of the checked file.
    pub path: PathBuf,
    /// Violations in line order.
    pub violations: Vec<Violation>,
    /// Failure that stopped evaluation, if any.
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<LintError>,
}

impl FileReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            violations: Vec::new(),
            error: None,
        }
    }

    /// Creates a report for a file that could not be evaluated.
    #[must_use]
    pub fn failed(path: impl Into<PathBuf>, error: impl Into<LintError>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(path)
        }
    }

    /// Returns the checked path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the overall outcome.
    #[must_use]
    pub fn status(&self) -> FileStatus {
        match (&self.error, self.violations.len()) {
            (Some(_), _) => FileStatus::Failed,
            (None, 0) => FileStatus::Clean,
            (None, n) => FileStatus::Violations(n),
        }
    }

    /// Returns true if nothing was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.status() == FileStatus::Clean
    }

    /// Violations first, then the failure that ended the scan.
    pub fn findings(&self) -> impl Iterator<Item = Finding<'_>> {
        self.violations
            .iter()
            .map(Finding::Violation)
            .chain(self.error.iter().map(Finding::Error))
    }

    /// Number of findings, failure included.
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.violations.len() + usize::from(self.error.is_some())
    }
}

#[derive(Serialize)]
struct ErrorRecord {
    kind: ErrorKind,
    message: String,
}

#[allow(clippy::ref_option)] // serde's `serialize_with` signature
fn serialize_error<S: Serializer>(error: &Option<LintError>, serializer: S) -> Result<S::Ok, S::Error> {
    error
        .as_ref()
        .map(|e| ErrorRecord {
            kind: e.kind(),
            message: e.to_string(),
        })
        .serialize(serializer)
}

/// Result of checking a set of files.
#[derive(Debug, Default, Serialize)]
pub struct LintResult {
    /// Per-file reports, in input order.
    pub reports: Vec<FileReport>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file report.
    pub fn push(&mut self, report: FileReport) {
        self.files_checked += 1;
        self.reports.push(report);
    }

    /// Returns true if any file has a violation or failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.reports.iter().any(|r| !r.is_clean())
    }

    /// Total number of violations across files.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.reports.iter().map(|r| r.violations.len()).sum()
    }

    /// Number of files that could not be evaluated.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.status() == FileStatus::Failed)
            .count()
    }
}

impl FromIterator<FileReport> for LintResult {
    fn from_iter<I: IntoIterator<Item = FileReport>>(iter: I) -> Self {
        let mut result = Self::new();
        for report in iter {
            result.push(report);
        }
        result
    }
}
