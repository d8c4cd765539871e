//! # eclint-core
//!
//! Core engine for checking files against resolved `.editorconfig` settings.
//!
//! This crate provides the building blocks of the checker:
//!
//! - [`LineReader`] splits a byte stream into terminator-preserving [`Line`]s
//! - [`RawDefinition`] and [`Definition`] turn flat key/value properties into
//!   typed, validated settings
//! - [`Engine`] runs [`Rule`]s over every line while carrying [`ScanState`]
//! - [`Renderer`] turns a [`FileReport`] into display-ready text
//! - [`Checker`] ties everything together for a single file
//!
//! ## Example
//!
//! ```ignore
//! use eclint_core::{Checker, RawDefinition};
//!
//! let checker = Checker::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let raw = RawDefinition::from_properties([("indent_style", "space")])?;
//! let report = checker.check_file("src/main.rs".as_ref(), raw);
//! println!("{}", Renderer::default().render(&report));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod definition;
mod engine;
mod lines;
mod render;
mod rule;
mod types;

pub use checker::{Checker, CheckerBuilder, CheckerError};
pub use config::{Config, ConfigError, RuleConfig, DEFAULT_OVERRIDE_PREFIX};
pub use definition::{
    is_set, BlockComment, Charset, Definition, DefinitionError, EndOfLine, IndentStyle,
    RawDefinition, DEFAULT_TAB_WIDTH, UNSET,
};
pub use engine::{Engine, EngineBuilder, ScanOutcome, ScanState};
pub use lines::{split_line, Line, LineReader, Split};
pub use render::{highlight_at, ColorMode, Palette, Renderer, DEFAULT_SHOW_ERROR_QUANTITY};
pub use rule::{CommentPosition, LineContext, Rule, RuleBox};
pub use types::{ErrorKind, FileReport, FileStatus, Finding, LintError, LintResult, Violation};
