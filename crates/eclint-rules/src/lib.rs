//! # eclint-rules
//!
//! Built-in style rules for eclint.
//!
//! Each rule checks one `.editorconfig` property line by line and stays
//! silent when that property is not configured for the file.
//!
//! ## Available Rules
//!
//! | Code | Name | Property |
//! |------|------|----------|
//! | EC001 | `end-of-line` | `end_of_line` |
//! | EC002 | `trim-trailing-whitespace` | `trim_trailing_whitespace` |
//! | EC003 | `indent-style` | `indent_style`, `indent_size` |
//! | EC004 | `block-comment` | `block_comment` |
//! | EC005 | `max-line-length` | `max_line_length`, `tab_width` |
//! | EC006 | `charset` | `charset` |
//! | EC007 | `insert-final-newline` | `insert_final_newline` |
//!
//! ## Usage
//!
//! ```ignore
//! use eclint_core::Checker;
//! use eclint_rules::all_rules;
//!
//! let checker = Checker::builder()
//!     .rules(all_rules())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block_comment;
mod charset;
mod end_of_line;
mod final_newline;
mod indent_style;
mod max_line_length;
mod presets;
mod trailing_whitespace;

pub use block_comment::BlockCommentPrefix;
pub use charset::Encoding;
pub use end_of_line::LineTerminator;
pub use final_newline::FinalNewline;
pub use indent_style::Indentation;
pub use max_line_length::{display_width, MaxLineLength};
pub use presets::{all_rules, rule_by_name};
pub use trailing_whitespace::TrailingWhitespace;

/// Re-export core types for convenience.
pub use eclint_core::{Rule, Violation};

#[cfg(test)]
mod test_support {
    use eclint_core::{Definition, Engine, LineReader, RawDefinition, Rule, Violation};

    pub(crate) fn definition(properties: &[(&str, &str)]) -> Definition {
        let raw = RawDefinition::from_properties(properties.iter().copied())
            .expect("valid properties");
        Definition::resolve(&raw).expect("resolvable properties")
    }

    /// Runs a single rule over `input`.
    pub(crate) fn check<R: Rule + 'static>(
        rule: R,
        properties: &[(&str, &str)],
        input: &[u8],
    ) -> Vec<Violation> {
        let engine = Engine::builder().rule(rule).build();
        let outcome = engine.scan(
            &definition(properties),
            LineReader::new(input, input.len() as u64),
        );
        assert!(outcome.error.is_none());
        outcome.violations
    }

    /// `(line_index, position)` of each violation.
    pub(crate) fn spots(violations: &[Violation]) -> Vec<(usize, usize)> {
        violations
            .iter()
            .map(|v| (v.line_index, v.position))
            .collect()
    }
}
