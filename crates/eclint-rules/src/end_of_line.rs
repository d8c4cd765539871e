//! Rule requiring every line terminator to match `end_of_line`.
//!
//! A line without a terminator (the last line of a file that does not end
//! with a newline) is left to `insert-final-newline`.

use eclint_core::{Definition, LineContext, Rule, Violation};

/// Rule code for end-of-line.
pub const CODE: &str = "EC001";

/// Rule name for end-of-line.
pub const NAME: &str = "end-of-line";

/// Checks line terminators.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTerminator;

impl LineTerminator {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for LineTerminator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Line terminators must match end_of_line"
    }

    fn applies_to(&self, definition: &Definition) -> bool {
        definition.end_of_line.is_some()
    }

    fn check(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        let eol = ctx.definition.end_of_line?;
        let line = ctx.line;
        if !line.has_terminator() {
            return None;
        }

        let found = line.terminator();
        let expected = eol.as_bytes();
        if found == expected {
            return None;
        }

        let differs_at = found
            .iter()
            .zip(expected)
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| found.len().min(expected.len()));

        Some(ctx.violation(
            CODE,
            NAME,
            line.content().len() + differs_at + 1,
            format!("line does not end with {eol} (`{}`)", eol.escaped()),
        ))
    }
}
