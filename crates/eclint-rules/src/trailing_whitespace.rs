//! Rule forbidding spaces and tabs right before the line terminator.

use eclint_core::{Definition, LineContext, Rule, Violation};

/// Rule code for trim-trailing-whitespace.
pub const CODE: &str = "EC002";

/// Rule name for trim-trailing-whitespace.
pub const NAME: &str = "trim-trailing-whitespace";

/// Checks for trailing whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingWhitespace;

impl TrailingWhitespace {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TrailingWhitespace {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Lines must not end with spaces or tabs"
    }

    fn applies_to(&self, definition: &Definition) -> bool {
        definition.trim_trailing_whitespace == Some(true)
    }

    fn check(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        let content = ctx.line.content();
        match content.last() {
            Some(b' ' | b'\t') => Some(ctx.violation(
                CODE,
                NAME,
                content.len(),
                "line has some trailing spaces",
            )),
            _ => None,
        }
    }
}
