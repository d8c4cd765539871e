//! Rule checking whether the file ends with a line terminator.

use eclint_core::{Definition, LineContext, Rule, Violation};

/// Rule code for insert-final-newline.
pub const CODE: &str = "EC007";

/// Rule name for insert-final-newline.
pub const NAME: &str = "insert-final-newline";

/// Checks the end of the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalNewline;

impl FinalNewline {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FinalNewline {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "The last line must (or must not) end with a terminator"
    }

    fn applies_to(&self, definition: &Definition) -> bool {
        definition.insert_final_newline.is_some()
    }

    fn check(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        if !ctx.line.is_final {
            return None;
        }
        let wanted = ctx.definition.insert_final_newline?;

        let message = match (wanted, ctx.line.has_terminator()) {
            (true, false) => "the final newline is missing",
            (false, true) => "an extraneous final newline was found",
            _ => return None,
        };
        Some(ctx.violation(CODE, NAME, ctx.line.content().len() + 1, message))
    }
}
