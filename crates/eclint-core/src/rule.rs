//! Rule trait for defining per-line style checks.

use crate::definition::Definition;
use crate::engine::ScanState;
use crate::lines::Line;
use crate::types::Violation;

/// Where a line sits relative to a block comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentPosition {
    /// Regular content.
    Outside,
    /// The line that opens a block comment left open.
    Opening,
    /// A line strictly inside a block comment.
    Inside,
    /// The line that closes the current block comment.
    Closing,
}

impl CommentPosition {
    /// Whether indentation rules are suspended on this line. The opening
    /// line is still outside the comment and gets checked.
    #[must_use]
    pub fn is_exempt(self) -> bool {
        matches!(self, Self::Inside | Self::Closing)
    }

    /// Whether the line follows the opening line of a block comment.
    #[must_use]
    pub fn is_continuation(self) -> bool {
        matches!(self, Self::Inside | Self::Closing)
    }
}

/// Everything a rule may look at for one line.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// Resolved settings for the file.
    pub definition: &'a Definition,
    /// The line under evaluation.
    pub line: &'a Line,
    /// Block comment position of the line.
    pub comment: CommentPosition,
    /// Scan state as left by the previous line.
    pub state: &'a ScanState,
}

impl<'a> LineContext<'a> {
    /// Creates a new line context.
    #[must_use]
    pub fn new(
        definition: &'a Definition,
        line: &'a Line,
        comment: CommentPosition,
        state: &'a ScanState,
    ) -> Self {
        Self {
            definition,
            line,
            comment,
            state,
        }
    }

    /// Whether this is the first line of the file.
    #[must_use]
    pub fn is_first_line(&self) -> bool {
        self.state.previous_index().is_none()
    }

    /// Builds a violation for this line.
    #[must_use]
    pub fn violation(
        &self,
        code: &str,
        rule: &str,
        position: usize,
        message: impl Into<String>,
    ) -> Violation {
        Violation::new(code, rule, self.line.index, position, message)
            .with_line(self.line.bytes.clone())
    }
}

/// A per-line style rule.
///
/// Rules are stateless: anything carried from one line to the next lives in
/// [`ScanState`] and is handed to the rule through [`LineContext`].
///
/// # Example
///
/// ```ignore
/// use eclint_core::{LineContext, Rule, Violation, Definition};
///
/// pub struct NoFormFeed;
///
/// impl Rule for NoFormFeed {
///     fn name(&self) -> &'static str { "no-form-feed" }
///     fn code(&self) -> &'static str { "EC100" }
///
///     fn applies_to(&self, _definition: &Definition) -> bool { true }
///
///     fn check(&self, ctx: &LineContext<'_>) -> Option<Violation> {
///         let i = ctx.line.content().iter().position(|b| *b == 0x0c)?;
///         Some(ctx.violation(self.code(), self.name(), i + 1, "form feed"))
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "indent-style").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "EC003").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Whether the definition enables this rule at all.
    fn applies_to(&self, definition: &Definition) -> bool;

    /// Checks one line, returning at most one violation.
    fn check(&self, ctx: &LineContext<'_>) -> Option<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
