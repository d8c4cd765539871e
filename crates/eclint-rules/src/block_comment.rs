//! Rule requiring the `block_comment` prefix on lines inside a block comment.

use eclint_core::{Definition, LineContext, Rule, Violation};

/// Rule code for block-comment.
pub const CODE: &str = "EC004";

/// Rule name for block-comment.
pub const NAME: &str = "block-comment";

/// Checks block comment continuation prefixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockCommentPrefix;

impl BlockCommentPrefix {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for BlockCommentPrefix {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Lines inside a block comment must start with the block_comment prefix"
    }

    fn applies_to(&self, definition: &Definition) -> bool {
        definition
            .block_comment
            .as_ref()
            .is_some_and(|markers| markers.continuation.is_some())
    }

    fn check(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        if !ctx.comment.is_continuation() {
            return None;
        }
        let markers = ctx.definition.block_comment.as_ref()?;
        let prefix = markers.continuation.as_deref()?;

        let content = ctx.line.content();
        let indent = content
            .iter()
            .take_while(|b| **b == b' ' || **b == b'\t')
            .count();
        let body = &content[indent..];

        if body.is_empty() || body.starts_with(prefix) || body.starts_with(&markers.end) {
            return None;
        }

        Some(ctx.violation(
            CODE,
            NAME,
            indent + 1,
            format!(
                "block_comment prefix `{}` was expected inside a block comment",
                String::from_utf8_lossy(prefix)
            ),
        ))
    }
}
