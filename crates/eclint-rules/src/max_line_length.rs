//! Rule limiting the display width of each line.
//!
//! # Width
//!
//! Tabs advance to the next multiple of `tab_width`; every other byte counts
//! as one column, so a multi-byte character is as wide as its encoding.
//! Terminators are not counted.
//!
//! The reported position is the display column `max_line_length + 1`. The
//! rendered highlight points at the byte that first crosses the limit.

use eclint_core::{Definition, LineContext, Rule, Violation};

/// Rule code for max-line-length.
pub const CODE: &str = "EC005";

/// Rule name for max-line-length.
pub const NAME: &str = "max-line-length";

fn advance(width: usize, byte: u8, tab_width: usize) -> usize {
    match byte {
        b'\t' => (width / tab_width + 1) * tab_width,
        _ => width + 1,
    }
}

/// Computes the display width of `content` for a given tab width.
#[must_use]
pub fn display_width(content: &[u8], tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    content
        .iter()
        .fold(0, |width, byte| advance(width, *byte, tab_width))
}

/// Byte offset of the first byte reaching past column `max`.
fn overflow_offset(content: &[u8], tab_width: usize, max: usize) -> Option<usize> {
    let tab_width = tab_width.max(1);
    let mut width = 0;
    content.iter().position(|byte| {
        width = advance(width, *byte, tab_width);
        width > max
    })
}

/// Checks line widths.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLineLength;

impl MaxLineLength {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MaxLineLength {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Lines must not be wider than max_line_length"
    }

    fn applies_to(&self, definition: &Definition) -> bool {
        definition.max_line_length > 0
    }

    fn check(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        let max = ctx.definition.max_line_length;
        let tab_width = ctx.definition.effective_tab_width();
        let content = ctx.line.content();
        let width = display_width(content, tab_width);
        if width <= max {
            return None;
        }

        let violation = ctx.violation(
            CODE,
            NAME,
            max + 1,
            format!("line is too long ({width} > {max})"),
        );
        Some(match overflow_offset(content, tab_width, max) {
            Some(offset) => violation.with_highlight(offset),
            None => violation,
        })
    }
}
