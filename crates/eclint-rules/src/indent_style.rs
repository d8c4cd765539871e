//! Rule checking the leading whitespace of each line.
//!
//! # Detected Patterns
//!
//! - A tab in the indentation of a `space` file, or a space in a `tab` file
//! - With `indent_style = space` and a numeric `indent_size`, an indentation
//!   whose width is not a multiple of the size
//!
//! Lines after the opening marker of a block comment, up to and including
//! the closing line, are exempt. The opening line itself is checked.
//! Whitespace-only lines are never checked for size.

use eclint_core::{Definition, IndentStyle, LineContext, Rule, Violation};

/// Rule code for indent-style.
pub const CODE: &str = "EC003";

/// Rule name for indent-style.
pub const NAME: &str = "indent-style";

/// Checks indentation characters and width.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indentation;

impl Indentation {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn other(style: IndentStyle) -> IndentStyle {
    match style {
        IndentStyle::Space => IndentStyle::Tab,
        IndentStyle::Tab => IndentStyle::Space,
    }
}

impl Rule for Indentation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Indentation must use indent_style and multiples of indent_size"
    }

    fn applies_to(&self, definition: &Definition) -> bool {
        definition.indent_style.is_some()
    }

    fn check(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        if ctx.comment.is_exempt() {
            return None;
        }
        let style = ctx.definition.indent_style?;
        let content = ctx.line.content();

        let indent = content
            .iter()
            .take_while(|b| **b == b' ' || **b == b'\t')
            .count();

        if let Some(i) = content[..indent].iter().position(|b| *b != style.byte()) {
            return Some(ctx.violation(
                CODE,
                NAME,
                i + 1,
                format!(
                    "indentation style mismatch expected {style} got {}",
                    other(style)
                ),
            ));
        }

        let size = ctx.definition.indent_size.filter(|s| *s > 0)?;
        if style != IndentStyle::Space || indent == content.len() || indent % size == 0 {
            return None;
        }

        Some(ctx.violation(
            CODE,
            NAME,
            indent + 1,
            format!("indentation size doesn't match expected {size}, got {indent}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, spots};

    #[test]
    fn tab_in_space_file_points_at_the_tab() {
        let v = check(Indentation, &[("indent_style", "space")], b"ok\n  \tx\n");
        assert_eq!(spots(&v), vec![(1, 3)]);
        assert_eq!(v[0].message, "indentation style mismatch expected space got tab");
    }

    #[test]
    fn space_in_tab_file_points_at_the_space() {
        let v = check(Indentation, &[("indent_style", "tab")], b"\t\tok\n\t x\n");
        assert_eq!(spots(&v), vec![(1, 2)]);
    }

    #[test]
    fn only_leading_whitespace_is_checked() {
        assert!(check(Indentation, &[("indent_style", "space")], b"a\tb\n").is_empty());
    }

    #[test]
    fn size_must_be_a_multiple() {
        let props = &[("indent_style", "space"), ("indent_size", "4")];
        let v = check(Indentation, props, b"    ok\n   odd\n        ok\n");
        assert_eq!(spots(&v), vec![(1, 4)]);
        assert_eq!(v[0].message, "indentation size doesn't match expected 4, got 3");
    }

    #[test]
    fn whitespace_only_lines_skip_the_size_check() {
        let props = &[("indent_style", "space"), ("indent_size", "4")];
        assert!(check(Indentation, props, b"   \n").is_empty());
    }

    #[test]
    fn tab_files_ignore_indent_size() {
        let props = &[("indent_style", "tab"), ("indent_size", "4")];
        assert!(check(Indentation, props, b"\tx\n").is_empty());
    }

    #[test]
    fn block_comment_lines_are_exempt() {
        let props = &[
            ("indent_style", "space"),
            ("indent_size", "2"),
            ("block_comment_start", "/*"),
            ("block_comment_end", "*/"),
        ];
        let v = check(Indentation, props, b"/*\n\tinner\n * x\n */\n\tcode\n");
        assert_eq!(spots(&v), vec![(4, 1)]);
    }

    #[test]
    fn tab_before_an_opening_marker_is_reported() {
        let props = &[
            ("indent_style", "space"),
            ("block_comment_start", "/*"),
            ("block_comment_end", "*/"),
        ];
        let v = check(Indentation, props, b"\t/*\n x\n*/\n");
        assert_eq!(spots(&v), vec![(0, 1)]);
        assert_eq!(v[0].message, "indentation style mismatch expected space got tab");
    }
}
