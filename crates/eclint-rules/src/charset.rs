//! Rule checking the byte-order mark and, for UTF-8 charsets, decodability.
//!
//! # Detected Patterns
//!
//! - `utf-8 bom`, `utf-16be`, `utf-16le`: the first line lacks the BOM
//! - `utf-8`, `latin1`: the first line starts with any known BOM
//! - `utf-8`, `utf-8 bom`: a line holds bytes that are not valid UTF-8
//!
//! BOM findings are file-level and reported at position 0.

use eclint_core::{Charset, Definition, LineContext, Rule, Violation};

/// Rule code for charset.
pub const CODE: &str = "EC006";

/// Rule name for charset.
pub const NAME: &str = "charset";

const KNOWN_BOMS: [Charset; 3] = [Charset::Utf8Bom, Charset::Utf16Be, Charset::Utf16Le];

fn detect_bom(content: &[u8]) -> Option<Charset> {
    KNOWN_BOMS
        .into_iter()
        .find(|charset| charset.bom().is_some_and(|bom| content.starts_with(bom)))
}

/// Checks the file encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoding;

impl Encoding {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn check_bom(ctx: &LineContext<'_>, charset: Charset) -> Option<Violation> {
        let detected = detect_bom(ctx.line.content());
        let message = match (charset.bom(), detected) {
            (Some(_), Some(found)) if found == charset => return None,
            (None, None) => return None,
            (Some(_), _) => format!("no {charset} byte-order mark was found"),
            (None, Some(found)) => {
                format!("unexpected {found} byte-order mark found, charset is {charset}")
            }
        };
        Some(ctx.violation(CODE, NAME, 0, message))
    }
}

impl Rule for Encoding {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Content must match charset, byte-order mark included"
    }

    fn applies_to(&self, definition: &Definition) -> bool {
        definition.charset.is_some()
    }

    fn check(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        let charset = ctx.definition.charset?;

        if ctx.is_first_line() {
            if let Some(violation) = Self::check_bom(ctx, charset) {
                return Some(violation);
            }
        }

        if !charset.is_utf8() {
            return None;
        }

        let error = std::str::from_utf8(ctx.line.content()).err()?;
        Some(ctx.violation(
            CODE,
            NAME,
            error.valid_up_to() + 1,
            "invalid UTF-8 byte sequence",
        ))
    }
}
