//! The built-in rule set.

use crate::{
    BlockCommentPrefix, Encoding, FinalNewline, Indentation, LineTerminator, MaxLineLength,
    TrailingWhitespace,
};
use eclint_core::RuleBox;
use tracing::debug;

/// Returns all available rules, in evaluation order.
///
/// The order decides how violations found on the same line are listed:
/// - `charset` (EC006)
/// - `end-of-line` (EC001)
/// - `indent-style` (EC003)
/// - `block-comment` (EC004)
/// - `trim-trailing-whitespace` (EC002)
/// - `max-line-length` (EC005)
/// - `insert-final-newline` (EC007)
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(Encoding::new()),
        Box::new(LineTerminator::new()),
        Box::new(Indentation::new()),
        Box::new(BlockCommentPrefix::new()),
        Box::new(TrailingWhitespace::new()),
        Box::new(MaxLineLength::new()),
        Box::new(FinalNewline::new()),
    ]
}

/// Looks a rule up by name or code (case-insensitive).
#[must_use]
pub fn rule_by_name(name: &str) -> Option<RuleBox> {
    let found = all_rules()
        .into_iter()
        .find(|rule| rule.name().eq_ignore_ascii_case(name) || rule.code().eq_ignore_ascii_case(name));
    if found.is_none() {
        debug!("Unknown rule: {}", name);
    }
    found
}
