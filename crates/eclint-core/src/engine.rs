//! Rule engine: a single forward pass over a file's lines.

use std::io;

use tracing::trace;

use crate::definition::{BlockComment, Definition};
use crate::lines::Line;
use crate::rule::{CommentPosition, LineContext, Rule, RuleBox};
use crate::types::Violation;

/// State carried from one line to the next during a single file's scan.
///
/// A fresh state is created per file; it is threaded through
/// [`Engine::step`] by value and never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    inside_block_comment: bool,
    previous_line: Option<Vec<u8>>,
    previous_index: Option<usize>,
}

impl ScanState {
    /// Creates the state for the first line of a file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the previous line left a block comment open.
    #[must_use]
    pub fn inside_block_comment(&self) -> bool {
        self.inside_block_comment
    }

    /// Bytes of the previous line, if any.
    #[must_use]
    pub fn previous_line(&self) -> Option<&[u8]> {
        self.previous_line.as_deref()
    }

    /// Index of the previous line, `None` before the first line.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        self.previous_index
    }

    /// Classifies `line` against the block comment markers.
    #[must_use]
    pub fn classify(&self, definition: &Definition, line: &Line) -> CommentPosition {
        let Some(markers) = &definition.block_comment else {
            return CommentPosition::Outside;
        };
        let content = line.content();

        if self.inside_block_comment {
            return if contains(content, &markers.end) {
                CommentPosition::Closing
            } else {
                CommentPosition::Inside
            };
        }

        if opens(markers, content) {
            CommentPosition::Opening
        } else {
            CommentPosition::Outside
        }
    }

    /// Returns the state after `line`.
    #[must_use]
    pub fn advance(self, line: &Line, comment: CommentPosition) -> Self {
        Self {
            inside_block_comment: matches!(
                comment,
                CommentPosition::Opening | CommentPosition::Inside
            ),
            previous_line: Some(line.bytes.clone()),
            previous_index: Some(line.index),
        }
    }
}

/// Whether the line starts a block comment that it does not also close.
fn opens(markers: &BlockComment, content: &[u8]) -> bool {
    let body = trim_indentation(content);
    body.strip_prefix(markers.start.as_slice())
        .is_some_and(|rest| !contains(rest, &markers.end))
}

fn trim_indentation(content: &[u8]) -> &[u8] {
    let start = content
        .iter()
        .position(|b| *b != b' ' && *b != b'\t')
        .unwrap_or(content.len());
    &content[start..]
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

/// Violations collected from one file, plus the read error that cut the
/// scan short, if any.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Violations in line order.
    pub violations: Vec<Violation>,
    /// The IO error that stopped the scan.
    pub error: Option<io::Error>,
}

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    rules: Vec<RuleBox>,
}

impl EngineBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> Engine {
        Engine { rules: self.rules }
    }
}

/// Runs rules over lines, in registration order.
pub struct Engine {
    rules: Vec<RuleBox>,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the registered rules.
    #[must_use]
    pub fn rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Evaluates one line and returns the state for the next one.
    pub fn step(
        &self,
        definition: &Definition,
        state: ScanState,
        line: &Line,
        violations: &mut Vec<Violation>,
    ) -> ScanState {
        let comment = state.classify(definition, line);
        trace!(index = line.index, ?comment, "line");

        let ctx = LineContext::new(definition, line, comment, &state);
        violations.extend(
            self.rules
                .iter()
                .filter(|rule| rule.applies_to(definition))
                .filter_map(|rule| rule.check(&ctx)),
        );

        state.advance(line, comment)
    }

    /// Scans all lines of one file.
    ///
    /// A read error ends the scan; violations found up to that point are
    /// kept.
    pub fn scan<I>(&self, definition: &Definition, lines: I) -> ScanOutcome
    where
        I: IntoIterator<Item = io::Result<Line>>,
    {
        let mut state = ScanState::new();
        let mut outcome = ScanOutcome::default();

        for line in lines {
            match line {
                Ok(line) => state = self.step(definition, state, &line, &mut outcome.violations),
                Err(e) => {
                    outcome.error = Some(e);
                    break;
                }
            }
        }

        outcome
    }
}
