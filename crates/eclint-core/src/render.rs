//! Display formatting of per-file findings.
//!
//! The renderer only produces strings; writing them out (and deciding the
//! exit status) is left to the caller.

use miette::Diagnostic;
use std::fmt::Write;

use crate::types::{FileReport, Finding, LintError, Violation};

/// Number of findings rendered per file unless told otherwise.
pub const DEFAULT_SHOW_ERROR_QUANTITY: usize = 10;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if stdout is a TTY and `NO_COLOR` is not set.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

mod ansi {
    pub const HIGHLIGHT: &str = "\x1b[37;41m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const RESET: &str = "\x1b[0m";
}

/// Terminal styling capability: either wraps text in ANSI codes or leaves it
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Resolves a color mode against the current terminal.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none()
                    && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        };
        Self { enabled }
    }

    /// A palette that never styles.
    #[must_use]
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// A palette that always styles.
    #[must_use]
    pub const fn ansi() -> Self {
        Self { enabled: true }
    }

    /// Whether styling is applied.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    fn paint(self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// White on red, for the offending character.
    #[must_use]
    pub fn highlight(self, text: &str) -> String {
        self.paint(ansi::HIGHLIGHT, text)
    }

    /// Styling for file names.
    #[must_use]
    pub fn filename(self, text: &str) -> String {
        self.paint(ansi::MAGENTA, text)
    }

    /// Styling for line indices and positions.
    #[must_use]
    pub fn position(self, text: &str) -> String {
        self.paint(ansi::GREEN, text)
    }

    /// Styling for counts that need attention.
    #[must_use]
    pub fn alert(self, text: &str) -> String {
        self.paint(ansi::BRIGHT_RED, text)
    }
}

fn is_continuation(byte: u8) -> bool {
    byte >> 6 == 0b10
}

fn visible(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| *b != b'\r' && *b != b'\n')
        .map_or(0, |i| i + 1);
    &line[..end]
}

/// Renders `line` with the character at byte `offset` (0-based) highlighted.
///
/// Terminator bytes are dropped. An offset landing on a UTF-8 continuation
/// byte moves back to the start of its character, and the whole character is
/// highlighted. At or past the end of the content a highlighted space stands
/// in for the missing character.
#[must_use]
pub fn highlight_at(line: &[u8], offset: usize, palette: &Palette) -> String {
    let content = visible(line);

    let mut start = offset.min(content.len());
    while start > 0 && start < content.len() && is_continuation(content[start]) {
        start -= 1;
    }

    let (marked, end) = if start < content.len() {
        let len = content[start + 1..]
            .iter()
            .take_while(|b| is_continuation(**b))
            .count();
        let end = start + 1 + len;
        (String::from_utf8_lossy(&content[start..end]).into_owned(), end)
    } else {
        (" ".to_string(), content.len())
    };

    format!(
        "{}{}{}",
        String::from_utf8_lossy(&content[..start]),
        palette.highlight(&marked),
        String::from_utf8_lossy(&content[end..]),
    )
}

/// Formats file reports for display.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    palette: Palette,
    show_error_quantity: Option<usize>,
    summary: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Palette::plain())
    }
}

impl Renderer {
    /// Creates a renderer showing at most [`DEFAULT_SHOW_ERROR_QUANTITY`]
    /// findings per file.
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self {
            palette,
            show_error_quantity: Some(DEFAULT_SHOW_ERROR_QUANTITY),
            summary: false,
        }
    }

    /// Sets the per-file display limit; `None` shows everything.
    #[must_use]
    pub const fn with_error_quantity(mut self, quantity: Option<usize>) -> Self {
        self.show_error_quantity = quantity;
        self
    }

    /// Renders only a total per file.
    #[must_use]
    pub const fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    /// Renders one file's findings. A clean file renders as nothing.
    #[must_use]
    pub fn render(&self, report: &FileReport) -> String {
        let total = report.finding_count();
        if total == 0 {
            return String::new();
        }

        let filename = report.path().display().to_string();
        let mut out = String::new();

        if self.summary {
            let _ = writeln!(out, "{}: {total} errors", self.palette.filename(&filename));
            return out;
        }

        let _ = writeln!(out, "{}:", self.palette.filename(&filename));

        let shown = self.show_error_quantity.map_or(total, |limit| limit.min(total));
        for finding in report.findings().take(shown) {
            match finding {
                Finding::Violation(violation) => self.write_violation(&mut out, violation),
                Finding::Error(error) => write_error(&mut out, error),
            }
        }

        if shown < total {
            let skipped = (total - shown).to_string();
            let _ = writeln!(out, " ... skipping {} errors", self.palette.alert(&skipped));
        }

        out.push('\n');
        out
    }

    fn write_violation(&self, out: &mut String, violation: &Violation) {
        let _ = writeln!(
            out,
            "{}:{}: {}",
            self.palette.position(&violation.line_index.to_string()),
            self.palette.position(&violation.position.to_string()),
            violation.message,
        );
        let _ = writeln!(
            out,
            "{}",
            highlight_at(&violation.line, violation.highlight_offset(), &self.palette)
        );
    }
}

fn write_error(out: &mut String, error: &LintError) {
    let _ = writeln!(out, "{error}");
    if let Some(help) = error.help() {
        let _ = writeln!(out, "  = help: {help}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::DefinitionError;
    use std::path::PathBuf;

    fn violation(index: usize, position: usize, line: &[u8]) -> Violation {
        Violation::new("EC005", "max-line-length", index, position, "line is too long (6 > 4)")
            .with_line(line.to_vec())
    }

    fn report(count: usize) -> FileReport {
        let mut report = FileReport::new("src/main.c");
        for i in 0..count {
            report.violations.push(violation(i, 5, b"int x;\n"));
        }
        report
    }

    #[test]
    fn highlights_ascii_column() {
        let out = highlight_at(b"hello\n", 1, &Palette::ansi());
        assert_eq!(out, "h\x1b[37;41me\x1b[0mllo");
    }

    #[test]
    fn highlight_past_end_uses_placeholder() {
        let out = highlight_at(b"abc\r\n", 3, &Palette::ansi());
        assert_eq!(out, "abc\x1b[37;41m \x1b[0m");
        assert_eq!(highlight_at(b"abc", 99, &Palette::plain()), "abc ");
        assert_eq!(highlight_at(b"", 0, &Palette::plain()), " ");
    }

    #[test]
    fn terminators_are_never_visible() {
        assert_eq!(highlight_at(b"ab\r\n", 0, &Palette::plain()), "ab");
        assert_eq!(highlight_at(b"ab\r", 1, &Palette::plain()), "ab");
    }

    #[test]
    fn highlight_never_splits_a_character() {
        // "aé€😀b": 1 + 2 + 3 + 4 + 1 bytes
        let line = "aé€😀b\n".as_bytes();
        for offset in 0..line.len() + 2 {
            let out = highlight_at(line, offset, &Palette::ansi());
            let marked = out
                .split("\x1b[37;41m")
                .nth(1)
                .and_then(|rest| rest.split("\x1b[0m").next())
                .unwrap();
            assert!(
                ["a", "é", "€", "😀", "b", " "].contains(&marked),
                "offset {offset} highlighted {marked:?}"
            );
            assert!(!out.contains('\u{FFFD}'), "offset {offset} produced {out:?}");
        }
    }

    #[test]
    fn continuation_offset_snaps_to_character_start() {
        let line = "xé!".as_bytes();
        assert_eq!(highlight_at(line, 2, &Palette::ansi()), "x\x1b[37;41mé\x1b[0m!");
    }

    #[test]
    fn clean_file_renders_nothing() {
        assert_eq!(Renderer::default().render(&report(0)), "");
    }

    #[test]
    fn renders_violations_with_highlighted_lines() {
        let out = Renderer::default().render(&report(2));
        insta::assert_snapshot!(out.trim_end(), @r"
        src/main.c:
        0:5: line is too long (6 > 4)
        int x;
        1:5: line is too long (6 > 4)
        int x;
        ");
        assert!(out.ends_with("int x;\n\n"));
    }

    #[test]
    fn skipped_count_is_the_remainder() {
        let out = Renderer::default()
            .with_error_quantity(Some(2))
            .render(&report(5));
        assert_eq!(out.matches("line is too long").count(), 2);
        assert!(out.contains(" ... skipping 3 errors\n"));

        let out = Renderer::default()
            .with_error_quantity(Some(5))
            .render(&report(5));
        assert!(!out.contains("skipping"));

        let out = Renderer::default().with_error_quantity(None).render(&report(30));
        assert_eq!(out.matches("line is too long").count(), 30);
    }

    #[test]
    fn summary_counts_everything() {
        let out = Renderer::default()
            .with_summary(true)
            .with_error_quantity(Some(1))
            .render(&report(3));
        assert_eq!(out, "src/main.c: 3 errors\n");
    }

    #[test]
    fn errors_render_with_help() {
        let report = FileReport::failed(
            PathBuf::from("broken.c"),
            DefinitionError::MissingBlockCommentEnd,
        );
        let out = Renderer::default().render(&report);
        insta::assert_snapshot!(out.trim_end(), @r"
        broken.c:
        block_comment_end was expected, none were found
          = help: set block_comment_end next to block_comment_start
        ");
    }

    #[test]
    fn colors_wrap_names_and_positions() {
        let out = Renderer::new(Palette::ansi()).render(&report(1));
        assert!(out.starts_with("\x1b[35msrc/main.c\x1b[0m:\n"));
        assert!(out.contains("\x1b[32m0\x1b[0m:\x1b[32m5\x1b[0m: line is too long (6 > 4)"));
        assert!(out.contains("int \x1b[37;41mx\x1b[0m;"));
    }

    #[test]
    fn display_column_positions_highlight_their_byte() {
        let line = b"\t0123456789\n";
        let v = Violation::new("EC005", "max-line-length", 0, 11, "line is too long (14 > 10)")
            .with_line(line.to_vec())
            .with_highlight(7);
        let mut report = FileReport::new("tab.c");
        report.violations.push(v);

        let out = Renderer::new(Palette::ansi()).render(&report);
        assert!(out.contains("\x1b[32m0\x1b[0m:\x1b[32m11\x1b[0m: line is too long"));
        assert!(out.contains("\t012345\x1b[37;41m6\x1b[0m789\n"));
    }

    #[test]
    fn color_modes() {
        assert!(Palette::new(ColorMode::Always).is_enabled());
        assert!(!Palette::new(ColorMode::Never).is_enabled());
    }
}
