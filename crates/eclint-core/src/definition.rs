//! Resolution of raw `.editorconfig` properties into a typed [`Definition`].
//!
//! The cascade itself (finding `.editorconfig` files and merging sections)
//! happens upstream; this module only interprets the flat result. The
//! `"unset"` sentinel is understood here and nowhere else.

use miette::Diagnostic;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::types::ErrorKind;

/// Sentinel value meaning "explicitly not configured".
pub const UNSET: &str = "unset";

/// Tab width used for column counting when nothing else is configured.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Returns `true` unless the value is empty or the `unset` sentinel.
#[must_use]
pub fn is_set(value: &str) -> bool {
    !value.is_empty() && value != UNSET
}

/// Errors raised while resolving or overriding a definition.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DefinitionError {
    /// `indent_size` is neither a positive integer nor `tab`.
    #[error("cannot convert indent_size {value:?} to a positive integer")]
    #[diagnostic(
        code(eclint::config::indent_size),
        help("use a positive integer, `tab` or `unset`")
    )]
    InvalidIndentSize {
        /// The offending value.
        value: String,
    },

    /// `indent_style` is neither `space` nor `tab`.
    #[error("{value:?} is an invalid value of indent_style, want tab or space")]
    #[diagnostic(code(eclint::config::indent_style))]
    InvalidIndentStyle {
        /// The offending value.
        value: String,
    },

    /// `tab_width` is not a positive integer.
    #[error("tab_width expected a positive integer, got {value:?}")]
    #[diagnostic(code(eclint::config::tab_width))]
    InvalidTabWidth {
        /// The offending value.
        value: String,
    },

    /// `block_comment_start` was given without its closing marker.
    #[error("block_comment_end was expected, none were found")]
    #[diagnostic(
        code(eclint::config::block_comment_end),
        help("set block_comment_end next to block_comment_start")
    )]
    MissingBlockCommentEnd,

    /// `max_line_length` is neither `off` nor a non-negative integer.
    #[error("max_line_length expected a non-negative number, got {value:?}")]
    #[diagnostic(code(eclint::config::max_line_length))]
    InvalidMaxLineLength {
        /// The offending value.
        value: String,
    },

    /// `end_of_line` names an unknown terminator.
    #[error("unsupported end_of_line value {value:?}")]
    #[diagnostic(
        code(eclint::config::end_of_line),
        help("use one of lf, crlf or cr")
    )]
    UnsupportedEndOfLine {
        /// The offending value.
        value: String,
    },

    /// `charset` names an unknown encoding.
    #[error("unsupported charset value {value:?}")]
    #[diagnostic(
        code(eclint::config::charset),
        help("use one of latin1, utf-8, utf-8-bom, utf-16be or utf-16le")
    )]
    UnsupportedCharset {
        /// The offending value.
        value: String,
    },

    /// A boolean setting holds something other than `true`/`false`.
    #[error("{key} expected true or false, got {value:?}")]
    #[diagnostic(code(eclint::config::boolean))]
    InvalidBoolean {
        /// The setting name.
        key: &'static str,
        /// The offending value.
        value: String,
    },

    /// A prefixed override targeted a setting that cannot be overridden.
    #[error("{setting} cannot be overridden: not supported")]
    #[diagnostic(code(eclint::config::unsupported_override))]
    UnsupportedOverride {
        /// The setting the override tried to replace.
        setting: String,
    },
}

impl DefinitionError {
    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedOverride { .. } => ErrorKind::UnsupportedOperation,
            _ => ErrorKind::Configuration,
        }
    }
}

/// Indentation character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndentStyle {
    /// Indent with spaces.
    Space,
    /// Indent with tabs.
    Tab,
}

impl IndentStyle {
    /// The byte expected in the leading whitespace.
    #[must_use]
    pub fn byte(self) -> u8 {
        match self {
            Self::Space => b' ',
            Self::Tab => b'\t',
        }
    }

    /// The setting value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Tab => "tab",
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndentStyle {
    type Err = DefinitionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "space" => Ok(Self::Space),
            "tab" => Ok(Self::Tab),
            _ => Err(DefinitionError::InvalidIndentStyle {
                value: value.to_string(),
            }),
        }
    }
}

/// Line terminator convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndOfLine {
    /// `\n`
    Lf,
    /// `\r\n`
    Crlf,
    /// `\r`
    Cr,
}

impl EndOfLine {
    /// The concrete terminator bytes.
    #[must_use]
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Lf => b"\n",
            Self::Crlf => b"\r\n",
            Self::Cr => b"\r",
        }
    }

    /// The setting value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::Crlf => "crlf",
            Self::Cr => "cr",
        }
    }

    /// The terminator as an escape sequence, for messages.
    #[must_use]
    pub fn escaped(self) -> &'static str {
        match self {
            Self::Lf => "\\n",
            Self::Crlf => "\\r\\n",
            Self::Cr => "\\r",
        }
    }
}

impl fmt::Display for EndOfLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndOfLine {
    type Err = DefinitionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::Crlf),
            "cr" => Ok(Self::Cr),
            _ => Err(DefinitionError::UnsupportedEndOfLine {
                value: value.to_string(),
            }),
        }
    }
}

/// File encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// ISO-8859-1.
    Latin1,
    /// UTF-8 without byte-order mark.
    Utf8,
    /// UTF-8 with byte-order mark.
    Utf8Bom,
    /// UTF-16 big endian.
    Utf16Be,
    /// UTF-16 little endian.
    Utf16Le,
}

impl Charset {
    /// The normalized name, as compared against detected byte-order marks.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latin1 => "latin1",
            Self::Utf8 => "utf-8",
            Self::Utf8Bom => "utf-8 bom",
            Self::Utf16Be => "utf-16be",
            Self::Utf16Le => "utf-16le",
        }
    }

    /// The byte-order mark this charset requires, if any.
    #[must_use]
    pub fn bom(self) -> Option<&'static [u8]> {
        match self {
            Self::Utf8Bom => Some(&[0xEF, 0xBB, 0xBF][..]),
            Self::Utf16Be => Some(&[0xFE, 0xFF][..]),
            Self::Utf16Le => Some(&[0xFF, 0xFE][..]),
            Self::Latin1 | Self::Utf8 => None,
        }
    }

    /// Whether content must decode as UTF-8.
    #[must_use]
    pub fn is_utf8(self) -> bool {
        matches!(self, Self::Utf8 | Self::Utf8Bom)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Charset {
    type Err = DefinitionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "latin1" => Ok(Self::Latin1),
            "utf-8" => Ok(Self::Utf8),
            "utf-8-bom" | "utf-8 bom" => Ok(Self::Utf8Bom),
            "utf-16be" => Ok(Self::Utf16Be),
            "utf-16le" => Ok(Self::Utf16Le),
            _ => Err(DefinitionError::UnsupportedCharset {
                value: value.to_string(),
            }),
        }
    }
}

/// Block comment markers. The start and end markers always come together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockComment {
    /// Opening marker, e.g. `/*`.
    pub start: Vec<u8>,
    /// Optional marker expected at the start of every inner line, e.g. `*`.
    pub continuation: Option<Vec<u8>>,
    /// Closing marker, e.g. `*/`.
    pub end: Vec<u8>,
}

/// Flat properties as produced by the `.editorconfig` cascade.
///
/// The handful of settings that can be overridden are lifted out of the
/// raw map; everything else stays in [`RawDefinition::raw`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDefinition {
    /// `indent_style` value, if configured.
    pub indent_style: Option<String>,
    /// `indent_size` value, if configured.
    pub indent_size: Option<String>,
    /// `tab_width`, if configured.
    pub tab_width: Option<usize>,
    /// `end_of_line` value, if configured.
    pub end_of_line: Option<String>,
    /// `charset` value, if configured.
    pub charset: Option<String>,
    /// Every property, keyed by lower-case name.
    pub raw: BTreeMap<String, String>,
}

impl RawDefinition {
    /// Builds a raw definition from flat key/value properties.
    ///
    /// # Errors
    ///
    /// Returns an error if `tab_width` is set but is not a positive integer.
    pub fn from_properties<I, K, V>(properties: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let raw: BTreeMap<String, String> = properties
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let tab_width = configured(&raw, "tab_width")
            .map(parse_tab_width)
            .transpose()?;

        Ok(Self {
            indent_style: configured(&raw, "indent_style").map(str::to_string),
            indent_size: configured(&raw, "indent_size").map(str::to_string),
            tab_width,
            end_of_line: configured(&raw, "end_of_line").map(str::to_string),
            charset: configured(&raw, "charset").map(str::to_string),
            raw,
        })
    }

    /// Returns a raw property, treating `unset` and empty values as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        configured(&self.raw, key)
    }

    /// Replaces settings with their `prefix`-ed variants.
    ///
    /// Every key starting with `prefix` is copied to its un-prefixed name, so
    /// a tool can check against different values than the ones an editor
    /// uses. An empty prefix does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::UnsupportedOverride`] when the prefix
    /// targets `trim_trailing_whitespace` or `insert_final_newline`, and
    /// [`DefinitionError::InvalidTabWidth`] for a non-integer `tab_width`.
    pub fn override_with_prefix(&mut self, prefix: &str) -> Result<(), DefinitionError> {
        if prefix.is_empty() {
            return Ok(());
        }

        let overrides: Vec<(String, String)> = self
            .raw
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(prefix)
                    .map(|name| (name.to_string(), value.clone()))
            })
            .collect();

        for (name, value) in overrides {
            let setting = is_set(&value).then(|| value.clone());
            match name.as_str() {
                "trim_trailing_whitespace" | "insert_final_newline" => {
                    return Err(DefinitionError::UnsupportedOverride { setting: name });
                }
                "indent_style" => self.indent_style = setting,
                "indent_size" => self.indent_size = setting,
                "charset" => self.charset = setting,
                "end_of_line" => self.end_of_line = setting,
                "tab_width" => {
                    self.tab_width = setting.as_deref().map(parse_tab_width).transpose()?;
                }
                _ => {}
            }
            self.raw.insert(name, value);
        }

        Ok(())
    }
}

fn configured<'a>(raw: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    raw.get(key).map(String::as_str).filter(|v| is_set(v))
}

fn parse_tab_width(value: &str) -> Result<usize, DefinitionError> {
    value
        .parse::<usize>()
        .ok()
        .filter(|width| *width > 0)
        .ok_or_else(|| DefinitionError::InvalidTabWidth {
            value: value.to_string(),
        })
}

fn parse_bool(raw: &RawDefinition, key: &'static str) -> Result<Option<bool>, DefinitionError> {
    match raw.get(key) {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(value) => Err(DefinitionError::InvalidBoolean {
            key,
            value: value.to_string(),
        }),
    }
}

/// Resolved, per-file style settings. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    /// Indentation character.
    pub indent_style: Option<IndentStyle>,
    /// Indentation width in columns.
    pub indent_size: Option<usize>,
    /// Columns a tab advances to.
    pub tab_width: Option<usize>,
    /// Line terminator convention.
    pub end_of_line: Option<EndOfLine>,
    /// File encoding.
    pub charset: Option<Charset>,
    /// Whether trailing whitespace is forbidden.
    pub trim_trailing_whitespace: Option<bool>,
    /// Whether the file must (or must not) end with a terminator.
    pub insert_final_newline: Option<bool>,
    /// Maximum display width of a line, `0` when off.
    pub max_line_length: usize,
    /// Block comment markers, if configured.
    pub block_comment: Option<BlockComment>,
}

impl Definition {
    /// Resolves and validates a raw definition.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for any malformed or contradictory
    /// setting; nothing is silently defaulted.
    pub fn resolve(raw: &RawDefinition) -> Result<Self, DefinitionError> {
        let indent_style = raw
            .indent_style
            .as_deref()
            .filter(|v| is_set(v))
            .map(str::parse::<IndentStyle>)
            .transpose()?;

        let configured_tab_width = raw.tab_width.filter(|w| *w > 0);

        let indent_size = match raw.indent_size.as_deref().filter(|v| is_set(v)) {
            None => None,
            Some("tab") => configured_tab_width,
            Some(value) => Some(
                value
                    .parse::<usize>()
                    .ok()
                    .filter(|size| *size > 0)
                    .ok_or_else(|| DefinitionError::InvalidIndentSize {
                        value: value.to_string(),
                    })?,
            ),
        };

        let mut tab_width = configured_tab_width.or(indent_size);

        let end_of_line = raw
            .end_of_line
            .as_deref()
            .filter(|v| is_set(v))
            .map(str::parse::<EndOfLine>)
            .transpose()?;

        let charset = raw
            .charset
            .as_deref()
            .filter(|v| is_set(v))
            .map(str::parse::<Charset>)
            .transpose()?;

        let trim_trailing_whitespace = parse_bool(raw, "trim_trailing_whitespace")?;
        let insert_final_newline = parse_bool(raw, "insert_final_newline")?;
        let block_comment = resolve_block_comment(raw)?;

        let max_line_length = match raw.get("max_line_length") {
            None | Some("off") => 0,
            Some(value) => {
                value
                    .parse::<usize>()
                    .map_err(|_| DefinitionError::InvalidMaxLineLength {
                        value: value.to_string(),
                    })?
            }
        };

        if max_line_length > 0 && tab_width.is_none() {
            tab_width = Some(DEFAULT_TAB_WIDTH);
        }

        Ok(Self {
            indent_style,
            indent_size,
            tab_width,
            end_of_line,
            charset,
            trim_trailing_whitespace,
            insert_final_newline,
            max_line_length,
            block_comment,
        })
    }

    /// The terminator bytes every line must end with, if configured.
    #[must_use]
    pub fn eol(&self) -> Option<&'static [u8]> {
        self.end_of_line.map(EndOfLine::as_bytes)
    }

    /// Columns a tab advances to, falling back to [`DEFAULT_TAB_WIDTH`].
    #[must_use]
    pub fn effective_tab_width(&self) -> usize {
        self.tab_width.unwrap_or(DEFAULT_TAB_WIDTH)
    }
}

fn resolve_block_comment(raw: &RawDefinition) -> Result<Option<BlockComment>, DefinitionError> {
    let Some(start) = raw.get("block_comment_start") else {
        return Ok(None);
    };
    let end = raw
        .get("block_comment_end")
        .ok_or(DefinitionError::MissingBlockCommentEnd)?;

    Ok(Some(BlockComment {
        start: start.as_bytes().to_vec(),
        continuation: raw.get("block_comment").map(|c| c.as_bytes().to_vec()),
        end: end.as_bytes().to_vec(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(properties: &[(&str, &str)]) -> RawDefinition {
        RawDefinition::from_properties(properties.iter().copied()).unwrap()
    }

    fn resolve(properties: &[(&str, &str)]) -> Result<Definition, DefinitionError> {
        Definition::resolve(&raw(properties))
    }

    #[test]
    fn empty_properties_resolve_to_nothing() {
        assert_eq!(resolve(&[]).unwrap(), Definition::default());
    }

    #[test]
    fn unset_sentinel_means_absent() {
        let def = resolve(&[
            ("indent_style", "unset"),
            ("indent_size", "unset"),
            ("end_of_line", "unset"),
            ("charset", "unset"),
            ("trim_trailing_whitespace", "unset"),
            ("max_line_length", "unset"),
        ])
        .unwrap();
        assert_eq!(def, Definition::default());
    }

    #[test]
    fn typed_fields_are_parsed() {
        let def = resolve(&[
            ("indent_style", "space"),
            ("indent_size", "4"),
            ("end_of_line", "crlf"),
            ("charset", "utf-8"),
            ("trim_trailing_whitespace", "true"),
            ("insert_final_newline", "false"),
        ])
        .unwrap();
        assert_eq!(def.indent_style, Some(IndentStyle::Space));
        assert_eq!(def.indent_size, Some(4));
        assert_eq!(def.end_of_line, Some(EndOfLine::Crlf));
        assert_eq!(def.charset, Some(Charset::Utf8));
        assert_eq!(def.trim_trailing_whitespace, Some(true));
        assert_eq!(def.insert_final_newline, Some(false));
    }

    #[test]
    fn utf8_bom_is_normalized() {
        let def = resolve(&[("charset", "utf-8-bom")]).unwrap();
        assert_eq!(def.charset, Some(Charset::Utf8Bom));
        assert_eq!(def.charset.unwrap().as_str(), "utf-8 bom");
    }

    #[test]
    fn non_numeric_indent_size_names_the_value() {
        let err = resolve(&[("indent_size", "four")]).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::InvalidIndentSize {
                value: "four".to_string()
            }
        );
        assert!(err.to_string().contains("\"four\""));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn zero_indent_size_is_rejected() {
        let err = resolve(&[("indent_size", "0")]).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::InvalidIndentSize {
                value: "0".to_string()
            }
        );
    }

    #[test]
    fn indent_size_tab_follows_tab_width() {
        let def = resolve(&[("indent_size", "tab"), ("tab_width", "3")]).unwrap();
        assert_eq!(def.indent_size, Some(3));

        let def = resolve(&[("indent_size", "tab")]).unwrap();
        assert_eq!(def.indent_size, None);
    }

    #[test]
    fn tab_width_defaults_to_indent_size() {
        let def = resolve(&[("indent_size", "2")]).unwrap();
        assert_eq!(def.tab_width, Some(2));

        let def = resolve(&[("indent_size", "2"), ("tab_width", "4")]).unwrap();
        assert_eq!(def.tab_width, Some(4));
    }

    #[test]
    fn invalid_tab_width_is_rejected_at_the_boundary() {
        let err = RawDefinition::from_properties([("tab_width", "wide")]).unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidTabWidth { .. }));
    }

    #[test]
    fn max_line_length_off_disables_the_rule() {
        let def = resolve(&[("max_line_length", "off")]).unwrap();
        assert_eq!(def.max_line_length, 0);
        assert_eq!(def.tab_width, None);
    }

    #[test]
    fn max_line_length_defaults_tab_width() {
        let def = resolve(&[("max_line_length", "80")]).unwrap();
        assert_eq!(def.max_line_length, 80);
        assert_eq!(def.tab_width, Some(DEFAULT_TAB_WIDTH));

        let def = resolve(&[("max_line_length", "80"), ("tab_width", "4")]).unwrap();
        assert_eq!(def.tab_width, Some(4));
    }

    #[test]
    fn bad_max_line_length_names_the_value() {
        for value in ["-1", "eighty", "1.5"] {
            let err = resolve(&[("max_line_length", value)]).unwrap_err();
            assert_eq!(
                err,
                DefinitionError::InvalidMaxLineLength {
                    value: value.to_string()
                }
            );
        }
    }

    #[test]
    fn end_of_line_maps_to_bytes() {
        assert_eq!("lf".parse::<EndOfLine>().unwrap().as_bytes(), b"\n");
        assert_eq!("cr".parse::<EndOfLine>().unwrap().as_bytes(), b"\r");
        assert_eq!("crlf".parse::<EndOfLine>().unwrap().as_bytes(), b"\r\n");
        let err = resolve(&[("end_of_line", "nel")]).unwrap_err();
        assert!(err.to_string().contains("nel"));
    }

    #[test]
    fn unknown_values_are_configuration_errors() {
        assert!(matches!(
            resolve(&[("indent_style", "both")]),
            Err(DefinitionError::InvalidIndentStyle { .. })
        ));
        assert!(matches!(
            resolve(&[("charset", "ebcdic")]),
            Err(DefinitionError::UnsupportedCharset { .. })
        ));
        assert!(matches!(
            resolve(&[("insert_final_newline", "yes")]),
            Err(DefinitionError::InvalidBoolean {
                key: "insert_final_newline",
                ..
            })
        ));
    }

    #[test]
    fn block_comment_requires_end_marker() {
        let err = resolve(&[("block_comment_start", "/*")]).unwrap_err();
        assert_eq!(err, DefinitionError::MissingBlockCommentEnd);
        assert!(err.to_string().contains("block_comment_end"));

        let err = resolve(&[("block_comment_start", "/*"), ("block_comment_end", "unset")])
            .unwrap_err();
        assert_eq!(err, DefinitionError::MissingBlockCommentEnd);
    }

    #[test]
    fn block_comment_markers_are_kept_verbatim() {
        let def = resolve(&[
            ("block_comment_start", "/*"),
            ("block_comment", "*"),
            ("block_comment_end", "*/"),
        ])
        .unwrap();
        let markers = def.block_comment.unwrap();
        assert_eq!(markers.start, b"/*");
        assert_eq!(markers.continuation.as_deref(), Some(&b"*"[..]));
        assert_eq!(markers.end, b"*/");
    }

    #[test]
    fn continuation_without_start_is_ignored() {
        let def = resolve(&[("block_comment", "*")]).unwrap();
        assert!(def.block_comment.is_none());
    }

    #[test]
    fn prefix_override_replaces_settings() {
        let mut raw = raw(&[
            ("indent_style", "tab"),
            ("eclint_indent_style", "space"),
            ("eclint_indent_size", "2"),
            ("eclint_tab_width", "2"),
            ("eclint_end_of_line", "crlf"),
            ("eclint_charset", "latin1"),
            ("eclint_max_line_length", "100"),
        ]);
        raw.override_with_prefix("eclint_").unwrap();

        assert_eq!(raw.indent_style.as_deref(), Some("space"));
        assert_eq!(raw.indent_size.as_deref(), Some("2"));
        assert_eq!(raw.tab_width, Some(2));
        assert_eq!(raw.end_of_line.as_deref(), Some("crlf"));
        assert_eq!(raw.charset.as_deref(), Some("latin1"));
        assert_eq!(raw.get("max_line_length"), Some("100"));
        assert_eq!(raw.get("indent_style"), Some("space"));
    }

    #[test]
    fn prefix_override_rejects_bad_tab_width() {
        let mut raw = raw(&[("eclint_tab_width", "x")]);
        assert!(matches!(
            raw.override_with_prefix("eclint_"),
            Err(DefinitionError::InvalidTabWidth { .. })
        ));
    }

    #[test]
    fn prefix_override_refuses_immutable_settings() {
        for key in ["trim_trailing_whitespace", "insert_final_newline"] {
            let prefixed = format!("eclint_{key}");
            let mut raw = raw(&[(prefixed.as_str(), "false")]);
            let err = raw.override_with_prefix("eclint_").unwrap_err();
            assert_eq!(
                err,
                DefinitionError::UnsupportedOverride {
                    setting: key.to_string()
                }
            );
            assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        }
    }

    #[test]
    fn empty_prefix_is_a_no_op() {
        let mut raw = raw(&[("insert_final_newline", "true")]);
        let before = raw.clone();
        raw.override_with_prefix("").unwrap();
        assert_eq!(raw, before);
    }
}
