//! Error types for menu description parsing

use super::state_machine::ParserState;
use std::fmt;
use thiserror::Error;

/// The attribute line kinds, used in orphan-attribute messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Icon,
    Command,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Icon => write!(f, "icon"),
            AttributeKind::Command => write!(f, "command"),
        }
    }
}

/// What went wrong on the failing line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Leading whitespace is not a multiple of the document's indentation unit.
    #[error("indentation should be a multiple of {unit} (found {width})")]
    Indentation { width: usize, unit: usize },

    /// An attribute line is not exactly one level under the node it decorates.
    #[error("not indented properly (expected level {expected}, found {found})")]
    AttributeIndentation { expected: usize, found: usize },

    /// The line's shape is not allowed after the previous line.
    #[error("invalid line after {state}")]
    UnmatchedLine { state: ParserState },

    /// An icon or command line with nothing to decorate.
    #[error("unexpected {attribute} after non-entry")]
    OrphanAttribute { attribute: AttributeKind },

    /// A node line deeper than the currently open menus allow.
    #[error("line is indented too much (level {level}, at most {max_level})")]
    OverIndent { level: usize, max_level: usize },
}

impl ParseErrorKind {
    /// Both misaligned whitespace and misplaced attribute lines are indentation errors.
    pub fn is_indentation(&self) -> bool {
        matches!(
            self,
            ParseErrorKind::Indentation { .. } | ParseErrorKind::AttributeIndentation { .. }
        )
    }
}

/// A fatal parse error, located on a 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("at line {line}: {kind}: {text}")]
pub struct ParseError {
    pub line: usize,
    /// The offending line, trimmed.
    pub text: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, text: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            line,
            text: text.into(),
            kind,
        }
    }

    /// Format source code context around the failing line.
    ///
    /// Shows 2 lines before it, the line itself with a >> marker, and 2 lines after.
    pub fn source_context(&self, source: &str) -> String {
        format_source_context(source, self.line)
    }
}

fn format_source_context(source: &str, line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = line.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();
    for (line_num, text) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, text));
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_line_and_text() {
        let error = ParseError::new(
            3,
            "xdg-open .",
            ParseErrorKind::OrphanAttribute {
                attribute: AttributeKind::Command,
            },
        );
        assert_eq!(
            error.to_string(),
            "at line 3: unexpected command after non-entry: xdg-open ."
        );
    }

    #[test]
    fn test_source_context_marks_line() {
        let source = "line 1\nline 2\nline 3\nerror line\nline 5\nline 6\nline 7";
        let error = ParseError::new(
            4,
            "error line",
            ParseErrorKind::Indentation { width: 3, unit: 2 },
        );

        let context = error.source_context(source);

        assert_eq!(
            context,
            "     2 | line 2\n     3 | line 3\n>>   4 | error line\n     5 | line 5\n     6 | line 6\n"
        );
    }

    #[test]
    fn test_source_context_at_document_edges() {
        let context = format_source_context("only\n", 1);
        assert_eq!(context, ">>   1 | only\n");
    }

    #[test]
    fn test_indentation_kinds() {
        assert!(ParseErrorKind::Indentation { width: 1, unit: 2 }.is_indentation());
        assert!(ParseErrorKind::AttributeIndentation {
            expected: 1,
            found: 2
        }
        .is_indentation());
        assert!(!ParseErrorKind::OverIndent {
            level: 2,
            max_level: 0
        }
        .is_indentation());
    }
}
