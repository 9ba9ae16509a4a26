//! Lexing
//!
//!     Splits a description into source lines and gives each one a nesting level.
//!
//!     Indentation is relative to a unit fixed per document: the leading-whitespace width of
//!     the first indented, non-blank line. Every other line must be indented by an exact
//!     multiple of it. Blank lines are dropped here and never influence indentation.
//!
//!     Whitespace is counted in characters, so a tab counts as one.

pub mod line_classification;

pub use line_classification::{classify_line, Checkbox, LineShape, ShapeKind};

use crate::menu::parsing::ParseErrorKind;

/// A non-blank line of the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the original text.
    pub number: usize,
    /// Width of the leading whitespace.
    pub indent: usize,
    /// The line with surrounding whitespace removed.
    pub content: &'a str,
}

/// Width of the leading whitespace of a line.
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Iterate over the non-blank lines of a description.
pub fn source_lines(text: &str) -> impl Iterator<Item = SourceLine<'_>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| SourceLine {
            number: i + 1,
            indent: leading_whitespace(line),
            content: line.trim(),
        })
}

/// Width of the indentation unit of a description.
///
/// The leading-whitespace width of the first indented line, or 1 when nothing is indented.
pub fn unit_width(text: &str) -> usize {
    source_lines(text)
        .map(|line| line.indent)
        .find(|indent| *indent > 0)
        .unwrap_or(1)
}

/// Converts leading whitespace into nesting levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indentation {
    unit: usize,
}

impl Indentation {
    /// Detect the unit of a whole description.
    pub fn detect(text: &str) -> Self {
        Self::with_unit(unit_width(text))
    }

    pub fn with_unit(unit: usize) -> Self {
        Self { unit: unit.max(1) }
    }

    pub fn unit(&self) -> usize {
        self.unit
    }

    /// Nesting level of a line.
    pub fn level_of(&self, line: &SourceLine<'_>) -> Result<usize, ParseErrorKind> {
        if line.indent % self.unit != 0 {
            return Err(ParseErrorKind::Indentation {
                width: line.indent,
                unit: self.unit,
            });
        }
        Ok(line.indent / self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_first_indented_line() {
        let text = "- a\n   cmd\n- b\n      cmd2\n";
        assert_eq!(unit_width(text), 3);
    }

    #[test]
    fn test_unit_defaults_to_one() {
        assert_eq!(unit_width("- a\n- b\n"), 1);
        assert_eq!(unit_width(""), 1);
    }

    #[test]
    fn test_blank_lines_do_not_set_unit() {
        // The whitespace-only line must be ignored
        let text = "- a\n     \n  cmd\n";
        assert_eq!(unit_width(text), 2);
    }

    #[test]
    fn test_source_lines_skip_blanks_and_keep_numbers() {
        let text = "- a\n\n  \n  cmd\r\n";
        let lines: Vec<_> = source_lines(text).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].number, 4);
        assert_eq!(lines[1].indent, 2);
        assert_eq!(lines[1].content, "cmd");
    }

    #[test]
    fn test_level_of_exact_multiple() {
        let indentation = Indentation::with_unit(2);
        let line = SourceLine {
            number: 1,
            indent: 4,
            content: "- x",
        };
        assert_eq!(indentation.level_of(&line), Ok(2));
    }

    #[test]
    fn test_level_of_rejects_misaligned() {
        let indentation = Indentation::with_unit(2);
        let line = SourceLine {
            number: 7,
            indent: 3,
            content: "- x",
        };
        assert_eq!(
            indentation.level_of(&line),
            Err(ParseErrorKind::Indentation { width: 3, unit: 2 })
        );
    }

    #[test]
    fn test_tabs_count_as_one() {
        let text = "> a\n\t- b\n\t\t- c\n";
        assert_eq!(unit_width(text), 1);
        let levels: Vec<_> = source_lines(text)
            .map(|l| Indentation::detect(text).level_of(&l).unwrap())
            .collect();
        assert_eq!(levels, vec![0, 1, 2]);
    }
}
