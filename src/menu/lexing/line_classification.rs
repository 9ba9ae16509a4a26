//! Line Classification
//!
//! Determines the shape of a trimmed line. Classification follows this specific order
//! (important for correctness, `--- x` is a section and not an entry titled `-- x`):
//! 1. Entry lines (`- title`, `- [ ] title`, `- [x] title`)
//! 2. Separator lines (three or more dashes, optional section label)
//! 3. Submenu headers (`> title`)
//! 4. Icon attributes (`icon: name`)
//! 5. Anything else is a command attribute
//!
//! Whether a shape is legal where it appears is the parser's business, not ours.

use once_cell::sync::Lazy;
use regex::Regex;

static ENTRY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- (?:\[(?P<checkbox> |x)\] )?(?P<title>.*)$").unwrap());

static SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^---+(?:\s+(?P<section>.+))?$").unwrap());

static SUBMENU_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^> (?P<title>.+)$").unwrap());

static ICON_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^icon: (?P<icon>\S+)$").unwrap());

/// Checkbox marker of an entry line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkbox {
    /// `[ ]`
    Unchecked,
    /// `[x]`
    Checked,
}

impl Checkbox {
    pub fn is_checked(self) -> bool {
        self == Checkbox::Checked
    }
}

/// A classified line with its captured fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape<'a> {
    Entry {
        title: &'a str,
        checkbox: Option<Checkbox>,
    },
    Separator {
        section: Option<&'a str>,
    },
    Submenu {
        title: &'a str,
    },
    Icon {
        icon: &'a str,
    },
    Command {
        command: &'a str,
    },
}

/// The shape tag alone, as used by the parser automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Entry,
    Separator,
    Submenu,
    Icon,
    Command,
}

impl LineShape<'_> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            LineShape::Entry { .. } => ShapeKind::Entry,
            LineShape::Separator { .. } => ShapeKind::Separator,
            LineShape::Submenu { .. } => ShapeKind::Submenu,
            LineShape::Icon { .. } => ShapeKind::Icon,
            LineShape::Command { .. } => ShapeKind::Command,
        }
    }
}

impl ShapeKind {
    /// Attribute lines decorate a node instead of creating one.
    pub fn is_attribute(self) -> bool {
        matches!(self, ShapeKind::Icon | ShapeKind::Command)
    }
}

/// Classify a trimmed, non-empty line.
pub fn classify_line(line: &str) -> LineShape<'_> {
    if let Some(caps) = ENTRY_REGEX.captures(line) {
        let checkbox = caps.name("checkbox").map(|m| match m.as_str() {
            "x" => Checkbox::Checked,
            _ => Checkbox::Unchecked,
        });
        let title = caps.name("title").map_or("", |m| m.as_str());
        return LineShape::Entry { title, checkbox };
    }

    if let Some(caps) = SEPARATOR_REGEX.captures(line) {
        return LineShape::Separator {
            section: caps.name("section").map(|m| m.as_str()),
        };
    }

    if let Some(caps) = SUBMENU_REGEX.captures(line) {
        if let Some(title) = caps.name("title") {
            return LineShape::Submenu {
                title: title.as_str(),
            };
        }
    }

    if let Some(caps) = ICON_REGEX.captures(line) {
        if let Some(icon) = caps.name("icon") {
            return LineShape::Icon {
                icon: icon.as_str(),
            };
        }
    }

    LineShape::Command { command: line }
}
