//! Parser automaton
//!
//!     Which line shapes may follow which. The automaton state records the effect of the
//!     previous line: attribute lines (icon, command) are only legal right after an entry or a
//!     submenu header, possibly after other attribute lines.
//!
//!     The table is data: [`TRANSITIONS`] lists every legal (state, shape) pair and the state it
//!     leads to. Anything absent is rejected by the parser.

use crate::menu::lexing::ShapeKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserState {
    /// Nothing parsed yet.
    Start,
    /// Right after an entry line.
    Entry,
    /// After an attribute line of an entry.
    TextAttrs,
    /// Right after a submenu header.
    Submenu,
    /// After the icon line of a submenu header.
    SubmenuAttrs,
    /// After a separator or section line.
    Separator,
}

impl ParserState {
    pub const ALL: [ParserState; 6] = [
        ParserState::Start,
        ParserState::Entry,
        ParserState::TextAttrs,
        ParserState::Submenu,
        ParserState::SubmenuAttrs,
        ParserState::Separator,
    ];

    /// The state reached by consuming a line of shape `kind`, if legal.
    pub fn transition(self, kind: ShapeKind) -> Option<ParserState> {
        TRANSITIONS
            .iter()
            .find(|(from, shape, _)| *from == self && *shape == kind)
            .map(|(_, _, to)| *to)
    }
}

impl fmt::Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParserState::Start => "start of menu",
            ParserState::Entry => "entry",
            ParserState::TextAttrs => "entry attributes",
            ParserState::Submenu => "submenu header",
            ParserState::SubmenuAttrs => "submenu attributes",
            ParserState::Separator => "separator",
        };
        write!(f, "{}", name)
    }
}

use ParserState as S;
use ShapeKind as K;

/// Every legal transition: (current state, line shape, next state)
pub const TRANSITIONS: &[(ParserState, ShapeKind, ParserState)] = &[
    (S::Start, K::Entry, S::Entry),
    (S::Start, K::Separator, S::Separator),
    (S::Start, K::Submenu, S::Submenu),
    //
    (S::Entry, K::Entry, S::Entry),
    (S::Entry, K::Separator, S::Separator),
    (S::Entry, K::Submenu, S::Submenu),
    (S::Entry, K::Icon, S::TextAttrs),
    (S::Entry, K::Command, S::TextAttrs),
    //
    (S::TextAttrs, K::Entry, S::Entry),
    (S::TextAttrs, K::Separator, S::Separator),
    (S::TextAttrs, K::Submenu, S::Submenu),
    (S::TextAttrs, K::Icon, S::TextAttrs),
    (S::TextAttrs, K::Command, S::TextAttrs),
    //
    (S::Submenu, K::Icon, S::SubmenuAttrs),
    (S::Submenu, K::Entry, S::Entry),
    (S::Submenu, K::Separator, S::Separator),
    (S::Submenu, K::Submenu, S::Submenu),
    //
    (S::SubmenuAttrs, K::Entry, S::Entry),
    (S::SubmenuAttrs, K::Separator, S::Separator),
    (S::SubmenuAttrs, K::Submenu, S::Submenu),
    // Attributes after a separator reach the builder, which rejects them for lack of a target
    (S::Separator, K::Entry, S::Entry),
    (S::Separator, K::Separator, S::Separator),
    (S::Separator, K::Submenu, S::Submenu),
    (S::Separator, K::Icon, S::TextAttrs),
    (S::Separator, K::Command, S::TextAttrs),
];
