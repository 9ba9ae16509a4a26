//! Menu description parsing and the menu tree it produces.
//!
//! File Layout
//!
//! src/menu
//!   ├── ast        The menu tree (arena of containers) and its snapshot form
//!   ├── builder    The builder capability the parser drives
//!   ├── lexing     Indentation tracking and line classification
//!   ├── parsing    State machine, container stack and the parser itself
//!   ├── formats    Serializers for menu trees (treeviz, json, yaml)
//!   └── testing    Fluent assertions used by the test suites
//!
//! The pipeline is line oriented: every non-blank line gets a nesting level from the
//! [`lexing::Indentation`] tracker and a [`lexing::LineShape`] from the classifier. The
//! [`parsing::ParserState`] automaton decides if that shape is legal after the previous line,
//! and the parser then mutates its container stack and calls into the builder.

pub mod ast;
pub mod builder;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;

pub use ast::{Entry, EntryId, Menu, MenuId, MenuItem, MenuTree, Separator};
pub use builder::MenuBuilder;
pub use parsing::{parse_into, parse_menu, ParseError, ParseErrorKind, ParserState};
