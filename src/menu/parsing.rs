//! Parsing
//!
//!     One pass over the description, one line at a time:
//!
//!     1. The line gets its nesting level ([`crate::menu::lexing::Indentation`]).
//!     2. The line gets its shape ([`crate::menu::lexing::classify_line`]).
//!     3. The automaton checks the shape may follow the previous line ([`ParserState`]).
//!     4. The parser aligns its [`ContainerStack`] and calls the builder.
//!
//!     The first error stops the parse. Nothing is recovered: falling back to some other menu
//!     is the caller's decision.

pub mod error;
pub mod parser;
pub mod stack;
pub mod state_machine;

pub use error::{AttributeKind, ParseError, ParseErrorKind};
pub use parser::{parse_into, parse_menu, MenuParser};
pub use stack::ContainerStack;
pub use state_machine::{ParserState, TRANSITIONS};
