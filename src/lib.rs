//! # menutray
//!
//! A tray menu built from a small, human-writable text description.
//!
//! The library is split in two:
//!
//! - [`menu`] turns a description into a typed menu tree. It knows nothing about widgets,
//!   processes or icon themes: it drives an abstract [`menu::builder::MenuBuilder`].
//! - [`tray`] is the host side: where descriptions come from, the fallback menu shown when a
//!   description is broken, running an entry's command, and finding icons on disk.
//!
//! A description looks like this:
//!
//!     - Open
//!       xdg-open .
//!     --- Tools
//!     > More
//!       icon: folder
//!       - [x] Verbose
//!         notify-send verbose
//!
//! For testing guidelines, see the [testing module](menu::testing).

pub mod config;
pub mod menu;
pub mod tray;

pub use menu::{parse_menu, MenuTree, ParseError, ParseErrorKind};
