//! Tray host
//!
//! Everything around the parser that a tray application needs:
//!
//! - [`source`]: where the description comes from (a file, or a command's output).
//! - [`assemble`]: building the menu actually shown, falling back to an error menu when the
//!   description does not parse, and always ending with a Quit entry.
//! - [`activation`]: what happens when an entry is clicked.
//! - [`icons`]: finding icon files in XDG data directories.
//!
//! Reading the description happens strictly before parsing and running a command strictly
//! after, so the parser itself never does I/O.

pub mod activation;
pub mod assemble;
pub mod icons;
pub mod source;

pub use activation::{activate, reap, Activation, ActivationError, ShellLauncher};
pub use assemble::{assemble_menu, TrayMenu};
pub use icons::IconResolver;
pub use source::{DescriptionSource, SourceError};
