//! Testing utilities for menu trees
//!
//! Tests should assert on the tree, not on formatted output: formats change, the tree shape
//! is the contract. The fluent API below walks a [`MenuTree`] and panics with the path of the
//! failing node.
//!
//! ```rust,ignore
//! let tree = parse_menu(source)?;
//! assert_menu(&tree)
//!     .item_count(2)
//!     .item(0, |item| {
//!         item.assert_entry().title("Open").enabled(true).command(Some("xdg-open ."));
//!     })
//!     .item(1, |item| {
//!         item.assert_submenu().title("More").item_count(1);
//!     });
//! ```

mod assertions;

pub use assertions::{EntryAssertion, ItemAssertion, MenuAssertion, SeparatorAssertion};

use crate::menu::ast::{MenuId, MenuTree};

/// Create an assertion builder for the root menu of a tree
pub fn assert_menu(tree: &MenuTree) -> MenuAssertion<'_> {
    MenuAssertion::new(tree, MenuId::ROOT, "root".to_string())
}
