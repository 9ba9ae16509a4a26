//! Host menu assembly
//!
//! Builds the menu the tray shows from a description. Every assembly parses into a fresh
//! tree, so a menu still displayed is never touched; the caller swaps the new one in.
//!
//! A broken description does not take the tray down: the menu then holds a disabled entry
//! with the error message instead of the parsed items. Both variants end with a separator
//! and an enabled `Quit` entry.

use crate::menu::ast::{EntryId, MenuId, MenuTree};
use crate::menu::builder::MenuBuilder;
use crate::menu::parsing::{parse_into, ParseError};
use tracing::{debug, warn};

/// Label of the entry closing the tray
pub const QUIT_LABEL: &str = "Quit";

/// A menu ready to be installed in the tray.
#[derive(Debug, Clone)]
pub struct TrayMenu {
    pub tree: MenuTree,
    /// The trailing Quit entry.
    pub quit: EntryId,
    /// Why the description was replaced by the error menu, if it was.
    pub error: Option<ParseError>,
}

impl TrayMenu {
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Parse `text` into a new tray menu titled `title`.
pub fn assemble_menu(text: &str, title: &str, icon: Option<&str>) -> TrayMenu {
    let fresh = || {
        let mut tree = MenuTree::with_title(title);
        if let Some(icon) = icon {
            tree.set_menu_icon(&MenuId::ROOT, icon);
        }
        tree
    };

    let mut tree = fresh();
    let error = match parse_into(text, &mut tree, MenuId::ROOT) {
        Ok(()) => {
            debug!(items = tree.root().items.len(), "assembled tray menu");
            None
        }
        Err(error) => {
            warn!(%error, "cannot parse the menu description, showing the error menu");
            tree = fresh();
            let entry = tree.add_action(
                &MenuId::ROOT,
                &format!("menutray cannot parse the menu: {}", error),
            );
            tree.set_enabled(&entry, false);
            Some(error)
        }
    };

    tree.add_separator(&MenuId::ROOT);
    let quit = tree.add_action(&MenuId::ROOT, QUIT_LABEL);
    tree.set_enabled(&quit, true);

    TrayMenu { tree, quit, error }
}
