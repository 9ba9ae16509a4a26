//! Builder capability
//!
//!     The parser never creates widgets itself. It drives a [`MenuBuilder`], the small set of
//!     operations any menu toolkit offers: add an action, make it checkable, give it a command,
//!     add separators and sections, open a nested menu, set icons.
//!
//!     [`MenuTree`] is the in-memory implementation. A native tray backend implements the same
//!     trait over its own handles.

use super::ast::{Entry, EntryId, MenuId, MenuTree, Separator};

/// Operations the parser needs from its host.
///
/// Handles are cheap to clone: the parser keeps the open containers on a stack and remembers
/// the last action so trailing attribute lines can decorate it.
pub trait MenuBuilder {
    /// Handle to a menu (the root or a submenu).
    type Container: Clone;
    /// Handle to an action (an entry).
    type Action: Clone;

    /// Append a labeled action to `parent`.
    fn add_action(&mut self, parent: &Self::Container, title: &str) -> Self::Action;

    fn set_enabled(&mut self, action: &Self::Action, enabled: bool);

    /// Make the action checkable with the given initial state.
    fn set_checkable(&mut self, action: &Self::Action, checked: bool);

    /// Attach the command run when the action is triggered.
    fn set_command(&mut self, action: &Self::Action, command: &str);

    fn set_action_icon(&mut self, action: &Self::Action, icon: &str);

    fn add_separator(&mut self, parent: &Self::Container);

    /// Append a labeled section break.
    fn add_section(&mut self, parent: &Self::Container, label: &str);

    /// Append a nested menu to `parent` and return it.
    fn add_menu(&mut self, parent: &Self::Container, title: &str) -> Self::Container;

    fn set_menu_icon(&mut self, menu: &Self::Container, icon: &str);
}

/// Handles must come from the same tree. A handle from another tree panics in debug builds.
impl MenuBuilder for MenuTree {
    type Container = MenuId;
    type Action = EntryId;

    fn add_action(&mut self, parent: &MenuId, title: &str) -> EntryId {
        self.append_entry(*parent, Entry::new(title))
    }

    fn set_enabled(&mut self, action: &EntryId, enabled: bool) {
        if let Some(entry) = self.entry_mut(*action) {
            entry.enabled = enabled;
        }
    }

    fn set_checkable(&mut self, action: &EntryId, checked: bool) {
        if let Some(entry) = self.entry_mut(*action) {
            entry.checkable = true;
            entry.checked = checked;
        }
    }

    fn set_command(&mut self, action: &EntryId, command: &str) {
        if let Some(entry) = self.entry_mut(*action) {
            entry.command = Some(command.to_string());
        }
    }

    fn set_action_icon(&mut self, action: &EntryId, icon: &str) {
        if let Some(entry) = self.entry_mut(*action) {
            entry.icon = Some(icon.to_string());
        }
    }

    fn add_separator(&mut self, parent: &MenuId) {
        self.push_separator(*parent, Separator::default());
    }

    fn add_section(&mut self, parent: &MenuId, label: &str) {
        self.push_separator(
            *parent,
            Separator {
                label: Some(label.to_string()),
            },
        );
    }

    fn add_menu(&mut self, parent: &MenuId, title: &str) -> MenuId {
        self.append_submenu(*parent, title)
    }

    fn set_menu_icon(&mut self, menu: &MenuId, icon: &str) {
        if let Some(menu) = self.menu_mut(*menu) {
            menu.icon = Some(icon.to_string());
        }
    }
}
