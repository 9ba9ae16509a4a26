//! Assertion builders for menus, items, entries and separators

use crate::menu::ast::{Entry, Menu, MenuId, MenuItem, MenuTree, Separator};

// ============================================================================
// Menu Assertions
// ============================================================================

pub struct MenuAssertion<'a> {
    tree: &'a MenuTree,
    menu: &'a Menu,
    context: String,
}

impl<'a> MenuAssertion<'a> {
    pub(crate) fn new(tree: &'a MenuTree, id: MenuId, context: String) -> Self {
        let menu = tree
            .menu(id)
            .unwrap_or_else(|| panic!("{}: menu {:?} is not in the tree", context, id));
        Self {
            tree,
            menu,
            context,
        }
    }

    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.menu.title.as_deref(),
            Some(expected),
            "{}: Expected menu title to be '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn icon(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.menu.icon.as_deref(),
            expected,
            "{}: Expected menu icon {:?}",
            self.context,
            expected
        );
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.menu.items.len(),
            expected,
            "{}: Expected {} items, found {}",
            self.context,
            expected,
            self.menu.items.len()
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>),
    {
        let item = self.menu.items.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Item index {} out of bounds (menu has {} items)",
                self.context,
                index,
                self.menu.items.len()
            )
        });
        assertion(ItemAssertion {
            tree: self.tree,
            item,
            context: format!("{}:items[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Item Assertions
// ============================================================================

pub struct ItemAssertion<'a> {
    tree: &'a MenuTree,
    item: &'a MenuItem,
    context: String,
}

impl<'a> ItemAssertion<'a> {
    /// Assert this item is an Entry and return entry-specific assertions
    pub fn assert_entry(self) -> EntryAssertion<'a> {
        match self.item {
            MenuItem::Entry(entry) => EntryAssertion {
                entry,
                context: self.context,
            },
            _ => panic!(
                "{}: Expected Entry, found {}",
                self.context,
                self.item.node_type()
            ),
        }
    }

    /// Assert this item is a Separator or Section
    pub fn assert_separator(self) -> SeparatorAssertion<'a> {
        match self.item {
            MenuItem::Separator(separator) => SeparatorAssertion {
                separator,
                context: self.context,
            },
            _ => panic!(
                "{}: Expected Separator, found {}",
                self.context,
                self.item.node_type()
            ),
        }
    }

    /// Assert this item is a Submenu and continue with menu assertions on it
    pub fn assert_submenu(self) -> MenuAssertion<'a> {
        match self.item {
            MenuItem::Submenu(id) => MenuAssertion::new(self.tree, *id, self.context),
            _ => panic!(
                "{}: Expected Submenu, found {}",
                self.context,
                self.item.node_type()
            ),
        }
    }
}

// ============================================================================
// Entry Assertions
// ============================================================================

pub struct EntryAssertion<'a> {
    entry: &'a Entry,
    context: String,
}

impl EntryAssertion<'_> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.entry.title, expected,
            "{}: Expected entry title to be '{}'",
            self.context, expected
        );
        self
    }

    pub fn enabled(self, expected: bool) -> Self {
        assert_eq!(
            self.entry.enabled, expected,
            "{}: Expected entry '{}' enabled={}",
            self.context, self.entry.title, expected
        );
        self
    }

    pub fn checkable(self, expected: bool) -> Self {
        assert_eq!(
            self.entry.checkable, expected,
            "{}: Expected entry '{}' checkable={}",
            self.context, self.entry.title, expected
        );
        self
    }

    pub fn checked(self, expected: bool) -> Self {
        assert!(
            self.entry.checkable,
            "{}: Entry '{}' is not checkable",
            self.context, self.entry.title
        );
        assert_eq!(
            self.entry.checked, expected,
            "{}: Expected entry '{}' checked={}",
            self.context, self.entry.title, expected
        );
        self
    }

    pub fn command(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.entry.command.as_deref(),
            expected,
            "{}: Expected entry '{}' command {:?}",
            self.context,
            self.entry.title,
            expected
        );
        self
    }

    pub fn icon(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.entry.icon.as_deref(),
            expected,
            "{}: Expected entry '{}' icon {:?}",
            self.context,
            self.entry.title,
            expected
        );
        self
    }
}

// ============================================================================
// Separator Assertions
// ============================================================================

pub struct SeparatorAssertion<'a> {
    separator: &'a Separator,
    context: String,
}

impl SeparatorAssertion<'_> {
    /// `None` for a plain separator, `Some(label)` for a section
    pub fn label(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.separator.label.as_deref(),
            expected,
            "{}: Expected separator label {:?}",
            self.context,
            expected
        );
        self
    }
}
