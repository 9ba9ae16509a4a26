//! Menu tree
//!
//!     The in-memory menu produced by the parser. Menus (the root and every submenu) live in
//!     an arena and are addressed by [`MenuId`]; a submenu appears in its parent's item list
//!     as [`MenuItem::Submenu`] holding that id. Entries are addressed by [`EntryId`], the
//!     owning menu plus the item position.
//!
//!     Ids are stable for the lifetime of a tree: items are only ever appended.

pub mod snapshot;

pub use snapshot::{snapshot_from_tree, MenuSnapshot};

/// Index of a menu in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(usize);

impl MenuId {
    /// The root menu, present in every tree.
    pub const ROOT: MenuId = MenuId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Address of an entry: the menu holding it and its position in that menu.
///
/// Only a [`MenuTree`] hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId {
    menu: MenuId,
    position: usize,
}

impl EntryId {
    pub fn menu(self) -> MenuId {
        self.menu
    }

    pub fn position(self) -> usize {
        self.position
    }
}

/// A leaf menu item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    pub title: String,
    /// Entries start disabled; attaching a command enables them.
    pub enabled: bool,
    pub checkable: bool,
    /// Only meaningful when `checkable` is set.
    pub checked: bool,
    pub command: Option<String>,
    pub icon: Option<String>,
}

impl Entry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// An entry without a command is a label: it can be shown but never triggered.
    pub fn is_label(&self) -> bool {
        self.command.is_none()
    }
}

/// A divider. With a label it is a section header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Separator {
    pub label: Option<String>,
}

impl Separator {
    pub fn is_section(&self) -> bool {
        self.label.is_some()
    }
}

/// One item of a menu, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Entry(Entry),
    Separator(Separator),
    Submenu(MenuId),
}

impl MenuItem {
    pub fn node_type(&self) -> &'static str {
        match self {
            MenuItem::Entry(_) => "Entry",
            MenuItem::Separator(s) if s.is_section() => "Section",
            MenuItem::Separator(_) => "Separator",
            MenuItem::Submenu(_) => "Submenu",
        }
    }

    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            MenuItem::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

/// A container of items: the root menu or a submenu.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Menu {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub items: Vec<MenuItem>,
    parent: Option<MenuId>,
}

impl Menu {
    pub fn parent(&self) -> Option<MenuId> {
        self.parent
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.items.iter().filter_map(MenuItem::as_entry)
    }
}

/// A whole menu, root included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    menus: Vec<Menu>,
}

impl Default for MenuTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuTree {
    /// Create a tree holding only an empty, untitled root.
    pub fn new() -> Self {
        MenuTree {
            menus: vec![Menu::default()],
        }
    }

    /// Create a tree whose root carries a title (the tray tooltip, for instance).
    pub fn with_title(title: impl Into<String>) -> Self {
        let mut tree = Self::new();
        tree.menus[0].title = Some(title.into());
        tree
    }

    pub fn root(&self) -> &Menu {
        &self.menus[MenuId::ROOT.0]
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu> {
        self.menus.get(id.0)
    }

    pub fn menu_mut(&mut self, id: MenuId) -> Option<&mut Menu> {
        self.menus.get_mut(id.0)
    }

    /// Number of menus in the arena, root included.
    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }

    /// Append an entry to `menu`. Returns `None` if the menu does not exist.
    pub fn push_entry(&mut self, menu: MenuId, entry: Entry) -> Option<EntryId> {
        self.menu(menu)?;
        Some(self.append_entry(menu, entry))
    }

    pub fn push_separator(&mut self, menu: MenuId, separator: Separator) -> bool {
        match self.menus.get_mut(menu.0) {
            Some(target) => {
                target.items.push(MenuItem::Separator(separator));
                true
            }
            None => false,
        }
    }

    /// Create a submenu and append it to `parent`.
    pub fn push_submenu(&mut self, parent: MenuId, title: impl Into<String>) -> Option<MenuId> {
        self.menu(parent)?;
        Some(self.append_submenu(parent, title))
    }

    /// Menu ids are only minted by a tree, so an unknown id was taken from another tree.
    /// Debug builds panic on it; release builds use the root.
    fn owned(&self, id: MenuId) -> MenuId {
        debug_assert!(
            id.0 < self.menus.len(),
            "{:?} belongs to another tree",
            id
        );
        if id.0 < self.menus.len() {
            id
        } else {
            MenuId::ROOT
        }
    }

    /// Append an entry and return the id it really got.
    pub(crate) fn append_entry(&mut self, menu: MenuId, entry: Entry) -> EntryId {
        let menu = self.owned(menu);
        let items = &mut self.menus[menu.0].items;
        items.push(MenuItem::Entry(entry));
        EntryId {
            menu,
            position: items.len() - 1,
        }
    }

    pub(crate) fn append_submenu(&mut self, parent: MenuId, title: impl Into<String>) -> MenuId {
        let parent = self.owned(parent);
        let id = MenuId(self.menus.len());
        self.menus.push(Menu {
            title: Some(title.into()),
            parent: Some(parent),
            ..Menu::default()
        });
        self.menus[parent.0].items.push(MenuItem::Submenu(id));
        id
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.menu(id.menu)?.items.get(id.position)?.as_entry()
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        match self.menu_mut(id.menu)?.items.get_mut(id.position)? {
            MenuItem::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    /// Nesting depth of a menu: 0 for the root.
    pub fn depth(&self, id: MenuId) -> usize {
        let mut depth = 0;
        let mut current = self.menu(id).and_then(Menu::parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.menu(parent).and_then(Menu::parent);
        }
        depth
    }

    /// Resolve a submenu by the titles leading to it from the root.
    ///
    /// An empty path is the root itself.
    pub fn find_submenu(&self, path: &[&str]) -> Option<MenuId> {
        let mut current = MenuId::ROOT;
        for title in path {
            current = self
                .menu(current)?
                .items
                .iter()
                .find_map(|item| match item {
                    MenuItem::Submenu(id)
                        if self.menu(*id).and_then(|m| m.title.as_deref()) == Some(*title) =>
                    {
                        Some(*id)
                    }
                    _ => None,
                })?;
        }
        Some(current)
    }

    /// Resolve an entry by submenu titles followed by the entry title.
    ///
    /// When several entries share a title the first one wins.
    pub fn find_entry_id(&self, path: &[&str]) -> Option<EntryId> {
        let (title, menus) = path.split_last()?;
        let menu = self.find_submenu(menus)?;
        let position = self
            .menu(menu)?
            .items
            .iter()
            .position(|item| matches!(item, MenuItem::Entry(e) if e.title == *title))?;
        Some(EntryId { menu, position })
    }

    pub fn find_entry(&self, path: &[&str]) -> Option<&Entry> {
        self.entry(self.find_entry_id(path)?)
    }

    /// All menus with their ids, in creation order.
    pub fn menus(&self) -> impl Iterator<Item = (MenuId, &Menu)> {
        self.menus.iter().enumerate().map(|(i, m)| (MenuId(i), m))
    }

    /// Every icon name used by the tree, menus first, in creation order.
    pub fn icons(&self) -> Vec<&str> {
        let menu_icons = self.menus.iter().filter_map(|m| m.icon.as_deref());
        let entry_icons = self
            .menus
            .iter()
            .flat_map(|m| m.entries())
            .filter_map(|e| e.icon.as_deref());
        menu_icons.chain(entry_icons).collect()
    }
}
