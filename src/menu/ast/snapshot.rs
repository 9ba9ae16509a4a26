//! Menu Snapshot - a normalized, serializable view of a menu tree
//!
//! Serializers (treeviz, json, yaml) consume a [`MenuSnapshot`] rather than walking the arena
//! themselves. Attributes are kept in a sorted map so every output is deterministic.

use super::{Entry, Menu, MenuItem, MenuTree, Separator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of a menu node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSnapshot {
    /// "Menu", "Submenu", "Entry", "Separator" or "Section"
    pub node_type: String,

    /// Title of a menu or entry, label of a section
    pub label: String,

    /// Node specific attributes (command, icon, enabled, ...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuSnapshot>,
}

impl MenuSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    fn with_optional(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with_attribute(key, value),
            None => self,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Snapshot the whole tree, starting at the root menu.
pub fn snapshot_from_tree(tree: &MenuTree) -> MenuSnapshot {
    snapshot_menu(tree, tree.root(), "Menu")
}

fn snapshot_menu(tree: &MenuTree, menu: &Menu, node_type: &str) -> MenuSnapshot {
    let mut snapshot = MenuSnapshot::new(node_type, menu.title.clone().unwrap_or_default())
        .with_optional("icon", menu.icon.as_deref());
    snapshot.children = menu
        .items
        .iter()
        .filter_map(|item| match item {
            MenuItem::Entry(entry) => Some(snapshot_entry(entry)),
            MenuItem::Separator(separator) => Some(snapshot_separator(separator)),
            MenuItem::Submenu(id) => tree
                .menu(*id)
                .map(|submenu| snapshot_menu(tree, submenu, "Submenu")),
        })
        .collect();
    snapshot
}

fn snapshot_entry(entry: &Entry) -> MenuSnapshot {
    let mut snapshot = MenuSnapshot::new("Entry", entry.title.clone())
        .with_attribute("enabled", entry.enabled.to_string())
        .with_optional("command", entry.command.as_deref())
        .with_optional("icon", entry.icon.as_deref());
    if entry.checkable {
        snapshot = snapshot.with_attribute("checked", entry.checked.to_string());
    }
    snapshot
}

fn snapshot_separator(separator: &Separator) -> MenuSnapshot {
    match &separator.label {
        Some(label) => MenuSnapshot::new("Section", label.clone()),
        None => MenuSnapshot::new("Separator", ""),
    }
}
