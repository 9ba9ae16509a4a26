//! Treeviz formatter for menu trees
//!
//! One line per node, nesting drawn with box connectors, 2 columns per level. Meant for
//! quickly eyeballing what a description turns into.
//!
//! Example:
//!
//!     ☰ MenuTray
//!     ├─ • Open $ xdg-open .
//!     ├─ ┄
//!     ├─ § Tools
//!     └─ ▸ More [icon: folder]
//!       └─ ☑ Verbose $ notify-send verbose
//!
//! Icons
//!     Menu: ☰
//!     Submenu: ▸
//!     Entry: •
//!     Checkable entry: ☐ (unchecked) ☑ (checked)
//!     Separator: ┄
//!     Section: §
//!
//! After the label: `[icon: name]`, then `$ command`, then `(disabled)` for disabled entries.

use super::registry::{FormatError, Formatter, RenderOptions};
use crate::menu::ast::{snapshot_from_tree, MenuSnapshot, MenuTree};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a snapshot node
fn get_icon(snapshot: &MenuSnapshot) -> &'static str {
    match snapshot.node_type.as_str() {
        "Menu" => "☰",
        "Submenu" => "▸",
        "Entry" => match snapshot.attribute("checked") {
            Some("true") => "☑",
            Some(_) => "☐",
            None => "•",
        },
        "Separator" => "┄",
        "Section" => "§",
        _ => "○",
    }
}

fn format_node(snapshot: &MenuSnapshot, width: usize) -> String {
    let mut line = get_icon(snapshot).to_string();
    if !snapshot.label.is_empty() {
        line.push(' ');
        line.push_str(&truncate(&snapshot.label, width));
    }
    if let Some(icon) = snapshot.attribute("icon") {
        line.push_str(&format!(" [icon: {}]", icon));
    }
    if let Some(command) = snapshot.attribute("command") {
        line.push_str(&format!(" $ {}", command));
    }
    if snapshot.attribute("enabled") == Some("false") {
        line.push_str(" (disabled)");
    }
    line
}

fn format_snapshot(
    snapshot: &MenuSnapshot,
    prefix: &str,
    is_last: bool,
    width: usize,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {}\n",
        prefix,
        connector,
        format_node(snapshot, width)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(snapshot, &child_prefix, width, output);
}

fn format_children(snapshot: &MenuSnapshot, prefix: &str, width: usize, output: &mut String) {
    let count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, prefix, i + 1 == count, width, output);
    }
}

/// Render a tree with the default label width
pub fn to_treeviz_str(tree: &MenuTree) -> String {
    render_snapshot(&snapshot_from_tree(tree), RenderOptions::default().width)
}

fn render_snapshot(snapshot: &MenuSnapshot, width: usize) -> String {
    let label = if snapshot.label.is_empty() {
        "menu"
    } else {
        &snapshot.label
    };
    let root = MenuSnapshot {
        label: label.to_string(),
        children: Vec::new(),
        ..snapshot.clone()
    };
    let mut output = format!("{}\n", format_node(&root, width));
    format_children(snapshot, "", width, &mut output);
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &'static str {
        "treeviz"
    }

    fn description(&self) -> &'static str {
        "Visual tree representation with box connectors and Unicode icons"
    }

    fn render(&self, menu: &MenuSnapshot, options: &RenderOptions) -> Result<String, FormatError> {
        Ok(render_snapshot(menu, options.width))
    }
}
