//! Menu description parser
//!
//!     Drives a [`MenuBuilder`] from a description. State owned by one run:
//!
//!     - the indentation unit of the document,
//!     - the automaton state (effect of the previous line),
//!     - the stack of open containers,
//!     - the attribute target: the last entry created at the current level, which trailing
//!       `icon:` and command lines decorate.
//!
//!     The attribute target is cleared by separators, submenu headers and any dedent, so an
//!     attribute line can never land on a node it was not written under.

use super::error::{AttributeKind, ParseError, ParseErrorKind};
use super::stack::ContainerStack;
use super::state_machine::ParserState;
use crate::menu::ast::{MenuId, MenuTree};
use crate::menu::builder::MenuBuilder;
use crate::menu::lexing::{classify_line, source_lines, Checkbox, Indentation, LineShape};
use crate::menu::lexing::{ShapeKind, SourceLine};
use tracing::{debug, trace};

/// Parse a description into a fresh [`MenuTree`].
pub fn parse_menu(text: &str) -> Result<MenuTree, ParseError> {
    let mut tree = MenuTree::new();
    parse_into(text, &mut tree, MenuId::ROOT)?;
    Ok(tree)
}

/// Parse a description into `root`, a container of any builder.
///
/// On error the builder may hold a partially built menu; callers wanting all-or-nothing
/// should build into a fresh container.
pub fn parse_into<B: MenuBuilder>(
    text: &str,
    builder: &mut B,
    root: B::Container,
) -> Result<(), ParseError> {
    MenuParser::new(builder, root, Indentation::detect(text)).run(text)
}

pub struct MenuParser<'b, B: MenuBuilder> {
    builder: &'b mut B,
    stack: ContainerStack<B::Container>,
    target: Option<B::Action>,
    state: ParserState,
    indentation: Indentation,
}

impl<'b, B: MenuBuilder> MenuParser<'b, B> {
    pub fn new(builder: &'b mut B, root: B::Container, indentation: Indentation) -> Self {
        Self {
            builder,
            stack: ContainerStack::new(root),
            target: None,
            state: ParserState::Start,
            indentation,
        }
    }

    /// Consume every line of `text`, stopping at the first error.
    pub fn run(mut self, text: &str) -> Result<(), ParseError> {
        let mut count = 0;
        for line in source_lines(text) {
            self.consume(&line)
                .map_err(|kind| ParseError::new(line.number, line.content, kind))?;
            count += 1;
        }
        debug!(
            lines = count,
            unit = self.indentation.unit(),
            "parsed menu description"
        );
        Ok(())
    }

    fn consume(&mut self, line: &SourceLine<'_>) -> Result<(), ParseErrorKind> {
        let level = self.indentation.level_of(line)?;
        let shape = classify_line(line.content);
        let kind = shape.kind();
        let next = self
            .state
            .transition(kind)
            .ok_or_else(|| self.rejection(kind))?;
        trace!(
            line = line.number,
            level,
            ?kind,
            from = %self.state,
            to = %next,
            "classified line"
        );

        match shape {
            LineShape::Entry { title, checkbox } => self.add_entry(level, title, checkbox)?,
            LineShape::Separator { section } => self.add_separator(level, section)?,
            LineShape::Submenu { title } => self.open_submenu(level, title)?,
            LineShape::Icon { icon } if next == ParserState::SubmenuAttrs => {
                self.decorate_submenu(level, icon)?
            }
            LineShape::Icon { icon } => {
                let action = self.attribute_target(level, AttributeKind::Icon)?;
                self.builder.set_action_icon(&action, icon);
            }
            LineShape::Command { command } => {
                let action = self.attribute_target(level, AttributeKind::Command)?;
                self.builder.set_command(&action, command);
                self.builder.set_enabled(&action, true);
            }
        }

        self.state = next;
        Ok(())
    }

    /// Error for a shape the automaton does not allow in the current state.
    fn rejection(&self, kind: ShapeKind) -> ParseErrorKind {
        match (self.state, kind) {
            // A submenu has a single icon line
            (ParserState::SubmenuAttrs, ShapeKind::Icon) => ParseErrorKind::UnmatchedLine {
                state: self.state,
            },
            (_, ShapeKind::Icon) => ParseErrorKind::OrphanAttribute {
                attribute: AttributeKind::Icon,
            },
            (_, ShapeKind::Command) => ParseErrorKind::OrphanAttribute {
                attribute: AttributeKind::Command,
            },
            _ => ParseErrorKind::UnmatchedLine { state: self.state },
        }
    }

    /// Align the container stack for a node line; any dedent drops the attribute target.
    fn enter_level(&mut self, level: usize) -> Result<(), ParseErrorKind> {
        if self.stack.align(level)? > 0 {
            self.target = None;
        }
        Ok(())
    }

    fn add_entry(
        &mut self,
        level: usize,
        title: &str,
        checkbox: Option<Checkbox>,
    ) -> Result<(), ParseErrorKind> {
        self.enter_level(level)?;

        let action = self.builder.add_action(self.stack.top(), title);
        self.builder.set_enabled(&action, false);
        if let Some(checkbox) = checkbox {
            self.builder.set_checkable(&action, checkbox.is_checked());
        }
        self.target = Some(action);
        Ok(())
    }

    fn add_separator(&mut self, level: usize, section: Option<&str>) -> Result<(), ParseErrorKind> {
        self.enter_level(level)?;

        self.target = None;
        match section {
            Some(label) => self.builder.add_section(self.stack.top(), label),
            None => self.builder.add_separator(self.stack.top()),
        }
        Ok(())
    }

    fn open_submenu(&mut self, level: usize, title: &str) -> Result<(), ParseErrorKind> {
        self.enter_level(level)?;

        // The submenu's own icon is a separate line, handled by decorate_submenu
        self.target = None;
        let menu = self.builder.add_menu(self.stack.top(), title);
        self.stack.push(menu);
        Ok(())
    }

    /// The entry an attribute line at `level` decorates.
    ///
    /// Attribute lines sit one level under their entry, which is the current stack depth.
    fn attribute_target(
        &self,
        level: usize,
        attribute: AttributeKind,
    ) -> Result<B::Action, ParseErrorKind> {
        let action = self
            .target
            .clone()
            .ok_or(ParseErrorKind::OrphanAttribute { attribute })?;
        let expected = self.stack.depth();
        if level != expected {
            return Err(ParseErrorKind::AttributeIndentation {
                expected,
                found: level,
            });
        }
        Ok(action)
    }

    /// Set the icon of the submenu just opened.
    ///
    /// The icon line sits one level under the header, where the submenu's children go.
    fn decorate_submenu(&mut self, level: usize, icon: &str) -> Result<(), ParseErrorKind> {
        let expected = self.stack.depth() - 1;
        if level != expected {
            return Err(ParseErrorKind::AttributeIndentation {
                expected,
                found: level,
            });
        }
        self.builder.set_menu_icon(self.stack.top(), icon);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::ast::{Entry, MenuItem, Separator};

    /// Records builder calls, to check the parser only talks through the trait.
    #[derive(Default)]
    struct RecordingBuilder {
        calls: Vec<String>,
        menus: usize,
        actions: usize,
    }

    impl MenuBuilder for RecordingBuilder {
        type Container = usize;
        type Action = usize;

        fn add_action(&mut self, parent: &usize, title: &str) -> usize {
            self.actions += 1;
            self.calls
                .push(format!("action {} in {parent}: {title}", self.actions));
            self.actions
        }
        fn set_enabled(&mut self, action: &usize, enabled: bool) {
            self.calls.push(format!("enabled {action}: {enabled}"));
        }
        fn set_checkable(&mut self, action: &usize, checked: bool) {
            self.calls.push(format!("checkable {action}: {checked}"));
        }
        fn set_command(&mut self, action: &usize, command: &str) {
            self.calls.push(format!("command {action}: {command}"));
        }
        fn set_action_icon(&mut self, action: &usize, icon: &str) {
            self.calls.push(format!("icon {action}: {icon}"));
        }
        fn add_separator(&mut self, parent: &usize) {
            self.calls.push(format!("separator in {parent}"));
        }
        fn add_section(&mut self, parent: &usize, label: &str) {
            self.calls.push(format!("section in {parent}: {label}"));
        }
        fn add_menu(&mut self, parent: &usize, title: &str) -> usize {
            self.menus += 1;
            self.calls
                .push(format!("menu {} in {parent}: {title}", self.menus));
            self.menus
        }
        fn set_menu_icon(&mut self, menu: &usize, icon: &str) {
            self.calls.push(format!("menu icon {menu}: {icon}"));
        }
    }

    fn entry(tree: &MenuTree, index: usize) -> &Entry {
        tree.root().items[index].as_entry().unwrap()
    }

    #[test]
    fn test_builder_call_sequence() {
        let text = "- [x] Foo\n  run foo\n--- Tools\n> Sub\n  icon: folder\n  - Bar\n";
        let mut builder = RecordingBuilder::default();

        parse_into(text, &mut builder, 0).unwrap();

        assert_eq!(
            builder.calls,
            vec![
                "action 1 in 0: Foo",
                "enabled 1: false",
                "checkable 1: true",
                "command 1: run foo",
                "enabled 1: true",
                "section in 0: Tools",
                "menu 1 in 0: Sub",
                "menu icon 1: folder",
                "action 2 in 1: Bar",
                "enabled 2: false",
            ]
        );
    }

    #[test]
    fn test_checked_entry_with_command() {
        let tree = parse_menu("- [x] Foo\n  echo foo\n").unwrap();
        let foo = entry(&tree, 0);

        assert!(foo.checkable);
        assert!(foo.checked);
        assert!(foo.enabled);
        assert_eq!(foo.command.as_deref(), Some("echo foo"));
    }

    #[test]
    fn test_entry_without_command_stays_disabled() {
        let tree = parse_menu("- Foo\n").unwrap();
        let foo = entry(&tree, 0);

        assert!(!foo.enabled);
        assert!(!foo.checkable);
        assert_eq!(foo.command, None);
    }

    #[test]
    fn test_submenu_icon_decorates_submenu() {
        let tree = parse_menu("> Sub\n  icon: folder\n  - Child\n").unwrap();
        let sub = tree.find_submenu(&["Sub"]).unwrap();
        let menu = tree.menu(sub).unwrap();

        assert_eq!(menu.icon.as_deref(), Some("folder"));
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].as_entry().unwrap().icon, None);
    }

    #[test]
    fn test_separators_and_sections() {
        let tree = parse_menu("---\n--- Tools\n").unwrap();
        assert_eq!(
            tree.root().items,
            vec![
                MenuItem::Separator(Separator::default()),
                MenuItem::Separator(Separator {
                    label: Some("Tools".into())
                }),
            ]
        );
    }

    #[test]
    fn test_misaligned_line_reports_its_number() {
        let error = parse_menu("> Sub\n  - a\n\n   - b\n").unwrap_err();
        assert_eq!(error.line, 4);
        assert_eq!(error.kind, ParseErrorKind::Indentation { width: 3, unit: 2 });
        assert_eq!(error.text, "- b");
    }

    #[test]
    fn test_command_as_first_line_is_orphan() {
        let error = parse_menu("xdg-open .\n- Open\n").unwrap_err();
        assert_eq!(error.line, 1);
        assert_eq!(
            error.kind,
            ParseErrorKind::OrphanAttribute {
                attribute: AttributeKind::Command
            }
        );
    }

    #[test]
    fn test_attribute_after_separator_is_orphan() {
        let error = parse_menu("- a\n---\n  icon: x\n").unwrap_err();
        assert_eq!(error.line, 3);
        assert_eq!(
            error.kind,
            ParseErrorKind::OrphanAttribute {
                attribute: AttributeKind::Icon
            }
        );
    }

    #[test]
    fn test_command_under_submenu_header_is_orphan() {
        let error = parse_menu("> Sub\n  echo hi\n").unwrap_err();
        assert_eq!(
            error.kind,
            ParseErrorKind::OrphanAttribute {
                attribute: AttributeKind::Command
            }
        );
    }

    #[test]
    fn test_second_submenu_icon_is_unmatched() {
        let error = parse_menu("> Sub\n  icon: a\n  icon: b\n").unwrap_err();
        assert_eq!(error.line, 3);
        assert_eq!(
            error.kind,
            ParseErrorKind::UnmatchedLine {
                state: ParserState::SubmenuAttrs
            }
        );
    }

    #[test]
    fn test_over_indented_entry() {
        let error = parse_menu("- a\n  - b\n").unwrap_err();
        assert_eq!(error.line, 2);
        assert_eq!(
            error.kind,
            ParseErrorKind::OverIndent {
                level: 1,
                max_level: 0
            }
        );
    }

    #[test]
    fn test_attribute_at_entry_level() {
        let error = parse_menu("- a\n- b\nrun b\n").unwrap_err();
        assert_eq!(error.line, 3);
        assert_eq!(
            error.kind,
            ParseErrorKind::AttributeIndentation {
                expected: 1,
                found: 0
            }
        );
    }

    #[test]
    fn test_attribute_nested_too_deep() {
        let error = parse_menu("> S\n  - a\n      run a\n").unwrap_err();
        assert_eq!(error.line, 3);
        assert!(error.kind.is_indentation());
    }

    #[test]
    fn test_dedent_from_depth_three_to_one() {
        let text = "> A\n  > B\n    > C\n      - deep\n  - back\n    run back\n";
        let tree = parse_menu(text).unwrap();

        let a = tree.find_submenu(&["A"]).unwrap();
        let items = &tree.menu(a).unwrap().items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].as_entry().unwrap().title, "back");
        assert_eq!(
            tree.find_entry(&["A", "back"]).unwrap().command.as_deref(),
            Some("run back")
        );
        assert!(tree.find_entry(&["A", "B", "C", "deep"]).unwrap().command.is_none());
    }
}
