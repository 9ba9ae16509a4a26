//! Menu description parsing, end to end
//!
//! Every test parses a full description and walks the resulting tree with the fluent
//! assertion API.

use menutray::menu::parsing::{AttributeKind, ParseErrorKind, ParserState};
use menutray::menu::testing::assert_menu;
use menutray::menu::{parse_menu, MenuItem};
use rstest::rstest;

const EXAMPLE: &str = "\
- Open
  xdg-open .
---
> More
  - [ ] Verbose
    icon: verbose-icon
";

// ============================================================================
// Well-formed descriptions
// ============================================================================

#[test]
fn test_example_description() {
    let tree = parse_menu(EXAMPLE).unwrap();

    assert_menu(&tree)
        .item_count(3)
        .item(0, |item| {
            item.assert_entry()
                .title("Open")
                .enabled(true)
                .checkable(false)
                .command(Some("xdg-open ."))
                .icon(None);
        })
        .item(1, |item| {
            item.assert_separator().label(None);
        })
        .item(2, |item| {
            item.assert_submenu()
                .title("More")
                .icon(None)
                .item_count(1)
                .item(0, |item| {
                    item.assert_entry()
                        .title("Verbose")
                        .checkable(true)
                        .checked(false)
                        .icon(Some("verbose-icon"))
                        .enabled(false)
                        .command(None);
                });
        });
}

#[test]
fn test_checked_entry_with_command() {
    let tree = parse_menu("- [x] Foo\n  notify-send foo\n").unwrap();

    assert_menu(&tree).item_count(1).item(0, |item| {
        item.assert_entry()
            .title("Foo")
            .checkable(true)
            .checked(true)
            .enabled(true)
            .command(Some("notify-send foo"));
    });
}

#[test]
fn test_entry_without_command_is_a_disabled_label() {
    let tree = parse_menu("- Foo\n").unwrap();

    assert_menu(&tree).item(0, |item| {
        item.assert_entry()
            .title("Foo")
            .enabled(false)
            .checkable(false)
            .command(None);
    });
}

#[test]
fn test_submenu_icon_decorates_the_submenu() {
    let tree = parse_menu("> Tools\n  icon: applications-utilities\n  - Shell\n    xterm\n").unwrap();

    assert_menu(&tree).item(0, |item| {
        item.assert_submenu()
            .title("Tools")
            .icon(Some("applications-utilities"))
            .item(0, |item| {
                item.assert_entry().title("Shell").icon(None).command(Some("xterm"));
            });
    });
}

#[test]
fn test_nested_submenu_icon_sits_with_its_children() {
    let tree = parse_menu("> A\n  > B\n    icon: folder\n    - b1\n  - a1\n").unwrap();

    assert_menu(&tree).item(0, |item| {
        item.assert_submenu()
            .icon(None)
            .item_count(2)
            .item(0, |item| {
                item.assert_submenu().title("B").icon(Some("folder")).item_count(1);
            });
    });
}

#[rstest]
#[case::plain("---", None)]
#[case::long_plain("------", None)]
#[case::section("--- Tools", Some("Tools"))]
#[case::long_section("----- Power options", Some("Power options"))]
fn test_separator_lines(#[case] line: &str, #[case] label: Option<&str>) {
    let tree = parse_menu(line).unwrap();

    assert_menu(&tree).item_count(1).item(0, |item| {
        item.assert_separator().label(label);
    });
}

#[test]
fn test_entry_attributes_in_any_order() {
    let tree = parse_menu("- Term\n  xterm\n  icon: terminal\n- Files\n  icon: folder\n  thunar\n")
        .unwrap();

    assert_menu(&tree)
        .item(0, |item| {
            item.assert_entry()
                .command(Some("xterm"))
                .icon(Some("terminal"))
                .enabled(true);
        })
        .item(1, |item| {
            item.assert_entry()
                .command(Some("thunar"))
                .icon(Some("folder"))
                .enabled(true);
        });
}

#[test]
fn test_last_command_line_wins() {
    let tree = parse_menu("- Term\n  xterm\n  urxvt\n").unwrap();

    assert_menu(&tree).item(0, |item| {
        item.assert_entry().command(Some("urxvt"));
    });
}

#[test]
fn test_dedent_from_depth_three_to_one() {
    let source = "\
> A
  > B
    > C
      - deep
        run deep
  - back
    run back
- top
";
    let tree = parse_menu(source).unwrap();

    assert_menu(&tree)
        .item_count(2)
        .item(0, |item| {
            item.assert_submenu()
                .title("A")
                .item_count(2)
                .item(0, |item| {
                    item.assert_submenu().title("B").item(0, |item| {
                        item.assert_submenu().title("C").item(0, |item| {
                            item.assert_entry().title("deep").command(Some("run deep"));
                        });
                    });
                })
                .item(1, |item| {
                    item.assert_entry().title("back").command(Some("run back"));
                });
        })
        .item(1, |item| {
            item.assert_entry().title("top").enabled(false);
        });
}

#[test]
fn test_blank_lines_are_ignored() {
    let tree = parse_menu("\n\n- Open\n\n  xdg-open .\n   \n---\n\n").unwrap();

    assert_menu(&tree).item_count(2).item(0, |item| {
        item.assert_entry().command(Some("xdg-open ."));
    });
}

#[rstest]
#[case::two_spaces("  ")]
#[case::four_spaces("    ")]
#[case::tab("\t")]
fn test_indentation_unit_is_detected(#[case] unit: &str) {
    let source = format!(
        "> More\n{u}- Verbose\n{u}{u}echo verbose\n- Quit\n{u}exit\n",
        u = unit
    );
    let tree = parse_menu(&source).unwrap();

    assert_menu(&tree)
        .item_count(2)
        .item(0, |item| {
            item.assert_submenu().item(0, |item| {
                item.assert_entry().command(Some("echo verbose"));
            });
        })
        .item(1, |item| {
            item.assert_entry().command(Some("exit"));
        });
}

#[test]
fn test_entry_titles_keep_their_text() {
    let tree = parse_menu("- [x]Crowded\n- Open -> there\n-  spaced\n").unwrap();

    assert_menu(&tree)
        .item(0, |item| {
            item.assert_entry().title("[x]Crowded").checkable(false);
        })
        .item(1, |item| {
            item.assert_entry().title("Open -> there");
        })
        .item(2, |item| {
            item.assert_entry().title(" spaced");
        });
}

#[test]
fn test_top_level_count_matches_depth_zero_lines() {
    let tree = parse_menu(EXAMPLE).unwrap();
    let depth_zero = EXAMPLE
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with(char::is_whitespace))
        .count();

    assert_eq!(tree.root().items.len(), depth_zero);
    assert!(matches!(tree.root().items[2], MenuItem::Submenu(_)));
}

#[test]
fn test_reparse_is_identical() {
    assert_eq!(parse_menu(EXAMPLE).unwrap(), parse_menu(EXAMPLE).unwrap());
}

// ============================================================================
// Errors
// ============================================================================

#[rstest]
#[case::command_first("xdg-open .\n- Open\n", 1, ParseErrorKind::OrphanAttribute { attribute: AttributeKind::Command })]
#[case::indented_command_first("  xdg-open .\n", 1, ParseErrorKind::OrphanAttribute { attribute: AttributeKind::Command })]
#[case::icon_first("icon: folder\n", 1, ParseErrorKind::OrphanAttribute { attribute: AttributeKind::Icon })]
#[case::command_after_separator("- a\n  run a\n---\n  oops\n", 4, ParseErrorKind::OrphanAttribute { attribute: AttributeKind::Command })]
#[case::icon_after_section("--- Tools\n  icon: folder\n", 2, ParseErrorKind::OrphanAttribute { attribute: AttributeKind::Icon })]
#[case::command_under_submenu("> Tools\n  xterm\n", 2, ParseErrorKind::OrphanAttribute { attribute: AttributeKind::Command })]
#[case::second_submenu_icon("> Tools\n  icon: a\n  icon: b\n", 3, ParseErrorKind::UnmatchedLine { state: ParserState::SubmenuAttrs })]
#[case::odd_indent("- a\n  run a\n- b\n   run b\n", 4, ParseErrorKind::Indentation { width: 3, unit: 2 })]
#[case::over_indent("- a\n  - b\n", 2, ParseErrorKind::OverIndent { level: 1, max_level: 0 })]
#[case::two_levels_at_once("> S\n  - a\n- b\n    - c\n", 4, ParseErrorKind::OverIndent { level: 2, max_level: 0 })]
#[case::attribute_too_deep("> S\n  - a\n      run a\n", 3, ParseErrorKind::AttributeIndentation { expected: 2, found: 3 })]
#[case::attribute_at_entry_level("- a\n- b\nrun b\n", 3, ParseErrorKind::AttributeIndentation { expected: 1, found: 0 })]
#[case::submenu_icon_at_header_level("> More\nicon: folder\n  - a\n", 2, ParseErrorKind::AttributeIndentation { expected: 1, found: 0 })]
#[case::submenu_icon_two_levels_down("- x\n  run x\n> More\n    icon: folder\n", 4, ParseErrorKind::AttributeIndentation { expected: 1, found: 2 })]
#[case::nested_submenu_icon_at_header_level("> A\n  > B\n  icon: folder\n", 3, ParseErrorKind::AttributeIndentation { expected: 2, found: 1 })]
fn test_errors(#[case] source: &str, #[case] line: usize, #[case] kind: ParseErrorKind) {
    let error = parse_menu(source).unwrap_err();

    assert_eq!(error.line, line, "{}", error);
    assert_eq!(error.kind, kind, "{}", error);
    let offending = source.lines().nth(line - 1).unwrap().trim();
    assert_eq!(error.text, offending);
}

#[test]
fn test_error_message_names_line_and_text() {
    let error = parse_menu("- a\n  run a\n- b\n   run b\n").unwrap_err();

    assert!(error.kind.is_indentation());
    assert_eq!(
        error.to_string(),
        "at line 4: indentation should be a multiple of 2 (found 3): run b"
    );
}

#[test]
fn test_error_source_context() {
    let source = "- a\n  run a\n---\n  oops\n- b\n";
    let error = parse_menu(source).unwrap_err();
    let context = error.source_context(source);

    assert_eq!(
        context,
        "     2 |   run a\n     3 | ---\n>>   4 |   oops\n     5 | - b\n"
    );
}
