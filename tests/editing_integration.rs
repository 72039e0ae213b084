//! End-to-end keystroke scenarios: key events routed against a live
//! buffer, checking text and caret after each step.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use mdpad::prelude::*;

fn enter() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

fn tab() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(buf: &mut RopeBuffer, text: &str) {
    for c in text.chars() {
        let at = buf.caret();
        buf.insert(at, &c.to_string());
        buf.set_caret(at + 1);
    }
}

fn press(buf: &mut RopeBuffer, key: KeyEvent, unit: IndentUnit) -> bool {
    let sel = (buf.caret(), 0);
    route_key(key, buf, sel, unit).consumed
}

#[test]
fn ordered_list_grows_as_the_user_types() {
    let mut buf = RopeBuffer::from_text("1. first");
    buf.set_caret(8);

    assert!(press(&mut buf, enter(), IndentUnit::Spaces));
    type_text(&mut buf, "second");
    assert_eq!(buf.to_text(), "1. first\n2. second");

    assert!(press(&mut buf, enter(), IndentUnit::Spaces));
    type_text(&mut buf, "third");
    assert_eq!(buf.to_text(), "1. first\n2. second\n3. third");
}

#[test]
fn empty_marker_terminates_the_list() {
    let mut buf = RopeBuffer::from_text("- first");
    buf.set_caret(7);

    // Enter continues with a fresh marker...
    assert!(press(&mut buf, enter(), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "- first\n- ");

    // ...and Enter again on the empty marker clears it to a plain line.
    assert!(press(&mut buf, enter(), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "- first\n\n");
    assert_eq!(buf.caret(), 9);

    // The terminated line is plain text now: Enter falls through.
    assert!(!press(&mut buf, enter(), IndentUnit::Spaces));
}

#[test]
fn bullets_normalize_while_quotes_repeat() {
    let mut buf = RopeBuffer::from_text("* star bullet");
    buf.set_caret(13);
    assert!(press(&mut buf, enter(), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "* star bullet\n- ");

    let mut buf = RopeBuffer::from_text("> quoted");
    buf.set_caret(8);
    assert!(press(&mut buf, enter(), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "> quoted\n> ");
}

#[test]
fn tab_indents_only_structural_lines() {
    let mut buf = RopeBuffer::from_text("- item\nplain");

    buf.set_caret(3);
    assert!(press(&mut buf, tab(), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "  - item\nplain");
    assert_eq!(buf.caret(), 5);

    buf.set_caret(11);
    assert!(!press(&mut buf, tab(), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "  - item\nplain");
}

#[test]
fn indent_shortcuts_round_trip() {
    let mut buf = RopeBuffer::from_text("1. item");
    buf.set_caret(5);

    assert!(press(&mut buf, ctrl(']'), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "  1. item");
    assert_eq!(buf.caret(), 7);

    assert!(press(&mut buf, ctrl('['), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "1. item");
    assert_eq!(buf.caret(), 5);
}

#[test]
fn indented_continuation_keeps_depth() {
    let mut buf = RopeBuffer::from_text("- item");
    buf.set_caret(3);
    assert!(press(&mut buf, tab(), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "  - item");

    buf.set_caret(8);
    assert!(press(&mut buf, enter(), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "  - item\n  - ");
    assert_eq!(buf.caret(), 13);
}

#[test]
fn wrap_shortcut_on_selection_then_continue_typing() {
    let mut buf = RopeBuffer::from_text("make this bold");
    // Select "bold" (chars 10..14).
    let outcome = route_key(ctrl('b'), &mut buf, (10, 4), IndentUnit::Spaces);
    assert!(outcome.consumed);
    assert_eq!(buf.to_text(), "make this **bold**");
    assert_eq!(buf.caret(), 18);

    type_text(&mut buf, "!");
    assert_eq!(buf.to_text(), "make this **bold**!");
}

#[test]
fn empty_selection_wrap_leaves_caret_between_tokens() {
    let mut buf = RopeBuffer::from_text("code: ");
    buf.set_caret(6);
    assert!(press(&mut buf, ctrl('`'), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "code: ``");
    assert_eq!(buf.caret(), 7);

    type_text(&mut buf, "x");
    assert_eq!(buf.to_text(), "code: `x`");
}

#[test]
fn continuation_in_the_middle_of_a_document() {
    let mut buf = RopeBuffer::from_text("intro\n3. item\noutro");
    // Caret at the end of the list line.
    buf.set_caret(13);
    assert!(press(&mut buf, enter(), IndentUnit::Spaces));
    assert_eq!(buf.to_text(), "intro\n3. item\n4. \noutro");
    assert_eq!(buf.caret(), 17);
}

#[test]
fn tab_with_configured_tab_unit() {
    let mut buf = RopeBuffer::from_text("> note");
    buf.set_caret(4);
    assert!(press(&mut buf, tab(), IndentUnit::Tab));
    assert_eq!(buf.to_text(), "\t> note");
    assert_eq!(buf.caret(), 5);

    assert!(press(&mut buf, ctrl('['), IndentUnit::Tab));
    assert_eq!(buf.to_text(), "> note");
    assert_eq!(buf.caret(), 4);
}

#[test]
fn classification_is_reexported_and_consistent_with_routing() {
    assert!(is_structural("- item"));
    assert_eq!(next_line_prefix("- item"), Continuation::Continue("- ".into()));
    assert!(matches!(classify("7. x"), LineKind::Ordered { number: 7, .. }));
}
