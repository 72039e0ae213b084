//! Key-event routing for the structural-editing operations.
//!
//! A per-keystroke decision table: modifier shortcuts first, then the Tab
//! intercept on structural lines, then Enter continuation. The first match
//! consumes the event and performs exactly one mutation; everything else is
//! left for the host's default handling. The router holds no state — it is
//! a pure mapping from `(event, buffer snapshot)` to a mutation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::assist::{Continuation, is_structural, next_line_prefix};
use crate::editor::TextBuffer;
use crate::format::{IndentUnit, decrease_indent, increase_indent, wrap};

/// Wrap tokens bound to the format shortcuts.
pub const BOLD_TOKEN: &str = "**";
pub const ITALIC_TOKEN: &str = "*";
pub const QUOTE_TOKEN: &str = "\"";
pub const CODE_TOKEN: &str = "`";

/// Whether the router consumed the event.
///
/// A consumed event has already mutated the buffer and repositioned the
/// caret; an unconsumed one should fall through to default key handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOutcome {
    pub consumed: bool,
}

impl RouteOutcome {
    const CONSUMED: Self = Self { consumed: true };
    const PASS: Self = Self { consumed: false };
}

/// Route one key event against the live buffer.
///
/// `selection` is the active selection as `(start, len)` character offsets;
/// `(caret, 0)` stands for no selection. `unit` selects the indentation
/// whitespace for the indent shortcuts.
pub fn route_key(
    key: KeyEvent,
    buffer: &mut impl TextBuffer,
    selection: (usize, usize),
    unit: IndentUnit,
) -> RouteOutcome {
    // Only key presses mutate; repeats and releases pass through untouched.
    if key.kind == KeyEventKind::Release {
        return RouteOutcome::PASS;
    }

    if key.modifiers == KeyModifiers::CONTROL {
        return route_ctrl_shortcut(key.code, buffer, selection, unit);
    }

    if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
        match key.code {
            KeyCode::Tab => return route_tab(buffer, unit),
            KeyCode::Enter => return route_enter(buffer),
            _ => {}
        }
    }

    RouteOutcome::PASS
}

/// Exact Ctrl-shortcut table: each entry performs one mutator call.
fn route_ctrl_shortcut(
    code: KeyCode,
    buffer: &mut impl TextBuffer,
    selection: (usize, usize),
    unit: IndentUnit,
) -> RouteOutcome {
    let (start, len) = selection;
    let caret = match code {
        KeyCode::Char('b') => wrap(buffer, start, len, BOLD_TOKEN, None),
        KeyCode::Char('i') => wrap(buffer, start, len, ITALIC_TOKEN, None),
        KeyCode::Char('2') => wrap(buffer, start, len, QUOTE_TOKEN, None),
        KeyCode::Char('`') => wrap(buffer, start, len, CODE_TOKEN, None),
        KeyCode::Char(']') => increase_indent(buffer, buffer.caret(), unit),
        KeyCode::Char('[') => decrease_indent(buffer, buffer.caret(), unit),
        _ => return RouteOutcome::PASS,
    };
    buffer.set_caret(caret);
    RouteOutcome::CONSUMED
}

/// Tab indents only on list/quote lines; elsewhere the host inserts the tab.
fn route_tab(buffer: &mut impl TextBuffer, unit: IndentUnit) -> RouteOutcome {
    let caret = buffer.caret();
    let line = buffer.line_containing(caret);
    let text = buffer.text(line.start, line.len);

    if !is_structural(&text) {
        return RouteOutcome::PASS;
    }
    let caret = increase_indent(buffer, caret, unit);
    buffer.set_caret(caret);
    RouteOutcome::CONSUMED
}

/// Enter continues or terminates markdown structure on the current line.
fn route_enter(buffer: &mut impl TextBuffer) -> RouteOutcome {
    let caret = buffer.caret();
    let line = buffer.line_containing(caret);
    let text = buffer.text(line.start, line.len);

    match next_line_prefix(&text) {
        Continuation::Continue(prefix) => {
            buffer.insert(caret, "\n");
            let after_break = caret + 1;
            buffer.insert(after_break, &prefix);
            buffer.set_caret(after_break + prefix.chars().count());
            RouteOutcome::CONSUMED
        }
        Continuation::Terminate => {
            // The marker is spent: clear the line, leave a plain break.
            buffer.remove(line.start, line.len);
            buffer.insert(line.start, "\n");
            buffer.set_caret(line.start + 1);
            RouteOutcome::CONSUMED
        }
        Continuation::None => RouteOutcome::PASS,
    }
}
