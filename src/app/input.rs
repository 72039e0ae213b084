//! Event handling: structural routing first, then editing keybindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Direction, Message, Model};
use crate::input::route_key;

/// Translate a terminal event into a message.
///
/// Key presses go to the structural router first; a consumed event has
/// already mutated the buffer and only needs the bookkeeping message.
/// Everything the router passes on maps to ordinary editing messages.
pub(super) fn handle_event(model: &mut Model, event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            let selection = model.selection_for_wrap();
            let outcome = route_key(key, &mut model.buffer, selection, model.settings.indent);
            if outcome.consumed {
                return Some(Message::StructuralEdit);
            }
            handle_key(key)
        }
        Event::Resize(w, h) => Some(Message::Resize(w, h)),
        _ => None,
    }
}

fn handle_key(key: KeyEvent) -> Option<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        // Application
        KeyCode::Char('s') if ctrl => Some(Message::Save),
        KeyCode::Char('q') if ctrl => Some(Message::Quit),

        // Caret movement, with Shift extending the selection
        KeyCode::Up => Some(direction_message(Direction::Up, shift)),
        KeyCode::Down => Some(direction_message(Direction::Down, shift)),
        KeyCode::Left => Some(direction_message(Direction::Left, shift)),
        KeyCode::Right => Some(direction_message(Direction::Right, shift)),
        KeyCode::Home if ctrl => Some(Message::MoveToStart),
        KeyCode::End if ctrl => Some(Message::MoveToEnd),
        KeyCode::Home => Some(Message::MoveHome),
        KeyCode::End => Some(Message::MoveEnd),

        // Editing
        KeyCode::Backspace => Some(Message::DeleteBack),
        KeyCode::Delete => Some(Message::DeleteForward),
        KeyCode::Enter => Some(Message::SplitLine),
        // The router passed, so this tab is a literal character
        KeyCode::Tab => Some(Message::InsertChar('\t')),
        KeyCode::Esc => Some(Message::ClearSelection),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Message::InsertChar(c))
        }

        _ => None,
    }
}

const fn direction_message(direction: Direction, shift: bool) -> Message {
    if shift {
        Message::Extend(direction)
    } else {
        Message::Move(direction)
    }
}
