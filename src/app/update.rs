//! Pure state transitions.

use crate::app::Model;
use crate::document;
use crate::editor::TextBuffer;

/// Cursor movement direction for [`Message::Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// All events and actions the shell handles after the structural router
/// has passed on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Insert a character at the caret.
    InsertChar(char),
    /// Insert a plain line break at the caret.
    SplitLine,
    /// Delete the character before the caret (Backspace).
    DeleteBack,
    /// Delete the character at the caret (Delete).
    DeleteForward,
    /// Move the caret, dropping any selection.
    Move(Direction),
    /// Move the caret, extending the selection from its anchor.
    Extend(Direction),
    /// Move to the start of the line (Home).
    MoveHome,
    /// Move to the end of the line (End).
    MoveEnd,
    /// Move to the start of the buffer (Ctrl+Home).
    MoveToStart,
    /// Move to the end of the buffer (Ctrl+End).
    MoveToEnd,
    /// Drop the selection (Esc).
    ClearSelection,
    /// The structural router consumed the event and mutated the buffer.
    StructuralEdit,
    /// Save the buffer to its file.
    Save,
    /// Terminal resized.
    Resize(u16, u16),
    /// Quit the application.
    Quit,
}

/// Apply a message to the model.
///
/// Buffer mutations mark the document modified; movement messages collapse
/// or extend the selection. Any message clears the previous status toast.
pub fn update(mut model: Model, message: Message) -> Model {
    model.status = None;

    match message {
        Message::InsertChar(c) => {
            model.buffer.insert_at_caret(&c.to_string());
            model.clear_selection();
            mark_modified(&mut model);
        }
        Message::SplitLine => {
            model.buffer.insert_at_caret("\n");
            model.clear_selection();
            mark_modified(&mut model);
        }
        Message::DeleteBack => {
            if model.buffer.delete_back() {
                mark_modified(&mut model);
            }
            model.clear_selection();
        }
        Message::DeleteForward => {
            if model.buffer.delete_forward() {
                mark_modified(&mut model);
            }
            model.clear_selection();
        }
        Message::Move(direction) => {
            model.clear_selection();
            move_caret(&mut model, direction);
        }
        Message::Extend(direction) => {
            if model.anchor.is_none() {
                model.anchor = Some(model.buffer.caret());
            }
            move_caret(&mut model, direction);
        }
        Message::MoveHome => {
            model.clear_selection();
            model.buffer.move_home();
        }
        Message::MoveEnd => {
            model.clear_selection();
            model.buffer.move_end();
        }
        Message::MoveToStart => {
            model.clear_selection();
            model.buffer.move_to_start();
        }
        Message::MoveToEnd => {
            model.clear_selection();
            model.buffer.move_to_end();
        }
        Message::ClearSelection => model.clear_selection(),
        Message::StructuralEdit => {
            model.clear_selection();
            mark_modified(&mut model);
        }
        Message::Save => save(&mut model),
        Message::Resize(w, h) => model.size = (w, h),
        Message::Quit => model.should_quit = true,
    }

    model
}

fn move_caret(model: &mut Model, direction: Direction) {
    match direction {
        Direction::Up => model.buffer.move_up(),
        Direction::Down => model.buffer.move_down(),
        Direction::Left => model.buffer.move_left(),
        Direction::Right => model.buffer.move_right(),
    }
}

fn mark_modified(model: &mut Model) {
    model.doc.set_modified(true);
}

fn save(model: &mut Model) {
    let Some(path) = model.doc.path().map(std::path::Path::to_path_buf) else {
        model.status = Some("No file name - start mdpad with a path to save".to_string());
        return;
    };
    match document::save_file(&path, &model.buffer.to_text()) {
        Ok(()) => {
            model.buffer.mark_clean();
            model.doc.set_modified(false);
            model.status = Some(format!("Saved {}", path.display()));
            tracing::debug!("saved {}", path.display());
        }
        Err(err) => {
            model.status = Some(format!("Save failed: {err}"));
            tracing::warn!("save failed: {err:#}");
        }
    }
}
