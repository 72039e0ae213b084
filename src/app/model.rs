//! Application state.

use std::ops::Range;

use crate::config::Settings;
use crate::document::DocumentState;
use crate::editor::{RopeBuffer, TextBuffer};

/// The whole editor state: buffer, document identity, settings, and the
/// transient view state (selection, scroll, status toast).
#[derive(Debug)]
pub struct Model {
    /// The text being edited.
    pub buffer: RopeBuffer,
    /// File identity and modified flag.
    pub doc: DocumentState,
    /// Loaded user settings, passed in at startup.
    pub settings: Settings,
    /// Selection anchor; the selection spans anchor..caret in either order.
    pub anchor: Option<usize>,
    /// First visible buffer line.
    pub scroll: usize,
    /// Terminal size (columns, rows).
    pub size: (u16, u16),
    /// One-line status message, cleared on the next keystroke.
    pub status: Option<String>,
    /// Set when the user asked to leave.
    pub should_quit: bool,
}

impl Model {
    pub fn new(buffer: RopeBuffer, doc: DocumentState, settings: Settings, size: (u16, u16)) -> Self {
        Self {
            buffer,
            doc,
            settings,
            anchor: None,
            scroll: 0,
            size,
            status: None,
            should_quit: false,
        }
    }

    /// The active selection as a character range, or `None` when collapsed.
    pub fn selection_range(&self) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        let caret = self.buffer.caret();
        if anchor == caret {
            return None;
        }
        Some(anchor.min(caret)..anchor.max(caret))
    }

    /// Selection as the `(start, len)` pair the wrap operation takes;
    /// `(caret, 0)` when nothing is selected.
    pub fn selection_for_wrap(&self) -> (usize, usize) {
        self.selection_range().map_or_else(
            || (self.buffer.caret(), 0),
            |range| (range.start, range.end - range.start),
        )
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Keep the caret's line inside the visible window.
    pub fn ensure_caret_visible(&mut self, viewport_rows: usize) {
        if viewport_rows == 0 {
            return;
        }
        let (line, _) = self.buffer.caret_position();
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + viewport_rows {
            self.scroll = line + 1 - viewport_rows;
        }
    }
}
