//! Inline formatting and indentation mutations.
//!
//! Each operation edits the buffer through the [`TextBuffer`] capability
//! set and returns the caret offset that is valid *after* the mutation.
//! Nothing here retains state between calls.

use serde::{Deserialize, Serialize};

use crate::editor::TextBuffer;

/// One level of indentation: two spaces or a single tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentUnit {
    #[default]
    Spaces,
    Tab,
}

impl IndentUnit {
    /// The literal whitespace inserted or removed per level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spaces => "  ",
            Self::Tab => "\t",
        }
    }

    /// Character length of the unit.
    pub const fn len(self) -> usize {
        self.as_str().len()
    }
}

/// Wrap a selection in a symmetric token pair.
///
/// With a non-empty selection the range is replaced by
/// `prefix + selection + suffix` and the caret lands after the closing
/// token. With an empty selection the bare pair is inserted and the caret
/// lands between the tokens, ready for typing. `suffix` defaults to
/// `prefix` when `None`.
pub fn wrap(
    buffer: &mut impl TextBuffer,
    start: usize,
    len: usize,
    prefix: &str,
    suffix: Option<&str>,
) -> usize {
    let suffix = suffix.unwrap_or(prefix);

    if len > 0 {
        let selected = buffer.text(start, len);
        let wrapped = format!("{prefix}{selected}{suffix}");
        buffer.replace(start, len, &wrapped);
        start + wrapped.chars().count()
    } else {
        let pair = format!("{prefix}{suffix}");
        buffer.insert(start, &pair);
        start + prefix.chars().count()
    }
}

/// Add one indentation level to the line containing `caret`.
pub fn increase_indent(buffer: &mut impl TextBuffer, caret: usize, unit: IndentUnit) -> usize {
    let line = buffer.line_containing(caret);
    buffer.insert(line.start, unit.as_str());
    caret + unit.len()
}

/// Remove one indentation level from the line containing `caret`.
///
/// Removal of the configured unit is tried first; a line starting with a
/// single tab loses that tab even when the unit is the two-space form.
/// A line starting with neither is left untouched and the caret is
/// returned unchanged. The caret never moves left of the line start.
pub fn decrease_indent(buffer: &mut impl TextBuffer, caret: usize, unit: IndentUnit) -> usize {
    let line = buffer.line_containing(caret);
    let text = buffer.text(line.start, line.len);

    if text.starts_with(unit.as_str()) {
        buffer.remove(line.start, unit.len());
        return caret.saturating_sub(unit.len()).max(line.start);
    }
    if text.starts_with('\t') {
        buffer.remove(line.start, 1);
        return caret.saturating_sub(1).max(line.start);
    }

    caret
}
