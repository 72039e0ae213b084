//! Terminal UI: the editor pane and status bar.
//!
//! Rendering consumes the pure style spans computed by [`crate::highlight`];
//! the theme travels as a value from settings, never through a global.

pub mod style;

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::config::Theme;
use crate::format::IndentUnit;
use crate::highlight::spans_for_line;
use self::style::{selection_style, status_style, style_for_span};

/// Render the whole frame: editor pane, status bar, caret.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let [editor_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    model.ensure_caret_visible(editor_area.height as usize);
    render_editor(model, frame, editor_area);
    render_status(model, frame, status_area);
    place_caret(model, frame, editor_area);
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let theme = model.settings.theme;
    let selection = model.selection_range();

    let mut lines = Vec::with_capacity(area.height as usize);
    for idx in model.scroll..model.scroll + area.height as usize {
        let Some(text) = model.buffer.line_at(idx) else {
            break;
        };
        let line_start = model.buffer.offset_at(idx, 0);
        let line_chars = text.chars().count();
        // Intersect the buffer-wide selection with this line, in bytes.
        let selected = selection.as_ref().and_then(|sel| {
            let start = sel.start.max(line_start);
            let end = sel.end.min(line_start + line_chars);
            (start < end)
                .then(|| char_range_to_bytes(&text, start - line_start, end - line_start))
        });
        lines.push(styled_line(&text, selected.as_ref(), theme));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(model: &Model, frame: &mut Frame, area: Rect) {
    let (line, col) = model.buffer.caret_position();
    let modified = if model.doc.is_modified() { " [+]" } else { "" };
    let indent = match model.settings.indent {
        IndentUnit::Spaces => "spaces",
        IndentUnit::Tab => "tabs",
    };
    let text = model.status.clone().map_or_else(
        || {
            format!(
                " {}{}  |  Ln {}, Col {}  |  indent: {}  |  ^S save  ^Q quit",
                model.doc.display_name(),
                modified,
                line + 1,
                col + 1,
                indent,
            )
        },
        |toast| format!(" {toast}"),
    );
    frame.render_widget(
        Paragraph::new(text).style(status_style(model.settings.theme)),
        area,
    );
}

fn place_caret(model: &Model, frame: &mut Frame, area: Rect) {
    let (line, col) = model.buffer.caret_position();
    if line < model.scroll || line >= model.scroll + area.height as usize {
        return;
    }
    let text = model.buffer.line_at(line).unwrap_or_default();
    let prefix: String = text.chars().take(col).collect();
    // Wide characters occupy two cells; measure, don't count.
    #[allow(clippy::cast_possible_truncation)]
    let x = area.x + (prefix.width() as u16).min(area.width.saturating_sub(1));
    #[allow(clippy::cast_possible_truncation)]
    let y = area.y + (line - model.scroll) as u16;
    frame.set_cursor_position(Position::new(x, y));
}

/// Build one display line from its style spans, with the selected byte
/// range (if any) overriding span styling.
fn styled_line(text: &str, selected: Option<&Range<usize>>, theme: Theme) -> Line<'static> {
    let spans = spans_for_line(text);

    // Cut the line at every style or selection boundary, then paint each
    // piece with the winning style.
    let mut cuts = vec![0, text.len()];
    for span in &spans {
        cuts.push(span.range.start);
        cuts.push(span.range.end);
    }
    if let Some(sel) = selected {
        cuts.push(sel.start);
        cuts.push(sel.end);
    }
    cuts.sort_unstable();
    cuts.dedup();

    let mut pieces = Vec::new();
    for pair in cuts.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let piece = text[start..end].to_string();
        let style = if selected.is_some_and(|sel| sel.start <= start && end <= sel.end) {
            selection_style()
        } else if let Some(span) = spans
            .iter()
            .find(|s| s.range.start <= start && end <= s.range.end)
        {
            style_for_span(span.kind, theme)
        } else {
            ratatui::style::Style::default()
        };
        pieces.push(Span::styled(piece, style));
    }
    Line::from(pieces)
}

/// Convert a char range within `text` to the equivalent byte range.
fn char_range_to_bytes(text: &str, start_char: usize, end_char: usize) -> Range<usize> {
    let byte_at = |chars: usize| {
        text.char_indices()
            .nth(chars)
            .map_or(text.len(), |(byte, _)| byte)
    };
    byte_at(start_char)..byte_at(end_char)
}
