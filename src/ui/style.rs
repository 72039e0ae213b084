//! Terminal styles for computed markdown spans.
//!
//! Maps [`SpanKind`] to ratatui styles. The theme is an explicit argument;
//! there is no global styling state.

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme;
use crate::highlight::SpanKind;

/// Style for a computed span under the given theme.
///
/// Uses semantic ANSI colors that respect the terminal's palette, with
/// indexed fallbacks for light backgrounds.
pub fn style_for_span(kind: SpanKind, theme: Theme) -> Style {
    let light = theme == Theme::Light;
    match kind {
        // Headings - bold with distinct colors per level
        SpanKind::Heading(1) => Style::default()
            .fg(if light { Color::Indexed(24) } else { Color::Cyan })
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        SpanKind::Heading(2) => Style::default()
            .fg(if light { Color::Indexed(22) } else { Color::Green })
            .add_modifier(Modifier::BOLD),
        SpanKind::Heading(3) => Style::default()
            .fg(if light { Color::Indexed(58) } else { Color::Yellow })
            .add_modifier(Modifier::BOLD),
        SpanKind::Heading(_) => Style::default()
            .fg(if light { Color::Indexed(24) } else { Color::Blue })
            .add_modifier(Modifier::BOLD),

        SpanKind::Strong => Style::default().add_modifier(Modifier::BOLD),
        SpanKind::Emphasis => Style::default().add_modifier(Modifier::ITALIC),

        // Inline code - dimmer color so it reads as literal text
        SpanKind::Code => Style::default().fg(if light {
            Color::Indexed(238)
        } else {
            Color::Indexed(245)
        }),
    }
}

/// Style for the selected region; overrides span styling.
pub fn selection_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Style for the status bar.
pub fn status_style(theme: Theme) -> Style {
    if theme == Theme::Light {
        Style::default().fg(Color::Indexed(236)).bg(Color::Indexed(253))
    } else {
        Style::default().fg(Color::Indexed(250)).bg(Color::Indexed(236))
    }
}
