//! Pure style-span computation for markdown lines.
//!
//! Given one line of text, produces the byte ranges a renderer should style:
//! a whole-line heading span, plus inline code/strong/emphasis spans. This
//! module never touches rendering; the ui layer maps [`SpanKind`] to
//! terminal styles.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*(#{1,6})[ \t]+.+$").unwrap());

// One alternation keeps precedence in the pattern itself: code runs win over
// star runs, and `**` wins over `*`, which stands in for the look-around the
// regex crate doesn't support.
static INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(`[^`\n]+`)|(\*\*[^*\n]+?\*\*)|(\*[^*\n]+?\*)").unwrap());

/// What a matched range means, for the renderer to style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// A `#`–`######` heading line; the level is the hash count.
    Heading(u8),
    /// `**strong**` including its markers.
    Strong,
    /// `*emphasis*` including its markers.
    Emphasis,
    /// `` `inline code` `` including its markers.
    Code,
}

/// A styled byte range within one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub kind: SpanKind,
}

/// Compute the style spans for one line of text.
///
/// A heading line yields a single whole-line span; inline marks are scanned
/// left to right and never overlap. Spans are byte ranges into `line`.
pub fn spans_for_line(line: &str) -> Vec<StyleSpan> {
    if let Some(caps) = HEADING.captures(line) {
        #[allow(clippy::cast_possible_truncation)]
        let level = caps[1].len() as u8;
        return vec![StyleSpan {
            range: 0..line.len(),
            kind: SpanKind::Heading(level),
        }];
    }

    INLINE
        .captures_iter(line)
        .filter_map(|caps| {
            let (group, kind) = if caps.get(1).is_some() {
                (1, SpanKind::Code)
            } else if caps.get(2).is_some() {
                (2, SpanKind::Strong)
            } else {
                (3, SpanKind::Emphasis)
            };
            caps.get(group).map(|m| StyleSpan {
                range: m.range(),
                kind,
            })
        })
        .collect()
}
