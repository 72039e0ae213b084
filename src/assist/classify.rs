//! Line classification for markdown list and quote structure.

use once_cell::sync::Lazy;
use regex::Regex;

static UNORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)[-*+]\s+(.*)$").unwrap());
static ORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)(\d+)\.\s+(.*)$").unwrap());
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)>\s+(.*)$").unwrap());

/// Structural kind of a single line.
///
/// `indent` is the literal leading whitespace, preserved verbatim (spaces
/// and tabs are not normalized). `content` is the text after the marker and
/// its separating whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// No list or quote structure recognized.
    None,
    /// `- item`, `* item`, or `+ item`.
    Unordered { indent: String, content: String },
    /// `1. item` — the marker number saturates instead of overflowing.
    Ordered {
        indent: String,
        number: u64,
        content: String,
    },
    /// `> quoted text`.
    Quote { indent: String, content: String },
}

impl LineKind {
    /// Text after the marker, if the line has one.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Unordered { content, .. }
            | Self::Ordered { content, .. }
            | Self::Quote { content, .. } => Some(content),
        }
    }
}

/// Classify a line of text.
///
/// The unordered pattern is tested before ordered, ordered before quote.
/// The leading-symbol sets are mutually exclusive, so at most one matches,
/// but the order is kept fixed so malformed input degrades predictably.
pub fn classify(line: &str) -> LineKind {
    if line.is_empty() {
        return LineKind::None;
    }

    if let Some(caps) = UNORDERED.captures(line) {
        return LineKind::Unordered {
            indent: caps[1].to_string(),
            content: caps[2].to_string(),
        };
    }

    if let Some(caps) = ORDERED.captures(line) {
        // A numeral longer than u64 saturates; the marker stays editable
        // either way.
        let number = caps[2].parse::<u64>().unwrap_or(u64::MAX);
        return LineKind::Ordered {
            indent: caps[1].to_string(),
            number,
            content: caps[3].to_string(),
        };
    }

    if let Some(caps) = QUOTE.captures(line) {
        return LineKind::Quote {
            indent: caps[1].to_string(),
            content: caps[2].to_string(),
        };
    }

    LineKind::None
}

/// Whether the line carries list or quote structure.
///
/// Used to decide if the Tab key should be intercepted as an indent.
pub fn is_structural(line: &str) -> bool {
    !line.is_empty()
        && (UNORDERED.is_match(line) || ORDERED.is_match(line) || QUOTE.is_match(line))
}
