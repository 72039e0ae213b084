//! Line-break continuation decisions for structural lines.

use super::classify::{LineKind, classify};

/// What pressing Enter on a line should do to the markdown structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    /// Insert a line break, then this prefix at the start of the new line.
    Continue(String),
    /// The marker is spent: strip the current line and emit a plain break.
    Terminate,
    /// Ordinary line break, nothing to do.
    None,
}

/// Decide how a line break on `line` should treat its structure.
///
/// Non-empty structural content continues the structure on the next line:
/// bullets normalize to `- ` whatever the original bullet character was,
/// ordered markers increment by one relative to the current line, quotes
/// repeat `> `. A structural line whose content is empty or all whitespace
/// terminates instead — the marker is removed and the line becomes plain
/// text, so a second Enter classifies as `None` and falls through.
pub fn next_line_prefix(line: &str) -> Continuation {
    let kind = classify(line);

    if matches!(kind, LineKind::None) {
        return Continuation::None;
    }
    if kind.content().is_none_or(|c| c.trim().is_empty()) {
        return Continuation::Terminate;
    }

    match kind {
        LineKind::Unordered { indent, .. } => Continuation::Continue(format!("{indent}- ")),
        LineKind::Ordered { indent, number, .. } => {
            Continuation::Continue(format!("{indent}{}. ", number.saturating_add(1)))
        }
        LineKind::Quote { indent, .. } => Continuation::Continue(format!("{indent}> ")),
        LineKind::None => Continuation::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unordered_continues_with_normalized_dash() {
        for line in ["- item", "* item", "+ item"] {
            assert_eq!(
                next_line_prefix(line),
                Continuation::Continue("- ".to_string()),
                "line: {line:?}"
            );
        }
    }

    #[test]
    fn test_continuation_keeps_indent() {
        assert_eq!(
            next_line_prefix("    * deep"),
            Continuation::Continue("    - ".to_string())
        );
        assert_eq!(
            next_line_prefix("\t> quoted"),
            Continuation::Continue("\t> ".to_string())
        );
    }

    #[test]
    fn test_ordered_increments_current_number() {
        assert_eq!(
            next_line_prefix("1. first"),
            Continuation::Continue("2. ".to_string())
        );
        // Renumber-from-current: the previous lines are never consulted.
        assert_eq!(
            next_line_prefix("5. fifth"),
            Continuation::Continue("6. ".to_string())
        );
    }

    #[test]
    fn test_ordered_increment_saturates() {
        let line = format!("{}. item", u64::MAX);
        assert_eq!(
            next_line_prefix(&line),
            Continuation::Continue(format!("{}. ", u64::MAX))
        );
    }

    #[test]
    fn test_empty_content_terminates() {
        for line in ["- ", "*  ", "3. ", ">  ", "  - \t"] {
            assert_eq!(
                next_line_prefix(line),
                Continuation::Terminate,
                "line: {line:?}"
            );
        }
    }

    #[test]
    fn test_plain_line_is_none() {
        assert_eq!(next_line_prefix("plain"), Continuation::None);
        assert_eq!(next_line_prefix(""), Continuation::None);
    }

    #[test]
    fn test_termination_is_idempotent() {
        // After Terminate strips the marker the line is empty, which
        // classifies as None — a second Enter cannot loop.
        assert_eq!(next_line_prefix("- "), Continuation::Terminate);
        assert_eq!(next_line_prefix(""), Continuation::None);
    }

    proptest! {
        #[test]
        fn prop_bullet_lines_continue_with_dash(
            indent in "[ \t]{0,4}",
            bullet in "[-*+]",
            content in "[a-zA-Z0-9 ]*[a-zA-Z0-9]",
        ) {
            let line = format!("{indent}{bullet} {content}");
            prop_assert_eq!(
                next_line_prefix(&line),
                Continuation::Continue(format!("{indent}- "))
            );
        }

        #[test]
        fn prop_ordered_lines_increment(
            indent in "[ ]{0,4}",
            n in 0u64..1_000_000,
            content in "[a-z]{1,12}",
        ) {
            let line = format!("{indent}{n}. {content}");
            prop_assert_eq!(
                next_line_prefix(&line),
                Continuation::Continue(format!("{indent}{}. ", n + 1))
            );
        }

        #[test]
        fn prop_structural_lines_never_panic(line in "\\PC*") {
            let _ = next_line_prefix(&line);
        }
    }
}
