//! Line scanner for README-style markdown
//!
//! Classifies every line of a document once so the extractors in
//! [`crate::readme`] can work over a token sequence instead of re-running
//! line patterns. Only the handful of constructs the landing page cares about
//! are recognised: ATX headings, bullets, pipe tables, blank lines and text.

use regex::Regex;
use std::sync::LazyLock;

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s{0,3})(#{1,6})(?:\s+(.*))?$").expect("heading regex"));

static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(.*\S.*)$").expect("bullet regex"));

static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link regex"));

static CODE_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code span regex"));

/// Classification of a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Whitespace only
    Blank,
    /// ATX heading, `level` is the number of `#` characters (1-6).
    /// `text` is empty for a bare `##`.
    Heading {
        indent: usize,
        level: usize,
        text: &'a str,
    },
    /// `-`, `*` or `+` list item
    Bullet(&'a str),
    /// Any other line containing a `|`
    TableRow,
    /// Everything else
    Text,
}

/// A classified line that keeps its raw text around
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

impl<'a> Line<'a> {
    pub fn classify(raw: &'a str) -> Self {
        let kind = if raw.trim().is_empty() {
            LineKind::Blank
        } else if let Some(caps) = HEADING_REGEX.captures(raw) {
            let indent = caps.get(1).map_or(0, |m| m.as_str().len());
            let level = caps.get(2).map_or(1, |m| m.as_str().len());
            let text = caps.get(3).map_or("", |m| m.as_str().trim());
            LineKind::Heading {
                indent,
                level,
                text,
            }
        } else if let Some(text) = BULLET_REGEX.captures(raw).and_then(|c| c.get(1)) {
            LineKind::Bullet(text.as_str().trim())
        } else if raw.contains('|') {
            LineKind::TableRow
        } else {
            LineKind::Text
        };

        Self { raw, kind }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, LineKind::Heading { .. })
    }

    /// Non-empty heading text when the line is a heading whose level is in `levels`
    pub fn heading_text(&self, levels: std::ops::RangeInclusive<usize>) -> Option<&'a str> {
        match self.kind {
            LineKind::Heading { level, text, .. } if levels.contains(&level) => {
                (!text.is_empty()).then_some(text)
            }
            _ => None,
        }
    }

    /// Title text for a `# Title` line starting at column 0
    pub fn title_text(&self) -> Option<&'a str> {
        match self.kind {
            LineKind::Heading {
                indent: 0,
                level: 1,
                text,
            } if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// A list marker with nothing after it, like `-` or `*   `
    pub fn is_bare_marker(&self) -> bool {
        matches!(self.raw.trim(), "-" | "*" | "+")
    }

    pub fn bullet_text(&self) -> Option<&'a str> {
        match self.kind {
            LineKind::Bullet(text) => Some(text),
            _ => None,
        }
    }

    /// True for any line with a pipe, whatever its classification
    pub fn has_pipe(&self) -> bool {
        self.raw.contains('|')
    }

    /// Split the line into trimmed table cells.
    ///
    /// One leading and one trailing `|` are dropped before splitting, so
    /// `| a | b |` yields `["a", "b"]`. Returns `None` for lines without a pipe.
    pub fn table_cells(&self) -> Option<Vec<&'a str>> {
        if !self.has_pipe() {
            return None;
        }

        let mut row = self.raw.trim_start();
        row = row.strip_prefix('|').unwrap_or(row);
        let trimmed_end = row.trim_end();
        row = trimmed_end.strip_suffix('|').unwrap_or(row);

        Some(row.split('|').map(str::trim).collect())
    }
}

/// Tokenize a document into classified lines.
///
/// Accepts both `\n` and `\r\n` line endings.
pub fn tokenize(text: &str) -> Vec<Line<'_>> {
    text.split('\n')
        .map(|line| Line::classify(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

/// Convert `[label](url)` links to their label
pub fn strip_links(text: &str) -> String {
    LINK_REGEX.replace_all(text, "$1").into_owned()
}

/// First `[label](url)` link in the text as `(label, url)`
pub fn first_link(text: &str) -> Option<(&str, &str)> {
    let caps = LINK_REGEX.captures(text)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Contents of the first inline code span
pub fn first_code_span(text: &str) -> Option<&str> {
    CODE_SPAN_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split prose into sentences.
///
/// A sentence ends at `.`, `!` or `?` when followed by whitespace. Sentences
/// are trimmed and empty ones dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let Some(&(next_idx, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }

        sentences.push(&text[start..idx + ch.len_utf8()]);

        // Consume the whole whitespace run separating the sentences
        let mut end = next_idx;
        while let Some(&(ws_idx, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            end = ws_idx + ws.len_utf8();
            chars.next();
        }
        start = end;
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // classification tests
    // ============================================================================

    #[test]
    fn test_classify_blank() {
        assert!(Line::classify("").is_blank());
        assert!(Line::classify("   \t").is_blank());
    }

    #[test]
    fn test_classify_heading_levels() {
        let line = Line::classify("### Key Features ");
        assert_eq!(
            line.kind,
            LineKind::Heading {
                indent: 0,
                level: 3,
                text: "Key Features"
            }
        );
        assert_eq!(line.heading_text(2..=6), Some("Key Features"));
        assert_eq!(line.heading_text(1..=1), None);
    }

    #[test]
    fn test_classify_heading_allows_three_spaces_indent() {
        let line = Line::classify("   ## Indented");
        assert_eq!(line.heading_text(2..=2), Some("Indented"));
        assert_eq!(line.title_text(), None);

        // Four spaces is an indented code block, not a heading
        assert!(!Line::classify("    ## Code").is_heading());
    }

    #[test]
    fn test_classify_heading_requires_space_after_marker() {
        assert!(!Line::classify("#hashtag").is_heading());
        assert!(!Line::classify("####### seven").is_heading());
    }

    #[test]
    fn test_classify_empty_heading() {
        for raw in ["#", "##", "## ", "  ###\t"] {
            let line = Line::classify(raw);
            assert!(line.is_heading(), "line: {raw:?}");
            assert_eq!(line.heading_text(1..=6), None, "line: {raw:?}");
            assert_eq!(line.title_text(), None, "line: {raw:?}");
        }
        assert_eq!(
            Line::classify("##").kind,
            LineKind::Heading {
                indent: 0,
                level: 2,
                text: ""
            }
        );
    }

    #[test]
    fn test_title_text_only_for_level_one_at_column_zero() {
        assert_eq!(Line::classify("# Flet").title_text(), Some("Flet"));
        assert_eq!(Line::classify("#   Spaced  ").title_text(), Some("Spaced"));
        assert_eq!(Line::classify("## Flet").title_text(), None);
        assert_eq!(Line::classify(" # Flet").title_text(), None);
    }

    #[test]
    fn test_classify_bullets() {
        assert_eq!(Line::classify("- one").bullet_text(), Some("one"));
        assert_eq!(Line::classify("  * two ").bullet_text(), Some("two"));
        assert_eq!(Line::classify("+ three").bullet_text(), Some("three"));
        assert_eq!(Line::classify("-no space").bullet_text(), None);
        assert_eq!(Line::classify("-   ").bullet_text(), None);
    }

    #[test]
    fn test_bare_marker() {
        assert!(Line::classify("-").is_bare_marker());
        assert!(Line::classify("  *   ").is_bare_marker());
        assert!(!Line::classify("- item").is_bare_marker());
        assert!(!Line::classify("--").is_bare_marker());
    }

    #[test]
    fn test_classify_table_row_and_text() {
        assert_eq!(Line::classify("| a | b |").kind, LineKind::TableRow);
        assert_eq!(Line::classify("plain words").kind, LineKind::Text);
    }

    #[test]
    fn test_bullet_with_pipe_still_has_cells() {
        let line = Line::classify("- a | b");
        assert_eq!(line.bullet_text(), Some("a | b"));
        assert_eq!(line.table_cells(), Some(vec!["- a", "b"]));
    }

    // ============================================================================
    // table_cells tests
    // ============================================================================

    #[test]
    fn test_table_cells_strips_outer_pipes() {
        let line = Line::classify("| [Widget](https://x.io) | `org/widget` | **Great** tool |");
        assert_eq!(
            line.table_cells(),
            Some(vec!["[Widget](https://x.io)", "`org/widget`", "**Great** tool"])
        );
    }

    #[test]
    fn test_table_cells_without_outer_pipes() {
        let line = Line::classify("a | b | c");
        assert_eq!(line.table_cells(), Some(vec!["a", "b", "c"]));
    }

    #[test]
    fn test_table_cells_only_strips_one_pipe_each_side() {
        let line = Line::classify("|| a ||");
        assert_eq!(line.table_cells(), Some(vec!["", "a", ""]));
    }

    #[test]
    fn test_table_cells_none_without_pipe() {
        assert_eq!(Line::classify("no table here").table_cells(), None);
    }

    // ============================================================================
    // tokenize tests
    // ============================================================================

    #[test]
    fn test_tokenize_handles_crlf() {
        let lines = tokenize("# Title\r\n\r\nBody\r\n");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].title_text(), Some("Title"));
        assert!(lines[1].is_blank());
        assert_eq!(lines[2].raw, "Body");
        assert!(lines[3].is_blank());
    }

    #[test]
    fn test_tokenize_empty_document() {
        let lines = tokenize("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_blank());
    }

    // ============================================================================
    // inline helpers tests
    // ============================================================================

    #[test]
    fn test_strip_links() {
        assert_eq!(
            strip_links("See [docs](https://a.b/c) and [repo](x)."),
            "See docs and repo."
        );
        assert_eq!(strip_links("[](empty) stays"), "[](empty) stays");
    }

    #[test]
    fn test_first_link() {
        assert_eq!(
            first_link("[Widget](https://x.io) and [Other](y)"),
            Some(("Widget", "https://x.io"))
        );
        assert_eq!(first_link("Widget"), None);
    }

    #[test]
    fn test_first_code_span() {
        assert_eq!(first_code_span("`org/widget`"), Some("org/widget"));
        assert_eq!(first_code_span("no code"), None);
        assert_eq!(first_code_span("``"), None);
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("Fast. Friendly!  Free?\nYes"),
            vec!["Fast.", "Friendly!", "Free?", "Yes"]
        );
    }

    #[test]
    fn test_split_sentences_keeps_inner_punctuation() {
        assert_eq!(
            split_sentences("Version 1.2 ships today. Enjoy"),
            vec!["Version 1.2 ships today.", "Enjoy"]
        );
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("   ").is_empty());
    }
}
