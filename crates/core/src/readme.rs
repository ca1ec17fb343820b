//! README extraction heuristics
//!
//! Pulls the pieces a landing page needs out of free-form README markdown:
//! the title and a one-paragraph tagline, a short feature list, and the rows
//! of the "Ready Tools" table. Every function here is total: a document that
//! lacks the expected structure yields defaults or an empty list.

use serde::{Deserialize, Serialize};

use crate::markdown::{first_code_span, first_link, split_sentences, strip_links, tokenize, Line};

/// Document used when the README could not be loaded at all
pub const DEFAULT_README: &str = "# Flet\n\nA simple, friendly tool.";

pub const DEFAULT_TITLE: &str = "Flet";

pub const DEFAULT_TAGLINE: &str = "A simple, friendly tool designed to help you get things done.";

/// Taglines shorter than this are too terse to show
const MIN_TAGLINE_CHARS: usize = 12;

const FEATURE_SECTION_TITLES: [&str; 5] = [
    "features",
    "key features",
    "highlights",
    "what you can do",
    "benefits",
];

const MAX_FEATURE_ITEMS: usize = 8;
const MAX_FEATURE_SENTENCES: usize = 6;

const TOOLS_SECTION_TITLE: &str = "ready tools";
const GITHUB_BASE: &str = "https://github.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleTagline {
    pub title: String,
    pub tagline: String,
}

/// One row of the "Ready Tools" table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub name: String,
    /// Empty when neither a link nor a `owner/repo` code span was found
    pub url: String,
    pub description: String,
}

/// Extract the project title and tagline.
///
/// The title is the first `# Heading` at column 0, or [`DEFAULT_TITLE`].
/// The tagline is the first paragraph after that heading, with links reduced
/// to their labels. Any line starting with `#` is ignored here, headings or
/// not. Taglines shorter than 12
/// characters are replaced by [`DEFAULT_TAGLINE`]. An empty document is
/// treated as [`DEFAULT_README`].
pub fn extract_title_and_tagline(markdown: &str) -> TitleTagline {
    let markdown = if markdown.is_empty() {
        DEFAULT_README
    } else {
        markdown
    };
    let lines = tokenize(markdown);

    let title_idx = lines.iter().position(|line| line.title_text().is_some());
    let title = title_idx
        .and_then(|idx| lines[idx].title_text())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let start = title_idx.map_or(0, |idx| idx + 1);
    let paragraph: Vec<&str> = lines[start..]
        .iter()
        .filter(|line| !line.raw.trim_start().starts_with('#'))
        .skip_while(|line| line.is_blank())
        .take_while(|line| !line.is_blank())
        .map(|line| line.raw)
        .collect();

    let mut tagline = strip_links(paragraph.join(" ").trim());
    if tagline.chars().count() < MIN_TAGLINE_CHARS {
        tagline = DEFAULT_TAGLINE.to_string();
    }

    TitleTagline { title, tagline }
}

fn is_feature_section(heading: &str) -> bool {
    let heading = heading.to_lowercase();
    FEATURE_SECTION_TITLES
        .iter()
        .any(|needle| heading.contains(needle))
}

/// Extract up to eight feature descriptions.
///
/// Looks for the first level 2-6 heading naming a features section and
/// collects its bullet items. A section written as prose is split into at
/// most six sentences instead, ignoring empty list markers. Returns an empty list when there is no such
/// section; callers provide their own defaults.
pub fn extract_features(markdown: &str) -> Vec<String> {
    let lines = tokenize(markdown);

    let Some(start) = lines.iter().position(|line| {
        line.heading_text(2..=6)
            .is_some_and(is_feature_section)
    }) else {
        return Vec::new();
    };

    let section: Vec<&Line> = lines[start + 1..]
        .iter()
        .take_while(|line| !line.is_heading())
        .collect();

    let items: Vec<String> = section
        .iter()
        .filter_map(|line| line.bullet_text())
        .map(|text| strip_links(text).trim().to_string())
        .take(MAX_FEATURE_ITEMS)
        .collect();

    if !items.is_empty() {
        return items;
    }

    let paragraph: Vec<&str> = section
        .iter()
        .filter(|line| !line.is_bare_marker())
        .skip_while(|line| line.is_blank())
        .take_while(|line| !line.is_blank())
        .map(|line| line.raw)
        .collect();

    split_sentences(&strip_links(&paragraph.join(" ")))
        .into_iter()
        .take(MAX_FEATURE_SENTENCES)
        .collect()
}

/// Extract the rows of the table under the "Ready Tools" heading.
///
/// Rows need at least three cells: name (optionally a link), repository
/// (optionally a `` `owner/repo` `` code span used when the name has no
/// link) and description. Shorter rows are skipped. The table ends at the
/// first line without a pipe.
pub fn extract_tools(markdown: &str) -> Vec<ToolRecord> {
    let lines = tokenize(markdown);

    let Some(start) = lines.iter().position(|line| {
        line.heading_text(2..=2)
            .is_some_and(|text| text.to_lowercase().contains(TOOLS_SECTION_TITLE))
    }) else {
        return Vec::new();
    };

    let Some(header) = lines[start + 1..]
        .iter()
        .position(Line::has_pipe)
        .map(|offset| start + 1 + offset)
    else {
        return Vec::new();
    };

    // Skip the header row and the separator row
    lines
        .iter()
        .skip(header + 2)
        .map_while(Line::table_cells)
        .filter_map(|cells| parse_tool_row(&cells))
        .collect()
}

fn parse_tool_row(cells: &[&str]) -> Option<ToolRecord> {
    let [name_cell, repo_cell, description_cell, ..] = cells else {
        return None;
    };

    let (name, mut url) = match first_link(name_cell) {
        Some((label, target)) => (label.to_string(), target.to_string()),
        None => (name_cell.to_string(), String::new()),
    };

    if url.is_empty() {
        if let Some(repo) = first_code_span(repo_cell) {
            url = format!("{GITHUB_BASE}/{repo}");
        }
    }

    let description = description_cell.replace("**", "").replace('`', "");

    Some(ToolRecord {
        name,
        url,
        description,
    })
}
