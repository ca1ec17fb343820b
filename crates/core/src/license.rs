//! License text classification
//!
//! Detection is a case-insensitive keyword search over the whole text, checked
//! in a fixed order. The first family that matches wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static APACHE_2_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)apache\s*2").expect("apache regex"));

static HEADING_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\s+").expect("heading marker regex"));

pub const MIT_SUMMARY: &str =
    "MIT License – free to use, copy, modify, and distribute with proper attribution.";
pub const APACHE_2_SUMMARY: &str = "Apache 2.0 – permissive license with explicit patent rights.";
pub const GPL_SUMMARY: &str = "GPL – strong copyleft license ensuring derivative works remain open.";
pub const BSD_SUMMARY: &str = "BSD – permissive, minimal restrictions on use and distribution.";
pub const MPL_SUMMARY: &str = "MPL – file-level copyleft with flexibility for larger projects.";
pub const DEFAULT_LICENSE_SUMMARY: &str = "Open-source license – see full text below for details.";

/// License family detected in a license text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseKind {
    Mit,
    Apache2,
    Gpl,
    Bsd,
    Mpl,
    /// Unrecognised license, carrying the best-effort summary
    Other(String),
}

impl LicenseKind {
    /// Human-friendly one-line description
    pub fn description(&self) -> &str {
        match self {
            LicenseKind::Mit => MIT_SUMMARY,
            LicenseKind::Apache2 => APACHE_2_SUMMARY,
            LicenseKind::Gpl => GPL_SUMMARY,
            LicenseKind::Bsd => BSD_SUMMARY,
            LicenseKind::Mpl => MPL_SUMMARY,
            LicenseKind::Other(summary) => summary.as_str(),
        }
    }
}

/// Classify a license text.
///
/// Checks run in order MIT, Apache 2, GPL, BSD, MPL. Note that the MIT check
/// is a plain substring test, so any text containing "mit" (for example
/// "permitted") is reported as MIT.
pub fn classify_license(text: &str) -> LicenseKind {
    let lower = text.to_lowercase();

    if lower.contains("mit") {
        LicenseKind::Mit
    } else if APACHE_2_REGEX.is_match(text) {
        LicenseKind::Apache2
    } else if lower.contains("gpl") {
        LicenseKind::Gpl
    } else if lower.contains("bsd") {
        LicenseKind::Bsd
    } else if lower.contains("mozilla public license") || lower.contains("mpl") {
        LicenseKind::Mpl
    } else {
        LicenseKind::Other(first_line_summary(text))
    }
}

/// First non-blank line without its `# ` marker, or the generic summary
fn first_line_summary(text: &str) -> String {
    let first = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or_default();
    let guess = HEADING_MARKER_REGEX.replace(first, "");
    let guess = guess.trim();

    if guess.is_empty() {
        DEFAULT_LICENSE_SUMMARY.to_string()
    } else {
        guess.to_string()
    }
}

/// One-line summary of a license text. Never empty.
pub fn summarize_license(text: &str) -> String {
    classify_license(text).description().to_string()
}
