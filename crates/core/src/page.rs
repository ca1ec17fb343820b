//! Landing page model
//!
//! Combines the README and LICENSE extractions into everything a renderer
//! needs, including the defaults used when the documents don't provide
//! enough material.

use serde::{Deserialize, Serialize};

use crate::license::summarize_license;
use crate::readme::{extract_features, extract_title_and_tagline, extract_tools, ToolRecord};
use crate::sources::RepoConfig;

pub const DEFAULT_FEATURES: [&str; 4] = [
    "Fast to get started – no complex setup needed.",
    "Clear, friendly interface designed for everyone.",
    "Works on your computer with minimal fuss.",
    "Open-source and free to use.",
];

/// Card headings, assigned to features in rotation
pub const FEATURE_CARD_TITLES: [&str; 8] = [
    "Easy to Start",
    "Friendly UI",
    "Reliable",
    "Open & Free",
    "Powerful",
    "Flexible",
    "Private by Design",
    "Works Offline",
];

pub const DOCUMENT_TITLE_SUFFIX: &str = "Simple, Friendly App Tool";
pub const LICENSE_UNAVAILABLE: &str = "License text unavailable.";
pub const README_UNAVAILABLE: &str = "No additional details available.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseSection {
    pub summary: String,
    pub full_text: String,
}

/// Visibility of the full README below the fold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadmeToggle {
    #[default]
    Collapsed,
    Expanded,
}

impl ReadmeToggle {
    pub fn toggle(self) -> Self {
        match self {
            ReadmeToggle::Collapsed => ReadmeToggle::Expanded,
            ReadmeToggle::Expanded => ReadmeToggle::Collapsed,
        }
    }

    /// Label for the button that flips the state
    pub fn button_label(self) -> &'static str {
        match self {
            ReadmeToggle::Collapsed => "Show Full Details",
            ReadmeToggle::Expanded => "Hide Full Details",
        }
    }

    pub fn is_hidden(self) -> bool {
        matches!(self, ReadmeToggle::Collapsed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeSection {
    /// Raw README markdown, `None` when it could not be loaded
    pub body: Option<String>,
    pub toggle: ReadmeToggle,
}

impl ReadmeSection {
    pub fn display_text(&self) -> &str {
        self.body.as_deref().unwrap_or(README_UNAVAILABLE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingPage {
    pub title: String,
    pub document_title: String,
    pub tagline: String,
    pub features: Vec<FeatureCard>,
    /// True when the README had no usable features section
    pub features_are_defaults: bool,
    pub tools: Vec<ToolRecord>,
    /// The tools section is hidden when no tools were found
    pub show_tools: bool,
    pub license: LicenseSection,
    pub readme: ReadmeSection,
    pub year: i32,
    pub download_url: String,
}

/// Build feature cards, substituting [`DEFAULT_FEATURES`] for an empty list.
///
/// Returns the cards and whether the defaults were used.
pub fn feature_cards(features: Vec<String>) -> (Vec<FeatureCard>, bool) {
    let used_defaults = features.is_empty();
    let texts = if used_defaults {
        DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect()
    } else {
        features
    };

    let cards = texts
        .into_iter()
        .enumerate()
        .map(|(idx, text)| FeatureCard {
            title: FEATURE_CARD_TITLES[idx % FEATURE_CARD_TITLES.len()].to_string(),
            text,
        })
        .collect();

    (cards, used_defaults)
}

/// Assemble the landing page from README and LICENSE text.
///
/// Either text may be empty when it could not be loaded.
pub fn build_page(readme: &str, license: &str, repo: &RepoConfig, year: i32) -> LandingPage {
    let heading = extract_title_and_tagline(readme);
    let (features, features_are_defaults) = feature_cards(extract_features(readme));
    let tools = extract_tools(readme);

    let license = LicenseSection {
        summary: summarize_license(license),
        full_text: if license.is_empty() {
            LICENSE_UNAVAILABLE.to_string()
        } else {
            license.to_string()
        },
    };

    let readme = ReadmeSection {
        body: (!readme.is_empty()).then(|| readme.to_string()),
        toggle: ReadmeToggle::default(),
    };

    LandingPage {
        document_title: format!("{} – {DOCUMENT_TITLE_SUFFIX}", heading.title),
        title: heading.title,
        tagline: heading.tagline,
        features,
        features_are_defaults,
        show_tools: !tools.is_empty(),
        tools,
        license,
        readme,
        year,
        download_url: repo.download_url(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const README: &str = "# Rocket\n\nLaunch things into orbit quickly.\n\n## Features\n- Fast\n- Safe\n\n## Ready Tools\n| Tool | Repo | Description |\n|---|---|---|\n| Pad | `acme/pad` | Launch **pad** |\n";

    // ============================================================================
    // build_page tests
    // ============================================================================

    #[test]
    fn test_build_page_from_readme_and_license() {
        let page = build_page(README, "MIT License", &RepoConfig::default(), 2026);

        assert_eq!(page.title, "Rocket");
        assert_eq!(page.document_title, "Rocket – Simple, Friendly App Tool");
        assert_eq!(page.tagline, "Launch things into orbit quickly.");
        assert_eq!(
            page.features,
            vec![
                FeatureCard {
                    title: "Easy to Start".to_string(),
                    text: "Fast".to_string()
                },
                FeatureCard {
                    title: "Friendly UI".to_string(),
                    text: "Safe".to_string()
                },
            ]
        );
        assert!(!page.features_are_defaults);
        assert!(page.show_tools);
        assert_eq!(page.tools[0].url, "https://github.com/acme/pad");
        assert_eq!(page.tools[0].description, "Launch pad");
        assert_eq!(page.license.summary, crate::license::MIT_SUMMARY);
        assert_eq!(page.license.full_text, "MIT License");
        assert_eq!(page.readme.body.as_deref(), Some(README));
        assert_eq!(page.year, 2026);
        assert_eq!(
            page.download_url,
            "https://github.com/rulingAnts/flet/releases/latest"
        );
    }

    #[test]
    fn test_build_page_with_nothing_loaded() {
        let page = build_page("", "", &RepoConfig::default(), 2026);

        assert_eq!(page.title, "Flet");
        assert_eq!(page.tagline, "A simple, friendly tool.");
        assert!(page.features_are_defaults);
        assert_eq!(page.features.len(), DEFAULT_FEATURES.len());
        assert!(!page.show_tools);
        assert!(page.tools.is_empty());
        assert_eq!(
            page.license.summary,
            crate::license::DEFAULT_LICENSE_SUMMARY
        );
        assert_eq!(page.license.full_text, LICENSE_UNAVAILABLE);
        assert_eq!(page.readme.body, None);
        assert_eq!(page.readme.display_text(), README_UNAVAILABLE);
        assert!(page.readme.toggle.is_hidden());
    }

    #[test]
    fn test_build_page_serializes() {
        let page = build_page(README, "", &RepoConfig::default(), 2026);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["title"], "Rocket");
        assert_eq!(json["readme"]["toggle"], "collapsed");
        assert_eq!(json["tools"][0]["name"], "Pad");
        assert_eq!(json["show_tools"], true);
    }

    // ============================================================================
    // feature_cards tests
    // ============================================================================

    #[test]
    fn test_feature_cards_defaults() {
        let (cards, used_defaults) = feature_cards(Vec::new());
        assert!(used_defaults);
        assert_eq!(cards[0].text, DEFAULT_FEATURES[0]);
        assert_eq!(cards[3].title, "Open & Free");
    }

    #[test]
    fn test_feature_cards_titles_rotate() {
        let features = (0..10).map(|i| format!("feature {i}")).collect();
        let (cards, used_defaults) = feature_cards(features);
        assert!(!used_defaults);
        assert_eq!(cards[7].title, "Works Offline");
        assert_eq!(cards[8].title, "Easy to Start");
        assert_eq!(cards[9].title, "Friendly UI");
    }

    // ============================================================================
    // ReadmeToggle tests
    // ============================================================================

    #[test]
    fn test_toggle_round_trip() {
        let toggle = ReadmeToggle::default();
        assert_eq!(toggle, ReadmeToggle::Collapsed);
        assert_eq!(toggle.button_label(), "Show Full Details");

        let expanded = toggle.toggle();
        assert!(!expanded.is_hidden());
        assert_eq!(expanded.button_label(), "Hide Full Details");
        assert_eq!(expanded.toggle(), ReadmeToggle::Collapsed);
    }
}
