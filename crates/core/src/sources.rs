//! Where README and LICENSE text comes from
//!
//! Pure helpers that turn repository coordinates into the ordered candidate
//! lists the shell walks through: sibling files for a local preview first,
//! then the raw file on GitHub.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const GITHUB_BASE: &str = "https://github.com";
const RAW_GITHUB_BASE: &str = "https://raw.githubusercontent.com";

pub const README_FILE: &str = "README.md";
pub const LICENSE_FILE: &str = "LICENSE.md";

/// GitHub repository coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    pub owner: String,
    pub name: String,
    pub branch: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            owner: "rulingAnts".to_string(),
            name: "flet".to_string(),
            branch: "main".to_string(),
        }
    }
}

impl RepoConfig {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            branch: branch.into(),
        }
    }

    /// Base URL for raw files on the configured branch
    pub fn raw_base(&self) -> String {
        format!(
            "{RAW_GITHUB_BASE}/{}/{}/{}",
            self.owner, self.name, self.branch
        )
    }

    /// Link to the latest release page
    pub fn download_url(&self) -> String {
        format!("{GITHUB_BASE}/{}/{}/releases/latest", self.owner, self.name)
    }

    pub fn readme_sources(&self) -> Vec<Source> {
        self.candidates(README_FILE)
    }

    pub fn license_sources(&self) -> Vec<Source> {
        self.candidates(LICENSE_FILE)
    }

    /// `../FILE` (site served from `docs/`), `./FILE`, then the raw GitHub URL
    fn candidates(&self, file: &str) -> Vec<Source> {
        vec![
            Source::Local(Path::new("..").join(file)),
            Source::Local(Path::new(".").join(file)),
            Source::Remote(format!("{}/{file}", self.raw_base())),
        ]
    }
}

/// A single place to read a document from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Local(PathBuf),
    Remote(String),
}

impl Source {
    /// Parse a user-supplied source: `http(s)://` URLs are remote, anything
    /// else is a filesystem path.
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Source::Remote(input.to_string())
        } else {
            Source::Local(PathBuf::from(input))
        }
    }

    /// Resolve relative local paths against `base_dir`
    pub fn resolve(self, base_dir: &Path) -> Self {
        match self {
            Source::Local(path) if path.is_relative() => Source::Local(base_dir.join(path)),
            other => other,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local(path) => write!(f, "{}", path.display()),
            Source::Remote(url) => write!(f, "{url}"),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Source::parse(s))
    }
}
