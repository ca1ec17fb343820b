//! Core library for landing
//!
//! This crate implements the **Functional Core** of the landing application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`landing_core`** (this crate): Pure transformation functions with zero I/O
//! - **`landing`**: Fetching README/LICENSE text and printing the page (the Imperative Shell)
//!
//! Every function here is total over arbitrary text: a document without the
//! expected structure degrades to empty lists or documented defaults, never to
//! an error. Calling any function twice with the same input gives the same
//! output.
//!
//! # Module Organization
//!
//! - [`markdown`]: Line scanner that classifies each line once
//! - [`readme`]: Title/tagline, feature list and tool table extraction
//! - [`license`]: License family detection and summaries
//! - [`page`]: Landing page assembly with defaults
//! - [`sources`]: Repository coordinates and candidate document locations
//!
//! # Example Usage
//!
//! ```rust
//! use landing_core::readme::{extract_features, extract_title_and_tagline};
//!
//! let md = "# Flet\n\nBuild apps fast with ease and joy.\n\n## Features\n- Fast setup\n- Friendly UI\n";
//!
//! let heading = extract_title_and_tagline(md);
//! assert_eq!(heading.title, "Flet");
//! assert_eq!(heading.tagline, "Build apps fast with ease and joy.");
//! assert_eq!(extract_features(md), vec!["Fast setup", "Friendly UI"]);
//! ```

pub mod license;
pub mod markdown;
pub mod page;
pub mod readme;
pub mod sources;
