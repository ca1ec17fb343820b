use crate::prelude::{eprintln, println, *};
use landing_core::license::classify_license;
use landing_core::readme::{extract_features, extract_title_and_tagline, extract_tools};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Args, Clone)]
pub struct ExtractOptions {
    /// What to extract
    #[arg(value_enum)]
    pub target: Target,

    /// Markdown file to read (default: stdin)
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Title and tagline of a README
    Title,
    /// Feature list of a README
    Features,
    /// Rows of a README's "Ready Tools" table
    Tools,
    /// Summary of a LICENSE
    License,
}

#[derive(Debug, Serialize)]
struct LicenseOutput {
    kind: landing_core::license::LicenseKind,
    summary: String,
}

pub async fn run(options: ExtractOptions, global: crate::Global) -> Result<()> {
    let text = read_input(options.file.as_deref()).await?;

    if global.verbose {
        eprintln!("Read {} characters", text.chars().count());
    }

    println!("{}", extract_json(options.target, &text)?);
    Ok(())
}

async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => tokio::task::spawn_blocking(|| -> Result<String> {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        })
        .await?,
    }
}

/// Run one extractor and render its result as pretty JSON
fn extract_json(target: Target, text: &str) -> Result<String> {
    let json = match target {
        Target::Title => serde_json::to_string_pretty(&extract_title_and_tagline(text)),
        Target::Features => serde_json::to_string_pretty(&extract_features(text)),
        Target::Tools => serde_json::to_string_pretty(&extract_tools(text)),
        Target::License => {
            let kind = classify_license(text);
            serde_json::to_string_pretty(&LicenseOutput {
                summary: kind.description().to_string(),
                kind,
            })
        }
    };

    json.map_err(|e| eyre!("JSON serialization failed: {}", e))
}
