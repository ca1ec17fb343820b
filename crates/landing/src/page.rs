use crate::prelude::{eprintln, print, println, *};
use chrono::Datelike;
use colored::Colorize;
use landing_core::page::{build_page, LandingPage};
use landing_core::sources::{RepoConfig, Source};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::fetch::{create_client, fetch_or_empty};

#[derive(Debug, clap::Args, Clone)]
pub struct PageOptions {
    /// GitHub owner of the repository
    #[arg(long, env = "LANDING_OWNER", default_value = "rulingAnts")]
    pub owner: String,

    /// GitHub repository name
    #[arg(long = "repo", env = "LANDING_REPO", default_value = "flet")]
    pub name: String,

    /// Branch to read raw files from
    #[arg(long, env = "LANDING_BRANCH", default_value = "main")]
    pub branch: String,

    /// Directory relative local sources are resolved against
    #[arg(long, env = "LANDING_BASE_DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// README source (path or URL). Repeat to add fallbacks; replaces the defaults
    #[arg(long = "readme", value_name = "SOURCE")]
    pub readme: Vec<Source>,

    /// LICENSE source (path or URL). Repeat to add fallbacks; replaces the defaults
    #[arg(long = "license", value_name = "SOURCE")]
    pub license: Vec<Source>,

    /// Timeout in seconds for remote sources (default: 10)
    #[arg(short, long, env = "LANDING_TIMEOUT", default_value = "10")]
    pub timeout: u64,

    /// Footer year (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Expand the full README below the summary
    #[arg(long)]
    pub details: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PageOptions {
    fn repo(&self) -> RepoConfig {
        RepoConfig::new(&self.owner, &self.name, &self.branch)
    }
}

/// User-supplied sources win over the repository defaults
fn resolve_sources(overrides: &[Source], defaults: Vec<Source>, base_dir: &Path) -> Vec<Source> {
    let sources = if overrides.is_empty() {
        defaults
    } else {
        overrides.to_vec()
    };

    sources
        .into_iter()
        .map(|source| source.resolve(base_dir))
        .collect()
}

pub async fn run(options: PageOptions, global: crate::Global) -> Result<()> {
    let mut page = build_page_data(&options, &global).await?;
    if options.details {
        page.readme.toggle = page.readme.toggle.toggle();
    }

    if options.json {
        output_json(&page)?;
    } else {
        output_formatted(&page);
    }

    Ok(())
}

/// Fetch README and LICENSE concurrently and assemble the page
pub async fn build_page_data(options: &PageOptions, global: &crate::Global) -> Result<LandingPage> {
    let repo = options.repo();
    let readme_sources = resolve_sources(&options.readme, repo.readme_sources(), &options.base_dir);
    let license_sources =
        resolve_sources(&options.license, repo.license_sources(), &options.base_dir);

    if global.verbose {
        eprintln!("README candidates:");
        for source in &readme_sources {
            eprintln!("  {source}");
        }
        eprintln!("LICENSE candidates:");
        for source in &license_sources {
            eprintln!("  {source}");
        }
        eprintln!();
    }

    let client = create_client(options.timeout)?;
    let (readme, license) = futures::future::join(
        fetch_or_empty(&client, "README", &readme_sources),
        fetch_or_empty(&client, "LICENSE", &license_sources),
    )
    .await;

    let year = options
        .year
        .unwrap_or_else(|| chrono::Local::now().year());

    Ok(build_page(&readme, &license, &repo, year))
}

/// Formats the page as JSON string
fn format_output_json(page: &LandingPage) -> Result<String> {
    serde_json::to_string_pretty(page).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Plain rendering used when stdout is piped
fn format_page_plain(page: &LandingPage) -> String {
    let mut result = String::new();

    result.push_str(&format!("{}\n{}\n", page.title, page.tagline));

    result.push_str("\nFeatures\n");
    for card in &page.features {
        result.push_str(&format!("- {}: {}\n", card.title, card.text));
    }

    if page.show_tools {
        result.push_str("\nTools\n");
        for tool in &page.tools {
            if tool.url.is_empty() {
                result.push_str(&format!("- {}: {}\n", tool.name, tool.description));
            } else {
                result.push_str(&format!(
                    "- {} <{}>: {}\n",
                    tool.name, tool.url, tool.description
                ));
            }
        }
    }

    result.push_str(&format!("\nLicense\n{}\n", page.license.summary));
    result.push_str(&format!("\nDownload\n{}\n", page.download_url));

    if !page.readme.toggle.is_hidden() {
        result.push_str(&format!("\nDetails\n{}\n", page.readme.display_text()));
    }

    result
}

/// Decorated rendering for terminals
fn format_page_text(page: &LandingPage) -> String {
    let mut result = String::new();

    // Header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", page.document_title.bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!(
        "\n{}: {}\n",
        "Title".green(),
        page.title.bright_white().bold()
    ));
    result.push_str(&format!("{}: {}\n", "Tagline".green(), page.tagline));
    result.push_str(&format!(
        "{}: {}\n",
        "Download".green(),
        page.download_url.cyan().underline()
    ));

    // Features
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_magenta()));
    result.push_str(&format!("{}\n", "FEATURES".bright_magenta().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_magenta()));
    if page.features_are_defaults {
        result.push_str(&format!(
            "{}\n",
            "(no features section found, showing defaults)".dimmed()
        ));
    }
    for card in &page.features {
        result.push_str(&format!(
            "\n{}\n  {}\n",
            card.title.bright_white().bold(),
            card.text
        ));
    }

    // Tools
    if page.show_tools {
        result.push_str(&format!("\n{}\n", "=".repeat(80).bright_magenta()));
        result.push_str(&format!("{}\n", "TOOLS".bright_magenta().bold()));
        result.push_str(&format!("{}\n", "=".repeat(80).bright_magenta()));

        let mut table = new_table();
        table.add_row(prettytable::row!["NAME", "URL", "DESCRIPTION"]);
        for tool in &page.tools {
            table.add_row(prettytable::row![tool.name, tool.url, tool.description]);
        }
        result.push_str(&format!("\n{table}"));
    }

    // License
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "LICENSE".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("\n{}\n", page.license.summary.bright_white()));

    // Full README stays collapsed until asked for
    if page.readme.toggle.is_hidden() {
        result.push_str(&format!(
            "\n{}: {}\n",
            page.readme.toggle.button_label().bright_white().bold(),
            "landing page --details".cyan()
        ));
    } else {
        result.push_str(&format!("\n{}\n", "=".repeat(80).bright_blue()));
        result.push_str(&format!("{}\n", "DETAILS".bright_blue().bold()));
        result.push_str(&format!("{}\n", "=".repeat(80).bright_blue()));
        result.push_str(&format!("\n{}\n", page.readme.display_text()));
        result.push_str(&format!(
            "\n{}\n",
            page.readme.toggle.button_label().dimmed()
        ));
    }
    result.push_str(&format!("\n{} {}\n", "©".dimmed(), page.year));

    result
}

fn output_json(page: &LandingPage) -> Result<()> {
    let json = format_output_json(page)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(page: &LandingPage) {
    if std::io::stdout().is_terminal() {
        print!("{}", format_page_text(page));
    } else {
        print!("{}", format_page_plain(page));
    }
}
