use crate::prelude::*;
use clap::Parser;

mod error;
mod extract;
mod fetch;
mod page;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Build a friendly landing page from a project's README and LICENSE"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "LANDING_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Fetch README and LICENSE and build the landing page
    Page(crate::page::PageOptions),

    /// Run a single extractor on a local markdown file
    Extract(crate::extract::ExtractOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Page(options) => crate::page::run(options, app.global).await,
        SubCommands::Extract(options) => crate::extract::run(options, app.global).await,
    }
}
