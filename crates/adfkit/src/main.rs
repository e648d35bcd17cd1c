use crate::prelude::*;
use clap::Parser;

mod adf;
mod atlassian;
mod error;
mod input;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Inspect, normalize and post Atlassian Document Format content"
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
    #[clap(long, env = "ADFKIT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Local ADF document operations (text extraction, rendering, normalization)
    Adf(crate::adf::App),

    /// Jira comment operations
    Jira(crate::atlassian::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Adf(sub_app) => crate::adf::run(sub_app, app.global).await,
        SubCommands::Jira(sub_app) => crate::atlassian::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
