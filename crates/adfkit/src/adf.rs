use std::path::PathBuf;

use adfkit_core::adf::{extract_text, render_markdown, serialize, Document};

use crate::input::load_document;
use crate::prelude::{eprintln, println, *};

/// ADF module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "adf")]
#[command(about = "Local Atlassian Document Format operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Print the plain text of a document, one line per top-level block
    #[clap(name = "text")]
    Text(InputOptions),

    /// Print a readable, Markdown-flavoured rendering of a document
    #[clap(name = "render")]
    Render(InputOptions),

    /// Print the document as JSON with unsupported nodes removed
    #[clap(name = "normalize")]
    Normalize(InputOptions),
}

/// Where to read the document from
#[derive(Debug, Clone, clap::Args)]
pub struct InputOptions {
    /// Path to a JSON document (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Treat the input as plain text instead of JSON
    #[arg(long)]
    pub plain: bool,
}

impl InputOptions {
    fn load(&self) -> Result<Document> {
        load_document(self.file.as_deref(), self.plain)
    }
}

/// Module entry point
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Running ADF command...");
    }

    match app.command {
        Commands::Text(options) => {
            let document = options.load()?;
            println!("{}", extract_text(&document));
        }
        Commands::Render(options) => {
            let document = options.load()?;
            println!("{}", render_markdown(&document));
        }
        Commands::Normalize(options) => {
            let document = options.load()?;
            println!("{}", serde_json::to_string_pretty(&serialize(&document))?);
        }
    }

    Ok(())
}
