//! List and add Jira comments

use std::path::PathBuf;

use adfkit_core::adf::Document;
use adfkit_core::atlassian::jira::{
    comment_payload, text_to_document, transform_comment, transform_comments, CommentOutput,
    CommentsOutput, JiraComment, JiraCommentsResponse,
};
use colored::Colorize;

use super::{create_jira_client, ensure_success, JiraConfig};
use crate::input::load_document;
use crate::prelude::{println, *};

/// Options for listing comments
#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Issue key (e.g., "PROJ-123")
    #[clap(env = "JIRA_ISSUE_KEY")]
    pub issue_key: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Options for adding a comment
#[derive(Debug, clap::Args, Clone)]
pub struct AddOptions {
    /// Issue key (e.g., "PROJ-123")
    pub issue_key: String,

    /// Comment text, one paragraph per line
    #[arg(required_unless_present = "adf")]
    pub text: Option<String>,

    /// Read the comment body from an ADF JSON file instead ("-" for stdin)
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub adf: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AddOptions {
    fn document(&self) -> Result<Document> {
        match (&self.adf, &self.text) {
            (Some(path), _) => load_document(Some(path.as_path()), false),
            (None, Some(text)) => Ok(text_to_document(text)),
            (None, None) => Err(eyre!("Either comment text or --adf must be provided")),
        }
    }
}

fn comments_url(config: &JiraConfig, issue_key: &str) -> String {
    format!(
        "{}/rest/api/3/issue/{}/comment",
        config.api_base(),
        urlencoding::encode(issue_key)
    )
}

/// Fetch all comments of an issue
pub async fn list_comments_data(config: &JiraConfig, issue_key: &str) -> Result<CommentsOutput> {
    let client = create_jira_client(config)?;
    let url = comments_url(config, issue_key);
    log::debug!("GET {url}");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;
    let response = ensure_success(response).await?;

    let raw = response
        .json::<JiraCommentsResponse>()
        .await
        .map_err(|e| eyre!("Failed to parse Jira comments: {}", e))?;

    Ok(transform_comments(raw))
}

/// Post a new comment and return it as Jira stored it
pub async fn add_comment_data(
    config: &JiraConfig,
    issue_key: &str,
    body: &Document,
) -> Result<CommentOutput> {
    if body.is_empty() {
        return Err(eyre!("Refusing to post a comment with an empty body"));
    }

    let client = create_jira_client(config)?;
    let url = comments_url(config, issue_key);
    log::debug!("POST {url}");

    let response = client
        .post(&url)
        .json(&comment_payload(body))
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;
    let response = ensure_success(response).await?;

    let created = response
        .json::<JiraComment>()
        .await
        .map_err(|e| eyre!("Failed to parse created comment: {}", e))?;

    Ok(transform_comment(created))
}

fn display_comment(comment: &CommentOutput) {
    let author = comment.author.as_deref().unwrap_or("Unknown");
    let created = comment.created.as_deref().unwrap_or_default();

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Id".bold().cyan(),
        comment.id.bright_white().to_string()
    ]);
    table.add_row(prettytable::row![
        "Author".bold().cyan(),
        author.green().to_string()
    ]);
    table.add_row(prettytable::row![
        "Created".bold().cyan(),
        created.to_string()
    ]);
    table.printstd();

    println!("{}\n", comment.rendered);
}

/// Handle the comments command
pub async fn list_handler(config: &JiraConfig, options: ListOptions) -> Result<()> {
    let output = list_comments_data(config, &options.issue_key).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "\n{} - {} comment(s)\n",
        options.issue_key.bold().cyan(),
        output.total
    );
    for comment in &output.comments {
        display_comment(comment);
    }

    Ok(())
}

/// Handle the comment command
pub async fn add_handler(config: &JiraConfig, options: AddOptions) -> Result<()> {
    let body = options.document()?;
    let created = add_comment_data(config, &options.issue_key, &body).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!(
            "\n{} Added comment to {}\n",
            "✓".green(),
            options.issue_key.bold().cyan()
        );
        display_comment(&created);
    }

    Ok(())
}
