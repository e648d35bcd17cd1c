use crate::prelude::{eprintln, *};

pub mod comment;

/// Jira module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "jira")]
#[command(about = "Jira comment operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Jira base URL (overrides ATLASSIAN_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List the comments of an issue as plain text
    #[clap(name = "comments")]
    Comments(comment::ListOptions),

    /// Add a comment to an issue
    #[clap(name = "comment")]
    Comment(comment::AddOptions),
}

/// Jira configuration from environment variables
#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

impl JiraConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: require_env("ATLASSIAN_BASE_URL")?,
            email: require_env("ATLASSIAN_EMAIL")?,
            api_token: require_env("ATLASSIAN_API_TOKEN")?,
        })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    /// Base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

fn require_env(name: &'static str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::MissingConfig(name).into())
}

/// Create an authenticated HTTP client with Basic Auth headers
pub fn create_jira_client(config: &JiraConfig) -> Result<reqwest::Client> {
    use base64::Engine;
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

    let auth_string = format!("{}:{}", config.email, config.api_token);
    let auth_encoded = base64::engine::general_purpose::STANDARD.encode(&auth_string);

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Basic {auth_encoded}"))
            .map_err(|e| eyre!("Invalid header value: {}", e))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Turn a non-success response into an API error
pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(api_error(status.as_u16(), response.text().await).into())
}

fn api_error(status: u16, body: std::result::Result<String, reqwest::Error>) -> Error {
    let body = body.unwrap_or_else(|e| {
        log::debug!("Failed to read error body for HTTP {status}: {e}");
        String::new()
    });
    Error::Api { status, body }
}

/// Module entry point
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Running Jira command...");
    }

    let config = JiraConfig::from_env()?.with_overrides(app.base_url);

    match app.command {
        Commands::Comments(options) => comment::list_handler(&config, options).await,
        Commands::Comment(options) => comment::add_handler(&config, options).await,
    }
}
