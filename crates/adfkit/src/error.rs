#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Missing configuration: {0} environment variable not set")]
    MissingConfig(&'static str),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Jira API error [{status}]: {body}")]
    Api { status: u16, body: String },

    #[error(transparent)]
    Document(#[from] adfkit_core::AdfError),
}
