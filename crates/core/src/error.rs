//! Error types for document construction

/// Failures raised while turning raw JSON into a [`Document`](crate::adf::Document).
///
/// Unrecognized node types inside a document are never reported here; they are
/// dropped by the builder. Only inputs that cannot be a document container at
/// all surface as errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AdfError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Unsupported body type: {0}")]
    UnsupportedBodyType(&'static str),
}

impl AdfError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        AdfError::MalformedDocument(msg.into())
    }
}
