//! Transformation functions for Jira comment payloads

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::adf::content::{paragraph, NO_MARKS};
use crate::adf::{build, extract_text, render_markdown, Document, Node, NodeKind};

/// Jira user reference
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct JiraAuthor {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "emailAddress", default)]
    pub email_address: Option<String>,
}

/// Comment on a Jira ticket
#[derive(Debug, Serialize, Clone, Deserialize, PartialEq)]
pub struct JiraComment {
    #[serde(rename = "id")]
    pub comment_id: String,
    /// ADF object (API v3) or plain string (API v2)
    #[serde(default)]
    pub body: Value,
    #[serde(rename = "created", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub author: Option<JiraAuthor>,
}

/// Response from GET /rest/api/3/issue/{key}/comment
#[derive(Debug, Deserialize, Clone)]
pub struct JiraCommentsResponse {
    #[serde(default)]
    pub comments: Vec<JiraComment>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    #[serde(rename = "startAt")]
    pub start_at: Option<u64>,
    #[serde(default)]
    #[serde(rename = "maxResults")]
    pub max_results: Option<u64>,
}

/// Output structure for a single comment
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CommentOutput {
    pub id: String,
    pub author: Option<String>,
    pub created: Option<String>,
    /// Plain text, one line per top-level block
    pub body: String,
    /// Markdown-flavoured rendering for display
    pub rendered: String,
}

/// Output structure for the comments command
#[derive(Debug, Serialize, PartialEq)]
pub struct CommentsOutput {
    pub comments: Vec<CommentOutput>,
    pub total: usize,
}

/// Build the document behind a comment body, if the body is usable
fn comment_document(body: &Value) -> Option<Document> {
    match build(body) {
        Ok(doc) => Some(doc),
        Err(e) => {
            log::debug!("ignoring unusable comment body: {e}");
            None
        }
    }
}

/// Extract plain text from a raw comment body
///
/// # Returns
/// * `String` - Extracted text, empty when the body is missing or unusable
pub fn comment_body_text(body: &Value) -> String {
    comment_document(body)
        .map(|doc| extract_text(&doc))
        .unwrap_or_default()
}

/// Convert a Jira comment to its output form
pub fn transform_comment(comment: JiraComment) -> CommentOutput {
    let doc = comment_document(&comment.body);

    // Prefer displayName over emailAddress for author
    let author = comment
        .author
        .and_then(|a| a.display_name.or(a.email_address));

    CommentOutput {
        id: comment.comment_id,
        author,
        created: comment.created_at,
        body: doc.as_ref().map(extract_text).unwrap_or_default(),
        rendered: doc.as_ref().map(render_markdown).unwrap_or_default(),
    }
}

/// Convert Jira comments response to domain model
pub fn transform_comments(response: JiraCommentsResponse) -> CommentsOutput {
    let comments: Vec<CommentOutput> = response
        .comments
        .into_iter()
        .map(transform_comment)
        .collect();

    let total = response
        .total
        .map(|t| t as usize)
        .unwrap_or(comments.len());

    CommentsOutput { comments, total }
}

/// Build a comment document from plain text, one paragraph per line
///
/// Blank lines become empty paragraphs so the spacing survives in Jira.
pub fn text_to_document(text: &str) -> Document {
    let blocks = text
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                Node::new(NodeKind::Paragraph).with_content(Vec::new())
            } else {
                paragraph(line, NO_MARKS)
            }
        })
        .collect();
    Document::new(blocks)
}

/// Request body for POST /rest/api/3/issue/{key}/comment
pub fn comment_payload(body: &Document) -> Value {
    json!({ "body": body.to_value() })
}
