//! Flatten a document into plain text

use serde_json::Value;

use super::builder::build;
use super::node::{Document, Node};

/// Extract plain text from a document
///
/// Each top-level block contributes one line made of the concatenated text of
/// its descendants. Lines are joined with `\n` and the result is trimmed.
pub fn extract_text(doc: &Document) -> String {
    doc.content()
        .iter()
        .map(node_text)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Text of a single node: its literal text, or its children's text concatenated
pub fn node_text(node: &Node) -> String {
    match node.text() {
        Some(text) => text.to_string(),
        None => node.children().iter().map(node_text).collect(),
    }
}

/// Extract plain text from an optional raw body
///
/// Missing or unusable bodies yield an empty string.
pub fn extract_text_from_value(value: Option<&Value>) -> String {
    value
        .and_then(|raw| build(raw).ok())
        .map(|doc| extract_text(&doc))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::content::{bullet_list_from_text, heading, link, paragraph, text, NO_MARKS};
    use crate::adf::node::NodeKind;
    use serde_json::json;

    #[test]
    fn test_extract_two_paragraphs() {
        let doc = Document::new(vec![paragraph("A", NO_MARKS), paragraph("B", NO_MARKS)]);

        assert_eq!(extract_text(&doc), "A\nB");
    }

    #[test]
    fn test_extract_concatenates_inline_runs() {
        // Arrange
        let doc = Document::new(vec![paragraph(
            vec![
                text("Read ", NO_MARKS),
                link("the docs", "https://example.com"),
                text(" now", ["strong"]),
            ],
            NO_MARKS,
        )]);

        // Act
        let result = extract_text(&doc);

        // Assert
        assert_eq!(result, "Read the docs now");
    }

    #[test]
    fn test_extract_nested_blocks_make_one_line_each() {
        let doc = Document::new(vec![
            heading("Title", 1, NO_MARKS),
            bullet_list_from_text(["one", "two"]),
        ]);

        assert_eq!(extract_text(&doc), "Title\nonetwo");
    }

    #[test]
    fn test_extract_trims_result() {
        let doc = Document::new(vec![
            paragraph("  padded", NO_MARKS),
            Node::new(NodeKind::Rule),
            paragraph("end  ", NO_MARKS),
        ]);

        assert_eq!(extract_text(&doc), "padded\n\nend");
    }

    #[test]
    fn test_extract_attrs_only_node_is_empty() {
        let node = Node::new(NodeKind::Mention).with_attr("id", "123");

        assert_eq!(node_text(&node), "");
    }

    #[test]
    fn test_extract_empty_document() {
        assert_eq!(extract_text(&Document::default()), "");
    }

    #[test]
    fn test_extract_from_value() {
        let raw = json!({
            "type": "doc",
            "version": 1,
            "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "kept"}]},
                {"type": "mediaInline", "content": [{"type": "text", "text": "dropped"}]}
            ]
        });

        assert_eq!(extract_text_from_value(Some(&raw)), "kept");
        assert_eq!(extract_text_from_value(Some(&json!("plain"))), "plain");
    }

    #[test]
    fn test_extract_from_missing_or_unusable_value() {
        assert_eq!(extract_text_from_value(None), "");
        assert_eq!(extract_text_from_value(Some(&json!(42))), "");
        assert_eq!(extract_text_from_value(Some(&json!({"foo": "bar"}))), "");
    }
}
