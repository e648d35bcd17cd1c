//! Build a typed [`Document`] from untyped JSON
//!
//! The builder is total over document-shaped input: a node whose `type` is not
//! recognized is dropped together with its whole subtree, even when some of
//! its descendants are of recognized types. Errors are reserved for inputs
//! that cannot be a document container at all.

use std::num::NonZeroU32;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::node::{Document, Mark, MarkKind, Node, NodeKind};
use crate::error::AdfError;

/// Build a document from a decoded JSON value
///
/// Accepted shapes:
/// - an object with `type: "doc"`, an optional positive integer `version`
///   (defaults to 1) and an optional `content` array
/// - an object with any other string `type`, which yields an empty document
/// - an array, treated as the document's top-level content
/// - a string, wrapped into a single paragraph
///
/// # Errors
/// * `UnsupportedBodyType` for numbers, booleans and `null`
/// * `MalformedDocument` when the root object lacks a usable `type`, or its
///   `version`/`content` fields have the wrong shape
pub fn build(raw: &Value) -> Result<Document, AdfError> {
    match raw {
        Value::Object(map) => build_document(map),
        Value::Array(items) => Ok(Document::new(build_children(items))),
        Value::String(text) => Ok(Document::from_text(text)),
        other => Err(AdfError::UnsupportedBodyType(json_kind(other))),
    }
}

/// Build a document from any serializable value
///
/// The value is first normalized into plain JSON, so structs that serialize
/// to the ADF shape (including [`Document`] itself) are accepted the same way
/// as parsed JSON.
pub fn build_from<T: Serialize + ?Sized>(value: &T) -> Result<Document, AdfError> {
    let raw = serde_json::to_value(value).map_err(|e| AdfError::malformed(e.to_string()))?;
    build(&raw)
}

fn build_document(map: &Map<String, Value>) -> Result<Document, AdfError> {
    let doc_type = match map.get("type") {
        Some(Value::String(doc_type)) => doc_type,
        Some(other) => {
            return Err(AdfError::malformed(format!(
                "root `type` must be a string, got {}",
                json_kind(other)
            )))
        }
        None => return Err(AdfError::malformed("missing `type` at document root")),
    };

    if doc_type != "doc" {
        log::debug!("root node type `{doc_type}` is not a document, building an empty one");
        return Ok(Document::default());
    }

    let version = match map.get("version") {
        None => NonZeroU32::MIN,
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                AdfError::malformed(format!("`version` must be a positive integer, got {value}"))
            })?,
    };

    let content = match map.get("content") {
        None => Vec::new(),
        Some(Value::Array(items)) => build_children(items),
        Some(other) => {
            return Err(AdfError::malformed(format!(
                "document `content` must be an array, got {}",
                json_kind(other)
            )))
        }
    };

    Ok(Document::new(content).with_version(version))
}

fn build_children(items: &[Value]) -> Vec<Node> {
    items.iter().filter_map(build_node).collect()
}

/// Returns `None` when the node (and therefore its subtree) must be dropped.
fn build_node(value: &Value) -> Option<Node> {
    let map = value.as_object()?;
    let name = map.get("type").and_then(Value::as_str)?;

    let Some(kind) = NodeKind::from_type(name) else {
        log::debug!("dropping unrecognized node type `{name}`");
        return None;
    };

    let mut node = Node::new(kind);

    if let Some(attrs) = map.get("attrs").and_then(Value::as_object) {
        node = node.with_attrs(attrs.clone());
    }
    if let Some(items) = map.get("content").and_then(Value::as_array) {
        node = node.with_content(build_children(items));
    }
    if let Some(marks) = map.get("marks").and_then(Value::as_array) {
        node = node.with_marks(marks.iter().filter_map(build_mark).collect());
    }
    if let Some(text) = map.get("text").and_then(Value::as_str) {
        node = node.with_text(text);
    }

    Some(node)
}

pub(crate) fn build_mark(value: &Value) -> Option<Mark> {
    let map = value.as_object()?;
    let name = map.get("type").and_then(Value::as_str)?;

    let mark = Mark::new(MarkKind::from_type(name));
    Some(match map.get("attrs").and_then(Value::as_object) {
        Some(attrs) => mark.with_attrs(attrs.clone()),
        None => mark,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        build(&raw).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&Value> for Document {
    type Error = AdfError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        build(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn paragraph_json(text: &str) -> Value {
        json!({
            "type": "paragraph",
            "content": [{"type": "text", "text": text}]
        })
    }

    #[test]
    fn test_build_supported_nodes() {
        // Arrange
        let raw = json!({
            "version": 1,
            "type": "doc",
            "content": [paragraph_json("Hello world")]
        });

        // Act
        let doc = build(&raw).unwrap();

        // Assert
        assert_eq!(doc.version(), 1);
        assert_eq!(doc.content().len(), 1);
        let paragraph = &doc.content()[0];
        assert_eq!(paragraph.kind(), NodeKind::Paragraph);
        assert_eq!(paragraph.children()[0].text(), Some("Hello world"));
    }

    #[test]
    fn test_build_filters_unrecognized_top_level_nodes() {
        // Arrange: three blocks, the middle one unrecognized
        let raw = json!({
            "version": 1,
            "type": "doc",
            "content": [
                paragraph_json("Before media"),
                {"type": "mediaInline", "attrs": {"id": "abc-123", "collection": "some-collection"}},
                paragraph_json("After media")
            ]
        });

        // Act
        let doc = build(&raw).unwrap();

        // Assert: relative order of survivors is kept
        assert_eq!(doc.content().len(), 2);
        assert_eq!(doc.content()[0].children()[0].text(), Some("Before media"));
        assert_eq!(doc.content()[1].children()[0].text(), Some("After media"));
    }

    #[test]
    fn test_build_filters_unrecognized_nested_nodes() {
        // Arrange
        let raw = json!({
            "version": 1,
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [
                    {"type": "text", "text": "Some text", "marks": [{"type": "strong"}]},
                    {"type": "mediaInline", "attrs": {"id": "abc-123"}}
                ]
            }]
        });

        // Act
        let doc = build(&raw).unwrap();

        // Assert: the surviving child is untouched
        let paragraph = &doc.content()[0];
        assert_eq!(paragraph.children().len(), 1);
        let text = &paragraph.children()[0];
        assert_eq!(text.kind(), NodeKind::Text);
        assert_eq!(text.text(), Some("Some text"));
        assert!(text.has_mark(&MarkKind::Strong));
    }

    #[test]
    fn test_build_drops_whole_unrecognized_subtree() {
        // Arrange: recognized children below an unrecognized parent
        let raw = json!({
            "type": "doc",
            "content": [
                {"type": "layoutSection", "content": [paragraph_json("hidden")]},
                paragraph_json("visible")
            ]
        });

        // Act
        let doc = build(&raw).unwrap();

        // Assert: nothing from the unrecognized subtree is promoted
        assert_eq!(doc.content().len(), 1);
        assert_eq!(doc.content()[0].children()[0].text(), Some("visible"));
    }

    #[test]
    fn test_build_only_unrecognized_nodes() {
        let raw = json!({
            "version": 1,
            "type": "doc",
            "content": [
                {"type": "unknownNodeType", "content": []},
                {"type": "anotherUnknownType", "attrs": {"foo": "bar"}}
            ]
        });

        let doc = build(&raw).unwrap();

        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_empty_content() {
        let doc = build(&json!({"version": 1, "type": "doc", "content": []})).unwrap();

        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_preserves_nested_empty_content() {
        let raw = json!({"type": "doc", "content": [{"type": "paragraph", "content": []}]});

        let doc = build(&raw).unwrap();

        assert_eq!(doc.content()[0].content(), Some(&[][..]));
    }

    #[test]
    fn test_build_plain_string() {
        let doc = build(&json!("Hello")).unwrap();

        let paragraph = &doc.content()[0];
        assert_eq!(paragraph.kind(), NodeKind::Paragraph);
        assert_eq!(paragraph.children()[0].text(), Some("Hello"));
    }

    #[test]
    fn test_build_array_as_content() {
        let doc = build(&json!([paragraph_json("A"), {"type": "bogus"}, paragraph_json("B")]))
            .unwrap();

        assert_eq!(doc.version(), 1);
        assert_eq!(doc.content().len(), 2);
    }

    #[test]
    fn test_build_rejects_scalars() {
        assert_eq!(
            build(&json!(42)),
            Err(AdfError::UnsupportedBodyType("number"))
        );
        assert_eq!(
            build(&Value::Null),
            Err(AdfError::UnsupportedBodyType("null"))
        );
        assert_eq!(
            build(&json!(true)),
            Err(AdfError::UnsupportedBodyType("boolean"))
        );
    }

    #[test]
    fn test_build_missing_root_type() {
        let result = build(&json!({"version": 1, "content": []}));

        assert!(matches!(result, Err(AdfError::MalformedDocument(_))));
    }

    #[test]
    fn test_build_non_string_root_type() {
        let result = build(&json!({"type": 7, "content": []}));

        assert!(matches!(result, Err(AdfError::MalformedDocument(_))));
    }

    #[test]
    fn test_build_invalid_version() {
        for version in [json!(0), json!(-1), json!("1"), json!(1.5)] {
            let result = build(&json!({"type": "doc", "version": version.clone(), "content": []}));
            assert!(
                matches!(result, Err(AdfError::MalformedDocument(_))),
                "version {version} should be rejected"
            );
        }
    }

    #[test]
    fn test_build_missing_version_defaults_to_one() {
        let doc = build(&json!({"type": "doc", "content": [paragraph_json("x")]})).unwrap();

        assert_eq!(doc.version(), 1);
    }

    #[test]
    fn test_build_keeps_explicit_version() {
        let doc = build(&json!({"type": "doc", "version": 3, "content": []})).unwrap();

        assert_eq!(doc.version(), 3);
    }

    #[test]
    fn test_build_content_not_array() {
        let result = build(&json!({"type": "doc", "version": 1, "content": "nope"}));

        assert!(matches!(result, Err(AdfError::MalformedDocument(_))));
    }

    #[test]
    fn test_build_non_doc_root_is_empty_document() {
        let doc = build(&json!({"type": "mediaInline", "content": [paragraph_json("x")]})).unwrap();

        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_drops_malformed_children() {
        let raw = json!({
            "type": "doc",
            "content": [42, "text", {"content": []}, {"type": 3}, paragraph_json("ok")]
        });

        let doc = build(&raw).unwrap();

        assert_eq!(doc.content().len(), 1);
    }

    #[test]
    fn test_build_keeps_unknown_marks_and_attrs() {
        let raw = json!({
            "type": "doc",
            "content": [{
                "type": "heading",
                "attrs": {"level": 2},
                "content": [{
                    "type": "text",
                    "text": "t",
                    "marks": [{"type": "sparkle", "attrs": {"intensity": 3}}, "bogus"]
                }]
            }]
        });

        let doc = build(&raw).unwrap();

        let heading = &doc.content()[0];
        assert_eq!(heading.attr("level"), Some(&json!(2)));
        let marks = heading.children()[0].marks();
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].kind(), &MarkKind::Other("sparkle".to_string()));
        assert_eq!(marks[0].attr("intensity"), Some(&json!(3)));
    }

    #[test]
    fn test_build_from_serializable_struct() {
        #[derive(Serialize)]
        struct Body {
            #[serde(rename = "type")]
            kind: &'static str,
            version: u32,
            content: Vec<Value>,
        }

        let body = Body {
            kind: "doc",
            version: 1,
            content: vec![paragraph_json("native")],
        };

        let doc = build_from(&body).unwrap();

        assert_eq!(doc.content()[0].children()[0].text(), Some("native"));
    }

    #[test]
    fn test_deserialize_document() {
        let doc: Document = serde_json::from_str(
            r#"{"type":"doc","version":1,"content":[{"type":"rule"},{"type":"x"}]}"#,
        )
        .unwrap();

        assert_eq!(doc.content().len(), 1);
        assert_eq!(doc.content()[0].kind(), NodeKind::Rule);
    }

    #[test]
    fn test_deserialize_document_rejects_number() {
        let result: Result<Document, _> = serde_json::from_str("42");

        assert!(result.is_err());
    }
}
