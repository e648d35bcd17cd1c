//! Construction helpers for common ADF node shapes
//!
//! These are for callers that assemble documents programmatically (comment
//! bodies, tables, rich paragraphs) instead of parsing them. No validation is
//! performed beyond clamping heading levels.

use serde_json::Value;

use super::builder::build_mark;
use super::node::{Attrs, Document, Mark, MarkKind, Node, NodeKind};

/// Pass as the `marks` argument when a node has no styling
pub const NO_MARKS: [MarkSpec; 0] = [];

/// A mark as a caller may describe it
#[derive(Debug, Clone, PartialEq)]
pub enum MarkSpec {
    /// A bare mark name such as `"strong"`
    Name(String),
    /// A fully formed mark, used unchanged
    Mark(Mark),
    /// Shorthand for `{type: "textColor", attrs: {color}}`
    TextColor(String),
    /// Shorthand for `{type: "alignment", attrs: {align}}`
    Alignment(String),
}

impl MarkSpec {
    /// Interpret a JSON mark description
    ///
    /// Strings become bare names, objects with a `type` key pass through,
    /// and objects with a `textColor` or `alignment` key are expanded.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(MarkSpec::Name(name.clone())),
            Value::Object(map) if map.contains_key("type") => {
                build_mark(value).map(MarkSpec::Mark)
            }
            Value::Object(map) => {
                if let Some(color) = map.get("textColor").and_then(Value::as_str) {
                    Some(MarkSpec::TextColor(color.to_string()))
                } else {
                    map.get("alignment")
                        .and_then(Value::as_str)
                        .map(|align| MarkSpec::Alignment(align.to_string()))
                }
            }
            _ => None,
        }
    }

    pub fn into_mark(self) -> Mark {
        match self {
            MarkSpec::Name(name) => Mark::new(MarkKind::from_type(&name)),
            MarkSpec::Mark(mark) => mark,
            MarkSpec::TextColor(color) => Mark::text_color(color),
            MarkSpec::Alignment(align) => Mark::alignment(align),
        }
    }
}

impl From<&str> for MarkSpec {
    fn from(name: &str) -> Self {
        MarkSpec::Name(name.to_string())
    }
}

impl From<String> for MarkSpec {
    fn from(name: String) -> Self {
        MarkSpec::Name(name)
    }
}

impl From<Mark> for MarkSpec {
    fn from(mark: Mark) -> Self {
        MarkSpec::Mark(mark)
    }
}

impl From<MarkKind> for MarkSpec {
    fn from(kind: MarkKind) -> Self {
        MarkSpec::Mark(Mark::new(kind))
    }
}

fn collect_marks<M: Into<MarkSpec>>(marks: impl IntoIterator<Item = M>) -> Vec<Mark> {
    marks.into_iter().map(|m| Into::<MarkSpec>::into(m).into_mark()).collect()
}

/// What a paragraph is built from
#[derive(Debug, Clone, PartialEq)]
pub enum ParagraphContent {
    /// Wrapped in a single text node
    Text(String),
    /// Inline nodes used as-is
    Inline(Vec<Node>),
    /// A previously built document. Its block children's inline children are
    /// concatenated into the new paragraph and top-level inline nodes are kept
    /// as they are; deeper nesting is not unwrapped.
    Fragment(Document),
}

impl From<&str> for ParagraphContent {
    fn from(text: &str) -> Self {
        ParagraphContent::Text(text.to_string())
    }
}

impl From<String> for ParagraphContent {
    fn from(text: String) -> Self {
        ParagraphContent::Text(text)
    }
}

impl From<Vec<Node>> for ParagraphContent {
    fn from(nodes: Vec<Node>) -> Self {
        ParagraphContent::Inline(nodes)
    }
}

impl From<Node> for ParagraphContent {
    fn from(node: Node) -> Self {
        ParagraphContent::Inline(vec![node])
    }
}

impl From<Document> for ParagraphContent {
    fn from(doc: Document) -> Self {
        ParagraphContent::Fragment(doc)
    }
}

/// Text node with marks
pub fn text<M: Into<MarkSpec>>(
    content: impl Into<String>,
    marks: impl IntoIterator<Item = M>,
) -> Node {
    Node::text_node(content).with_marks(collect_marks(marks))
}

/// Paragraph node
///
/// `marks` style the wrapped text node when `content` is plain text and are
/// ignored otherwise.
pub fn paragraph<M: Into<MarkSpec>>(
    content: impl Into<ParagraphContent>,
    marks: impl IntoIterator<Item = M>,
) -> Node {
    let inline = match Into::<ParagraphContent>::into(content) {
        ParagraphContent::Text(value) => vec![text(value, marks)],
        ParagraphContent::Inline(nodes) => nodes,
        ParagraphContent::Fragment(doc) => doc
            .into_content()
            .into_iter()
            .flat_map(|node| {
                if node.kind().is_inline() {
                    vec![node]
                } else {
                    node.into_children()
                }
            })
            .collect(),
    };
    Node::new(NodeKind::Paragraph).with_content(inline)
}

/// Heading node; `level` is clamped into 1..=6
pub fn heading<M: Into<MarkSpec>>(
    content: impl Into<String>,
    level: i64,
    marks: impl IntoIterator<Item = M>,
) -> Node {
    Node::new(NodeKind::Heading)
        .with_attr("level", level.clamp(1, 6))
        .with_content(vec![text(content, marks)])
}

/// Text node carrying a single link mark
pub fn link(content: impl Into<String>, url: impl Into<String>) -> Node {
    Node::text_node(content).with_marks(vec![Mark::link(url)])
}

pub fn hard_break() -> Node {
    Node::new(NodeKind::HardBreak)
}

pub fn code_block(code: impl Into<String>, language: Option<&str>) -> Node {
    let node = Node::new(NodeKind::CodeBlock).with_content(vec![Node::text_node(code)]);
    match language {
        Some(language) => node.with_attr("language", language),
        None => node,
    }
}

pub fn list_item(content: Vec<Node>) -> Node {
    Node::new(NodeKind::ListItem).with_content(content)
}

/// Bullet list from list items
pub fn bullet_list(items: Vec<Node>) -> Node {
    Node::new(NodeKind::BulletList).with_content(items)
}

/// Ordered list from list items, optionally starting at `order`
pub fn ordered_list(items: Vec<Node>, order: Option<u32>) -> Node {
    let node = Node::new(NodeKind::OrderedList).with_content(items);
    match order {
        Some(order) => node.with_attr("order", order),
        None => node,
    }
}

/// Bullet list with one plain-text paragraph per item
pub fn bullet_list_from_text<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Node {
    bullet_list(
        items
            .into_iter()
            .map(|item| {
                let item: String = item.into();
                list_item(vec![paragraph(item, NO_MARKS)])
            })
            .collect(),
    )
}

pub fn table_header(content: Vec<Node>) -> Node {
    Node::new(NodeKind::TableHeader).with_content(content)
}

pub fn table_cell(content: Vec<Node>) -> Node {
    Node::new(NodeKind::TableCell).with_content(content)
}

pub fn table_row(cells: Vec<Node>) -> Node {
    Node::new(NodeKind::TableRow).with_content(cells)
}

/// Default table attributes
pub fn default_table_attrs() -> Attrs {
    let mut attrs = Attrs::new();
    attrs.insert("isNumberColumnEnabled".to_string(), Value::Bool(false));
    attrs.insert("layout".to_string(), Value::from("default"));
    attrs.insert("width".to_string(), Value::from(760));
    attrs
}

/// Table node; `attrs` are merged over [`default_table_attrs`], caller values winning
pub fn table(rows: Vec<Node>, attrs: Attrs) -> Node {
    let mut merged = default_table_attrs();
    merged.extend(attrs);
    Node::new(NodeKind::Table)
        .with_attrs(merged)
        .with_content(rows)
}

/// Document holding the given blocks
pub fn doc(content: Vec<Node>) -> Document {
    Document::new(content)
}
