//! Typed node tree for Atlassian Document Format (ADF) documents
//!
//! A [`Document`] owns an ordered sequence of [`Node`]s. Every node carries a
//! [`NodeKind`] drawn from a closed set of recognized types; anything outside
//! that set never makes it into a tree (see [`super::builder`]). Values are
//! immutable once built: the `with_*` methods consume `self` and return the
//! extended node.

use std::fmt;
use std::num::NonZeroU32;

use serde_json::{Map, Value};

/// Node and mark attributes, kept as raw JSON
pub type Attrs = Map<String, Value>;

/// Current ADF format version
pub const ADF_VERSION: u32 = 1;

/// Recognized node types
///
/// The first group has construction helpers in [`super::content`]. The rest
/// are recognized so they round-trip untouched, but are only ever produced by
/// parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Paragraph,
    Heading,
    Text,
    BulletList,
    OrderedList,
    ListItem,
    Table,
    TableRow,
    TableHeader,
    TableCell,
    CodeBlock,
    HardBreak,

    Blockquote,
    Panel,
    Rule,
    Mention,
    Emoji,
    Date,
    Status,
    InlineCard,
    BlockCard,
    Expand,
    NestedExpand,
    MediaSingle,
    MediaGroup,
    Media,
}

impl NodeKind {
    pub const ALL: [NodeKind; 26] = [
        NodeKind::Paragraph,
        NodeKind::Heading,
        NodeKind::Text,
        NodeKind::BulletList,
        NodeKind::OrderedList,
        NodeKind::ListItem,
        NodeKind::Table,
        NodeKind::TableRow,
        NodeKind::TableHeader,
        NodeKind::TableCell,
        NodeKind::CodeBlock,
        NodeKind::HardBreak,
        NodeKind::Blockquote,
        NodeKind::Panel,
        NodeKind::Rule,
        NodeKind::Mention,
        NodeKind::Emoji,
        NodeKind::Date,
        NodeKind::Status,
        NodeKind::InlineCard,
        NodeKind::BlockCard,
        NodeKind::Expand,
        NodeKind::NestedExpand,
        NodeKind::MediaSingle,
        NodeKind::MediaGroup,
        NodeKind::Media,
    ];

    /// Wire name of the node type
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::Text => "text",
            NodeKind::BulletList => "bulletList",
            NodeKind::OrderedList => "orderedList",
            NodeKind::ListItem => "listItem",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tableRow",
            NodeKind::TableHeader => "tableHeader",
            NodeKind::TableCell => "tableCell",
            NodeKind::CodeBlock => "codeBlock",
            NodeKind::HardBreak => "hardBreak",
            NodeKind::Blockquote => "blockquote",
            NodeKind::Panel => "panel",
            NodeKind::Rule => "rule",
            NodeKind::Mention => "mention",
            NodeKind::Emoji => "emoji",
            NodeKind::Date => "date",
            NodeKind::Status => "status",
            NodeKind::InlineCard => "inlineCard",
            NodeKind::BlockCard => "blockCard",
            NodeKind::Expand => "expand",
            NodeKind::NestedExpand => "nestedExpand",
            NodeKind::MediaSingle => "mediaSingle",
            NodeKind::MediaGroup => "mediaGroup",
            NodeKind::Media => "media",
        }
    }

    /// Whether the node lives inside a paragraph rather than at block level
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            NodeKind::Text
                | NodeKind::HardBreak
                | NodeKind::Mention
                | NodeKind::Emoji
                | NodeKind::Date
                | NodeKind::Status
                | NodeKind::InlineCard
        )
    }

    /// Look up a wire name; `None` means the type is unrecognized
    pub fn from_type(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mark types. Marks are not validated, so unknown names are carried as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkKind {
    Strong,
    Em,
    Underline,
    Strike,
    Code,
    Link,
    TextColor,
    BackgroundColor,
    Subsup,
    Alignment,
    Indentation,
    Border,
    Other(String),
}

impl MarkKind {
    pub fn as_str(&self) -> &str {
        match self {
            MarkKind::Strong => "strong",
            MarkKind::Em => "em",
            MarkKind::Underline => "underline",
            MarkKind::Strike => "strike",
            MarkKind::Code => "code",
            MarkKind::Link => "link",
            MarkKind::TextColor => "textColor",
            MarkKind::BackgroundColor => "backgroundColor",
            MarkKind::Subsup => "subsup",
            MarkKind::Alignment => "alignment",
            MarkKind::Indentation => "indentation",
            MarkKind::Border => "border",
            MarkKind::Other(name) => name,
        }
    }

    pub fn from_type(name: &str) -> Self {
        match name {
            "strong" => MarkKind::Strong,
            "em" => MarkKind::Em,
            "underline" => MarkKind::Underline,
            "strike" => MarkKind::Strike,
            "code" => MarkKind::Code,
            "link" => MarkKind::Link,
            "textColor" => MarkKind::TextColor,
            "backgroundColor" => MarkKind::BackgroundColor,
            "subsup" => MarkKind::Subsup,
            "alignment" => MarkKind::Alignment,
            "indentation" => MarkKind::Indentation,
            "border" => MarkKind::Border,
            other => MarkKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline annotation attached to a text node
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    kind: MarkKind,
    attrs: Option<Attrs>,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Self { kind, attrs: None }
    }

    /// Empty attribute maps are stored as absent.
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = (!attrs.is_empty()).then_some(attrs);
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs
            .get_or_insert_with(Attrs::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn link(href: impl Into<String>) -> Self {
        Self::new(MarkKind::Link).with_attr("href", Value::String(href.into()))
    }

    pub fn text_color(color: impl Into<String>) -> Self {
        Self::new(MarkKind::TextColor).with_attr("color", Value::String(color.into()))
    }

    pub fn alignment(align: impl Into<String>) -> Self {
        Self::new(MarkKind::Alignment).with_attr("align", Value::String(align.into()))
    }

    pub fn kind(&self) -> &MarkKind {
        &self.kind
    }

    pub fn attrs(&self) -> Option<&Attrs> {
        self.attrs.as_ref()
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.as_ref().and_then(|attrs| attrs.get(key))
    }
}

/// One element of the document tree
///
/// `content` distinguishes "absent" (`None`) from "present but empty"
/// (`Some(vec![])`); both survive serialization as they were built.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    attrs: Option<Attrs>,
    content: Option<Vec<Node>>,
    marks: Option<Vec<Mark>>,
    text: Option<String>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: None,
            content: None,
            marks: None,
            text: None,
        }
    }

    /// Unstyled text leaf
    pub fn text_node(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text).with_text(text)
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = (!attrs.is_empty()).then_some(attrs);
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs
            .get_or_insert_with(Attrs::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: Vec<Node>) -> Self {
        self.content = Some(content);
        self
    }

    /// An empty mark list is stored as absent.
    pub fn with_marks(mut self, marks: Vec<Mark>) -> Self {
        self.marks = (!marks.is_empty()).then_some(marks);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn attrs(&self) -> Option<&Attrs> {
        self.attrs.as_ref()
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.as_ref().and_then(|attrs| attrs.get(key))
    }

    /// Child nodes, empty for leaves
    pub fn children(&self) -> &[Node] {
        self.content.as_deref().unwrap_or_default()
    }

    /// Child nodes, or `None` when the node had no content field at all
    pub fn content(&self) -> Option<&[Node]> {
        self.content.as_deref()
    }

    pub fn marks(&self) -> &[Mark] {
        self.marks.as_deref().unwrap_or_default()
    }

    pub fn has_mark(&self, kind: &MarkKind) -> bool {
        self.marks().iter().any(|mark| mark.kind() == kind)
    }

    /// Literal text of a text node
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn into_children(self) -> Vec<Node> {
        self.content.unwrap_or_default()
    }
}

/// Root of a document tree: always `type = "doc"` with a positive `version`
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    version: NonZeroU32,
    content: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Document {
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            version: NonZeroU32::MIN,
            content,
        }
    }

    pub fn with_version(mut self, version: NonZeroU32) -> Self {
        self.version = version;
        self
    }

    /// Wraps plain text into a single paragraph holding a single text node.
    ///
    /// An empty string yields a paragraph without inline content, since ADF
    /// rejects empty text nodes.
    pub fn from_text(text: &str) -> Self {
        let paragraph = if text.is_empty() {
            Node::new(NodeKind::Paragraph).with_content(Vec::new())
        } else {
            Node::new(NodeKind::Paragraph).with_content(vec![Node::text_node(text)])
        };
        Self::new(vec![paragraph])
    }

    pub fn version(&self) -> u32 {
        self.version.get()
    }

    pub fn content(&self) -> &[Node] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn into_content(self) -> Vec<Node> {
        self.content
    }
}
