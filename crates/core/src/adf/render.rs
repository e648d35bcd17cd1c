//! Render a document to readable, Markdown-flavoured text
//!
//! Unlike [`super::text::extract_text`], this keeps some of the document's
//! shape: heading markers, list bullets with indentation, fenced code blocks
//! and table rows.

use super::node::{Document, Node, NodeKind};

/// Render a document for terminal display
pub fn render_markdown(doc: &Document) -> String {
    let mut output = String::new();

    for node in doc.content() {
        let rendered = render_node(node, 0);
        output.push_str(&rendered);
        if !rendered.ends_with('\n') {
            output.push('\n');
        }
    }

    output.trim().to_string()
}

fn render_children(node: &Node, depth: usize) -> String {
    node.children()
        .iter()
        .map(|child| render_node(child, depth))
        .collect()
}

fn string_attr<'a>(node: &'a Node, key: &str) -> Option<&'a str> {
    node.attr(key).and_then(|v| v.as_str())
}

/// Render a single node
fn render_node(node: &Node, depth: usize) -> String {
    let indent = "  ".repeat(depth);

    match node.kind() {
        NodeKind::Paragraph => format!("{}\n", render_children(node, depth)),
        NodeKind::Heading => {
            let level = node
                .attr("level")
                .and_then(|l| l.as_u64())
                .unwrap_or(1)
                .clamp(1, 6) as usize;
            format!(
                "{}{} {}\n",
                indent,
                "#".repeat(level),
                render_children(node, 0).trim()
            )
        }
        NodeKind::BulletList => node
            .children()
            .iter()
            .map(|item| render_list_item(item, depth, "•"))
            .collect(),
        NodeKind::OrderedList => {
            let start = node.attr("order").and_then(|o| o.as_u64()).unwrap_or(1);
            node.children()
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let n = start.saturating_add(i as u64);
                    render_list_item(item, depth, &format!("{n}."))
                })
                .collect()
        }
        NodeKind::ListItem => render_list_item(node, depth, "•"),
        NodeKind::CodeBlock => {
            let language = string_attr(node, "language").unwrap_or_default();
            format!(
                "{}```{}\n{}{}\n{}```\n",
                indent,
                language,
                indent,
                render_children(node, 0).trim_matches('\n'),
                indent
            )
        }
        NodeKind::TableRow => {
            let cells: Vec<String> = node
                .children()
                .iter()
                .map(|cell| render_children(cell, 0).trim().to_string())
                .collect();
            format!("{}{}\n", indent, cells.join(" | "))
        }
        NodeKind::Text => node.text().unwrap_or_default().to_string(),
        NodeKind::HardBreak => "\n".to_string(),
        NodeKind::Rule => format!("{indent}---\n"),
        NodeKind::Mention | NodeKind::Status => {
            string_attr(node, "text").unwrap_or_default().to_string()
        }
        NodeKind::Emoji => string_attr(node, "text")
            .or_else(|| string_attr(node, "shortName"))
            .unwrap_or_default()
            .to_string(),
        NodeKind::InlineCard | NodeKind::BlockCard => {
            string_attr(node, "url").unwrap_or_default().to_string()
        }
        NodeKind::Date => node
            .attr("timestamp")
            .map(|t| match t.as_str() {
                Some(s) => s.to_string(),
                None => t.to_string(),
            })
            .unwrap_or_default(),
        NodeKind::Table
        | NodeKind::TableHeader
        | NodeKind::TableCell
        | NodeKind::Blockquote
        | NodeKind::Panel
        | NodeKind::Expand
        | NodeKind::NestedExpand
        | NodeKind::MediaSingle
        | NodeKind::MediaGroup
        | NodeKind::Media => render_children(node, depth),
    }
}

/// Nested lists inside an item are rendered one level deeper, below the item line.
fn render_list_item(item: &Node, depth: usize, marker: &str) -> String {
    let indent = "  ".repeat(depth);
    let mut text = String::new();
    let mut nested = String::new();

    for child in item.children() {
        match child.kind() {
            NodeKind::BulletList | NodeKind::OrderedList => {
                nested.push_str(&render_node(child, depth + 1))
            }
            _ => text.push_str(&render_node(child, depth)),
        }
    }

    format!("{}{} {}\n{}", indent, marker, text.trim(), nested)
}
