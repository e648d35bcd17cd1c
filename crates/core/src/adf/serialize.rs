//! Convert a [`Document`] back into plain JSON
//!
//! Optional fields (`attrs`, `content`, `marks`, `text`) are emitted only when
//! present. Sibling order is exactly construction order.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::node::{Document, Mark, Node};

/// Serialize a document into a JSON object with `type`, `version` and `content`
pub fn serialize(doc: &Document) -> Value {
    doc.to_value()
}

impl Document {
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from("doc"));
        map.insert("version".to_string(), Value::from(self.version()));
        map.insert(
            "content".to_string(),
            Value::Array(self.content().iter().map(Node::to_value).collect()),
        );
        Value::Object(map)
    }
}

impl Node {
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(self.kind().as_str()));

        if let Some(attrs) = self.attrs() {
            map.insert("attrs".to_string(), Value::Object(attrs.clone()));
        }
        if let Some(content) = self.content() {
            map.insert(
                "content".to_string(),
                Value::Array(content.iter().map(Node::to_value).collect()),
            );
        }
        if !self.marks().is_empty() {
            map.insert(
                "marks".to_string(),
                Value::Array(self.marks().iter().map(Mark::to_value).collect()),
            );
        }
        if let Some(text) = self.text() {
            map.insert("text".to_string(), Value::from(text));
        }

        Value::Object(map)
    }
}

impl Mark {
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(self.kind().as_str()));
        if let Some(attrs) = self.attrs() {
            map.insert("attrs".to_string(), Value::Object(attrs.clone()));
        }
        Value::Object(map)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl Serialize for Mark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
