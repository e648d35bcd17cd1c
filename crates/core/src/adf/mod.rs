//! Atlassian Document Format (ADF) tree
//!
//! Data flows one way through this module:
//!
//! ```text
//! raw JSON ──build──▶ Document ──serialize──▶ JSON request body
//!                        │
//!                        ├──extract_text──▶ plain text
//!                        └──render_markdown──▶ readable text
//! ```
//!
//! Documents built by hand go through [`content`] instead of [`build`].

pub mod builder;
pub mod content;
pub mod node;
pub mod render;
pub mod serialize;
pub mod text;

pub use builder::{build, build_from};
pub use node::{Attrs, Document, Mark, MarkKind, Node, NodeKind, ADF_VERSION};
pub use render::render_markdown;
pub use serialize::serialize;
pub use text::{extract_text, extract_text_from_value, node_text};
