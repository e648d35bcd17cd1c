//! Core library for adfkit
//!
//! This crate implements the **Functional Core** of adfkit, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`adfkit_core`** (this crate): Pure transformation functions with zero I/O
//! - **`adfkit`**: CLI, configuration, logging and HTTP (the Imperative Shell)
//!
//! All functions in this crate are deterministic, free of side effects and
//! hold no shared mutable state, so documents can be built, serialized and
//! flattened concurrently from any number of threads.
//!
//! # Module Organization
//!
//! - [`adf`]: the Atlassian Document Format tree: building from JSON,
//!   serializing back, construction helpers and text extraction
//! - [`atlassian`]: Jira comment payloads expressed in terms of [`adf`]
//! - [`error`]: errors raised when input cannot be a document at all
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use adfkit_core::adf::{build, extract_text, serialize};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "type": "doc",
//!     "version": 1,
//!     "content": [
//!         {"type": "paragraph", "content": [{"type": "text", "text": "Hello"}]},
//!         {"type": "mediaInline", "attrs": {"id": "abc"}}
//!     ]
//! });
//!
//! let doc = build(&raw)?;
//! assert_eq!(extract_text(&doc), "Hello");
//! assert_eq!(serialize(&doc)["content"].as_array().unwrap().len(), 1);
//! ```

pub mod adf;
pub mod atlassian;
pub mod error;

pub use error::AdfError;
