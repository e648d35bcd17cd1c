//! Reading document bodies from files or stdin

use std::io::Read;
use std::path::Path;

use adfkit_core::adf::{build, Document};
use serde_json::Value;

use crate::prelude::*;

/// Read raw input from `path`, or from stdin when no path (or `-`) is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Decode raw input into a JSON value
///
/// With `plain` set the input is taken as literal text (trailing newlines
/// removed), otherwise it must be JSON.
pub fn parse_body(raw: &str, plain: bool) -> Result<Value> {
    if plain {
        return Ok(Value::String(raw.trim_end_matches(['\n', '\r']).to_string()));
    }
    serde_json::from_str(raw).map_err(|e| eyre!("Input is not valid JSON: {}", e))
}

/// Read and build a document in one step
pub fn load_document(path: Option<&Path>, plain: bool) -> Result<Document> {
    let raw = read_input(path)?;
    let value = parse_body(&raw, plain)?;
    let document = build(&value).map_err(Error::from)?;
    log::debug!(
        "loaded document with {} top-level blocks",
        document.content().len()
    );
    Ok(document)
}
