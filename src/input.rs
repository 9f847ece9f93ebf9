//! Loading of serialized source expression trees.
//!
//! The JSON reader keeps serde_json's limit of 128 nested containers.
//! Struct variants such as `BinaryOp` take two containers per level and
//! newtype variants such as `Not` take one, so trees nested deeper than
//! roughly 60 to 120 levels are rejected here before any translator depth
//! limit applies.

use crate::source::Expression;
use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a JSON encoded expression tree from a reader
pub fn read_expression<R: Read>(reader: R) -> Result<Expression> {
    serde_json::from_reader(reader).map_err(|err: serde_json::Error| {
        if err.to_string().contains("recursion limit exceeded") {
            anyhow!(
                "Expression nesting exceeds the JSON reader limit of {} containers ({})",
                JSON_NESTING_LIMIT,
                err
            )
        } else {
            anyhow::Error::new(err).context("Failed to parse expression JSON")
        }
    })
}

/// Nested JSON containers accepted by the reader
pub const JSON_NESTING_LIMIT: usize = 128;

/// Read a JSON encoded expression tree from a file
pub fn load_expression(path: &Path) -> Result<Expression> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open expression file {}", path.display()))?;
    read_expression(BufReader::new(file))
        .with_context(|| format!("Invalid expression in {}", path.display()))
}
