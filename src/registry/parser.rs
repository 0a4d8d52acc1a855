// src/registry/parser.rs

//! Registry document parsing

use crate::error::{Error, Result};
use crate::registry::format::SourceData;
use std::path::Path;

/// Parse a registry document from a YAML string
pub fn parse_source_data(content: &str) -> Result<SourceData> {
    serde_yaml::from_str(content)
        .map_err(|e| Error::ParseError(format!("Invalid source data: {}", e)))
}

/// Parse a registry document from a file
pub fn parse_source_data_file(path: &Path) -> Result<SourceData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("Failed to read source data file: {}", e)))?;

    parse_source_data(&content)
}
