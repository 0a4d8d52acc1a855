// src/error.rs

//! Error types for registry loading and lookup

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying a registry
#[derive(Error, Debug)]
pub enum Error {
    /// Requested version has no entry in the registry
    #[error("unknown version: {0}")]
    UnknownVersion(String),

    /// Document could not be parsed
    #[error("parse error: {0}")]
    ParseError(String),

    /// IO failure while reading the document
    #[error("IO error: {0}")]
    IoError(String),
}
