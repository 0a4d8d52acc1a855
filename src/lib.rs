// src/lib.rs

//! Version-source registry for package build recipes
//!
//! Per upstream version, the registry records where the source archive
//! lives (`url`), what its contents must hash to (`sha256`), and which
//! patches to apply before building, in order. The registry is read-only
//! data consumed by a recipe engine; this crate loads it, answers version
//! lookups, and validates the document for recipe maintainers.

mod error;
pub mod registry;

pub use error::{Error, Result};
pub use registry::{
    parse_source_data, parse_source_data_file, validate_source_data,
    validate_source_data_against, PatchDescriptor, Registry, SourceData, VersionEntry, Violation,
};
