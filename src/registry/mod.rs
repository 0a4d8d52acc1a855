// src/registry/mod.rs

//! Version-source registry for build recipes
//!
//! A registry maps each upstream version to the source archive it is built
//! from (download URL plus sha256) and to an ordered list of patches to
//! apply before building. The data is declarative: fetching, hash
//! verification, extraction, and patching all belong to the recipe engine
//! that consumes it.
//!
//! # Example document
//!
//! ```yaml
//! sources:
//!   "253.3":
//!     url: "https://github.com/systemd/systemd-stable/archive/v253.3.tar.gz"
//!     sha256: "569775d77084e45d15e103004cf4fbc00d7249c33791471b80f0c3296962bbfd"
//! patches:
//!   "253.3":
//!     - patch_file: "patches/253.3/0001-fix-missing-m4.patch"
//!       patch_description: "Handle missing m4 directives"
//!       patch_type: "portability"
//! ```

mod format;
pub mod parser;
pub mod validate;

pub use format::{PatchDescriptor, SourceData, VersionEntry};
pub use parser::{parse_source_data, parse_source_data_file};
pub use validate::{validate_source_data, validate_source_data_against, Violation};

use crate::error::{Error, Result};
use std::path::Path;

/// A loaded registry, immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registry {
    data: SourceData,
}

impl Registry {
    /// Build a registry from an already-parsed document
    pub fn new(data: SourceData) -> Self {
        Self { data }
    }

    /// Load a registry from a YAML string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self::new(parser::parse_source_data(content)?))
    }

    /// Load a registry from a document on disk
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(parser::parse_source_data_file(path)?))
    }

    /// Look up the source archive for a version
    pub fn resolve_source(&self, version: &str) -> Result<&VersionEntry> {
        self.data
            .sources
            .get(version)
            .ok_or_else(|| Error::UnknownVersion(version.to_string()))
    }

    /// Look up the ordered patch list for a version
    ///
    /// A version with a source entry but no registered patches resolves to
    /// an empty slice. A version absent from `sources` is unknown, even if
    /// a stray patch list exists for it.
    pub fn resolve_patches(&self, version: &str) -> Result<&[PatchDescriptor]> {
        if !self.data.sources.contains_key(version) {
            return Err(Error::UnknownVersion(version.to_string()));
        }
        Ok(self
            .data
            .patches
            .get(version)
            .map(Vec::as_slice)
            .unwrap_or(&[]))
    }

    /// Iterate over the known version keys
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.data.sources.keys().map(String::as_str)
    }

    /// Scan the registry and report every violation found
    pub fn validate(&self) -> Vec<Violation> {
        validate::validate_source_data(&self.data)
    }

    /// Scan the registry, also checking patch files exist under `root`
    pub fn validate_against(&self, root: &Path) -> Vec<Violation> {
        validate::validate_source_data_against(&self.data, root)
    }

    /// The underlying document
    pub fn data(&self) -> &SourceData {
        &self.data
    }
}
