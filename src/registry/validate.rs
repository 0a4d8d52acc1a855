// src/registry/validate.rs

//! Whole-registry validation
//!
//! The scan checks every entry and reports every violation found, so a
//! maintainer can fix a broken document in one pass instead of replaying
//! it failure by failure.

use crate::registry::format::SourceData;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use url::Url;

/// A single validation failure in a registry document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// sha256 field is not 64 lowercase hex characters
    #[error("version {version}: malformed sha256 {sha256:?} (expected 64 lowercase hex characters)")]
    MalformedHash { version: String, sha256: String },

    /// url field does not parse as a URI
    #[error("version {version}: malformed url {url:?}: {reason}")]
    MalformedUri {
        version: String,
        url: String,
        reason: String,
    },

    /// patch_file is empty or not a relative path
    #[error("version {version}: invalid patch path {patch_file:?} (must be non-empty and relative)")]
    InvalidPatchPath { version: String, patch_file: String },

    /// Same patch_file listed twice for one version
    #[error("version {version}: duplicate patch {patch_file:?}")]
    DuplicatePatch { version: String, patch_file: String },

    /// Referenced patch artifact does not exist under the recipe root
    #[error("version {version}: missing patch file {patch_file:?}")]
    MissingPatchFile { version: String, patch_file: String },

    /// Patch list for a version that has no sources entry
    #[error("version {version}: patches listed but no source entry")]
    OrphanedPatches { version: String },
}

/// Scan a registry document and report every violation found
pub fn validate_source_data(data: &SourceData) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (version, entry) in &data.sources {
        if !is_sha256_hex(&entry.sha256) {
            violations.push(Violation::MalformedHash {
                version: version.clone(),
                sha256: entry.sha256.clone(),
            });
        }
        if let Err(e) = Url::parse(&entry.url) {
            violations.push(Violation::MalformedUri {
                version: version.clone(),
                url: entry.url.clone(),
                reason: e.to_string(),
            });
        }
    }

    for (version, patches) in &data.patches {
        if !data.sources.contains_key(version) {
            violations.push(Violation::OrphanedPatches {
                version: version.clone(),
            });
        }

        let mut seen = HashSet::new();
        for patch in patches {
            if patch.patch_file.is_empty() || !Path::new(&patch.patch_file).is_relative() {
                violations.push(Violation::InvalidPatchPath {
                    version: version.clone(),
                    patch_file: patch.patch_file.clone(),
                });
            }
            if !seen.insert(patch.patch_file.as_str()) {
                violations.push(Violation::DuplicatePatch {
                    version: version.clone(),
                    patch_file: patch.patch_file.clone(),
                });
            }
        }
    }

    violations
}

/// Scan a registry document, additionally checking that every referenced
/// patch artifact exists under `root` (the recipe directory)
pub fn validate_source_data_against(data: &SourceData, root: &Path) -> Vec<Violation> {
    let mut violations = validate_source_data(data);

    for (version, patches) in &data.patches {
        for patch in patches {
            // Empty or absolute paths are already reported as InvalidPatchPath
            if patch.patch_file.is_empty() || !Path::new(&patch.patch_file).is_relative() {
                continue;
            }
            if !root.join(&patch.patch_file).is_file() {
                violations.push(Violation::MissingPatchFile {
                    version: version.clone(),
                    patch_file: patch.patch_file.clone(),
                });
            }
        }
    }

    violations
}

fn is_sha256_hex(s: &str) -> bool {
    s.len() == 64
        && s.bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
