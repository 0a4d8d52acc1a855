// src/registry/format.rs

//! Registry document format definitions
//!
//! The registry is a YAML document with two top-level mappings, `sources`
//! and `patches`, both keyed by upstream version string. It is pure data:
//! the recipe engine that consumes it does the fetching, verification, and
//! patching.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The on-disk registry document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceData {
    /// Version → source archive location and integrity hash
    #[serde(default)]
    pub sources: BTreeMap<String, VersionEntry>,

    /// Version → ordered list of patches to apply after extraction
    ///
    /// Order is significant: later patches may assume earlier ones have
    /// already been applied. A version with no entry here needs no patches.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub patches: BTreeMap<String, Vec<PatchDescriptor>>,
}

/// Source location and integrity hash for one upstream version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Download URL for the source archive
    pub url: String,

    /// SHA-256 of the archive at `url`, as 64 lowercase hex characters
    ///
    /// Verified against the downloaded archive by the recipe engine, not
    /// by this crate.
    pub sha256: String,
}

/// One patch to apply, with metadata about why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchDescriptor {
    /// Path to the patch, relative to the recipe directory
    pub patch_file: String,

    /// Human-readable summary of what the patch does
    pub patch_description: String,

    /// Category tag: "conan", "portability", "bugfix", ...
    pub patch_type: String,

    /// Upstream provenance (commit URL, tracker link)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_DATA: &str = r#"
sources:
  "1.24.0":
    url: "https://nginx.org/download/nginx-1.24.0.tar.gz"
    sha256: "77a2541637b92a621e3ee76571f6e9af0b4e6a6a1f5b0fd3d5c9cf6c8c55e3aa"
patches:
  "1.24.0":
    - patch_file: "patches/1.24.0/0001-fix-headers.patch"
      patch_description: "Fix header install paths"
      patch_type: "portability"
    - patch_file: "patches/1.24.0/0002-openssl3.patch"
      patch_description: "Build against OpenSSL 3"
      patch_type: "bugfix"
      patch_source: "https://github.com/nginx/nginx/commit/abc123"
"#;

    #[test]
    fn test_parse_document() {
        let data: SourceData = serde_yaml::from_str(SAMPLE_DATA).unwrap();

        let entry = &data.sources["1.24.0"];
        assert_eq!(entry.url, "https://nginx.org/download/nginx-1.24.0.tar.gz");
        assert_eq!(entry.sha256.len(), 64);

        let patches = &data.patches["1.24.0"];
        assert_eq!(patches.len(), 2);
        assert_eq!(patches[0].patch_type, "portability");
        assert!(patches[0].patch_source.is_none());
        assert_eq!(
            patches[1].patch_source.as_deref(),
            Some("https://github.com/nginx/nginx/commit/abc123")
        );
    }

    #[test]
    fn test_parse_sources_only() {
        let minimal = r#"
sources:
  "1.0":
    url: "https://example.com/hello-1.0.tar.gz"
    sha256: "569775d77084e45d15e103004cf4fbc00d7249c33791471b80f0c3296962bbfd"
"#;

        let data: SourceData = serde_yaml::from_str(minimal).unwrap();
        assert_eq!(data.sources.len(), 1);
        assert!(data.patches.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_patch_order() {
        let data: SourceData = serde_yaml::from_str(SAMPLE_DATA).unwrap();
        let emitted = serde_yaml::to_string(&data).unwrap();
        let reparsed: SourceData = serde_yaml::from_str(&emitted).unwrap();

        assert_eq!(data, reparsed);
        let files: Vec<_> = reparsed.patches["1.24.0"]
            .iter()
            .map(|p| p.patch_file.as_str())
            .collect();
        assert_eq!(
            files,
            vec![
                "patches/1.24.0/0001-fix-headers.patch",
                "patches/1.24.0/0002-openssl3.patch"
            ]
        );
    }

    #[test]
    fn test_absent_patch_source_not_emitted() {
        let data: SourceData = serde_yaml::from_str(SAMPLE_DATA).unwrap();
        let emitted = serde_yaml::to_string(&data).unwrap();

        // Exactly one descriptor carries provenance
        assert_eq!(emitted.matches("patch_source").count(), 1);
    }
}
