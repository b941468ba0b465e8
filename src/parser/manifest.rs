//! Manifest reading
//!
//! The packager reads the manifest only for the extension name and
//! version; contents are never validated. json5 keeps commented
//! manifests readable.

use crate::models::Manifest;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse manifest metadata from bytes
pub fn parse_manifest(content: &[u8]) -> Result<Manifest> {
    let content = std::str::from_utf8(content).context("Manifest is not valid UTF-8")?;
    json5::from_str(content).context("Failed to parse manifest")
}

/// Parse manifest metadata from a file path
pub fn parse_manifest_from_file(path: impl AsRef<Path>) -> Result<Manifest> {
    let content = std::fs::read(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    parse_manifest(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_name_and_version() {
        let manifest = parse_manifest(
            br#"{ "manifest_version": 3, "name": "Enquote", "version": "1.4" }"#,
        )
        .unwrap();
        assert_eq!(manifest.name, "Enquote");
        assert_eq!(manifest.version, "1.4");
        assert_eq!(manifest.manifest_version, Some(3));
    }

    #[test]
    fn tolerates_comments_and_missing_fields() {
        let manifest = parse_manifest(b"{ /* store build */ name: \"Quoter\" }").unwrap();
        assert_eq!(manifest.name, "Quoter");
        assert!(manifest.version.is_empty());
        assert_eq!(manifest.manifest_version, None);
    }

    #[test]
    fn rejects_non_json_content() {
        assert!(parse_manifest(b"not a manifest").is_err());
    }
}
