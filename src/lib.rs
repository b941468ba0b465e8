//! WebExtension packager
//!
//! Turns the source tree of a browser extension into two distributable
//! archives: one for Chromium-family browsers shipping `manifest.json`
//! as-is, and one for Firefox shipping `manifest-firefox.json` renamed
//! to `manifest.json`. Hidden entries and build artifacts never reach
//! either archive.

pub mod models;
pub mod packager;
pub mod parser;
pub mod report;
pub mod utils;
pub mod validator;

pub use models::{
    Browser, Manifest, PackageRun, ProfileArtifact, TargetProfile, CANONICAL_MANIFEST,
    FIREFOX_MANIFEST,
};

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Options for a packaging run
#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    /// Where to write the archives; defaults to the source directory
    pub output_dir: Option<PathBuf>,
}

/// Main entry point: package `source` for every default target profile.
pub fn package_extension(source: &Path, options: PackageOptions) -> Result<PackageRun> {
    // 1. Preflight the source layout
    validator::validate_source(source)?;

    // 2. Derive the archive stem from the manifest, tolerantly
    let manifest = read_manifest(source);
    let stem = archive_stem(source, manifest.as_ref());

    let output_dir = options.output_dir.unwrap_or_else(|| source.to_path_buf());

    // 3. One selection-and-assembly pass per profile
    let mut artifacts = Vec::new();
    for profile in TargetProfile::defaults(&stem) {
        artifacts.push(packager::build_package(source, &output_dir, &profile)?);
    }

    Ok(PackageRun {
        source: source.to_path_buf(),
        stem,
        manifest,
        artifacts,
    })
}

/// Manifest metadata for `source`, when the canonical manifest parses
pub fn read_manifest(source: &Path) -> Option<Manifest> {
    parser::manifest::parse_manifest_from_file(source.join(CANONICAL_MANIFEST)).ok()
}

/// Archive base name: sanitized manifest name, else the directory name
pub fn archive_stem(source: &Path, manifest: Option<&Manifest>) -> String {
    manifest
        .map(|m| utils::sanitize_stem(&m.name))
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| {
            source
                .file_name()
                .map(|n| utils::sanitize_stem(&n.to_string_lossy()))
                .filter(|stem| !stem.is_empty())
                .unwrap_or_else(|| "extension".to_string())
        })
}
