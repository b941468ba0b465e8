//! Source-layout preflight checks

use crate::models::{CANONICAL_MANIFEST, FIREFOX_MANIFEST};
use anyhow::{bail, Result};
use std::path::Path;

/// Check the source tree has everything a packaging run needs.
///
/// Presence only; manifest contents are never inspected.
pub fn validate_source(source: &Path) -> Result<()> {
    if !source.is_dir() {
        bail!("Source {} is not a directory", source.display());
    }

    for required in [CANONICAL_MANIFEST, FIREFOX_MANIFEST] {
        if !source.join(required).is_file() {
            bail!("{} not found in {}", required, source.display());
        }
    }

    Ok(())
}
