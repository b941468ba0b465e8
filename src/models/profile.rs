//! Packaging target profiles

use std::path::{Path, PathBuf};

/// Manifest name every browser expects at the archive root
pub const CANONICAL_MANIFEST: &str = "manifest.json";

/// Firefox manifest variant kept alongside the canonical one in source
pub const FIREFOX_MANIFEST: &str = "manifest-firefox.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Firefox,
}

impl Browser {
    pub fn label(&self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Firefox => "Firefox",
        }
    }
}

/// A packaging target: which archive to produce, and which manifest
/// variant ships inside it as `manifest.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetProfile {
    pub browser: Browser,
    pub archive_name: String,
    pub manifest_source: String,
}

impl TargetProfile {
    pub fn chrome(stem: &str) -> Self {
        Self {
            browser: Browser::Chrome,
            archive_name: format!("{stem}.zip"),
            manifest_source: CANONICAL_MANIFEST.to_string(),
        }
    }

    pub fn firefox(stem: &str) -> Self {
        Self {
            browser: Browser::Firefox,
            archive_name: format!("{stem}-firefox.zip"),
            manifest_source: FIREFOX_MANIFEST.to_string(),
        }
    }

    /// The two profiles every run produces, in build order
    pub fn defaults(stem: &str) -> Vec<Self> {
        vec![Self::chrome(stem), Self::firefox(stem)]
    }

    pub fn archive_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.archive_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profiles_cover_both_browsers() {
        let profiles = TargetProfile::defaults("enquote");
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].archive_name, "enquote.zip");
        assert_eq!(profiles[0].manifest_source, CANONICAL_MANIFEST);
        assert_eq!(profiles[1].archive_name, "enquote-firefox.zip");
        assert_eq!(profiles[1].manifest_source, FIREFOX_MANIFEST);
    }
}
