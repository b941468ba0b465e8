//! Selection outcome for a single profile pass

use std::fmt;
use std::path::PathBuf;

/// A file scheduled for packaging, with the name it takes inside the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    pub source_path: PathBuf,
    pub archive_name: String,
}

/// Why a top-level entry was left out of an archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcludeReason {
    /// Leading-dot name
    Hidden,
    /// A previously produced archive
    Archive,
    /// A build script
    Script,
    /// The packaging report written by a previous run
    Report,
    /// A manifest variant belonging to another profile
    ForeignManifest,
}

impl fmt::Display for ExcludeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ExcludeReason::Hidden => "hidden entry",
            ExcludeReason::Archive => "produced archive",
            ExcludeReason::Script => "build script",
            ExcludeReason::Report => "packaging report",
            ExcludeReason::ForeignManifest => "manifest for another target",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedEntry {
    pub name: String,
    pub reason: ExcludeReason,
}

/// Everything one profile pass will write, plus what it deliberately skipped
#[derive(Debug, Clone, Default)]
pub struct PackagePlan {
    pub entries: Vec<PackageEntry>,
    pub excluded: Vec<ExcludedEntry>,
}

impl PackagePlan {
    /// Archive-side names, in write order
    pub fn archive_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.archive_name.as_str()).collect()
    }
}
