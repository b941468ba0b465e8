//! Run summaries returned to callers

use super::manifest::Manifest;
use super::profile::TargetProfile;
use super::selection::ExcludedEntry;
use std::path::PathBuf;

/// One produced archive
#[derive(Debug, Clone)]
pub struct ProfileArtifact {
    pub profile: TargetProfile,
    pub archive_path: PathBuf,
    pub files_packed: usize,
    pub bytes_packed: u64,
    pub excluded: Vec<ExcludedEntry>,
}

/// Summary of a full packaging run
#[derive(Debug, Clone)]
pub struct PackageRun {
    pub source: PathBuf,
    pub stem: String,
    pub manifest: Option<Manifest>,
    pub artifacts: Vec<ProfileArtifact>,
}
