//! Entry selection and archive assembly

pub mod builder;
pub mod selector;

use crate::models::{ProfileArtifact, TargetProfile};
use anyhow::Result;
use std::path::Path;

/// Run one profile pass: resolve the plan, then write the archive.
pub fn build_package(
    source: &Path,
    output_dir: &Path,
    profile: &TargetProfile,
) -> Result<ProfileArtifact> {
    let plan = selector::select_entries(source, profile)?;
    let archive_path = profile.archive_path(output_dir);
    let bytes_packed = builder::write_archive(&plan, &archive_path)?;

    Ok(ProfileArtifact {
        profile: profile.clone(),
        archive_path,
        files_packed: plan.entries.len(),
        bytes_packed,
        excluded: plan.excluded,
    })
}
