//! File selection rules
//!
//! One pass over the top level of the source tree per profile: hidden
//! entries and build artifacts stay out, the profile's manifest variant
//! ships under the canonical name, every other variant stays out, and
//! surviving directories are packaged whole. Exclusions are recorded in
//! the plan rather than dropped silently.

use crate::models::{
    ExcludeReason, ExcludedEntry, PackageEntry, PackagePlan, TargetProfile, CANONICAL_MANIFEST,
};
use crate::report::REPORT_FILE;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Archive suffixes produced by this tool and its predecessors
const ARCHIVE_SUFFIXES: &[&str] = &[".zip", ".xpi"];

/// Build-script suffixes that never belong in a release
const SCRIPT_SUFFIXES: &[&str] = &[".py"];

/// Resolve the package plan for one profile.
///
/// Top-level entries are visited in name order so reruns produce
/// identical archives.
pub fn select_entries(source: &Path, profile: &TargetProfile) -> Result<PackagePlan> {
    let dir = fs::read_dir(source)
        .with_context(|| format!("Failed to read source directory {}", source.display()))?;

    let mut names = Vec::new();
    for entry in dir {
        let entry = entry.context("Failed to read source directory entry")?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    let mut plan = PackagePlan::default();
    for name in names {
        let path = source.join(&name);

        if let Some(reason) = classify_exclusion(&name, profile) {
            plan.excluded.push(ExcludedEntry { name, reason });
            continue;
        }

        if name == profile.manifest_source {
            plan.entries.push(PackageEntry {
                source_path: path,
                archive_name: CANONICAL_MANIFEST.to_string(),
            });
        } else if path.is_dir() {
            collect_tree(source, &path, &mut plan)?;
        } else {
            plan.entries.push(PackageEntry {
                source_path: path,
                archive_name: name,
            });
        }
    }

    let manifests = plan
        .entries
        .iter()
        .filter(|e| e.archive_name == CANONICAL_MANIFEST)
        .count();
    if manifests != 1 {
        bail!(
            "{} not found in {}",
            profile.manifest_source,
            source.display()
        );
    }

    Ok(plan)
}

/// Exclusion rules, applied to top-level names only
fn classify_exclusion(name: &str, profile: &TargetProfile) -> Option<ExcludeReason> {
    if name.starts_with('.') {
        return Some(ExcludeReason::Hidden);
    }
    if ARCHIVE_SUFFIXES.iter().any(|s| name.ends_with(s)) {
        return Some(ExcludeReason::Archive);
    }
    if SCRIPT_SUFFIXES.iter().any(|s| name.ends_with(s)) {
        return Some(ExcludeReason::Script);
    }
    if name == REPORT_FILE {
        return Some(ExcludeReason::Report);
    }
    if is_manifest_variant(name) && name != profile.manifest_source {
        return Some(ExcludeReason::ForeignManifest);
    }
    None
}

/// The canonical manifest, or any `manifest-<target>.json` sibling
pub fn is_manifest_variant(name: &str) -> bool {
    name == CANONICAL_MANIFEST || (name.starts_with("manifest-") && name.ends_with(".json"))
}

fn collect_tree(source: &Path, dir: &Path, plan: &mut PackagePlan) -> Result<()> {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if entry.file_type().is_file() {
            let relative = entry
                .path()
                .strip_prefix(source)
                .context("Failed to get relative path")?;
            plan.entries.push(PackageEntry {
                source_path: entry.path().to_path_buf(),
                archive_name: relative.to_string_lossy().into_owned(),
            });
        }
    }
    Ok(())
}
