//! Archive assembly

use crate::models::PackagePlan;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Write every planned entry into a deflate-compressed zip at `dest`.
///
/// Returns the number of uncompressed bytes packed. The destination is
/// truncated first, so reruns overwrite previous output.
pub fn write_archive(plan: &PackagePlan, dest: &Path) -> Result<u64> {
    let file = File::create(dest)
        .with_context(|| format!("Failed to create archive {}", dest.display()))?;
    let mut zip = ZipWriter::new(file);

    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut bytes = 0u64;
    for entry in &plan.entries {
        zip.start_file(entry.archive_name.as_str(), options)
            .with_context(|| format!("Failed to add {} to archive", entry.archive_name))?;
        let content = fs::read(&entry.source_path)
            .with_context(|| format!("Failed to read {}", entry.source_path.display()))?;
        zip.write_all(&content)?;
        bytes += content.len() as u64;
    }

    zip.finish().context("Failed to finalize archive")?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PackageEntry;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    #[test]
    fn packs_entries_under_their_archive_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), b"alpha").unwrap();

        let plan = PackagePlan {
            entries: vec![PackageEntry {
                source_path: dir.path().join("a.txt"),
                archive_name: "renamed.txt".to_string(),
            }],
            excluded: Vec::new(),
        };

        let dest = dir.path().join("out.zip");
        let bytes = write_archive(&plan, &dest).unwrap();
        assert_eq!(bytes, 5);

        let mut archive = ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let mut content = String::new();
        archive
            .by_name("renamed.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "alpha");
    }

    #[test]
    fn unreadable_entry_fails_the_run() {
        let dir = TempDir::new().unwrap();
        let plan = PackagePlan {
            entries: vec![PackageEntry {
                source_path: dir.path().join("missing.txt"),
                archive_name: "missing.txt".to_string(),
            }],
            excluded: Vec::new(),
        };

        assert!(write_archive(&plan, &dir.path().join("out.zip")).is_err());
    }
}
