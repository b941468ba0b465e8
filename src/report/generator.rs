//! Report generation

use crate::models::PackageRun;
use anyhow::Result;

pub fn generate_markdown_report(run: &PackageRun) -> Result<String> {
    let mut report = String::new();

    report.push_str("# Packaging Report\n\n");

    // Summary
    report.push_str("## Summary\n\n");
    if let Some(manifest) = &run.manifest {
        if !manifest.name.is_empty() {
            report.push_str(&format!(
                "- **Extension**: {} v{}\n",
                manifest.name, manifest.version
            ));
        }
    }
    report.push_str(&format!("- **Source**: {}\n", run.source.display()));
    report.push_str(&format!("- **Archives Produced**: {}\n\n", run.artifacts.len()));

    // Per-profile breakdown
    for artifact in &run.artifacts {
        report.push_str(&format!(
            "## {} ({})\n\n",
            artifact.profile.archive_name,
            artifact.profile.browser.label()
        ));
        report.push_str(&format!("- **Files Packed**: {}\n", artifact.files_packed));
        report.push_str(&format!("- **Bytes Packed**: {}\n", artifact.bytes_packed));
        report.push_str(&format!(
            "- **Manifest Shipped**: {}\n",
            artifact.profile.manifest_source
        ));

        if !artifact.excluded.is_empty() {
            report.push_str("\n### Excluded\n\n");
            for excluded in &artifact.excluded {
                report.push_str(&format!("- `{}` ({})\n", excluded.name, excluded.reason));
            }
        }
        report.push('\n');
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ExcludeReason, ExcludedEntry, Manifest, ProfileArtifact, TargetProfile,
    };
    use std::path::PathBuf;

    #[test]
    fn lists_archives_and_exclusions() {
        let profile = TargetProfile::chrome("enquote");
        let run = PackageRun {
            source: PathBuf::from("/tmp/enquote"),
            stem: "enquote".to_string(),
            manifest: Some(Manifest {
                name: "Enquote".to_string(),
                version: "1.4".to_string(),
                manifest_version: Some(3),
            }),
            artifacts: vec![ProfileArtifact {
                archive_path: PathBuf::from("/tmp/enquote/enquote.zip"),
                profile,
                files_packed: 4,
                bytes_packed: 1234,
                excluded: vec![ExcludedEntry {
                    name: ".git".to_string(),
                    reason: ExcludeReason::Hidden,
                }],
            }],
        };

        let report = generate_markdown_report(&run).unwrap();
        assert!(report.contains("**Extension**: Enquote v1.4"));
        assert!(report.contains("## enquote.zip (Chrome)"));
        assert!(report.contains("`.git` (hidden entry)"));
    }
}
