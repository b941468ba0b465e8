//! WebExtension packager CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use extpack::packager::selector;
use extpack::{
    archive_stem, package_extension, read_manifest, report, validator, PackageOptions,
    TargetProfile,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "extpack")]
#[command(about = "Package a WebExtension source tree into per-browser archives", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the Chrome and Firefox archives
    Build {
        /// Extension source directory (defaults to the current directory)
        source: Option<PathBuf>,

        /// Write a markdown packaging report next to the archives
        #[arg(short, long)]
        report: bool,
    },

    /// Show what each profile would package, without writing anything
    Preview {
        /// Extension source directory (defaults to the current directory)
        source: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Bare `extpack` packages the current directory
    let command = cli.command.unwrap_or(Commands::Build {
        source: None,
        report: false,
    });

    let outcome = match command {
        Commands::Build { source, report: write_report } => run_build(source, write_report),
        Commands::Preview { source } => run_preview(source),
    };

    if let Err(e) = outcome {
        eprintln!("{}", "❌ Packaging failed!".red().bold());
        eprintln!("{}", format!("Error: {e:#}").red());
        std::process::exit(1);
    }
}

fn resolve_source(source: Option<PathBuf>) -> Result<PathBuf> {
    match source {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(Into::into),
    }
}

fn run_build(source: Option<PathBuf>, write_report: bool) -> Result<()> {
    let source = resolve_source(source)?;

    println!("{}", "WebExtension Packager".bold().blue());
    println!("{}", "=".repeat(50).blue());
    println!();

    let run = package_extension(&source, PackageOptions::default())?;

    println!("{}", "✅ All done.".green().bold());
    println!();
    if let Some(manifest) = &run.manifest {
        if !manifest.name.is_empty() {
            println!("Extension: {} v{}", manifest.name, manifest.version);
        }
    }
    for artifact in &run.artifacts {
        println!(
            "  - {} [{}]: {} files, {} bytes",
            artifact.archive_path.display(),
            artifact.profile.browser.label(),
            artifact.files_packed,
            artifact.bytes_packed,
        );
        for excluded in &artifact.excluded {
            println!(
                "      {} {} ({})",
                "skipped".yellow(),
                excluded.name,
                excluded.reason
            );
        }
    }

    if write_report {
        let report_path = source.join(report::REPORT_FILE);
        let content = report::generate_markdown_report(&run)?;
        std::fs::write(&report_path, content)?;
        println!();
        println!("  - Report: {}", report_path.display());
    }

    Ok(())
}

fn run_preview(source: Option<PathBuf>) -> Result<()> {
    let source = resolve_source(source)?;

    validator::validate_source(&source)?;
    let manifest = read_manifest(&source);
    let stem = archive_stem(&source, manifest.as_ref());

    println!("{}", "Packaging preview".bold().blue());
    println!("{}", "=".repeat(50).blue());

    for profile in TargetProfile::defaults(&stem) {
        let plan = selector::select_entries(&source, &profile)?;

        println!();
        println!(
            "{}",
            format!("{} → {}", profile.browser.label(), profile.archive_name).bold()
        );
        for entry in &plan.entries {
            let origin = entry
                .source_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let renamed =
                Path::new(&entry.archive_name).file_name() != Some(OsStr::new(&origin));
            if renamed {
                println!("  + {} (from {})", entry.archive_name, origin);
            } else {
                println!("  + {}", entry.archive_name);
            }
        }
        for excluded in &plan.excluded {
            println!(
                "  {} {} ({})",
                "-".yellow(),
                excluded.name,
                excluded.reason
            );
        }
    }

    Ok(())
}
