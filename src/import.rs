//! One-shot skill import
//!
//! Copies skill directories from a source collection into the target,
//! skipping anything that is not a skill (no SKILL.md) and anything whose
//! directory name already exists in the target. Dry-run is the default.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::AppError;

/// What an import run did (or, in a dry run, would have done)
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub added: Vec<String>,
    pub conflicts: Vec<String>,
    pub dry_run: bool,
}

/// Copy a directory tree. Import volumes are small, so this is plain
/// synchronous fs work.
fn copy_dir_recursive(source: &Path, target: &Path) -> std::io::Result<()> {
    fs::create_dir_all(target)?;
    for dirent in fs::read_dir(source)? {
        let dirent = dirent?;
        let dest = target.join(dirent.file_name());
        if dirent.file_type()?.is_dir() {
            copy_dir_recursive(&dirent.path(), &dest)?;
        } else {
            fs::copy(dirent.path(), &dest)?;
        }
    }
    Ok(())
}

/// Import every skill directory from `source` into `target`.
///
/// A source child counts as a skill when it contains a SKILL.md. Children
/// whose name already exists in the target are conflicts and are skipped.
/// With `dry_run`, nothing is copied; the outcome reports what would happen.
pub fn import_skills(source: &Path, target: &Path, dry_run: bool) -> Result<ImportOutcome, AppError> {
    let source_dirs = fs::read_dir(source)
        .map_err(|e| AppError::ImportFailed(format!("Failed to read source directory: {}", e)))?;

    let mut outcome = ImportOutcome {
        dry_run,
        ..Default::default()
    };

    let mut dir_names: Vec<String> = source_dirs
        .filter_map(|d| d.ok())
        .filter_map(|d| d.file_name().to_str().map(str::to_string))
        .collect();
    dir_names.sort();

    for dir_name in dir_names {
        let src_path = source.join(&dir_name);
        if !src_path.join("SKILL.md").exists() {
            continue;
        }

        if target.join(&dir_name).exists() {
            outcome.conflicts.push(dir_name);
            continue;
        }

        if !dry_run {
            copy_dir_recursive(&src_path, &target.join(&dir_name))
                .map_err(|e| AppError::ImportFailed(format!("Failed to copy {}: {}", dir_name, e)))?;
        }
        info!("+ {}", dir_name);
        outcome.added.push(dir_name);
    }

    Ok(outcome)
}

/// Format an import outcome as a printable summary
pub fn format_outcome(outcome: &ImportOutcome) -> String {
    let mut out = String::new();
    if outcome.dry_run {
        out.push_str("Mode: DRY RUN (pass --no-dry-run to copy)\n\n");
    }
    for added in &outcome.added {
        out.push_str(&format!("  + {}\n", added));
    }
    out.push_str(&format!("\nAdded: {}\n", outcome.added.len()));
    out.push_str(&format!("Skipped (already exists): {}\n", outcome.conflicts.len()));
    if !outcome.conflicts.is_empty() {
        out.push_str("\nConflicts (skipped):\n");
        for conflict in &outcome.conflicts {
            out.push_str(&format!("  - {}\n", conflict));
        }
    }
    out
}
