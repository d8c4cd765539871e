//! Candidate file discovery.

use eclint_core::Checker;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Expands path arguments into the list of files to check.
///
/// Directories are walked recursively honoring `.gitignore`, hidden files
/// included but `.git` skipped. Files are kept as given, even missing ones,
/// so the checker can report them. Excluded paths are dropped.
#[must_use]
pub fn discover(paths: &[PathBuf], checker: &Checker) -> Vec<PathBuf> {
    let default_root = [PathBuf::from(".")];
    let roots = if paths.is_empty() {
        &default_root[..]
    } else {
        paths
    };

    let mut files = Vec::new();
    for root in roots {
        if root.is_dir() {
            files.extend(walk(root));
        } else {
            files.push(root.clone());
        }
    }

    files.retain(|path| {
        let excluded = checker.is_excluded(path);
        if excluded {
            debug!("Excluding: {}", path.display());
        }
        !excluded
    });
    files
}

fn walk(root: &Path) -> Vec<PathBuf> {
    WalkBuilder::new(root)
        .hidden(false)
        .require_git(false)
        .filter_entry(|entry| entry.file_name() != ".git")
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .collect()
}
