//! Source tree discovery
//!
//! Enumerates the files under a root that carry a given extension. Entries are
//! visited depth-first with siblings sorted by file name, so an unchanged tree
//! always yields the same sequence.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, fs::walk_failed};

/// Collect every file under `root` whose extension is `extension` (no leading dot).
///
/// A missing root, or a root that is not a directory, yields no files.
pub fn walk_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_failed(root, e))?;
        // Symlinks count when they point at a regular file.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
