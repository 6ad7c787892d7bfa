//! Input path expansion.
//!
//! Explicit file paths are passed through untouched (a missing path is
//! reported later as not found). Directories are walked for `*.java` files,
//! sorted so runs are reproducible.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const JAVA_EXTENSION: &str = "java";

fn is_java_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(JAVA_EXTENSION)
}

/// Collect `*.java` files below `dir`, sorted by path.
pub fn java_files_in(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() && is_java_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Files to process, plus how many repeated paths were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedPaths {
    pub files: Vec<PathBuf>,
    pub duplicates: usize,
}

/// Expand `paths` in order: directories become their Java files, anything
/// else is kept as given. Repeated paths are processed once, at their first
/// position, and counted in [`ExpandedPaths::duplicates`].
pub fn expand_paths(paths: &[PathBuf]) -> Result<ExpandedPaths, walkdir::Error> {
    let mut expanded = Vec::new();
    for path in paths {
        if path.is_dir() {
            expanded.extend(java_files_in(path)?);
        } else {
            expanded.push(path.clone());
        }
    }

    let total = expanded.len();
    let mut seen = std::collections::HashSet::new();
    expanded.retain(|path| seen.insert(path.clone()));
    Ok(ExpandedPaths {
        duplicates: total - expanded.len(),
        files: expanded,
    })
}
