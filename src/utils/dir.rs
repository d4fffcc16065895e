//! Synchronous directory listings.
//!
//! Listings are sorted by name and never include `.` or `..`. With
//! `full_paths`, each name is joined onto the listed directory.

use glob_match::glob_match;
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::io;

/// Files and directories directly inside `path`.
pub fn list_entries(path: &Path, full_paths: bool) -> Result<Vec<String>> {
    list_where(path, full_paths, |_, _| true)
}

/// Only the directories directly inside `path`.
pub fn list_subdirectories(path: &Path, full_paths: bool) -> Result<Vec<String>> {
    list_where(path, full_paths, |entry, _| entry.is_dir())
}

/// Only the regular files directly inside `path`.
pub fn list_files(path: &Path, full_paths: bool) -> Result<Vec<String>> {
    list_where(path, full_paths, |entry, _| entry.is_file())
}

/// Regular files whose name matches a glob such as `*.json`.
pub fn list_files_matching(path: &Path, pattern: &str, full_paths: bool) -> Result<Vec<String>> {
    list_where(path, full_paths, |entry, name| {
        entry.is_file() && glob_match(pattern, name)
    })
}

/// True iff every path is an existing directory.
pub fn all_directories_exist<I, P>(paths: I) -> bool
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().all(|p| p.as_ref().is_dir())
}

fn list_where<F>(path: &Path, full_paths: bool, keep: F) -> Result<Vec<String>>
where
    F: Fn(&Path, &str) -> bool,
{
    if !path.is_dir() {
        return Err(Error::validation_invalid_argument(
            "path",
            "Path is not a directory",
            Some(path.display().to_string()),
            None,
        ));
    }

    let names = io::read_dir_names(path, &format!("list {}", path.display()))?;

    Ok(names
        .into_iter()
        .filter(|name| keep(path.join(name).as_path(), name.as_str()))
        .map(|name| {
            if full_paths {
                path.join(&name).to_string_lossy().to_string()
            } else {
                name
            }
        })
        .collect())
}
