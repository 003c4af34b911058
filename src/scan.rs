//! Directory enumeration for record files.

use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{LevelError, Result};

/// Which directory entries a scan keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFilter {
    /// Every non-directory entry
    All,
    /// Entries matching the glob `*.{ext}`: case-sensitive, and names
    /// starting with `.` never match
    Extension(&'static str),
}

impl FileFilter {
    fn accepts(&self, path: &Path) -> bool {
        match self {
            FileFilter::All => true,
            FileFilter::Extension(ext) => path.file_name().map_or(false, |name| {
                let name = name.as_bytes();
                !name.starts_with(b".")
                    && name
                        .strip_suffix(ext.as_bytes())
                        .and_then(|stem| stem.strip_suffix(b"."))
                        .is_some()
            }),
        }
    }
}

/// Whether an entry is a directory, following symlinks.
///
/// A symlink whose target cannot be inspected is not treated as a directory,
/// so reading it later reports the failure.
fn is_directory(entry: &fs::DirEntry) -> Result<bool> {
    let file_type = entry.file_type().map_err(|e| LevelError::io(entry.path(), e))?;
    if file_type.is_symlink() {
        return Ok(fs::metadata(entry.path()).map_or(false, |meta| meta.is_dir()));
    }
    Ok(file_type.is_dir())
}

/// List the entries directly inside `dir` that pass `filter`, sorted by file name.
///
/// Subdirectories are skipped, not descended. Every other entry is kept,
/// including broken symlinks, so an unreadable file aborts the caller instead
/// of vanishing. A missing directory is reported as
/// [`LevelError::DirectoryNotFound`] before anything else is read.
pub fn list_files(dir: &Path, filter: FileFilter) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LevelError::DirectoryNotFound { path: dir.to_path_buf() });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| LevelError::io(dir, e))? {
        let entry = entry.map_err(|e| LevelError::io(dir, e))?;
        let path = entry.path();

        if is_directory(&entry)? {
            debug!("Skipping directory {}", path.display());
            continue;
        }
        if filter.accepts(&path) {
            files.push(path);
        } else {
            debug!("Skipping {} (does not match filter)", path.display());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Found {} candidate files in {}", files.len(), dir.display());
    Ok(files)
}
