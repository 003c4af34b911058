//! # Registry Builder
//!
//! Compiles the premade-level registry from a directory of map files.
//!
//! Every file directly inside the source directory is parsed and projected
//! onto three fields of its `meta` object. The result is written as one JSON
//! array that the game server loads at startup:
//!
//! ```json
//! [
//!   { "levelId": "0b6c...", "levelName": "Wheel of Fortune", "author": "ray" }
//! ]
//! ```
//!
//! A single unreadable, malformed or incomplete file aborts the build; the
//! output file is only touched once every entry has been projected.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{LevelError, Result};
use crate::record::{load_meta, Meta};
use crate::scan::{list_files, FileFilter};

/// One row of the registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryEntry {
    #[serde(rename = "levelId")]
    pub level_id: String,
    #[serde(rename = "levelName")]
    pub level_name: String,
    pub author: String,
}

impl RegistryEntry {
    /// Project a record's metadata onto a registry row
    pub fn from_meta(meta: &Meta) -> Result<Self> {
        Ok(RegistryEntry {
            level_id: meta.level_id()?.to_string(),
            level_name: meta.name()?.to_string(),
            author: meta.author()?.to_string(),
        })
    }
}

/// Build registry entries for every file in `source_dir`, in file-name order
pub fn build_registry(source_dir: &Path) -> Result<Vec<RegistryEntry>> {
    info!("Building registry from {}", source_dir.display());

    let files = list_files(source_dir, FileFilter::All)?;
    let mut entries = Vec::with_capacity(files.len());
    for path in &files {
        let meta = load_meta(path)?;
        entries.push(RegistryEntry::from_meta(&meta)?);
    }

    for level_id in duplicate_level_ids(&entries) {
        warn!("Level id {} appears more than once; the server will keep only the first", level_id);
    }

    info!("Collected {} registry entries", entries.len());
    Ok(entries)
}

/// Level ids that occur more than once, each reported once in first-seen order
pub fn duplicate_level_ids(entries: &[RegistryEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for entry in entries {
        if !seen.insert(entry.level_id.as_str()) && reported.insert(entry.level_id.as_str()) {
            duplicates.push(entry.level_id.clone());
        }
    }
    duplicates
}

/// Serialize the registry as a JSON array, one line
pub fn registry_to_json(entries: &[RegistryEntry]) -> Result<String> {
    serde_json::to_string(entries).map_err(LevelError::Serialize)
}

/// Write the registry to `dest`, replacing whatever was there
pub fn write_registry(entries: &[RegistryEntry], dest: &Path) -> Result<()> {
    let json = registry_to_json(entries)?;

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LevelError::io(parent, e))?;
    }
    fs::write(dest, json).map_err(|e| LevelError::io(dest, e))?;

    info!("Registry written to {}", dest.display());
    Ok(())
}

/// Load a previously written registry file
pub fn read_registry(path: &Path) -> Result<Vec<RegistryEntry>> {
    let content = fs::read_to_string(path).map_err(|e| LevelError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| LevelError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_map(dir: &Path, file: &str, id: &str, name: &str, author: &str) {
        let doc = serde_json::json!({
            "meta": {"levelId": id, "name": name, "author": author},
            "grid": [[0, 1], [1, 0]]
        });
        fs::write(dir.join(file), doc.to_string()).unwrap();
    }

    fn entry(id: &str, name: &str, author: &str) -> RegistryEntry {
        RegistryEntry {
            level_id: id.to_string(),
            level_name: name.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn test_build_registry() {
        let dir = TempDir::new().unwrap();
        write_map(dir.path(), "b.json", "id-b", "Second", "bob");
        write_map(dir.path(), "a.json", "id-a", "First", "alice");

        let entries = build_registry(dir.path()).unwrap();
        assert_eq!(
            entries,
            vec![entry("id-a", "First", "alice"), entry("id-b", "Second", "bob")]
        );
    }

    #[test]
    fn test_build_reads_every_file() {
        let dir = TempDir::new().unwrap();
        write_map(dir.path(), "legacy.map", "id-legacy", "Old", "eve");

        let entries = build_registry(dir.path()).unwrap();
        assert_eq!(entries, vec![entry("id-legacy", "Old", "eve")]);
    }

    #[test]
    fn test_missing_level_id_aborts() {
        let dir = TempDir::new().unwrap();
        write_map(dir.path(), "a.json", "id-a", "First", "alice");
        fs::write(
            dir.path().join("b.json"),
            r#"{"meta": {"name": "No Id", "author": "bob"}}"#,
        )
        .unwrap();

        let err = build_registry(dir.path()).unwrap_err();
        match err {
            LevelError::MissingKey { path, key } => {
                assert_eq!(key, "meta.levelId");
                assert_eq!(path, dir.path().join("b.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_json_aborts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.json"), "not json at all").unwrap();

        assert!(matches!(build_registry(dir.path()), Err(LevelError::Parse { .. })));
    }

    #[test]
    fn test_dangling_symlink_aborts() {
        let dir = TempDir::new().unwrap();
        write_map(dir.path(), "a.json", "id-a", "First", "alice");
        std::os::unix::fs::symlink(dir.path().join("gone.json"), dir.path().join("b.json")).unwrap();

        match build_registry(dir.path()) {
            Err(LevelError::Io { path, .. }) => assert_eq!(path, dir.path().join("b.json")),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_source_directory() {
        let dir = TempDir::new().unwrap();
        assert!(build_registry(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let json = registry_to_json(&[entry("x", "Wheel", "ray")]).unwrap();
        assert_eq!(json, r#"[{"levelId":"x","levelName":"Wheel","author":"ray"}]"#);
        assert_eq!(registry_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_write_overwrites_and_creates_parent() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("data").join("premade.json");

        write_registry(&[entry("old", "Old", "a"), entry("older", "Older", "a")], &dest).unwrap();
        write_registry(&[entry("new", "New", "b")], &dest).unwrap();

        assert_eq!(read_registry(&dest).unwrap(), vec![entry("new", "New", "b")]);
    }

    #[test]
    fn test_duplicate_level_ids() {
        let entries = vec![
            entry("a", "A", "x"),
            entry("b", "B", "x"),
            entry("a", "A2", "y"),
            entry("a", "A3", "z"),
            entry("b", "B2", "y"),
        ];
        assert_eq!(duplicate_level_ids(&entries), vec!["a", "b"]);
        assert!(duplicate_level_ids(&entries[..2]).is_empty());
    }
}
