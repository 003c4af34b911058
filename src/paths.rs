//! Default locations used by the command-line tools.

use std::path::{Path, PathBuf};

/// Directory the level searcher scans when none is given
pub const DEFAULT_LEVEL_DIR: &str = "/mnt/c/Users/Public/Downloads";

/// Name filter the level searcher applies when none is given
pub const DEFAULT_NAME_FILTER: &str = "wheel";

/// Data root shipped alongside the crate sources
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Source and destination of one registry build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryPaths {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl RegistryPaths {
    /// Premade maps live in `<data>/maps/base`; the registry goes to `<data>/premade.json`
    pub fn from_data_dir(data_dir: &Path) -> Self {
        RegistryPaths {
            source: data_dir.join("maps").join("base"),
            output: data_dir.join("premade.json"),
        }
    }

    /// Replace either path with an explicit one
    pub fn with_overrides(mut self, source: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}

impl Default for RegistryPaths {
    fn default() -> Self {
        RegistryPaths::from_data_dir(Path::new(DEFAULT_DATA_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_under_data_dir() {
        let paths = RegistryPaths::from_data_dir(Path::new("/srv/game/data"));
        assert_eq!(paths.source, PathBuf::from("/srv/game/data/maps/base"));
        assert_eq!(paths.output, PathBuf::from("/srv/game/data/premade.json"));
    }

    #[test]
    fn test_overrides() {
        let paths = RegistryPaths::from_data_dir(Path::new("data"))
            .with_overrides(None, Some(PathBuf::from("out.json")));
        assert_eq!(paths.source, PathBuf::from("data/maps/base"));
        assert_eq!(paths.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_defaults_are_absolute() {
        assert!(Path::new(DEFAULT_LEVEL_DIR).is_absolute());
        assert!(RegistryPaths::default().source.ends_with("data/maps/base"));
    }
}
