//! Map/Level records and their `meta` object.
//!
//! Records are kept as `serde_json::Value` rather than a derived struct so a
//! missing field is reported as a missing key on a named file instead of a
//! generic deserialization failure. Only the keys a tool asks for are checked.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{Map, Value};

use crate::error::{LevelError, Result};

pub const META_KEY: &str = "meta";
pub const LEVEL_ID_KEY: &str = "levelId";
pub const NAME_KEY: &str = "name";
pub const AUTHOR_KEY: &str = "author";

/// The `meta` object of one record, remembering which file it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl Meta {
    /// Extract the `meta` object from a parsed record document
    pub fn from_document(path: &Path, document: Value) -> Result<Self> {
        let meta = match document {
            Value::Object(mut top) => top.remove(META_KEY),
            _ => {
                return Err(LevelError::WrongType {
                    path: path.to_path_buf(),
                    key: "<root>".to_string(),
                    expected: "an object",
                })
            }
        };

        match meta {
            Some(Value::Object(fields)) => Ok(Meta { path: path.to_path_buf(), fields }),
            Some(_) => Err(LevelError::WrongType {
                path: path.to_path_buf(),
                key: META_KEY.to_string(),
                expected: "an object",
            }),
            None => Err(LevelError::MissingKey {
                path: path.to_path_buf(),
                key: META_KEY.to_string(),
            }),
        }
    }

    /// Look up a string field of `meta`
    pub fn field(&self, key: &str) -> Result<&str> {
        match self.fields.get(key) {
            Some(Value::String(value)) => Ok(value.as_str()),
            Some(_) => Err(LevelError::WrongType {
                path: self.path.clone(),
                key: format!("{}.{}", META_KEY, key),
                expected: "a string",
            }),
            None => Err(LevelError::MissingKey {
                path: self.path.clone(),
                key: format!("{}.{}", META_KEY, key),
            }),
        }
    }

    pub fn level_id(&self) -> Result<&str> {
        self.field(LEVEL_ID_KEY)
    }

    pub fn name(&self) -> Result<&str> {
        self.field(NAME_KEY)
    }

    pub fn author(&self) -> Result<&str> {
        self.field(AUTHOR_KEY)
    }

    /// File the record was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read and parse one record file, returning its `meta` object.
///
/// The file is read fully and closed before parsing.
pub fn load_meta(path: &Path) -> Result<Meta> {
    debug!("Reading record {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| LevelError::io(path, e))?;
    let document: Value = serde_json::from_str(&content).map_err(|source| LevelError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Meta::from_document(path, document)
}
