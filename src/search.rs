//! # Level Searcher
//!
//! Finds the ids of levels whose metadata satisfies a predicate.
//!
//! Only `*.json` files directly inside the search directory are considered.
//! A record's `levelId` is looked up only once the predicate has accepted it.

use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::record::{load_meta, Meta};
use crate::scan::{list_files, FileFilter};

/// A filter over a record's `meta` object
pub trait Predicate {
    fn matches(&self, meta: &Meta) -> Result<bool>;
}

impl<F> Predicate for F
where
    F: Fn(&Meta) -> Result<bool>,
{
    fn matches(&self, meta: &Meta) -> Result<bool> {
        self(meta)
    }
}

/// Case-insensitive substring test on `meta.name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContains {
    needle: String,
}

impl NameContains {
    pub fn new(text: &str) -> Self {
        NameContains { needle: text.to_lowercase() }
    }
}

impl Predicate for NameContains {
    fn matches(&self, meta: &Meta) -> Result<bool> {
        Ok(meta.name()?.to_lowercase().contains(&self.needle))
    }
}

/// Case-insensitive substring test on `meta.author`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorContains {
    needle: String,
}

impl AuthorContains {
    pub fn new(text: &str) -> Self {
        AuthorContains { needle: text.to_lowercase() }
    }
}

impl Predicate for AuthorContains {
    fn matches(&self, meta: &Meta) -> Result<bool> {
        Ok(meta.author()?.to_lowercase().contains(&self.needle))
    }
}

/// Conjunction of predicates; an empty list accepts everything.
///
/// Evaluation stops at the first predicate that rejects the record.
#[derive(Default)]
pub struct AllOf(pub Vec<Box<dyn Predicate>>);

impl AllOf {
    pub fn with(mut self, predicate: impl Predicate + 'static) -> Self {
        self.0.push(Box::new(predicate));
        self
    }
}

impl Predicate for AllOf {
    fn matches(&self, meta: &Meta) -> Result<bool> {
        for predicate in &self.0 {
            if !predicate.matches(meta)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Return the `levelId` of every `*.json` record in `dir` accepted by `predicate`
pub fn search_levels<P: Predicate + ?Sized>(dir: &Path, predicate: &P) -> Result<Vec<String>> {
    let files = list_files(dir, FileFilter::Extension("json"))?;
    info!("Searching {} level files in {}", files.len(), dir.display());

    let mut matches = Vec::new();
    for path in &files {
        let meta = load_meta(path)?;
        if predicate.matches(&meta)? {
            let level_id = meta.level_id()?;
            debug!("Matched {} ({})", level_id, path.display());
            matches.push(level_id.to_string());
        }
    }

    info!("{} of {} levels matched", matches.len(), files.len());
    Ok(matches)
}
