//! # levelkit - Maintenance utilities for level/map datasets
//!
//! This library backs two one-shot command-line tools used while curating the
//! game's map collection:
//!
//! - **`registry-builder`** compiles every map in `data/maps/base` into the
//!   `data/premade.json` registry (`levelId`, `levelName`, `author`) that the
//!   game server loads at startup.
//! - **`level-searcher`** scans a directory of downloaded levels and prints the
//!   ids of those whose name contains a given text.
//!
//! ## Record Format
//!
//! Both tools read UTF-8 JSON documents with a `meta` object:
//!
//! ```json
//! {
//!   "meta": { "levelId": "0b6c...", "name": "Wheel of Fortune", "author": "ray" },
//!   "...": "map payload, ignored"
//! }
//! ```
//!
//! ## Architecture
//!
//! - `error`: the [`LevelError`] taxonomy shared by both tools
//! - `record`: loading a record file and reading its `meta` fields
//! - `scan`: sorted directory listings with an optional extension filter
//! - `registry`: building, writing and reading the registry
//! - `search`: predicates and the level search
//! - `paths`: default directories and registry locations
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use levelkit::{registry, search};
//!
//! let entries = registry::build_registry(Path::new("data/maps/base"))?;
//! registry::write_registry(&entries, Path::new("data/premade.json"))?;
//!
//! let ids = search::search_levels(Path::new("downloads"), &search::NameContains::new("wheel"))?;
//! println!("{:?}", ids);
//! # Ok::<(), levelkit::LevelError>(())
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`error::Result`]. Every error is fatal to the run:
//! a missing directory, unreadable file, malformed JSON or missing key stops
//! the tool before any output is written. The binaries wrap these errors with
//! `color_eyre` context.

pub mod error;
pub mod paths;
pub mod record;
pub mod registry;
pub mod scan;
pub mod search;

pub use error::{LevelError, Result};
pub use registry::RegistryEntry;
pub use search::{AllOf, AuthorContains, NameContains, Predicate};
