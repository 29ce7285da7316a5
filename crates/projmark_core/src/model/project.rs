//! Project domain model.
//!
//! # Responsibility
//! - Define the single record kept by the store.
//! - Resolve the directory a project opens in.
//!
//! # Invariants
//! - `id` is immutable once assigned.
//! - `path` is kept exactly as entered; quote stripping only happens when
//!   resolving the directory to open.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Store-assigned identifier, strictly increasing across the store lifetime.
pub type ProjectId = i64;

const PATH_QUOTES: &[char] = &['"', '\''];

/// A named filesystem path the user wants to revisit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Free-form label. Not unique, may be empty.
    pub name: String,
    /// Raw path as entered, surrounding quotes included.
    pub path: String,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
        }
    }

    /// Returns the stored path with leading/trailing `"` and `'` removed.
    ///
    /// Paths copied from file managers often arrive quoted; the quotes are
    /// preserved in storage and dropped only here.
    pub fn open_path(&self) -> PathBuf {
        PathBuf::from(strip_path_quotes(&self.path))
    }
}

/// Trims any run of single or double quote characters from both ends.
pub fn strip_path_quotes(raw: &str) -> &str {
    raw.trim_matches(PATH_QUOTES)
}
