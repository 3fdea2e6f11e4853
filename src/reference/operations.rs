//! Content reference resolution
//!
//! Maps content references to filesystem paths. Resolution is best-effort:
//! every failure degrades to `None` and nothing on disk is touched.

use log::{debug, warn};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::DATA_COLUMN;
use crate::error::ResolveError;
use crate::reference::types::ContentReference;

/// Host-side lookup of provider rows
pub trait ContentQuery {
    /// Returns the value of `column` in the single row matching `reference`,
    /// or `None` when no row matches
    fn query_column(&self, reference: &str, column: &str) -> Result<Option<String>, ResolveError>;
}

/// Resolves content references to paths
pub struct PathResolver<'a> {
    query: Option<&'a dyn ContentQuery>,
}

impl<'a> PathResolver<'a> {
    pub fn new(query: Option<&'a dyn ContentQuery>) -> Self {
        Self { query }
    }

    /// Path behind a reference, if one can be determined.
    ///
    /// File references yield their embedded path without checking that it
    /// exists. Provider references are looked up through the content query.
    pub fn resolve(&self, reference: &ContentReference) -> Option<PathBuf> {
        match reference {
            ContentReference::File(path) => Some(path.clone()),
            ContentReference::Provider(id) => match self.query_data_path(id) {
                Ok(path) => path.map(PathBuf::from),
                Err(e) => {
                    warn!("Could not resolve {}: {}", id, e);
                    None
                }
            },
            ContentReference::Unsupported(scheme) => {
                debug!("Unsupported reference scheme {:?}", scheme);
                None
            }
        }
    }

    /// Parses and resolves a reference in one step
    pub fn resolve_uri(&self, uri: &str) -> Option<PathBuf> {
        self.resolve(&ContentReference::parse(uri))
    }

    fn query_data_path(&self, id: &str) -> Result<Option<String>, ResolveError> {
        let query = self.query.ok_or(ResolveError::ResolverUnavailable)?;
        let path = query.query_column(id, DATA_COLUMN)?;
        if path.is_none() {
            debug!("No row for {}", id);
        }
        Ok(path)
    }
}

/// In-memory provider table keyed by reference, then column
#[derive(Debug, Clone, Default)]
pub struct ContentTable {
    rows: HashMap<String, HashMap<String, String>>,
}

impl ContentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces one column value of a row
    pub fn insert(&mut self, reference: &str, column: &str, value: &str) {
        self.rows
            .entry(reference.to_string())
            .or_default()
            .insert(column.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ContentQuery for ContentTable {
    fn query_column(&self, reference: &str, column: &str) -> Result<Option<String>, ResolveError> {
        match self.rows.get(reference) {
            Some(row) => row
                .get(column)
                .cloned()
                .map(Some)
                .ok_or_else(|| ResolveError::MissingColumn(column.to_string())),
            None => Ok(None),
        }
    }
}
