/*
 * lookup.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Paper-name lookup table and its load-once cache.
 */

//! Paper-name lookup.
//!
//! The lookup table maps a WG21 paper identifier (`N4849`, `P0443R14`) to a
//! human readable name. It is stored as plain text, one entry per line:
//!
//! ```text
//! N4849 "C++20 Working Draft"
//! P0443R14 Executors
//! ```
//!
//! The identifier is everything up to the first run of whitespace; the rest
//! of the line, trimmed, is the display name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::config::ANNEXF_KEY;
use crate::error::{FilterError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: HashMap<String, String>,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. A later entry for the same identifier replaces the
    /// earlier one.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(id.into(), name.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse lookup table text. `path` is only used for error messages.
    ///
    /// Blank lines are skipped. A line with an identifier but no display
    /// name is an error.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let mut table = Self::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.split_once(char::is_whitespace) {
                Some((id, name)) if !name.trim().is_empty() => {
                    table.insert(id, name.trim());
                }
                _ => {
                    return Err(FilterError::MalformedResource {
                        path: path.to_path_buf(),
                        line: index + 1,
                        content: line.to_string(),
                    });
                }
            }
        }
        Ok(table)
    }

    /// Read and parse a lookup table file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| FilterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (id, name) in iter {
            table.insert(id, name);
        }
        table
    }
}

/// Loads the lookup table at most once per run.
///
/// Nothing is read until the first [`resolve`](Self::resolve); a document
/// without paper references never touches the file. The outcome of that
/// first load is kept: a loaded table is reused for every later query, and a
/// failed load fails every later query the same way without touching the
/// file again.
#[derive(Debug, Default)]
pub struct LookupCache {
    source: Option<PathBuf>,
    table: OnceCell<Result<LookupTable>>,
}

impl LookupCache {
    /// A cache that will load from `source` on first use. With no source,
    /// the first query fails with a configuration error.
    pub fn from_path(source: Option<PathBuf>) -> Self {
        Self {
            source,
            table: OnceCell::new(),
        }
    }

    /// A cache that is already populated. No file is ever read.
    pub fn with_table(table: LookupTable) -> Self {
        let cache = Self::default();
        let _ = cache.table.set(Ok(table));
        cache
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.table.get(), Some(Ok(_)))
    }

    /// The table, loading it on first call.
    pub fn table(&self) -> Result<&LookupTable> {
        match self.table.get_or_init(|| self.load()) {
            Ok(table) => Ok(table),
            Err(err) => Err(err.replay()),
        }
    }

    /// Display name for `id`, if the table has one.
    pub fn resolve(&self, id: &str) -> Result<Option<&str>> {
        Ok(self.table()?.get(id))
    }

    fn load(&self) -> Result<LookupTable> {
        let path = self
            .source
            .as_deref()
            .ok_or_else(|| FilterError::Configuration {
                key: ANNEXF_KEY.to_string(),
            })?;
        let table = LookupTable::load(path)?;
        debug!(path = %path.display(), entries = table.len(), "loaded lookup table");
        Ok(table)
    }
}
