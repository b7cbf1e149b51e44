//! Category table file loading
//!
//! The backing tables are JSON objects mapping a normalized, unescaped tag
//! name to an array of category name strings. Two files coexist: the
//! legacy table and the richer current one. Updating a table requires
//! restarting the host; a loaded store is never refreshed.

use crate::domain::category::CategoryStore;
use crate::error::{Result, TagkitError};
use std::fs;
use std::path::Path;

/// File name of the legacy (version 1) table.
pub const LEGACY_TABLE_FILE: &str = "tag_category.json";

/// File name of the current (version 2) table.
pub const CURRENT_TABLE_FILE: &str = "tag_category_v2.json";

/// Selector for the two coexisting table versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableVersion {
    Legacy,
    Current,
}

/// Both table versions, loaded once by the host and passed by reference
/// into category-aware operations. Immutable and `Sync` after load.
#[derive(Debug, Clone)]
pub struct CategoryTables {
    legacy: CategoryStore,
    current: CategoryStore,
}

impl CategoryTables {
    /// Load both table files from a directory.
    ///
    /// A missing file is a deployment error and fails loading outright,
    /// so callers can tell "tag has no categories" from "categories
    /// unavailable".
    pub fn load_dir(dir: &Path) -> Result<Self> {
        Ok(CategoryTables {
            legacy: load_table(&dir.join(LEGACY_TABLE_FILE))?,
            current: load_table(&dir.join(CURRENT_TABLE_FILE))?,
        })
    }

    pub fn store(&self, version: TableVersion) -> &CategoryStore {
        match version {
            TableVersion::Legacy => &self.legacy,
            TableVersion::Current => &self.current,
        }
    }

    /// The current table; all shipped operations query this version.
    pub fn current(&self) -> &CategoryStore {
        &self.current
    }
}

/// Load a single table file. Tolerates a UTF-8 byte-order mark.
pub fn load_table(path: &Path) -> Result<CategoryStore> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TagkitError::TableNotFound(path.to_path_buf())
        } else {
            TagkitError::Io(e)
        }
    })?;

    let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);

    serde_json::from_str(contents).map_err(|e| TagkitError::TableParse {
        path: path.to_path_buf(),
        source: e,
    })
}
