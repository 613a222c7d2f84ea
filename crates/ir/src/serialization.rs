//! Saving and loading page store files
//!
//! Store files are JSON documents wrapping the records with a schema
//! version. A bare JSON array of records is accepted too, which is what an
//! export of the page list query looks like.

use crate::SCHEMA_VERSION;
use crate::page::EntityPage;
use crate::store::PageStore;
use pageforge_core::{ForgeError, ForgeResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

// ============================================================================
// Store File Wrapper
// ============================================================================

/// On-disk layout of a page store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreFile {
    /// Schema version for migration purposes
    pub schema_version: u32,

    /// The stored pages
    pub pages: Vec<EntityPage>,
}

impl StoreFile {
    pub fn new(store: &PageStore) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            pages: store.list().to_vec(),
        }
    }

    /// Check the schema version is one this build can read
    pub fn check_version(&self) -> ForgeResult<()> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(ForgeError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Save Functions
// ============================================================================

/// Save a store to a file, creating parent directories as needed
pub fn save_store(store: &PageStore, path: impl AsRef<Path>) -> ForgeResult<()> {
    let path = path.as_ref();
    let json = save_store_to_string(store)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| ForgeError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    std::fs::write(path, json).map_err(|e| ForgeError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), pages = store.len(), "store saved");
    Ok(())
}

/// Save a store to a pretty-printed JSON string
pub fn save_store_to_string(store: &PageStore) -> ForgeResult<String> {
    serde_json::to_string_pretty(&StoreFile::new(store)).map_err(Into::into)
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load a store from a file
pub fn load_store(path: impl AsRef<Path>) -> ForgeResult<PageStore> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ForgeError::FileNotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path).map_err(|e| ForgeError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    load_store_from_string(&json).map_err(|e| match e {
        ForgeError::JsonSerialization(je) => ForgeError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid store file format: {}", je),
        },
        other => other,
    })
}

/// Load a store from a file, starting empty if the file does not exist yet
pub fn load_store_or_default(path: impl AsRef<Path>) -> ForgeResult<PageStore> {
    match load_store(path) {
        Err(ForgeError::FileNotFound(path)) => {
            debug!(path = %path.display(), "no store file yet, starting empty");
            Ok(PageStore::new())
        }
        other => other,
    }
}

/// Load a store from a JSON string
///
/// An object is read as a [`StoreFile`], an array as bare records.
pub fn load_store_from_string(json: &str) -> ForgeResult<PageStore> {
    let value: Value = serde_json::from_str(json)?;

    let pages = if value.is_array() {
        serde_json::from_value::<Vec<EntityPage>>(value)?
    } else {
        let file: StoreFile = serde_json::from_value(value)?;
        file.check_version()?;
        file.pages
    };

    Ok(PageStore::from_pages(pages))
}

// ============================================================================
// Tests
// ============================================================================
