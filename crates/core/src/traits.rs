//! Core traits for Page Forge
//!
//! This module defines the traits that types throughout the workspace
//! implement to provide consistent validation and persistence behavior.

use crate::error::{ForgeError, ForgeResult};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use pageforge_core::{ForgeError, ForgeResult, Validatable};
///
/// struct LoggingConfig {
///     level: String,
/// }
///
/// impl Validatable for LoggingConfig {
///     fn validate(&self) -> ForgeResult<()> {
///         if self.level.is_empty() {
///             return Err(ForgeError::config("log level cannot be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `ForgeError` describing the problem.
    fn validate(&self) -> ForgeResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Persistable Trait
// ============================================================================

/// Trait for types that can be serialized to and deserialized from files
///
/// Types implementing this trait can be saved to and loaded from
/// JSON files such as page stores and entity catalogs.
pub trait Persistable: Serialize + DeserializeOwned + Sized {
    /// Save to a JSON string
    fn to_json(&self) -> ForgeResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Load from a JSON string
    fn from_json(json: &str) -> ForgeResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Save to a file
    fn save_to_file(&self, path: &Path) -> ForgeResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| ForgeError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from a file
    fn load_from_file(path: &Path) -> ForgeResult<Self> {
        if !path.exists() {
            return Err(ForgeError::FileNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path).map_err(|e| ForgeError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Tests
// ============================================================================
