//! Error types for Page Forge
//!
//! This module provides unified error handling across the workspace,
//! including validation errors, lookup failures, IO errors, serialization
//! errors and configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Page Forge
#[derive(Debug, Error)]
pub enum ForgeError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Unknown page type name
    #[error("Unknown page type: '{0}'")]
    UnknownPageType(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Page not found in the store
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Application not known to the entity catalog
    #[error("Application not found: {0}")]
    ApplicationNotFound(String),

    /// Store or catalog file not found
    #[error("File not found at path: {0}")]
    FileNotFound(PathBuf),

    // ========================================================================
    // Query Errors
    // ========================================================================
    /// Entity list query failed
    #[error("Entity query failed for application '{application}': {message}")]
    EntityQuery { application: String, message: String },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ForgeError {
    /// Create an entity query error
    pub fn entity_query(application: impl Into<String>, msg: impl Into<String>) -> Self {
        ForgeError::EntityQuery {
            application: application.into(),
            message: msg.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        ForgeError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        ForgeError::Internal(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ForgeError::UnknownPageType(_) | ForgeError::InvalidConfig(_)
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ForgeError::PageNotFound(_)
                | ForgeError::ApplicationNotFound(_)
                | ForgeError::FileNotFound(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ForgeError::FileRead { .. }
                | ForgeError::FileWrite { .. }
                | ForgeError::DirectoryCreate { .. }
        )
    }
}

/// Result type alias using ForgeError
pub type ForgeResult<T> = Result<T, ForgeError>;

// ============================================================================
// Tests
// ============================================================================
