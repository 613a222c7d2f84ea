//! Core types used throughout Page Forge
//!
//! This module contains the small vocabulary shared by the IR, the form
//! model and the CLI: identifiers, the page type discriminant and
//! label/value options for select widgets.

use crate::error::ForgeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque page identifier; empty for a page that has not been created yet
pub type PageId = String;

/// Reference to an external entity definition
pub type EntityId = String;

/// Reference to a field of an entity
pub type FieldRef = String;

/// Identifier of the application that owns pages and entities
pub type ApplicationId = String;

// ============================================================================
// Page Type
// ============================================================================

/// How a page presents its entity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum PageType {
    /// Shows a single record of the entity
    #[default]
    SingleRecord,
    /// Shows a list of records of the entity
    List,
}

impl PageType {
    /// All page types in display order
    pub const ALL: [PageType; 2] = [PageType::SingleRecord, PageType::List];

    /// Wire name of this page type
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::SingleRecord => "SingleRecord",
            PageType::List => "List",
        }
    }

    /// Human-readable label for toggles and menus
    pub fn label(&self) -> &'static str {
        match self {
            PageType::SingleRecord => "Single Record",
            PageType::List => "List",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageType {
    type Err = ForgeError;

    /// Lenient parse used for user input: accepts the wire name,
    /// kebab/snake case, or the display label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "singlerecord" | "single" | "record" => Ok(PageType::SingleRecord),
            "list" => Ok(PageType::List),
            _ => Err(ForgeError::UnknownPageType(s.to_string())),
        }
    }
}

// ============================================================================
// Select Options
// ============================================================================

/// A label/value pair handed to select-style widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value written into the form when selected
    pub value: String,
    /// Text shown to the user
    pub label: String,
}

impl SelectOption {
    /// Create a new option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
