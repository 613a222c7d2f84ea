//! Default values for new and partially-specified pages
//!
//! Defaults come in two layers: the baseline shared by every page and one
//! settings object per page type. Both can be overridden from the
//! `[defaults]` table of the configuration file.

use crate::input::EntityPageInput;
use crate::settings::{ListSettings, PageSettings, SingleRecordSettings};
use pageforge_core::PageType;
use serde::{Deserialize, Serialize};

/// Defaults table used by the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageDefaults {
    /// Whether new pages show every field of their entity
    pub show_all_fields: bool,

    /// Defaults for single-record pages
    pub single_record: SingleRecordSettings,

    /// Defaults for list pages
    pub list: ListSettings,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            show_all_fields: true,
            single_record: SingleRecordSettings::default(),
            list: ListSettings::default(),
        }
    }
}

impl PageDefaults {
    /// Default settings variant for a page type
    pub fn variant(&self, page_type: PageType) -> PageSettings {
        match page_type {
            PageType::SingleRecord => self.single_record.into(),
            PageType::List => self.list.clone().into(),
        }
    }

    /// Baseline input for a page type, before any record is laid over it
    pub fn baseline(&self, page_type: PageType) -> EntityPageInput {
        EntityPageInput {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            entity_id: String::new(),
            show_all_fields: self.show_all_fields,
            show_field_list: Vec::new(),
            settings: self.variant(page_type),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
