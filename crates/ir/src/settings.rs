//! Page-type dependent settings
//!
//! Each page type carries its own settings object. On a persisted record the
//! settings are stored field-wise optional (`Stored*` types); on the editable
//! input they are complete and wrapped in the `PageSettings` union, whose
//! variant is the page type.

use pageforge_core::{PageId, PageType};
use serde::{Deserialize, Serialize};

// ============================================================================
// Complete Settings
// ============================================================================

/// Settings of a page showing a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SingleRecordSettings {
    /// Whether the page offers record creation
    #[serde(alias = "allow_creation")]
    pub allow_creation: bool,

    /// Whether the page offers record deletion
    #[serde(alias = "allow_deletion")]
    pub allow_deletion: bool,

    /// Whether the page offers record updates
    #[serde(alias = "allow_update")]
    pub allow_update: bool,
}

impl Default for SingleRecordSettings {
    fn default() -> Self {
        Self {
            allow_creation: true,
            allow_deletion: false,
            allow_update: false,
        }
    }
}

impl SingleRecordSettings {
    /// Lay stored values over these settings, field by field
    pub fn overlay(mut self, stored: &StoredSingleRecordSettings) -> Self {
        if let Some(v) = stored.allow_creation {
            self.allow_creation = v;
        }
        if let Some(v) = stored.allow_deletion {
            self.allow_deletion = v;
        }
        if let Some(v) = stored.allow_update {
            self.allow_update = v;
        }
        self
    }
}

/// Settings of a page showing a list of records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListSettings {
    /// Whether the list offers record creation
    #[serde(alias = "allow_creation")]
    pub allow_creation: bool,

    /// Whether the list offers record deletion
    #[serde(alias = "allow_deletion")]
    pub allow_deletion: bool,

    /// Whether the list shows a search box
    #[serde(alias = "enable_search")]
    pub enable_search: bool,

    /// Page opened when a list row is clicked (empty for none)
    #[serde(alias = "navigate_to_page_id")]
    pub navigate_to_page_id: PageId,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            allow_creation: true,
            allow_deletion: false,
            enable_search: true,
            navigate_to_page_id: String::new(),
        }
    }
}

impl ListSettings {
    /// Lay stored values over these settings, field by field
    pub fn overlay(mut self, stored: &StoredListSettings) -> Self {
        if let Some(v) = stored.allow_creation {
            self.allow_creation = v;
        }
        if let Some(v) = stored.allow_deletion {
            self.allow_deletion = v;
        }
        if let Some(v) = stored.enable_search {
            self.enable_search = v;
        }
        if let Some(v) = &stored.navigate_to_page_id {
            self.navigate_to_page_id = v.clone();
        }
        self
    }
}

// ============================================================================
// Stored Settings
// ============================================================================

/// Single-record settings as persisted; absent keys fall back to defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSingleRecordSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_creation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_deletion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_update: Option<bool>,
}

impl From<&SingleRecordSettings> for StoredSingleRecordSettings {
    fn from(settings: &SingleRecordSettings) -> Self {
        Self {
            allow_creation: Some(settings.allow_creation),
            allow_deletion: Some(settings.allow_deletion),
            allow_update: Some(settings.allow_update),
        }
    }
}

/// List settings as persisted; absent keys fall back to defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredListSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_creation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_deletion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate_to_page_id: Option<PageId>,
}

impl From<&ListSettings> for StoredListSettings {
    fn from(settings: &ListSettings) -> Self {
        Self {
            allow_creation: Some(settings.allow_creation),
            allow_deletion: Some(settings.allow_deletion),
            enable_search: Some(settings.enable_search),
            navigate_to_page_id: Some(settings.navigate_to_page_id.clone()),
        }
    }
}

// ============================================================================
// PageSettings
// ============================================================================

/// The active settings variant, tagged by page type
///
/// Serializes as `"pageType": "..."` next to the matching settings object,
/// so a flattened `PageSettings` reads like the record it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pageType")]
pub enum PageSettings {
    #[serde(rename_all = "camelCase")]
    SingleRecord {
        single_record_settings: SingleRecordSettings,
    },
    #[serde(rename_all = "camelCase")]
    List { list_settings: ListSettings },
}

impl PageSettings {
    /// The page type this variant belongs to
    pub fn page_type(&self) -> PageType {
        match self {
            PageSettings::SingleRecord { .. } => PageType::SingleRecord,
            PageSettings::List { .. } => PageType::List,
        }
    }

    /// Single-record settings, if this is the active variant
    pub fn single_record(&self) -> Option<&SingleRecordSettings> {
        match self {
            PageSettings::SingleRecord {
                single_record_settings,
            } => Some(single_record_settings),
            PageSettings::List { .. } => None,
        }
    }

    /// Mutable single-record settings, if this is the active variant
    pub fn single_record_mut(&mut self) -> Option<&mut SingleRecordSettings> {
        match self {
            PageSettings::SingleRecord {
                single_record_settings,
            } => Some(single_record_settings),
            PageSettings::List { .. } => None,
        }
    }

    /// List settings, if this is the active variant
    pub fn list(&self) -> Option<&ListSettings> {
        match self {
            PageSettings::List { list_settings } => Some(list_settings),
            PageSettings::SingleRecord { .. } => None,
        }
    }

    /// Mutable list settings, if this is the active variant
    pub fn list_mut(&mut self) -> Option<&mut ListSettings> {
        match self {
            PageSettings::List { list_settings } => Some(list_settings),
            PageSettings::SingleRecord { .. } => None,
        }
    }
}

impl From<SingleRecordSettings> for PageSettings {
    fn from(single_record_settings: SingleRecordSettings) -> Self {
        PageSettings::SingleRecord {
            single_record_settings,
        }
    }
}

impl From<ListSettings> for PageSettings {
    fn from(list_settings: ListSettings) -> Self {
        PageSettings::List { list_settings }
    }
}

// ============================================================================
// Tests
// ============================================================================
