//! Initial form values for an entity page
//!
//! The resolver turns an optional persisted record into a complete
//! [`EntityPageInput`]. Three layers are merged, later ones winning:
//!
//! 1. the baseline defaults (empty texts, `showAllFields: true`, no field list)
//! 2. the settings defaults of the effective page type
//! 3. the record itself, if there is one
//!
//! Settings are merged per field, so a record that stores only
//! `listSettings.enableSearch` keeps the other list defaults. Server-managed
//! fields have no counterpart on the input and are dropped by construction.

use crate::defaults::PageDefaults;
use crate::input::EntityPageInput;
use crate::page::{EntityPage, RecordPageType};
use crate::settings::PageSettings;
use pageforge_core::PageType;
use tracing::{debug, warn};

/// Derives editable page inputs from records and a defaults table
#[derive(Debug, Clone, Default)]
pub struct PageConfigResolver {
    defaults: PageDefaults,
}

impl PageConfigResolver {
    /// Create a resolver over the given defaults table
    pub fn new(defaults: PageDefaults) -> Self {
        Self { defaults }
    }

    /// The defaults table in use
    pub fn defaults(&self) -> &PageDefaults {
        &self.defaults
    }

    /// Page type the record will be edited as
    ///
    /// New records and records without a page type are single-record pages.
    /// A page type this build does not know falls back to single-record.
    pub fn effective_page_type(existing: Option<&EntityPage>) -> PageType {
        let Some(page) = existing else {
            return PageType::SingleRecord;
        };

        match &page.page_type {
            Some(RecordPageType::Known(page_type)) => *page_type,
            Some(RecordPageType::Unrecognized(name)) => {
                warn!(
                    page = %page.id,
                    page_type = %name,
                    "unrecognized page type, falling back to SingleRecord defaults"
                );
                PageType::SingleRecord
            }
            None => {
                debug!(page = %page.id, "record has no page type, using SingleRecord");
                PageType::SingleRecord
            }
        }
    }

    /// Resolve the initial input for a record, or for a new page when `None`
    pub fn resolve(&self, existing: Option<&EntityPage>) -> EntityPageInput {
        let page_type = Self::effective_page_type(existing);
        let baseline = self.defaults.baseline(page_type);

        let Some(page) = existing else {
            debug!(%page_type, "resolved defaults for new page");
            return baseline;
        };

        let settings = Self::overlay_settings(baseline.settings, page);
        debug!(page = %page.id, %page_type, "resolved page input");

        EntityPageInput {
            id: page.id.clone(),
            name: page.name.clone().unwrap_or(baseline.name),
            description: page.description.clone().unwrap_or(baseline.description),
            entity_id: page.entity_id.clone().unwrap_or(baseline.entity_id),
            show_all_fields: page.show_all_fields.unwrap_or(baseline.show_all_fields),
            show_field_list: page
                .show_field_list
                .clone()
                .unwrap_or(baseline.show_field_list),
            settings,
        }
    }

    /// Lay the record's active settings over the variant defaults
    fn overlay_settings(defaults: PageSettings, page: &EntityPage) -> PageSettings {
        match defaults {
            PageSettings::SingleRecord {
                single_record_settings,
            } => match &page.single_record_settings {
                Some(stored) => single_record_settings.overlay(stored).into(),
                None => single_record_settings.into(),
            },
            PageSettings::List { list_settings } => match &page.list_settings {
                Some(stored) => list_settings.overlay(stored).into(),
                None => list_settings.into(),
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
