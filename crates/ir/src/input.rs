//! Editable entity page input
//!
//! `EntityPageInput` is what the form edits and what the submit callback
//! receives. It is built field by field from a record and the defaults, so
//! server-managed fields cannot appear in it at any depth.

use crate::page::EntityPage;
use crate::settings::{PageSettings, StoredListSettings, StoredSingleRecordSettings};
use pageforge_core::{EntityId, FieldRef, PageId, PageType};
use serde::{Deserialize, Serialize};

/// The editable projection of an entity page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPageInput {
    pub id: PageId,
    pub name: String,
    pub description: String,
    pub entity_id: EntityId,
    pub show_all_fields: bool,
    pub show_field_list: Vec<FieldRef>,

    /// Page type plus its settings object
    #[serde(flatten)]
    pub settings: PageSettings,
}

impl EntityPageInput {
    /// Active page type
    pub fn page_type(&self) -> PageType {
        self.settings.page_type()
    }

    /// Whether the input describes a page that does not exist yet
    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }
}

/// Feeds an input back in as a record, e.g. after a save round trip
impl From<&EntityPageInput> for EntityPage {
    fn from(input: &EntityPageInput) -> Self {
        let (single_record_settings, list_settings) = match &input.settings {
            PageSettings::SingleRecord {
                single_record_settings,
            } => (
                Some(StoredSingleRecordSettings::from(single_record_settings)),
                None,
            ),
            PageSettings::List { list_settings } => {
                (None, Some(StoredListSettings::from(list_settings)))
            }
        };

        EntityPage {
            id: input.id.clone(),
            name: Some(input.name.clone()),
            description: Some(input.description.clone()),
            page_type: Some(input.page_type().into()),
            entity_id: Some(input.entity_id.clone()),
            show_all_fields: Some(input.show_all_fields),
            show_field_list: Some(input.show_field_list.clone()),
            single_record_settings,
            list_settings,
            ..Default::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
