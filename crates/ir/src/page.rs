//! Persisted entity page records
//!
//! An `EntityPage` is the record as the parent store keeps it: every editable
//! field may be absent, the settings of both page types may be present, and
//! the server-managed fields (`createdAt`, `updatedAt`, `blockType`,
//! `versionNumber`, `__typename`) ride along. Editing never happens on this
//! type directly; see [`crate::resolver`] for the projection to
//! [`crate::EntityPageInput`].

use crate::settings::{StoredListSettings, StoredSingleRecordSettings};
use chrono::{DateTime, Utc};
use pageforge_core::{EntityId, FieldRef, PageId, PageType};
use serde::{Deserialize, Serialize};

/// Block type stamped on every entity page by the store
pub const ENTITY_PAGE_BLOCK_TYPE: &str = "EntityPage";

// ============================================================================
// Record Page Type
// ============================================================================

/// Page type as found on a persisted record
///
/// Records written by other clients may carry a page type this build does
/// not know; it is kept verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordPageType {
    Known(PageType),
    Unrecognized(String),
}

impl RecordPageType {
    /// The page type, if it is one this build knows
    pub fn known(&self) -> Option<PageType> {
        match self {
            RecordPageType::Known(page_type) => Some(*page_type),
            RecordPageType::Unrecognized(_) => None,
        }
    }

    /// Wire name as stored
    pub fn as_str(&self) -> &str {
        match self {
            RecordPageType::Known(page_type) => page_type.as_str(),
            RecordPageType::Unrecognized(name) => name,
        }
    }
}

impl From<PageType> for RecordPageType {
    fn from(page_type: PageType) -> Self {
        RecordPageType::Known(page_type)
    }
}

// ============================================================================
// EntityPage
// ============================================================================

/// An entity page record as held by the store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPage {
    /// Page identifier; empty for a page not yet created
    #[serde(default)]
    pub id: PageId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Selects which settings object is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_type: Option<RecordPageType>,

    /// Entity the page displays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<EntityId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_all_fields: Option<bool>,

    /// Fields to show when `show_all_fields` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_field_list: Option<Vec<FieldRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_record_settings: Option<StoredSingleRecordSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_settings: Option<StoredListSettings>,

    // ------------------------------------------------------------------------
    // Server-managed
    // ------------------------------------------------------------------------
    #[serde(
        default,
        with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(
        default,
        with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_number: Option<u32>,

    #[serde(
        rename = "__typename",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub typename: Option<String>,
}

impl EntityPage {
    /// Create an empty record with the given id
    pub fn new(id: impl Into<PageId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_page_type(mut self, page_type: impl Into<RecordPageType>) -> Self {
        self.page_type = Some(page_type.into());
        self
    }

    pub fn with_entity(mut self, entity_id: impl Into<EntityId>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Restrict the page to the given fields
    pub fn with_field_list<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FieldRef>,
    {
        self.show_all_fields = Some(false);
        self.show_field_list = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_single_record_settings(mut self, settings: StoredSingleRecordSettings) -> Self {
        self.single_record_settings = Some(settings);
        self
    }

    pub fn with_list_settings(mut self, settings: StoredListSettings) -> Self {
        self.list_settings = Some(settings);
        self
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Whether the record has been created by the store
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// Display name, falling back to the id
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }

    /// Whether any server-managed field is set
    pub fn has_server_fields(&self) -> bool {
        self.created_at.is_some()
            || self.updated_at.is_some()
            || self.block_type.is_some()
            || self.version_number.is_some()
            || self.typename.is_some()
    }
}

// ============================================================================
// Timestamps
// ============================================================================

/// Serde adapter for server timestamps
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (read as midnight
/// UTC); always writes RFC 3339.
pub mod lenient_timestamp {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_some(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse(&s).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{s}'"))))
            .transpose()
    }

    /// Parse an RFC 3339 timestamp or a bare date
    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_record_page_type_known_and_unrecognized() {
        let known: RecordPageType = serde_json::from_value(json!("List")).unwrap();
        assert_eq!(known.known(), Some(PageType::List));

        let other: RecordPageType = serde_json::from_value(json!("Kanban")).unwrap();
        assert_eq!(other.known(), None);
        assert_eq!(other.as_str(), "Kanban");
        assert_eq!(serde_json::to_value(&other).unwrap(), json!("Kanban"));
    }

    #[test]
    fn test_deserialize_partial_record() {
        let page: EntityPage = serde_json::from_value(json!({
            "id": "5",
            "name": "Users",
            "pageType": "List",
            "listSettings": { "enableSearch": false },
            "updatedAt": "2024-01-01"
        }))
        .unwrap();

        assert_eq!(page.id, "5");
        assert_eq!(page.page_type, Some(RecordPageType::Known(PageType::List)));
        assert_eq!(page.description, None);
        assert_eq!(
            page.list_settings.as_ref().unwrap().enable_search,
            Some(false)
        );
        assert_eq!(
            page.updated_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert!(page.has_server_fields());
    }

    #[test]
    fn test_deserialize_server_fields() {
        let page: EntityPage = serde_json::from_value(json!({
            "id": "p1",
            "createdAt": "2024-03-05T10:00:00Z",
            "blockType": "EntityPage",
            "versionNumber": 3,
            "__typename": "EntityPage"
        }))
        .unwrap();

        assert_eq!(page.block_type.as_deref(), Some(ENTITY_PAGE_BLOCK_TYPE));
        assert_eq!(page.version_number, Some(3));
        assert_eq!(page.typename.as_deref(), Some("EntityPage"));
        assert_eq!(
            page.created_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let result: Result<EntityPage, _> =
            serde_json::from_value(json!({ "id": "p1", "updatedAt": "yesterday" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_and_queries() {
        let page = EntityPage::new("p1")
            .with_name("Orders")
            .with_page_type(PageType::SingleRecord)
            .with_entity("e1")
            .with_field_list(["total", "status"]);

        assert!(page.is_persisted());
        assert_eq!(page.display_name(), "Orders");
        assert_eq!(page.show_all_fields, Some(false));
        assert_eq!(
            page.show_field_list,
            Some(vec!["total".to_string(), "status".to_string()])
        );
        assert!(!page.has_server_fields());
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        assert_eq!(EntityPage::new("p9").display_name(), "p9");
        assert!(!EntityPage::default().is_persisted());
    }
}
