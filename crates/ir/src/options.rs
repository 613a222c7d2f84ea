//! Option lists for the page editor's select widgets
//!
//! Entity options come from the entity-list query of the application. The
//! query itself is run by whatever client implements [`EntityCatalog`]; this
//! module only turns its result into label/value options. A missing or
//! failed result yields an empty list rather than an error.

use pageforge_core::{
    ApplicationId, EntityId, ForgeError, ForgeResult, PageId, PageType, Persistable,
    SelectOption,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use tracing::{debug, warn};

// ============================================================================
// Query Results
// ============================================================================

/// One row of the entity-list query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub id: EntityId,
    pub display_name: String,
}

impl EntitySummary {
    pub fn new(id: impl Into<EntityId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// One row of the page-list query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: PageId,
    pub name: String,
}

// ============================================================================
// Entity Catalog
// ============================================================================

/// Source of the entities of an application
///
/// Implemented by the query client; the editor only awaits the result.
pub trait EntityCatalog {
    /// Entities of the application, in the order the catalog returns them
    fn entities(
        &self,
        application_id: &str,
    ) -> impl Future<Output = ForgeResult<Vec<EntitySummary>>> + Send;
}

/// In-memory catalog keyed by application id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCatalog {
    pub applications: BTreeMap<ApplicationId, Vec<EntitySummary>>,
}

impl Persistable for StaticCatalog {}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity under an application
    pub fn with_entity(
        mut self,
        application_id: impl Into<ApplicationId>,
        entity: EntitySummary,
    ) -> Self {
        self.applications
            .entry(application_id.into())
            .or_default()
            .push(entity);
        self
    }
}

impl EntityCatalog for StaticCatalog {
    async fn entities(&self, application_id: &str) -> ForgeResult<Vec<EntitySummary>> {
        let entities = self
            .applications
            .get(application_id)
            .cloned()
            .ok_or_else(|| ForgeError::ApplicationNotFound(application_id.to_string()))?;
        debug!(
            application = application_id,
            count = entities.len(),
            "entities listed"
        );
        Ok(entities)
    }
}

// ============================================================================
// Option Builders
// ============================================================================

/// Entity options from a query result; `None` (loading or failed) yields none
pub fn entity_options(entities: Option<&[EntitySummary]>) -> Vec<SelectOption> {
    entities
        .unwrap_or_default()
        .iter()
        .map(|entity| SelectOption::new(entity.id.clone(), entity.display_name.clone()))
        .collect()
}

/// Query the catalog and build entity options
///
/// Query failures are logged and degrade to an empty option list.
pub async fn fetch_entity_options<C>(catalog: &C, application_id: &str) -> Vec<SelectOption>
where
    C: EntityCatalog,
{
    match catalog.entities(application_id).await {
        Ok(entities) => entity_options(Some(entities.as_slice())),
        Err(e) => {
            warn!(
                application = application_id,
                error = %e,
                "entity query failed, no entity options"
            );
            entity_options(None)
        }
    }
}

/// Options for the page type toggle
pub fn page_type_options() -> Vec<SelectOption> {
    PageType::ALL
        .iter()
        .map(|page_type| SelectOption::new(page_type.as_str(), page_type.label()))
        .collect()
}

/// Options for a list page's "navigate to" select
///
/// The page being edited is left out; a list cannot navigate to itself.
pub fn page_options(pages: &[PageSummary], editing: Option<&str>) -> Vec<SelectOption> {
    pages
        .iter()
        .filter(|page| Some(page.id.as_str()) != editing)
        .map(|page| SelectOption::new(page.id.clone(), page.name.clone()))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FailingCatalog;

    impl EntityCatalog for FailingCatalog {
        async fn entities(&self, application_id: &str) -> ForgeResult<Vec<EntitySummary>> {
            Err(ForgeError::entity_query(application_id, "connection refused"))
        }
    }

    fn catalog() -> StaticCatalog {
        StaticCatalog::new()
            .with_entity("app-1", EntitySummary::new("e1", "Customer"))
            .with_entity("app-1", EntitySummary::new("e2", "Order"))
            .with_entity("app-2", EntitySummary::new("e3", "Invoice"))
    }

    #[test]
    fn test_entity_options_keep_order() {
        let entities = vec![
            EntitySummary::new("e2", "Order"),
            EntitySummary::new("e1", "Customer"),
        ];
        assert_eq!(
            entity_options(Some(entities.as_slice())),
            vec![
                SelectOption::new("e2", "Order"),
                SelectOption::new("e1", "Customer"),
            ]
        );
    }

    #[test]
    fn test_entity_options_without_data() {
        assert!(entity_options(None).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_entity_options() {
        let options = fetch_entity_options(&catalog(), "app-1").await;
        assert_eq!(
            options,
            vec![
                SelectOption::new("e1", "Customer"),
                SelectOption::new("e2", "Order"),
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_application_is_not_found() {
        let err = catalog().entities("app-9").await.unwrap_err();
        assert!(matches!(err, ForgeError::ApplicationNotFound(ref app) if app == "app-9"));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_unknown_application_has_no_entity_options() {
        assert!(fetch_entity_options(&catalog(), "app-9").await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_query_degrades_to_empty() {
        assert!(fetch_entity_options(&FailingCatalog, "app-1").await.is_empty());
    }

    #[test]
    fn test_page_type_options() {
        assert_eq!(
            page_type_options(),
            vec![
                SelectOption::new("SingleRecord", "Single Record"),
                SelectOption::new("List", "List"),
            ]
        );
    }

    #[test]
    fn test_page_options_exclude_edited_page() {
        let pages = vec![
            PageSummary {
                id: "p1".to_string(),
                name: "Customers".to_string(),
            },
            PageSummary {
                id: "p2".to_string(),
                name: "Customer".to_string(),
            },
        ];

        assert_eq!(
            page_options(&pages, Some("p1")),
            vec![SelectOption::new("p2", "Customer")]
        );
        assert_eq!(page_options(&pages, None).len(), 2);
    }

    #[test]
    fn test_catalog_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");

        catalog().save_to_file(&path).unwrap();
        assert_eq!(StaticCatalog::load_from_file(&path).unwrap(), catalog());
    }
}
