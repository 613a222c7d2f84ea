//! In-memory store of entity page records
//!
//! The store plays the server's part: it assigns ids to new pages and owns
//! the server-managed fields (`createdAt`, `updatedAt`, `blockType`,
//! `versionNumber`). Inputs submitted from the form never carry those
//! fields, so an update keeps the stored values and only bumps `updatedAt`.

use crate::input::EntityPageInput;
use crate::options::PageSummary;
use crate::page::{ENTITY_PAGE_BLOCK_TYPE, EntityPage};
use chrono::Utc;
use pageforge_core::{ForgeError, ForgeResult};
use tracing::info;
use uuid::Uuid;

/// Entity page records in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageStore {
    pages: Vec<EntityPage>,
}

impl PageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records
    pub fn from_pages(pages: Vec<EntityPage>) -> Self {
        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All records in insertion order
    pub fn list(&self) -> &[EntityPage] {
        &self.pages
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&EntityPage> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Look up a record by id, failing if it is unknown
    pub fn require(&self, id: &str) -> ForgeResult<&EntityPage> {
        self.get(id)
            .ok_or_else(|| ForgeError::PageNotFound(id.to_string()))
    }

    /// `{id, name}` rows for page selectors
    pub fn page_summaries(&self) -> Vec<PageSummary> {
        self.pages
            .iter()
            .map(|page| PageSummary {
                id: page.id.clone(),
                name: page.display_name().to_string(),
            })
            .collect()
    }

    /// Save a submitted input
    ///
    /// An input without id creates a page; an input with a known id updates
    /// it. Returns the stored record.
    pub fn save(&mut self, input: &EntityPageInput) -> ForgeResult<&EntityPage> {
        if input.is_new() {
            self.create(input)
        } else {
            self.update(input)
        }
    }

    /// Create a page from an input, assigning a fresh id
    pub fn create(&mut self, input: &EntityPageInput) -> ForgeResult<&EntityPage> {
        let now = Utc::now();
        let mut page = EntityPage::from(input);
        page.id = Uuid::new_v4().to_string();
        page.created_at = Some(now);
        page.updated_at = Some(now);
        page.block_type = Some(ENTITY_PAGE_BLOCK_TYPE.to_string());
        page.version_number = Some(0);

        info!(page = %page.id, name = %input.name, "page created");
        self.pages.push(page);
        self.pages
            .last()
            .ok_or_else(|| ForgeError::internal("page vanished after insert"))
    }

    /// Update the editable fields of an existing page
    pub fn update(&mut self, input: &EntityPageInput) -> ForgeResult<&EntityPage> {
        let index = self
            .pages
            .iter()
            .position(|p| p.id == input.id)
            .ok_or_else(|| ForgeError::PageNotFound(input.id.clone()))?;

        let stored = &mut self.pages[index];
        let mut page = EntityPage::from(input);
        page.created_at = stored.created_at;
        page.updated_at = Some(Utc::now());
        page.block_type = stored.block_type.take();
        page.version_number = stored.version_number;
        page.typename = stored.typename.take();
        *stored = page;

        info!(page = %input.id, name = %input.name, "page updated");
        Ok(&self.pages[index])
    }

    /// Remove a page, returning it if it existed
    pub fn remove(&mut self, id: &str) -> Option<EntityPage> {
        let index = self.pages.iter().position(|p| p.id == id)?;
        info!(page = %id, "page removed");
        Some(self.pages.remove(index))
    }
}

// ============================================================================
// Tests
// ============================================================================
