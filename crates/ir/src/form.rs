//! Form model for the entity page editor
//!
//! This module holds the state an editor needs around an
//! [`EntityPageInput`]: which sidebar tab is open, which fields are visible
//! for the current page type, and the initial/current values handed to the
//! submit callback. Rendering and per-field edit tracking belong to the
//! form library and are not modelled here.

use crate::input::EntityPageInput;
use crate::page::EntityPage;
use crate::resolver::PageConfigResolver;
use crate::settings::PageSettings;
use pageforge_core::{EntityId, PageType};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

// ============================================================================
// Sidebar Tabs
// ============================================================================

/// Tabs of the page editor sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SidebarTab {
    /// Name, entity, page type and type-specific settings
    #[default]
    Properties,
    /// Which entity fields the page shows
    Display,
}

impl SidebarTab {
    /// All tabs in tab-bar order
    pub const ALL: [SidebarTab; 2] = [SidebarTab::Properties, SidebarTab::Display];

    /// Tab at a tab-bar index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Index in the tab bar
    pub fn index(&self) -> usize {
        match self {
            SidebarTab::Properties => 0,
            SidebarTab::Display => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SidebarTab::Properties => "Properties",
            SidebarTab::Display => "Display",
        }
    }
}

// ============================================================================
// Field Descriptors
// ============================================================================

/// Widget used to edit a form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetKind {
    Text,
    TextArea { rows: u32 },
    /// Select over the entity options
    EntitySelect,
    /// Multi-state toggle over the page type options
    PageTypeToggle,
    Checkbox,
    /// Select over the other pages of the application
    PageSelect,
    /// Multi-select over the fields of one entity
    FieldMultiSelect { entity_id: EntityId },
}

/// A field shown in the editor, addressed by its path in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    /// Dotted path into the serialized input, e.g. `listSettings.enableSearch`
    pub path: &'static str,
    pub label: &'static str,
    pub widget: WidgetKind,
}

impl FormField {
    fn new(path: &'static str, label: &'static str, widget: WidgetKind) -> Self {
        Self {
            path,
            label,
            widget,
        }
    }

    fn checkbox(path: &'static str, label: &'static str) -> Self {
        Self::new(path, label, WidgetKind::Checkbox)
    }
}

/// Fields visible for the given values and tab
///
/// On the properties tab exactly one settings section is included, chosen
/// by the current page type.
pub fn visible_fields(values: &EntityPageInput, tab: SidebarTab) -> Vec<FormField> {
    match tab {
        SidebarTab::Properties => {
            let mut fields = vec![
                FormField::new("name", "Name", WidgetKind::Text),
                FormField::new("description", "Description", WidgetKind::TextArea { rows: 3 }),
                FormField::new("entityId", "Entity", WidgetKind::EntitySelect),
                FormField::new("pageType", "Page Type", WidgetKind::PageTypeToggle),
            ];
            match values.page_type() {
                PageType::SingleRecord => fields.extend([
                    FormField::checkbox("singleRecordSettings.allowCreation", "Create"),
                    FormField::checkbox("singleRecordSettings.allowDeletion", "Delete"),
                    FormField::checkbox("singleRecordSettings.allowUpdate", "Update"),
                ]),
                PageType::List => fields.extend([
                    FormField::new(
                        "listSettings.navigateToPageId",
                        "Navigate To",
                        WidgetKind::PageSelect,
                    ),
                    FormField::checkbox("listSettings.allowCreation", "Create"),
                    FormField::checkbox("listSettings.allowDeletion", "Delete"),
                    FormField::checkbox("listSettings.enableSearch", "Search"),
                ]),
            }
            fields
        }
        SidebarTab::Display => vec![
            FormField::checkbox("showAllFields", "Show All Fields"),
            FormField::new(
                "showFieldList",
                "Fields",
                WidgetKind::FieldMultiSelect {
                    entity_id: values.entity_id.clone(),
                },
            ),
        ],
    }
}

// ============================================================================
// PageForm
// ============================================================================

/// Editor state for one entity page
#[derive(Debug, Clone)]
pub struct PageForm {
    resolver: PageConfigResolver,
    initial: EntityPageInput,
    values: EntityPageInput,
    /// Settings of page types switched away from during this edit
    parked: BTreeMap<PageType, PageSettings>,
    selected_tab: SidebarTab,
}

impl PageForm {
    /// Create a form for a record, or for a new page when `existing` is `None`
    pub fn new(resolver: PageConfigResolver, existing: Option<&EntityPage>) -> Self {
        let initial = resolver.resolve(existing);
        Self {
            resolver,
            values: initial.clone(),
            initial,
            parked: BTreeMap::new(),
            selected_tab: SidebarTab::default(),
        }
    }

    /// Replace all values after the source record changed
    ///
    /// Nothing from the previous record survives; the open tab does.
    pub fn reinitialize(&mut self, existing: Option<&EntityPage>) {
        self.initial = self.resolver.resolve(existing);
        self.values = self.initial.clone();
        self.parked.clear();
        debug!(page = %self.initial.id, "form reinitialized");
    }

    pub fn initial(&self) -> &EntityPageInput {
        &self.initial
    }

    pub fn values(&self) -> &EntityPageInput {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut EntityPageInput {
        &mut self.values
    }

    /// Drawer title: the page name as currently edited
    pub fn title(&self) -> &str {
        &self.values.name
    }

    /// Whether the current values differ from the initial ones
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    // ========================================================================
    // Tabs
    // ========================================================================

    pub fn selected_tab(&self) -> SidebarTab {
        self.selected_tab
    }

    pub fn select_tab(&mut self, tab: SidebarTab) {
        self.selected_tab = tab;
    }

    /// Activate a tab by tab-bar index; unknown indices are ignored
    pub fn activate_tab(&mut self, index: usize) -> bool {
        match SidebarTab::from_index(index) {
            Some(tab) => {
                self.selected_tab = tab;
                true
            }
            None => false,
        }
    }

    /// Fields visible on the selected tab
    pub fn visible_fields(&self) -> Vec<FormField> {
        visible_fields(&self.values, self.selected_tab)
    }

    // ========================================================================
    // Page type
    // ========================================================================

    /// Switch the page type
    ///
    /// The current settings are parked; the new type gets back whatever was
    /// parked for it earlier in this edit, or its defaults.
    pub fn set_page_type(&mut self, page_type: PageType) {
        let current = self.values.page_type();
        if current == page_type {
            return;
        }

        let next = self
            .parked
            .remove(&page_type)
            .unwrap_or_else(|| self.resolver.defaults().variant(page_type));
        let previous = std::mem::replace(&mut self.values.settings, next);
        self.parked.insert(current, previous);
        debug!(from = %current, to = %page_type, "page type switched");
    }

    // ========================================================================
    // Submit
    // ========================================================================

    /// Hand the current values to the submit callback
    pub fn submit<F, R>(&self, on_submit: F) -> R
    where
        F: FnOnce(EntityPageInput) -> R,
    {
        on_submit(self.values.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
