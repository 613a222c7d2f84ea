//! # Page Forge IR
//!
//! Data model and logic behind the entity page editor of an application
//! builder.
//!
//! ## Core Concepts
//!
//! - **EntityPage**: a page record as the store keeps it, server fields included
//! - **EntityPageInput**: the editable projection handed to the form and to submit
//! - **PageConfigResolver**: derives an input from an optional record and defaults
//! - **PageForm**: tab state, visible fields and submit for one page edit
//! - **PageStore**: the parent store that creates and updates records
//!

// Module declarations
pub mod config;
pub mod defaults;
pub mod form;
pub mod input;
pub mod options;
pub mod page;
pub mod resolver;
pub mod serialization;
pub mod settings;
pub mod store;

// Re-export commonly used types at crate root
pub use config::{ForgeConfig, LoggingConfig};
pub use defaults::PageDefaults;
pub use form::{FormField, PageForm, SidebarTab, WidgetKind, visible_fields};
pub use input::EntityPageInput;
pub use options::{
    EntityCatalog, EntitySummary, PageSummary, StaticCatalog, entity_options,
    fetch_entity_options, page_options, page_type_options,
};
pub use page::{ENTITY_PAGE_BLOCK_TYPE, EntityPage, RecordPageType};
pub use resolver::PageConfigResolver;
pub use serialization::{load_store, load_store_or_default, save_store};
pub use settings::{
    ListSettings, PageSettings, SingleRecordSettings, StoredListSettings,
    StoredSingleRecordSettings,
};
pub use store::PageStore;

// Re-export core types that are commonly used with IR
pub use pageforge_core::{ForgeError, ForgeResult, PageType, SelectOption};

/// Current schema version for store files
pub const SCHEMA_VERSION: u32 = 1;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        EntityPage, EntityPageInput, ForgeConfig, ForgeError, ForgeResult, PageConfigResolver,
        PageForm, PageSettings, PageStore, PageType, SidebarTab,
    };
}

// ============================================================================
// Tests
// ============================================================================
