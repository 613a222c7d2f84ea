//! # Page Forge Core
//!
//! Core types, traits, and error handling for Page Forge.
//!
//! This crate provides the foundational building blocks used throughout
//! the workspace, including:
//!
//! - **Types**: the `PageType` discriminant, identifiers and `SelectOption`
//! - **Traits**: `Validatable` and `Persistable`
//! - **Errors**: unified error handling with `ForgeError` and `ForgeResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ForgeError, ForgeResult};
pub use traits::{Persistable, Validatable};
pub use types::{ApplicationId, EntityId, FieldRef, PageId, PageType, SelectOption};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
