//! Catalog Sidebar Library
//!
//! The sidebar categories of the extensions catalog as an immutable table,
//! with loading, validation, and export for deployments that author their
//! own. The `catalog-sidebar` binary wraps this library.

pub mod config;
pub mod error;
pub mod menu;

pub use error::{SidebarError, SidebarResult};
pub use menu::{MenuEntry, MenuGroup, SIDEBAR, Sidebar, sidebar};
