//! Sidebar menu tables.
//!
//! - `table`: the built-in constant table
//! - `group`: the menu group record shared by every table
//! - `registry`: owned tables loaded from JSON or TOML, plus export

mod group;
mod registry;
mod table;

pub use group::{Label, MenuEntry, MenuGroup};
pub use registry::{DEFAULT_VAR_NAME, Sidebar, is_js_identifier};
pub use table::{SIDEBAR, sidebar};
