//! Sidebar error types.
//!
//! Every variant names the group or file involved so an authoring mistake
//! can be found without a debugger.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, validating, or exporting a sidebar table.
#[derive(Debug, Error)]
pub enum SidebarError {
    /// A loaded table contains no menu groups.
    #[error("sidebar table is empty, expected at least one menu group")]
    Empty,

    /// A group's sub-items and sub-icons have different lengths.
    #[error(
        "menu group '{group}' (position {position}): {items} sub-items but {icons} sub-icons"
    )]
    Misaligned {
        group: String,
        position: usize,
        items: usize,
        icons: usize,
    },

    /// The JSON document could not be parsed or produced.
    #[error("invalid sidebar JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML document could not be parsed.
    #[error("invalid sidebar TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The table could not be written as TOML.
    #[error("failed to serialize sidebar as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A sidebar file could not be read.
    #[error("failed to read sidebar file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a known format.
    #[error("unsupported sidebar file {}: expected a .json or .toml extension", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The script export was asked for a name that is not a JavaScript identifier.
    #[error("'{name}' is not a valid JavaScript variable name")]
    InvalidVariableName { name: String },
}

/// Result type alias using SidebarError.
pub type SidebarResult<T> = Result<T, SidebarError>;
