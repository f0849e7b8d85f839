//! Sidebar registry - an owned, ordered sidebar table.
//!
//! Deployments can replace the built-in table with a JSON file (the same
//! `sidebar_info` array the site reads) or a TOML file of `[[menu]]` tables.
//! Every constructor validates before returning, so a `Sidebar` always
//! satisfies the alignment invariant.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::group::MenuGroup;
use super::table::SIDEBAR;
use crate::error::{SidebarError, SidebarResult};

/// Variable name the catalog site's script declares.
pub const DEFAULT_VAR_NAME: &str = "sidebar_info";

/// An ordered, validated sidebar table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    groups: Vec<MenuGroup>,
}

/// TOML document layout: `[[menu]]` array of tables.
#[derive(Serialize, Deserialize)]
struct TomlDocument {
    #[serde(default)]
    menu: Vec<MenuGroup>,
}

impl Sidebar {
    /// Copy of the built-in table.
    pub fn builtin() -> Self {
        Self {
            groups: SIDEBAR.to_vec(),
        }
    }

    /// Wrap groups after checking the table invariants.
    pub fn from_groups(groups: Vec<MenuGroup>) -> SidebarResult<Self> {
        let sidebar = Self { groups };
        sidebar.validate()?;
        Ok(sidebar)
    }

    /// Parse a JSON array of menu groups.
    pub fn from_json(json: &str) -> SidebarResult<Self> {
        let groups: Vec<MenuGroup> = serde_json::from_str(json)?;
        debug!(groups = groups.len(), "parsed sidebar JSON");
        Self::from_groups(groups)
    }

    /// Parse a TOML document of `[[menu]]` tables.
    pub fn from_toml(content: &str) -> SidebarResult<Self> {
        let doc: TomlDocument = toml::from_str(content)?;
        debug!(groups = doc.menu.len(), "parsed sidebar TOML");
        Self::from_groups(doc.menu)
    }

    /// Load a sidebar file, choosing the format from its extension.
    pub fn load(path: &Path) -> SidebarResult<Self> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> SidebarResult<Self> = match format.as_deref() {
            Some("json") => Self::from_json,
            Some("toml") => Self::from_toml,
            _ => {
                return Err(SidebarError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| SidebarError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let sidebar = parse(&content)?;
        debug!(path = %path.display(), groups = sidebar.len(), "loaded sidebar file");
        Ok(sidebar)
    }

    /// Check that the table is non-empty and every group is aligned.
    pub fn validate(&self) -> SidebarResult<()> {
        if self.groups.is_empty() {
            return Err(SidebarError::Empty);
        }

        for (position, group) in self.groups.iter().enumerate() {
            group.validate(position)?;
        }

        Ok(())
    }

    /// All groups, in display order.
    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// Iterate groups in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, MenuGroup> {
        self.groups.iter()
    }

    /// First group with the given name.
    pub fn get(&self, name: &str) -> Option<&MenuGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Display position of the first group with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    /// Number of top-level groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the table has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Pretty-printed JSON array in the site's `sidebar_info` shape.
    pub fn to_json(&self) -> SidebarResult<String> {
        Ok(serde_json::to_string_pretty(&self.groups)?)
    }

    /// The table as a script statement: `var <var_name> = [...];`.
    pub fn to_script(&self, var_name: &str) -> SidebarResult<String> {
        if !is_js_identifier(var_name) {
            return Err(SidebarError::InvalidVariableName {
                name: var_name.to_string(),
            });
        }

        Ok(format!("var {var_name} = {};\n", self.to_json()?))
    }

    /// The table as a TOML document of `[[menu]]` tables.
    pub fn to_toml(&self) -> SidebarResult<String> {
        let doc = TomlDocument {
            menu: self.groups.clone(),
        };
        Ok(toml::to_string_pretty(&doc)?)
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Sidebar {
    type Item = &'a MenuGroup;
    type IntoIter = std::slice::Iter<'a, MenuGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// ASCII JavaScript identifier: `[A-Za-z_$][A-Za-z0-9_$]*`.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_constant() {
        let sidebar = Sidebar::builtin();
        assert_eq!(sidebar.groups(), SIDEBAR);
        assert!(sidebar.validate().is_ok());
    }

    #[test]
    fn registry_from_json() {
        let json = r#"[
            {"menu_name": "Software", "menu_icon_name": "fa-dashboard",
             "sub_menu_name": ["SPSS Modeler"], "sub_menu_icon_name": ["fa-diamond"]},
            {"menu_name": "Provider", "menu_icon_name": "fa-user",
             "sub_menu_name": ["IBM", "Community"], "sub_menu_icon_name": ["fa-star", "fa-user-plus"]}
        ]"#;

        let sidebar = Sidebar::from_json(json).unwrap();
        assert_eq!(sidebar.len(), 2);
        assert_eq!(sidebar.position("Provider"), Some(1));
        assert_eq!(sidebar.get("Provider").unwrap().len(), 2);
        assert!(sidebar.get("Language").is_none());
    }

    #[test]
    fn registry_from_toml() {
        let toml = r#"
[[menu]]
menu_name = "Type"
menu_icon_name = "fa-cubes"
sub_menu_name = ["Extension", "Module"]
sub_menu_icon_name = ["fa-plus-square-o", "fa-cube"]
"#;

        let sidebar = Sidebar::from_toml(toml).unwrap();
        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar.groups()[0].icon_name, "fa-cubes");
    }

    #[test]
    fn reject_empty_table() {
        let result = Sidebar::from_json("[]");
        assert!(matches!(result, Err(SidebarError::Empty)));

        let result = Sidebar::from_toml("");
        assert!(matches!(result, Err(SidebarError::Empty)));
    }

    #[test]
    fn reject_misaligned_group() {
        let json = r#"[
            {"menu_name": "Language", "menu_icon_name": "fa-code",
             "sub_menu_name": ["Java", "R"], "sub_menu_icon_name": ["fa-code"]}
        ]"#;

        let err = Sidebar::from_json(json).unwrap_err();
        assert!(err.to_string().contains("'Language'"));
        assert!(err.to_string().contains("2 sub-items but 1 sub-icons"));
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let sidebar = Sidebar::from_groups(vec![
            MenuGroup::new("Tools", "fa-wrench", [("A", "fa-a")]),
            MenuGroup::new("Tools", "fa-cog", [("B", "fa-b")]),
        ])
        .unwrap();

        assert_eq!(sidebar.get("Tools").unwrap().icon_name, "fa-wrench");
        assert_eq!(sidebar.position("Tools"), Some(0));
    }

    #[test]
    fn js_identifier_rules() {
        assert!(is_js_identifier("sidebar_info"));
        assert!(is_js_identifier("$menu2"));
        assert!(is_js_identifier("_x"));
        assert!(!is_js_identifier(""));
        assert!(!is_js_identifier("2menu"));
        assert!(!is_js_identifier("side-bar"));
        assert!(!is_js_identifier("a b"));
    }

    #[test]
    fn script_wraps_json() {
        let script = Sidebar::builtin().to_script(DEFAULT_VAR_NAME).unwrap();
        assert!(script.starts_with("var sidebar_info = ["));
        assert!(script.trim_end().ends_with("];"));
    }

    #[test]
    fn script_rejects_bad_name() {
        let result = Sidebar::builtin().to_script("not valid");
        assert!(matches!(
            result,
            Err(SidebarError::InvalidVariableName { .. })
        ));
    }
}
