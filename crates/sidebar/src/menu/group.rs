//! Menu group record shared by the built-in table and loaded tables.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{SidebarError, SidebarResult};

/// A label or icon identifier, borrowed for the built-in table and owned
/// when loaded from a file.
pub type Label = Cow<'static, str>;

/// One top-level sidebar category with its sub-items.
///
/// Field names on the wire match the `sidebar_info` array the catalog site
/// reads (`menu_name`, `menu_icon_name`, `sub_menu_name`, `sub_menu_icon_name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    /// Top-level label (e.g., "Language").
    #[serde(rename = "menu_name")]
    pub name: Label,

    /// Icon-font glyph for the top-level entry (e.g., "fa-code").
    #[serde(rename = "menu_icon_name")]
    pub icon_name: Label,

    /// Sub-menu labels in display order.
    #[serde(rename = "sub_menu_name", default)]
    pub sub_items: Cow<'static, [Label]>,

    /// Sub-menu icons, index-aligned with `sub_items`.
    #[serde(rename = "sub_menu_icon_name", default)]
    pub sub_icon_names: Cow<'static, [Label]>,
}

/// A sub-item label paired with its icon identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry<'a> {
    pub label: &'a str,
    pub icon: &'a str,
}

impl MenuGroup {
    /// Build an owned group from `(label, icon)` pairs.
    ///
    /// Taking pairs keeps the two sequences aligned by construction.
    pub fn new<L, I>(
        name: impl Into<Label>,
        icon_name: impl Into<Label>,
        entries: impl IntoIterator<Item = (L, I)>,
    ) -> Self
    where
        L: Into<Label>,
        I: Into<Label>,
    {
        let (sub_items, sub_icon_names): (Vec<Label>, Vec<Label>) = entries
            .into_iter()
            .map(|(label, icon)| (label.into(), icon.into()))
            .unzip();

        Self {
            name: name.into(),
            icon_name: icon_name.into(),
            sub_items: Cow::Owned(sub_items),
            sub_icon_names: Cow::Owned(sub_icon_names),
        }
    }

    /// Sub-items paired with their icons, in display order.
    ///
    /// On a misaligned group the iterator stops at the shorter sequence;
    /// call [`MenuGroup::validate`] first when that matters.
    pub fn entries(&self) -> impl Iterator<Item = MenuEntry<'_>> {
        self.sub_items
            .iter()
            .zip(self.sub_icon_names.iter())
            .map(|(label, icon)| MenuEntry {
                label: label.as_ref(),
                icon: icon.as_ref(),
            })
    }

    /// Number of sub-items.
    pub fn len(&self) -> usize {
        self.sub_items.len()
    }

    /// Whether the group has no sub-items.
    pub fn is_empty(&self) -> bool {
        self.sub_items.is_empty()
    }

    /// Whether every sub-item has exactly one icon.
    pub fn is_aligned(&self) -> bool {
        self.sub_items.len() == self.sub_icon_names.len()
    }

    /// Check the alignment invariant. `position` is the group's index in
    /// its table and only feeds the error message.
    pub fn validate(&self, position: usize) -> SidebarResult<()> {
        if self.is_aligned() {
            return Ok(());
        }

        Err(SidebarError::Misaligned {
            group: self.name.to_string(),
            position,
            items: self.sub_items.len(),
            icons: self.sub_icon_names.len(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn misaligned() -> MenuGroup {
        MenuGroup {
            name: "Broken".into(),
            icon_name: "fa-bug".into(),
            sub_items: Cow::Owned(vec!["One".into(), "Two".into()]),
            sub_icon_names: Cow::Owned(vec!["fa-one".into()]),
        }
    }

    #[test]
    fn new_keeps_pairs_aligned() {
        let group = MenuGroup::new(
            "Provider",
            "fa-user",
            [("IBM", "fa-star"), ("Community", "fa-user-plus")],
        );

        assert!(group.is_aligned());
        assert_eq!(group.len(), 2);
        assert_eq!(group.sub_items[1], "Community");
        assert_eq!(group.sub_icon_names[1], "fa-user-plus");
    }

    #[test]
    fn entries_pair_labels_with_icons() {
        let group = MenuGroup::new(
            "Software",
            "fa-dashboard",
            [("SPSS Modeler", "fa-diamond"), ("SPSS Statistics", "fa-table")],
        );

        let entries: Vec<_> = group.entries().collect();
        assert_eq!(
            entries,
            vec![
                MenuEntry {
                    label: "SPSS Modeler",
                    icon: "fa-diamond"
                },
                MenuEntry {
                    label: "SPSS Statistics",
                    icon: "fa-table"
                },
            ]
        );
    }

    #[test]
    fn empty_group_is_aligned() {
        let group = MenuGroup::new("Empty", "fa-circle", Vec::<(&str, &str)>::new());
        assert!(group.is_empty());
        assert!(group.validate(0).is_ok());
    }

    #[test]
    fn validate_reports_lengths() {
        let err = misaligned().validate(3).unwrap_err();
        match err {
            SidebarError::Misaligned {
                group,
                position,
                items,
                icons,
            } => {
                assert_eq!(group, "Broken");
                assert_eq!(position, 3);
                assert_eq!(items, 2);
                assert_eq!(icons, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn entries_stop_at_shorter_sequence() {
        assert_eq!(misaligned().entries().count(), 1);
    }

    #[test]
    fn deserialize_wire_keys() {
        let json = r#"{
            "menu_name": "Language",
            "menu_icon_name": "fa-code",
            "sub_menu_name": ["Java", "R"],
            "sub_menu_icon_name": ["fa-code", "fa-code"]
        }"#;

        let group: MenuGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.name, "Language");
        assert_eq!(group.icon_name, "fa-code");
        assert_eq!(group.len(), 2);
        assert!(group.is_aligned());
    }
}
