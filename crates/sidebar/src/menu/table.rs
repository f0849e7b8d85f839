//! The built-in sidebar table.
//!
//! Icon identifiers are Font Awesome glyph names
//! (<http://fortawesome.github.io/Font-Awesome/icons/>).

use std::borrow::Cow;

use super::group::{Label, MenuGroup};

/// Declares a borrowed [`MenuGroup`] from `(label, icon)` pairs, so each
/// sub-item is written next to its icon.
macro_rules! menu_group {
    ($name:literal, $icon:literal, [$(($label:literal, $sub_icon:literal)),* $(,)?]) => {
        MenuGroup {
            name: Cow::Borrowed($name),
            icon_name: Cow::Borrowed($icon),
            sub_items: {
                const ITEMS: &[Label] = &[$(Cow::Borrowed($label)),*];
                Cow::Borrowed(ITEMS)
            },
            sub_icon_names: {
                const ICONS: &[Label] = &[$(Cow::Borrowed($sub_icon)),*];
                Cow::Borrowed(ICONS)
            },
        }
    };
}

/// Sidebar categories of the extensions catalog, in display order.
pub const SIDEBAR: &[MenuGroup] = &[
    menu_group!(
        "Software",
        "fa-dashboard",
        [
            ("SPSS Modeler", "fa-diamond"),
            ("SPSS Statistics", "fa-table"),
        ]
    ),
    menu_group!(
        "Type",
        "fa-cubes",
        [
            ("Extension", "fa-plus-square-o"),
            ("Native Application", "fa-folder"),
            ("Module", "fa-cube"),
        ]
    ),
    menu_group!(
        "Category",
        "fa-dashboard",
        [
            ("Analysis", "fa-line-chart"),
            ("Data Manipulation", "fa-database"),
            ("Utility", "fa-wrench"),
            ("Geospatial", "fa-globe"),
            ("Visualization", "fa-bar-chart"),
            ("Watson", "fa-cloud"),
        ]
    ),
    menu_group!(
        "Language",
        "fa-code",
        [
            ("Java", "fa-code"),
            ("Native product", "fa-code"),
            ("Python 2", "fa-code"),
            ("Python 3", "fa-code"),
            ("R", "fa-code"),
        ]
    ),
    menu_group!(
        "Provider",
        "fa-user",
        [
            ("IBM", "fa-star"),
            ("Business Partner", "fa-circle"),
            ("Community", "fa-user-plus"),
        ]
    ),
];

/// The full built-in table, in display order.
pub fn sidebar() -> &'static [MenuGroup] {
    SIDEBAR
}
