//! Role-scoped navigation.
//!
//! The menu is a fixed, ordered table. A role sees the items whose allow-list
//! contains it, in declaration order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Role;

/// A top-level page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    Assets,
    Transfers,
    Reports,
    Audit,
    Settings,
}

impl Page {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Assets => "assets",
            Self::Transfers => "transfers",
            Self::Reports => "reports",
            Self::Audit => "audit",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub title: &'static str,
    pub page: Page,
    pub path: &'static str,
    pub roles: &'static [Role],
}

impl MenuItem {
    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const EVERYONE: &[Role] = &[Role::Admin, Role::Commander, Role::Logistics];

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        title: "Dashboard",
        page: Page::Dashboard,
        path: "/dashboard",
        roles: EVERYONE,
    },
    MenuItem {
        title: "Asset Management",
        page: Page::Assets,
        path: "/assets",
        roles: EVERYONE,
    },
    MenuItem {
        title: "Transfers",
        page: Page::Transfers,
        path: "/transfers",
        roles: EVERYONE,
    },
    MenuItem {
        title: "Reports",
        page: Page::Reports,
        path: "/reports",
        roles: &[Role::Admin, Role::Commander],
    },
    MenuItem {
        title: "Audit History",
        page: Page::Audit,
        path: "/audit",
        roles: &[Role::Admin],
    },
    MenuItem {
        title: "Settings",
        page: Page::Settings,
        path: "/settings",
        roles: &[Role::Admin],
    },
];

/// Menu entries visible to `role`, in declaration order.
#[must_use]
pub fn visible_menu_items(role: Role) -> Vec<&'static MenuItem> {
    MENU_ITEMS.iter().filter(|item| item.allows(role)).collect()
}

/// Whether `role` may open `page`.
#[must_use]
pub fn can_access(role: Role, page: Page) -> bool {
    MENU_ITEMS
        .iter()
        .any(|item| item.page == page && item.allows(role))
}
