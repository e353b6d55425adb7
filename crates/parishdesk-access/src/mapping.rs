//! The menu key to backend module table.
//!
//! Module names must match the backend's `module` field exactly. There is no
//! fuzzy matching; use [`crate::validation::validate_mapping`] to catch drift.

use parishdesk_core::permissions::{
    MODULE_ACCOUNTING, MODULE_ANNOUNCEMENTS, MODULE_EVENTS, MODULE_FAMILIES, MODULE_PARISHES,
    MODULE_PRAYERS, MODULE_ROLES, MODULE_USERS, MODULE_WARDS,
};
use std::sync::LazyLock;

/// The backend module(s) a menu key draws its permissions from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuModules {
    /// No permission required.
    Public,
    Single(String),
    /// Concatenated in order. An empty list is the same as `Public`.
    Many(Vec<String>),
}

impl MenuModules {
    pub fn single(module: impl Into<String>) -> Self {
        MenuModules::Single(module.into())
    }

    pub fn many<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MenuModules::Many(modules.into_iter().map(Into::into).collect())
    }

    pub fn is_public(&self) -> bool {
        match self {
            MenuModules::Public => true,
            MenuModules::Single(_) => false,
            MenuModules::Many(modules) => modules.is_empty(),
        }
    }

    pub fn modules(&self) -> &[String] {
        match self {
            MenuModules::Public => &[],
            MenuModules::Single(module) => std::slice::from_ref(module),
            MenuModules::Many(modules) => modules,
        }
    }
}

static BUILTIN: LazyLock<MenuModuleMapping> = LazyLock::new(|| {
    use MenuModules::Public;
    fn single(module: &str) -> MenuModules {
        MenuModules::Single(module.to_string())
    }

    MenuModuleMapping::new([
        ("dashboard", Public),
        ("families", single(MODULE_FAMILIES)),
        ("wards", single(MODULE_WARDS)),
        ("prayer-requests", single(MODULE_PRAYERS)),
        ("events", single(MODULE_EVENTS)),
        ("posts", single(MODULE_ANNOUNCEMENTS)),
        ("communities", single(MODULE_FAMILIES)),
        ("calendar", single(MODULE_EVENTS)),
        ("notifications", Public),
        ("sacraments", single(MODULE_FAMILIES)),
        ("certificates", single(MODULE_FAMILIES)),
        ("class-management", single(MODULE_USERS)),
        ("announcements", single(MODULE_ANNOUNCEMENTS)),
        ("bible", Public),
        ("donations", single(MODULE_ACCOUNTING)),
        ("family", single(MODULE_FAMILIES)),
        ("parish", single(MODULE_PARISHES)),
        ("prayers", single(MODULE_PRAYERS)),
        ("roles", single(MODULE_ROLES)),
        ("users", single(MODULE_USERS)),
        ("ward", single(MODULE_WARDS)),
        ("church-management", single(MODULE_PARISHES)),
    ])
});

/// Ordered, immutable menu key to [`MenuModules`] table.
///
/// Later duplicates of a key replace earlier ones in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuModuleMapping {
    entries: Vec<(String, MenuModules)>,
}

impl MenuModuleMapping {
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, MenuModules)>,
        K: Into<String>,
    {
        let mut mapping = Self::default();
        for (key, modules) in entries {
            let key = key.into();
            match mapping.entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = modules,
                None => mapping.entries.push((key, modules)),
            }
        }
        mapping
    }

    /// The table compiled into parishdesk.
    pub fn builtin() -> &'static MenuModuleMapping {
        &BUILTIN
    }

    pub fn get(&self, menu_key: &str) -> Option<&MenuModules> {
        self.entries
            .iter()
            .find(|(key, _)| key == menu_key)
            .map(|(_, modules)| modules)
    }

    pub fn contains(&self, menu_key: &str) -> bool {
        self.get(menu_key).is_some()
    }

    /// True only for keys mapped to no module. Unknown keys are not public.
    pub fn is_public(&self, menu_key: &str) -> bool {
        self.get(menu_key).is_some_and(MenuModules::is_public)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MenuModules)> {
        self.entries.iter().map(|(key, modules)| (key.as_str(), modules))
    }

    /// Distinct module names in first-reference order.
    pub fn referenced_modules(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = Vec::new();
        for (_, entry) in &self.entries {
            for module in entry.modules() {
                if !modules.contains(&module.as_str()) {
                    modules.push(module.as_str());
                }
            }
        }
        modules
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
