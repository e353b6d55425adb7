//! Menu-permission derivation.
//!
//! For every key in a [`MenuModuleMapping`], collect the codes of the
//! permissions in its module(s) whose action is `read`, `manage` or `view`.
//! The result is a pure function of the grouped catalog, so callers compute
//! it once per catalog load and keep it alongside the catalog.

use crate::mapping::{MenuModuleMapping, MenuModules};
use parishdesk_models::GroupedPermissions;
use serde::Serialize;
use std::collections::BTreeMap;

/// What a single menu entry requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "codes", rename_all = "snake_case")]
pub enum RequiredPermissions {
    /// Mapped to no module; visible to everyone.
    Public,
    /// Any one of these codes grants visibility. May be empty when the
    /// mapped module is absent from the catalog or has no qualifying action,
    /// in which case nobody sees the entry.
    Codes(Vec<String>),
}

impl RequiredPermissions {
    pub fn codes(&self) -> &[String] {
        match self {
            RequiredPermissions::Public => &[],
            RequiredPermissions::Codes(codes) => codes,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, RequiredPermissions::Public)
    }

    /// Mapped to at least one module, yet no code could be derived.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, RequiredPermissions::Codes(codes) if codes.is_empty())
    }
}

/// Derived menu key to required-permissions table.
///
/// Always covers every key of the mapping it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct MenuPermissions {
    entries: BTreeMap<String, RequiredPermissions>,
}

impl MenuPermissions {
    pub fn get(&self, menu_key: &str) -> Option<&RequiredPermissions> {
        self.entries.get(menu_key)
    }

    /// Required codes for `menu_key`; empty for public and unknown keys.
    pub fn codes(&self, menu_key: &str) -> &[String] {
        self.get(menu_key).map(RequiredPermissions::codes).unwrap_or(&[])
    }

    pub fn contains(&self, menu_key: &str) -> bool {
        self.entries.contains_key(menu_key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RequiredPermissions)> {
        self.entries.iter().map(|(key, required)| (key.as_str(), required))
    }

    pub fn unresolved_keys(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, required)| required.is_unresolved())
            .map(|(key, _)| key)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MenuModuleMapping {
    /// Derives the required-permissions table for every key in this mapping.
    pub fn derive(&self, grouped: &GroupedPermissions) -> MenuPermissions {
        let entries = self
            .iter()
            .map(|(key, modules)| (key.to_string(), required_for(modules, grouped)))
            .collect();

        MenuPermissions { entries }
    }
}

/// Derives the table for the compiled-in mapping.
pub fn derive_menu_permissions(grouped: &GroupedPermissions) -> MenuPermissions {
    MenuModuleMapping::builtin().derive(grouped)
}

fn required_for(modules: &MenuModules, grouped: &GroupedPermissions) -> RequiredPermissions {
    if modules.is_public() {
        return RequiredPermissions::Public;
    }

    // Duplicates across modules are kept: visibility is any-match.
    let codes = modules
        .modules()
        .iter()
        .flat_map(|module| grouped.get(module).map(Vec::as_slice).unwrap_or(&[]))
        .filter(|permission| permission.counts_towards_menu())
        .map(|permission| permission.permission_code.clone())
        .collect();

    RequiredPermissions::Codes(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parishdesk_core::permissions::{
        ACTION_CREATE, ACTION_DELETE, ACTION_MANAGE, ACTION_READ, ACTION_VIEW,
    };
    use parishdesk_models::{Permission, group_by_module};

    fn catalog() -> GroupedPermissions {
        group_by_module(&[
            Permission::new(1, "wards.read", "Wards", ACTION_READ),
            Permission::new(2, "wards.create", "Wards", ACTION_CREATE),
            Permission::new(3, "families.read", "Families", ACTION_READ),
            Permission::new(4, "families.delete", "Families", ACTION_DELETE),
            Permission::new(5, "families.manage", "Families", ACTION_MANAGE),
            Permission::new(6, "prayers.view", "Prayers", ACTION_VIEW),
            Permission::new(7, "shared.read", "Prayers", ACTION_READ),
            Permission::new(8, "shared.read", "Families", ACTION_READ),
        ])
    }

    #[test]
    fn test_single_module_filters_actions() {
        let mapping = MenuModuleMapping::new([("wards", MenuModules::single("Wards"))]);
        let table = mapping.derive(&catalog());
        assert_eq!(table.codes("wards"), &["wards.read".to_string()]);
    }

    #[test]
    fn test_delete_action_never_qualifies() {
        let table = derive_menu_permissions(&catalog());
        let codes = table.codes("families");
        assert!(!codes.contains(&"families.delete".to_string()));
        assert_eq!(
            codes,
            &[
                "families.read".to_string(),
                "families.manage".to_string(),
                "shared.read".to_string()
            ]
        );
    }

    #[test]
    fn test_public_entries() {
        let table = derive_menu_permissions(&catalog());
        assert_eq!(table.get("dashboard"), Some(&RequiredPermissions::Public));
        assert!(table.codes("dashboard").is_empty());
        assert!(table.get("bible").unwrap().is_public());
    }

    #[test]
    fn test_multiple_modules_concatenate_in_order_with_duplicates() {
        let mapping =
            MenuModuleMapping::new([("pastoral", MenuModules::many(["Prayers", "Families"]))]);
        let table = mapping.derive(&catalog());
        assert_eq!(
            table.codes("pastoral"),
            &[
                "prayers.view".to_string(),
                "shared.read".to_string(),
                "families.read".to_string(),
                "families.manage".to_string(),
                "shared.read".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_module_yields_unresolved_entry() {
        let table = derive_menu_permissions(&catalog());
        let donations = table.get("donations").unwrap();
        assert!(donations.codes().is_empty());
        assert!(donations.is_unresolved());
        assert!(!donations.is_public());
        assert!(table.unresolved_keys().contains(&"donations"));
        assert!(!table.unresolved_keys().contains(&"dashboard"));
    }

    #[test]
    fn test_output_covers_every_mapping_key() {
        let mapping = MenuModuleMapping::builtin();
        let table = derive_menu_permissions(&GroupedPermissions::new());
        assert_eq!(table.len(), mapping.len());
        for key in mapping.keys() {
            assert!(table.contains(key), "missing key {key}");
        }
    }

    #[test]
    fn test_empty_catalog_only_public_resolves() {
        let table = derive_menu_permissions(&GroupedPermissions::new());
        for (key, required) in table.iter() {
            if MenuModuleMapping::builtin().is_public(key) {
                assert!(required.is_public());
            } else {
                assert!(required.is_unresolved());
            }
        }
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let grouped = catalog();
        assert_eq!(derive_menu_permissions(&grouped), derive_menu_permissions(&grouped));
    }

    #[test]
    fn test_serialized_shape() {
        let mapping = MenuModuleMapping::new([
            ("dashboard", MenuModules::Public),
            ("wards", MenuModules::single("Wards")),
        ]);
        let json = serde_json::to_value(mapping.derive(&catalog())).unwrap();
        assert_eq!(json["dashboard"]["kind"], "public");
        assert_eq!(json["wards"]["kind"], "codes");
        assert_eq!(json["wards"]["codes"][0], "wards.read");
    }
}
