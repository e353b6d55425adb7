//! Consistency checks between the mapping, the live catalog and the
//! navigation items.
//!
//! None of these issues stop anything from working: affected entries are
//! simply hidden. They are reported so that a renamed backend module does
//! not silently take a sidebar section away from everyone.

use crate::mapping::MenuModuleMapping;
use parishdesk_models::{GroupedPermissions, MenuItem};
use serde::Serialize;
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MappingIssue {
    #[error("menu key '{menu_key}' references module '{module}' which is not in the permission catalog")]
    UnknownModule { menu_key: String, module: String },

    #[error("menu key '{menu_key}' maps to modules with no read, manage or view permission")]
    NoQualifyingPermissions { menu_key: String },

    #[error("navigation item '{label}' uses menu key '{menu_key}' which has no mapping entry")]
    UnmappedMenuItem { menu_key: String, label: String },

    #[error("menu key '{menu_key}' is used by more than one navigation item")]
    DuplicateMenuKey { menu_key: String },
}

/// Checks every mapped module name against the catalog.
pub fn validate_mapping(
    mapping: &MenuModuleMapping,
    grouped: &GroupedPermissions,
) -> Vec<MappingIssue> {
    let mut issues = Vec::new();

    for (menu_key, modules) in mapping.iter() {
        if modules.is_public() {
            continue;
        }

        let mut all_present = true;
        for module in modules.modules() {
            if !grouped.contains_key(module) {
                all_present = false;
                issues.push(MappingIssue::UnknownModule {
                    menu_key: menu_key.to_string(),
                    module: module.clone(),
                });
            }
        }

        let qualifies = modules
            .modules()
            .iter()
            .filter_map(|module| grouped.get(module))
            .flatten()
            .any(|permission| permission.counts_towards_menu());

        if all_present && !qualifies {
            issues.push(MappingIssue::NoQualifyingPermissions {
                menu_key: menu_key.to_string(),
            });
        }
    }

    issues
}

/// Checks navigation items for duplicate keys and keys the mapping lacks.
pub fn validate_menu_items(mapping: &MenuModuleMapping, items: &[MenuItem]) -> Vec<MappingIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for item in items {
        let menu_key = item.menu_key();

        if !seen.insert(menu_key) && reported.insert(menu_key) {
            issues.push(MappingIssue::DuplicateMenuKey {
                menu_key: menu_key.to_string(),
            });
        }

        if !mapping.contains(menu_key) {
            issues.push(MappingIssue::UnmappedMenuItem {
                menu_key: menu_key.to_string(),
                label: item.label.clone(),
            });
        }
    }

    issues
}
