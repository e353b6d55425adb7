//! Report builders behind `parishdesk-cli`.
//!
//! Kept in the library so the binary only parses arguments, prompts and
//! prints.

use parishdesk_access::{
    MappingIssue, MenuModuleMapping, MenuModules, validate_mapping, validate_menu_items,
};
use parishdesk_models::{MenuItem, PermissionsResponse};

use crate::session::SessionSnapshot;

/// One line per mapping entry, in declaration order.
pub fn mapping_lines(mapping: &MenuModuleMapping) -> Vec<String> {
    let width = mapping.keys().map(str::len).max().unwrap_or(0);

    mapping
        .iter()
        .map(|(key, modules)| {
            let target = match modules {
                MenuModules::Single(module) => module.clone(),
                MenuModules::Many(list) if !list.is_empty() => list.join(", "),
                _ => "(public)".to_string(),
            };
            format!("{key:<width$}  {target}")
        })
        .collect()
}

/// Mapping issues against `catalog` followed by sidebar issues.
pub fn collect_issues(
    mapping: &MenuModuleMapping,
    catalog: &PermissionsResponse,
    items: &[MenuItem],
) -> Vec<MappingIssue> {
    let mut issues = validate_mapping(mapping, &catalog.grouped);
    issues.extend(validate_menu_items(mapping, items));
    issues
}

/// One line per item the session may see, in declaration order.
pub fn menu_lines(
    mapping: &MenuModuleMapping,
    items: &[MenuItem],
    snapshot: &SessionSnapshot,
) -> Vec<String> {
    snapshot
        .evaluator(mapping)
        .filter(items)
        .into_iter()
        .map(|item| format!("{:<24} {}", item.label, item.href))
        .collect()
}
