use parishdesk_access::{MenuModuleMapping, validate_menu_items};
use parishdesk_models::MenuItem;

use super::model::{DiagnosticsResponse, NavigationEntry, NavigationResponse};
use crate::metrics::track_navigation_item;
use crate::session::{LoadReport, Notification, SessionSnapshot};

/// Evaluates every item against the session. Hidden items are dropped unless
/// `include_hidden` is set; order is preserved either way.
pub fn build_navigation(
    mapping: &MenuModuleMapping,
    items: &[MenuItem],
    report: LoadReport,
    include_hidden: bool,
) -> NavigationResponse {
    let LoadReport {
        snapshot,
        notifications,
        ..
    } = report;
    let evaluator = snapshot.evaluator(mapping);

    let items = evaluator
        .evaluate(items)
        .into_iter()
        .inspect(|(_, visibility)| track_navigation_item(visibility.as_str()))
        .filter(|(_, visibility)| include_hidden || visibility.is_visible())
        .map(|(item, visibility)| NavigationEntry {
            key: item.menu_key().to_string(),
            label: item.label.clone(),
            href: item.href.clone(),
            icon: item.icon.clone(),
            visibility,
            visible: visibility.is_visible(),
        })
        .collect();

    NavigationResponse {
        items,
        catalog_loaded: snapshot.catalog_loaded(),
        profile_loaded: snapshot.profile_loaded(),
        notifications,
    }
}

pub fn diagnostics(
    mapping: &MenuModuleMapping,
    items: &[MenuItem],
    snapshot: &SessionSnapshot,
    notifications: Vec<Notification>,
) -> DiagnosticsResponse {
    let (mapping_issues, unresolved_keys) = match snapshot.catalog.as_deref() {
        Some(catalog) => (
            catalog.issues.clone(),
            catalog
                .menu_permissions
                .unresolved_keys()
                .into_iter()
                .map(str::to_string)
                .collect(),
        ),
        None => (Vec::new(), Vec::new()),
    };

    DiagnosticsResponse {
        catalog_loaded: snapshot.catalog_loaded(),
        mapping_issues,
        menu_issues: validate_menu_items(mapping, items),
        unresolved_keys,
        notifications,
    }
}
