use parishdesk_access::{
    GrantSet, MenuModuleMapping, MenuPermissions, has_all_permissions, has_any_permission,
};
use parishdesk_core::AppError;
use parishdesk_models::GroupedPermissions;
use std::sync::Arc;

use super::model::{
    CheckMode, MenuPermissionEntry, MenuPermissionsResponse, PermissionCheckRequest,
    PermissionCheckResponse,
};
use crate::client::BackendApi;
use crate::session::{
    CatalogSnapshot, PERMISSIONS_FAILURE_MESSAGE, PROFILE_FAILURE_MESSAGE, ProfileSnapshot,
    SessionContext, SessionStore, load_catalog, load_profile,
};

pub async fn fetch_catalog(
    backend: &dyn BackendApi,
    sessions: &SessionStore,
    session: &SessionContext,
    mapping: &MenuModuleMapping,
    token: &str,
) -> Result<Arc<CatalogSnapshot>, AppError> {
    match load_catalog(backend, session, mapping, token).await {
        Ok(outcome) => Ok(outcome.snapshot),
        Err(e) => {
            sessions.end_if_rejected(token, &e).await;
            Err(e.into_app_error(PERMISSIONS_FAILURE_MESSAGE))
        }
    }
}

/// Returns the published profile, fetching it first if the session has none.
pub async fn current_profile(
    backend: &dyn BackendApi,
    sessions: &SessionStore,
    session: &SessionContext,
    token: &str,
) -> Result<Arc<ProfileSnapshot>, AppError> {
    if let Some(profile) = session.profile().await {
        return Ok(profile);
    }

    match load_profile(backend, session, token).await {
        Ok(outcome) => Ok(outcome.snapshot),
        Err(e) => {
            sessions.end_if_rejected(token, &e).await;
            Err(e.into_app_error(PROFILE_FAILURE_MESSAGE))
        }
    }
}

/// Lays out the derived table in mapping order. Without a catalog the table
/// is derived from an empty one, so only public entries carry no codes.
pub fn menu_permissions_table(
    mapping: &MenuModuleMapping,
    catalog: Option<&CatalogSnapshot>,
) -> MenuPermissionsResponse {
    let empty;
    let table: &MenuPermissions = match catalog {
        Some(catalog) => &catalog.menu_permissions,
        None => {
            empty = mapping.derive(&GroupedPermissions::new());
            &empty
        }
    };

    let entries = mapping
        .iter()
        .map(|(menu_key, modules)| MenuPermissionEntry {
            menu_key: menu_key.to_string(),
            modules: modules.modules().to_vec(),
            public: modules.is_public(),
            required_permissions: table.codes(menu_key).to_vec(),
        })
        .collect();

    MenuPermissionsResponse {
        catalog_loaded: catalog.is_some(),
        entries,
    }
}

pub fn check_permissions(
    request: &PermissionCheckRequest,
    grants: Option<&GrantSet>,
) -> PermissionCheckResponse {
    let allowed = match request.mode {
        CheckMode::Any => has_any_permission(request.codes.as_slice(), grants),
        CheckMode::All => has_all_permissions(request.codes.as_slice(), grants),
    };

    PermissionCheckResponse {
        allowed,
        mode: request.mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parishdesk_models::{Permission, PermissionsResponse};

    fn request(codes: &[&str], mode: CheckMode) -> PermissionCheckRequest {
        PermissionCheckRequest {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            mode,
        }
    }

    #[test]
    fn test_table_without_catalog_is_public_only() {
        let mapping = MenuModuleMapping::builtin();
        let table = menu_permissions_table(mapping, None);

        assert!(!table.catalog_loaded);
        assert_eq!(table.entries.len(), mapping.len());
        assert!(table.entries.iter().all(|e| e.required_permissions.is_empty()));

        let dashboard = &table.entries[0];
        assert_eq!(dashboard.menu_key, "dashboard");
        assert!(dashboard.public);

        let families = table
            .entries
            .iter()
            .find(|e| e.menu_key == "families")
            .unwrap();
        assert!(!families.public);
        assert_eq!(families.modules, vec!["Families".to_string()]);
    }

    #[test]
    fn test_table_with_catalog() {
        let mapping = MenuModuleMapping::builtin();
        let catalog = CatalogSnapshot::new(
            PermissionsResponse::from_permissions(vec![
                Permission::new(1, "families.read", "Families", "read"),
                Permission::new(2, "families.delete", "Families", "delete"),
            ]),
            mapping,
        );

        let table = menu_permissions_table(mapping, Some(&catalog));
        assert!(table.catalog_loaded);

        let families = table
            .entries
            .iter()
            .find(|e| e.menu_key == "families")
            .unwrap();
        assert_eq!(families.required_permissions, vec!["families.read".to_string()]);

        let keys: Vec<&str> = table.entries.iter().map(|e| e.menu_key.as_str()).collect();
        let mapping_keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, mapping_keys);
    }

    #[test]
    fn test_check_any_and_all() {
        let grants: GrantSet = ["wards.read", "events.view"].into_iter().collect();

        let partial = ["wards.read", "x"];
        let both = ["wards.read", "events.view"];

        assert!(check_permissions(&request(&partial, CheckMode::Any), Some(&grants)).allowed);
        assert!(!check_permissions(&request(&partial, CheckMode::All), Some(&grants)).allowed);
        assert!(check_permissions(&request(&both, CheckMode::All), Some(&grants)).allowed);
    }

    #[test]
    fn test_check_without_grants() {
        assert!(!check_permissions(&request(&["wards.read"], CheckMode::Any), None).allowed);
        assert!(check_permissions(&request(&[], CheckMode::Any), None).allowed);
        assert!(check_permissions(&request(&[], CheckMode::All), None).allowed);
    }
}
