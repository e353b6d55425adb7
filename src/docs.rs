use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::navigation::model::{DiagnosticsResponse, NavigationEntry, NavigationResponse};
use crate::modules::roles::model::{
    CheckMode, MenuPermissionEntry, MenuPermissionsResponse, PermissionCheckRequest,
    PermissionCheckResponse,
};
use crate::session::{Notification, NotificationSource};
use parishdesk_access::{MappingIssue, Visibility};
use parishdesk_models::{Permission, PermissionsResponse, ProfileResponse, ProfileUser, Role};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::get_profile,
        crate::modules::auth::controller::logout,
        crate::modules::roles::controller::get_permissions,
        crate::modules::roles::controller::get_menu_permissions,
        crate::modules::roles::controller::check_permissions,
        crate::modules::navigation::controller::get_navigation,
        crate::modules::navigation::controller::refresh_navigation,
        crate::modules::navigation::controller::get_diagnostics,
    ),
    components(
        schemas(
            Permission,
            PermissionsResponse,
            ProfileResponse,
            ProfileUser,
            Role,
            MenuPermissionEntry,
            MenuPermissionsResponse,
            CheckMode,
            PermissionCheckRequest,
            PermissionCheckResponse,
            NavigationEntry,
            NavigationResponse,
            DiagnosticsResponse,
            Visibility,
            MappingIssue,
            Notification,
            NotificationSource,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Profile and session endpoints"),
        (name = "Roles", description = "Permission catalog and checks"),
        (name = "Navigation", description = "Permission-filtered sidebar")
    ),
    info(
        title = "Parishdesk API",
        version = "0.1.0",
        description = "Permission-driven navigation for the parish dashboard, backed by the parish REST API.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            )
        }
    }
}
