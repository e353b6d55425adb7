use axum::{Json, extract::State};
use parishdesk_core::AppError;
use parishdesk_models::PermissionsResponse;

use crate::middleware::auth::CurrentSession;
use crate::state::AppState;

use super::model::{MenuPermissionsResponse, PermissionCheckRequest, PermissionCheckResponse};
use super::service;

#[utoipa::path(
    get,
    path = "/api/roles/permissions",
    responses(
        (status = 200, description = "Full permission catalog, flat and grouped by module", body = PermissionsResponse),
        (status = 401, description = "Missing or rejected token"),
        (status = 502, description = "Parish backend failed")
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
pub async fn get_permissions(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Result<Json<PermissionsResponse>, AppError> {
    let snapshot = service::fetch_catalog(
        state.backend.as_ref(),
        &state.sessions,
        &session.context,
        &state.mapping,
        session.token.as_str(),
    )
    .await?;

    Ok(Json(snapshot.catalog.clone()))
}

#[utoipa::path(
    get,
    path = "/api/roles/permissions/menu",
    responses(
        (status = 200, description = "Required permission codes per menu key", body = MenuPermissionsResponse),
        (status = 401, description = "Missing token")
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
pub async fn get_menu_permissions(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Json<MenuPermissionsResponse> {
    let catalog = session.context.catalog().await;
    Json(service::menu_permissions_table(&state.mapping, catalog.as_deref()))
}

#[utoipa::path(
    post,
    path = "/api/roles/permissions/check",
    request_body = PermissionCheckRequest,
    responses(
        (status = 200, description = "Whether the caller holds the codes", body = PermissionCheckResponse),
        (status = 401, description = "Missing or rejected token"),
        (status = 502, description = "Parish backend failed")
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
pub async fn check_permissions(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(request): Json<PermissionCheckRequest>,
) -> Result<Json<PermissionCheckResponse>, AppError> {
    let profile = service::current_profile(
        state.backend.as_ref(),
        &state.sessions,
        &session.context,
        session.token.as_str(),
    )
    .await?;

    Ok(Json(service::check_permissions(&request, Some(&profile.grants))))
}
