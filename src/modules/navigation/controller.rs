use axum::{
    Json,
    extract::{Query, State},
};

use crate::middleware::auth::CurrentSession;
use crate::session::{Notification, ensure_loaded, load_catalog};
use crate::state::AppState;

use super::model::{DiagnosticsResponse, NavigationQuery, NavigationResponse};
use super::service;

#[utoipa::path(
    get,
    path = "/api/navigation",
    params(NavigationQuery),
    responses(
        (status = 200, description = "Sidebar entries the caller may see", body = NavigationResponse),
        (status = 401, description = "Missing token")
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
pub async fn get_navigation(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationResponse> {
    let report = ensure_loaded(
        state.backend.as_ref(),
        &session.context,
        &state.mapping,
        session.token.as_str(),
        false,
    )
    .await;
    if report.token_rejected {
        state.sessions.end(session.token.as_str()).await;
    }

    Json(service::build_navigation(
        &state.mapping,
        &state.navigation,
        report,
        query.include_hidden,
    ))
}

#[utoipa::path(
    post,
    path = "/api/navigation/refresh",
    params(NavigationQuery),
    responses(
        (status = 200, description = "Sidebar entries after refetching catalog and profile", body = NavigationResponse),
        (status = 401, description = "Missing token")
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
pub async fn refresh_navigation(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationResponse> {
    let report = ensure_loaded(
        state.backend.as_ref(),
        &session.context,
        &state.mapping,
        session.token.as_str(),
        true,
    )
    .await;
    if report.token_rejected {
        state.sessions.end(session.token.as_str()).await;
    }

    Json(service::build_navigation(
        &state.mapping,
        &state.navigation,
        report,
        query.include_hidden,
    ))
}

#[utoipa::path(
    get,
    path = "/api/navigation/diagnostics",
    responses(
        (status = 200, description = "Mapping and sidebar consistency report", body = DiagnosticsResponse),
        (status = 401, description = "Missing token")
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
pub async fn get_diagnostics(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Json<DiagnosticsResponse> {
    let mut notifications = Vec::new();

    if session.context.catalog().await.is_none() {
        let loaded = load_catalog(
            state.backend.as_ref(),
            &session.context,
            &state.mapping,
            session.token.as_str(),
        )
        .await;
        if let Err(e) = loaded {
            state.sessions.end_if_rejected(session.token.as_str(), &e).await;
            notifications.push(Notification::permissions_failed());
        }
    }

    let snapshot = session.context.snapshot().await;
    Json(service::diagnostics(
        &state.mapping,
        &state.navigation,
        &snapshot,
        notifications,
    ))
}
