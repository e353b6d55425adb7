use axum::{Json, extract::State, http::StatusCode};
use parishdesk_core::AppError;
use parishdesk_models::ProfileResponse;

use crate::middleware::auth::{CurrentSession, SessionToken};
use crate::state::AppState;

use super::service;

#[utoipa::path(
    get,
    path = "/api/auth/profile",
    responses(
        (status = 200, description = "Signed-in user's profile and permissions", body = ProfileResponse),
        (status = 401, description = "Missing or rejected token"),
        (status = 502, description = "Parish backend failed")
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Result<Json<ProfileResponse>, AppError> {
    let snapshot = service::refresh_profile(
        state.backend.as_ref(),
        &state.sessions,
        &session.context,
        session.token.as_str(),
    )
    .await?;

    Ok(Json(snapshot.profile.clone()))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 204, description = "Session cleared"),
        (status = 401, description = "Missing token")
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
pub async fn logout(State(state): State<AppState>, token: SessionToken) -> StatusCode {
    service::logout(&state.sessions, token.as_str()).await;
    StatusCode::NO_CONTENT
}
