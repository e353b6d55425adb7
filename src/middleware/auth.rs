use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use parishdesk_core::AppError;
use std::sync::Arc;

use crate::session::SessionContext;
use crate::state::AppState;

/// Cookie the dashboard stores its token in.
pub const TOKEN_COOKIE: &str = "token";

/// The caller's bearer token, taken from the `Authorization` header or,
/// failing that, the `token` cookie.
#[derive(Clone)]
pub struct SessionToken(pub String);

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_parts(parts: &Parts) -> Option<Self> {
        if let Some(Authorization(bearer)) = parts.headers.typed_get::<Authorization<Bearer>>() {
            let token = bearer.token().trim();
            if !token.is_empty() {
                return Some(Self(token.to_string()));
            }
        }

        CookieJar::from_headers(&parts.headers)
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().trim().to_string())
            .filter(|token| !token.is_empty())
            .map(Self)
    }
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_parts(parts)
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Missing authorization token")))
    }
}

/// The caller's token together with its session state, created on first use.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub token: SessionToken,
    pub context: Arc<SessionContext>,
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = SessionToken::from_request_parts(parts, state).await?;
        let context = state.sessions.get_or_create(token.as_str()).await;

        Ok(CurrentSession { token, context })
    }
}
