use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_profile, logout};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/logout", post(logout))
}
