use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_diagnostics, get_navigation, refresh_navigation};

pub fn init_navigation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_navigation))
        .route("/refresh", post(refresh_navigation))
        .route("/diagnostics", get(get_diagnostics))
}
