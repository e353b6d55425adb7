use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{check_permissions, get_menu_permissions, get_permissions};

pub fn init_roles_router() -> Router<AppState> {
    Router::new()
        .route("/permissions", get(get_permissions))
        .route("/permissions/menu", get(get_menu_permissions))
        .route("/permissions/check", post(check_permissions))
}
