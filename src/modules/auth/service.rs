use parishdesk_core::AppError;
use std::sync::Arc;
use tracing::info;

use crate::client::BackendApi;
use crate::session::{
    PROFILE_FAILURE_MESSAGE, ProfileSnapshot, SessionContext, SessionStore, load_profile,
};

/// Always refetches so role changes show up without logging out. A rejected
/// token ends the session.
pub async fn refresh_profile(
    backend: &dyn BackendApi,
    sessions: &SessionStore,
    session: &SessionContext,
    token: &str,
) -> Result<Arc<ProfileSnapshot>, AppError> {
    match load_profile(backend, session, token).await {
        Ok(outcome) => Ok(outcome.snapshot),
        Err(e) => {
            sessions.end_if_rejected(token, &e).await;
            Err(e.into_app_error(PROFILE_FAILURE_MESSAGE))
        }
    }
}

/// Ends the session. Loads still in flight for it are discarded.
pub async fn logout(sessions: &SessionStore, token: &str) {
    let ended = sessions.end(token).await;
    info!(ended, "Session logged out");
}
