use parishdesk_access::MenuModuleMapping;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

use super::context::{CatalogSnapshot, ProfileSnapshot, SessionContext, SessionSnapshot};
use crate::client::{BackendApi, BackendError};
use crate::metrics::{track_catalog_load, track_profile_load};

pub const PERMISSIONS_FAILURE_MESSAGE: &str = "Failed to fetch permissions. Please try again later";
pub const PROFILE_FAILURE_MESSAGE: &str = "Failed to fetch user profile. Please try again later";

/// Result of a successful fetch. `published` is false when the session was
/// cleared while the fetch was in flight.
#[derive(Debug, Clone)]
pub struct LoadOutcome<T> {
    pub snapshot: Arc<T>,
    pub published: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationSource {
    Permissions,
    Profile,
}

/// A user-facing failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Notification {
    pub source: NotificationSource,
    pub message: String,
}

impl Notification {
    pub fn permissions_failed() -> Self {
        Self {
            source: NotificationSource::Permissions,
            message: PERMISSIONS_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn profile_failed() -> Self {
        Self {
            source: NotificationSource::Profile,
            message: PROFILE_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub snapshot: SessionSnapshot,
    pub notifications: Vec<Notification>,
    /// The backend answered 401 to at least one of the fetches.
    pub token_rejected: bool,
}

/// Fetches the catalog and publishes it with its derived menu table.
///
/// On failure the session keeps whatever it had before.
#[instrument(skip_all)]
pub async fn load_catalog(
    backend: &dyn BackendApi,
    session: &SessionContext,
    mapping: &MenuModuleMapping,
    token: &str,
) -> Result<LoadOutcome<CatalogSnapshot>, BackendError> {
    let generation = session.generation();

    let catalog = match backend.fetch_permissions(token).await {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(error = %e, "Permission catalog load failed");
            track_catalog_load("failure");
            return Err(e);
        }
    };

    let snapshot = Arc::new(CatalogSnapshot::new(catalog, mapping));
    for issue in &snapshot.issues {
        warn!(issue = %issue, "Menu mapping issue");
    }

    let published = session.publish_catalog(generation, snapshot.clone()).await;
    if published {
        info!(
            permissions = snapshot.catalog.all.len(),
            modules = snapshot.catalog.grouped.len(),
            unresolved = snapshot.menu_permissions.unresolved_keys().len(),
            "Permission catalog published"
        );
        track_catalog_load("published");
    } else {
        debug!("Session cleared during catalog load; result discarded");
        track_catalog_load("discarded");
    }

    Ok(LoadOutcome {
        snapshot,
        published,
    })
}

/// Fetches the caller's profile and publishes its grant set.
#[instrument(skip_all)]
pub async fn load_profile(
    backend: &dyn BackendApi,
    session: &SessionContext,
    token: &str,
) -> Result<LoadOutcome<ProfileSnapshot>, BackendError> {
    let generation = session.generation();

    let profile = match backend.fetch_profile(token).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!(error = %e, "Profile load failed");
            track_profile_load("failure");
            return Err(e);
        }
    };

    let snapshot = Arc::new(ProfileSnapshot::new(profile));
    let published = session.publish_profile(generation, snapshot.clone()).await;
    if published {
        info!(grants = snapshot.grants.len(), "Profile published");
        track_profile_load("published");
    } else {
        debug!("Session cleared during profile load; result discarded");
        track_profile_load("discarded");
    }

    Ok(LoadOutcome {
        snapshot,
        published,
    })
}

/// Loads whatever the session is missing, or everything when `force` is set,
/// running both fetches concurrently. Failures become notifications.
#[instrument(skip_all, fields(force = force))]
pub async fn ensure_loaded(
    backend: &dyn BackendApi,
    session: &SessionContext,
    mapping: &MenuModuleMapping,
    token: &str,
    force: bool,
) -> LoadReport {
    let current = session.snapshot().await;
    let need_catalog = force || !current.catalog_loaded();
    let need_profile = force || !current.profile_loaded();

    let catalog = async {
        if need_catalog {
            Some(load_catalog(backend, session, mapping, token).await)
        } else {
            None
        }
    };
    let profile = async {
        if need_profile {
            Some(load_profile(backend, session, token).await)
        } else {
            None
        }
    };

    let (catalog, profile) = tokio::join!(catalog, profile);

    let mut notifications = Vec::new();
    let mut token_rejected = false;
    if let Some(Err(e)) = &catalog {
        notifications.push(Notification::permissions_failed());
        token_rejected |= e.is_unauthorized();
    }
    if let Some(Err(e)) = &profile {
        notifications.push(Notification::profile_failed());
        token_rejected |= e.is_unauthorized();
    }

    LoadReport {
        snapshot: session.snapshot().await,
        notifications,
        token_rejected,
    }
}
