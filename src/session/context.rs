use chrono::{DateTime, Utc};
use parishdesk_access::{
    AccessEvaluator, GrantSet, MappingIssue, MenuModuleMapping, MenuPermissions, validate_mapping,
};
use parishdesk_models::{PermissionsResponse, ProfileResponse};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// A published permission catalog with its derived menu table.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub catalog: PermissionsResponse,
    pub menu_permissions: MenuPermissions,
    pub issues: Vec<MappingIssue>,
    pub loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    /// Derives the menu table once so readers never recompute it.
    pub fn new(catalog: PermissionsResponse, mapping: &MenuModuleMapping) -> Self {
        let menu_permissions = mapping.derive(&catalog.grouped);
        let issues = validate_mapping(mapping, &catalog.grouped);

        Self {
            catalog,
            menu_permissions,
            issues,
            loaded_at: Utc::now(),
        }
    }
}

/// A published profile with its granted codes.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    pub profile: ProfileResponse,
    pub grants: GrantSet,
    pub loaded_at: DateTime<Utc>,
}

impl ProfileSnapshot {
    pub fn new(profile: ProfileResponse) -> Self {
        let grants = GrantSet::from_permissions(&profile.permissions);

        Self {
            profile,
            grants,
            loaded_at: Utc::now(),
        }
    }
}

/// A consistent view of both slots taken under one read lock.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub catalog: Option<Arc<CatalogSnapshot>>,
    pub profile: Option<Arc<ProfileSnapshot>>,
}

impl SessionSnapshot {
    pub fn catalog_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn profile_loaded(&self) -> bool {
        self.profile.is_some()
    }

    pub fn menu_permissions(&self) -> Option<&MenuPermissions> {
        self.catalog.as_deref().map(|catalog| &catalog.menu_permissions)
    }

    pub fn grants(&self) -> Option<&GrantSet> {
        self.profile.as_deref().map(|profile| &profile.grants)
    }

    pub fn evaluator<'a>(&'a self, mapping: &'a MenuModuleMapping) -> AccessEvaluator<'a> {
        AccessEvaluator::new(mapping)
            .with_menu_permissions(self.menu_permissions())
            .with_grants(self.grants())
    }
}

#[derive(Debug, Default)]
struct Slots {
    catalog: Option<Arc<CatalogSnapshot>>,
    profile: Option<Arc<ProfileSnapshot>>,
}

/// Load state for one authenticated session.
///
/// Every publish carries the generation observed when its load started. The
/// generation only moves inside the write lock, so a load that straddles a
/// [`clear`](Self::clear) can never repopulate the session.
#[derive(Debug, Default)]
pub struct SessionContext {
    slots: RwLock<Slots>,
    generation: AtomicU64,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let slots = self.slots.read().await;
        SessionSnapshot {
            catalog: slots.catalog.clone(),
            profile: slots.profile.clone(),
        }
    }

    pub async fn catalog(&self) -> Option<Arc<CatalogSnapshot>> {
        self.slots.read().await.catalog.clone()
    }

    pub async fn profile(&self) -> Option<Arc<ProfileSnapshot>> {
        self.slots.read().await.profile.clone()
    }

    /// Returns false when `generation` is stale and the snapshot was dropped.
    pub async fn publish_catalog(&self, generation: u64, snapshot: Arc<CatalogSnapshot>) -> bool {
        let mut slots = self.slots.write().await;
        if generation != self.generation() {
            return false;
        }
        slots.catalog = Some(snapshot);
        true
    }

    /// Returns false when `generation` is stale and the snapshot was dropped.
    pub async fn publish_profile(&self, generation: u64, snapshot: Arc<ProfileSnapshot>) -> bool {
        let mut slots = self.slots.write().await;
        if generation != self.generation() {
            return false;
        }
        slots.profile = Some(snapshot);
        true
    }

    /// Empties both slots and invalidates in-flight loads.
    pub async fn clear(&self) {
        let mut slots = self.slots.write().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        *slots = Slots::default();
    }
}
