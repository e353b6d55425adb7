#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use parishdesk::client::{BackendApi, BackendError};
use parishdesk::router::init_router;
use parishdesk::state::AppState;
use parishdesk_models::{Permission, PermissionsResponse, ProfileResponse};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tower::ServiceExt;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const MEMBER_TOKEN: &str = "member-token";

/// In-memory parish backend.
///
/// Unknown tokens get a 401 from `fetch_profile`. When gated, every fetch
/// waits for one `notify_one` on the gate before answering.
#[derive(Default)]
pub struct FakeBackend {
    catalog: Mutex<Option<PermissionsResponse>>,
    profiles: Mutex<HashMap<String, ProfileResponse>>,
    fail_profiles: AtomicBool,
    gate: Option<Arc<Notify>>,
    pub catalog_calls: AtomicUsize,
    pub profile_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(self, catalog: PermissionsResponse) -> Self {
        *self.catalog.lock().unwrap() = Some(catalog);
        self
    }

    pub fn with_profile(self, token: &str, codes: &[&str]) -> Self {
        self.profiles
            .lock()
            .unwrap()
            .insert(token.to_string(), profile_with(codes));
        self
    }

    pub fn with_failing_profiles(self) -> Self {
        self.fail_profiles.store(true, Ordering::SeqCst);
        self
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn set_catalog(&self, catalog: Option<PermissionsResponse>) {
        *self.catalog.lock().unwrap() = catalog;
    }

    pub fn set_profile(&self, token: &str, codes: &[&str]) {
        self.profiles
            .lock()
            .unwrap()
            .insert(token.to_string(), profile_with(codes));
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl BackendApi for FakeBackend {
    async fn fetch_permissions(&self, _token: &str) -> Result<PermissionsResponse, BackendError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;

        let catalog = self.catalog.lock().unwrap().clone();
        catalog.ok_or_else(|| BackendError::Status {
            status: 500,
            message: "Internal server error".to_string(),
        })
    }

    async fn fetch_profile(&self, token: &str) -> Result<ProfileResponse, BackendError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;

        if self.fail_profiles.load(Ordering::SeqCst) {
            return Err(BackendError::Status {
                status: 503,
                message: "Service unavailable".to_string(),
            });
        }

        let profile = self.profiles.lock().unwrap().get(token).cloned();
        profile.ok_or_else(|| BackendError::Status {
            status: 401,
            message: "Unauthorized".to_string(),
        })
    }
}

/// A catalog shaped like the parish backend's, including non-menu actions.
pub fn catalog_fixture() -> PermissionsResponse {
    PermissionsResponse::from_permissions(vec![
        Permission::new(1, "wards.read", "Wards", "read"),
        Permission::new(2, "wards.delete", "Wards", "delete"),
        Permission::new(3, "families.read", "Families", "read"),
        Permission::new(4, "families.manage", "Families", "manage"),
        Permission::new(5, "families.delete", "Families", "delete"),
        Permission::new(6, "events.view", "Events", "view"),
        Permission::new(7, "events.create", "Events", "create"),
        Permission::new(8, "prayers.read", "Prayers", "read"),
        Permission::new(9, "roles.manage", "Roles", "manage"),
        Permission::new(10, "users.read", "Users", "read"),
        Permission::new(11, "announcements.read", "Announcements", "read"),
        Permission::new(12, "parishes.manage", "Parishes", "manage"),
        Permission::new(13, "accounting.view", "Accounting", "view"),
    ])
}

pub fn profile_with(codes: &[&str]) -> ProfileResponse {
    let permissions = codes
        .iter()
        .enumerate()
        .map(|(i, code)| {
            let module = code.split('.').next().unwrap_or_default();
            Permission::new(100 + i as i64, *code, module, "read")
        })
        .collect();
    ProfileResponse::with_permissions("member@parish.test", permissions)
}

pub fn setup_test_app(backend: Arc<FakeBackend>) -> (Router, AppState) {
    let state = AppState::new(backend);
    (init_router(state.clone()), state)
}

pub fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_empty(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "Failed to parse response. Status: {}, Body: {:?}",
                status,
                String::from_utf8_lossy(&body)
            )
        })
    };
    (status, body)
}

pub fn item_keys(body: &serde_json::Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["key"].as_str().unwrap().to_string())
        .collect()
}
