mod common;

use axum::http::StatusCode;
use common::{
    FakeBackend, MEMBER_TOKEN, catalog_fixture, get, post_json, send, setup_test_app,
};
use serde_json::json;
use std::sync::Arc;

fn entry<'a>(body: &'a serde_json::Value, key: &str) -> &'a serde_json::Value {
    body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["menu_key"] == key)
        .unwrap()
}

// ============ Catalog ============

#[tokio::test]
async fn test_get_permissions_returns_catalog() {
    let backend = Arc::new(FakeBackend::new().with_catalog(catalog_fixture()));
    let (app, _) = setup_test_app(backend);

    let (status, body) = send(&app, get("/api/roles/permissions", MEMBER_TOKEN)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["all"].as_array().unwrap().len(), 13);
    assert_eq!(body["grouped"]["Families"].as_array().unwrap().len(), 3);
    assert_eq!(body["grouped"]["Wards"][0]["permission_code"], "wards.read");
}

#[tokio::test]
async fn test_get_permissions_backend_failure() {
    let (app, _) = setup_test_app(Arc::new(FakeBackend::new()));

    let (status, body) = send(&app, get("/api/roles/permissions", MEMBER_TOKEN)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body["error"],
        "Failed to fetch permissions. Please try again later"
    );
}

// ============ Menu table ============

#[tokio::test]
async fn test_menu_table_before_catalog_load() {
    let backend = Arc::new(FakeBackend::new().with_catalog(catalog_fixture()));
    let (app, _) = setup_test_app(backend.clone());

    let (status, body) = send(&app, get("/api/roles/permissions/menu", MEMBER_TOKEN)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["catalog_loaded"], false);
    assert_eq!(body["entries"].as_array().unwrap().len(), 22);
    assert_eq!(entry(&body, "dashboard")["public"], true);
    assert_eq!(entry(&body, "families")["public"], false);
    assert!(
        entry(&body, "families")["required_permissions"]
            .as_array()
            .unwrap()
            .is_empty()
    );
    assert_eq!(backend.catalog_calls(), 0);
}

#[tokio::test]
async fn test_menu_table_after_catalog_load() {
    let backend = Arc::new(FakeBackend::new().with_catalog(catalog_fixture()));
    let (app, _) = setup_test_app(backend);

    send(&app, get("/api/roles/permissions", MEMBER_TOKEN)).await;
    let (_, body) = send(&app, get("/api/roles/permissions/menu", MEMBER_TOKEN)).await;

    assert_eq!(body["catalog_loaded"], true);
    assert_eq!(body["entries"][0]["menu_key"], "dashboard");
    assert_eq!(
        entry(&body, "families")["required_permissions"],
        json!(["families.read", "families.manage"])
    );
    assert_eq!(entry(&body, "calendar")["required_permissions"], json!(["events.view"]));
    assert_eq!(entry(&body, "donations")["modules"], json!(["Accounting"]));
    assert_eq!(
        entry(&body, "donations")["required_permissions"],
        json!(["accounting.view"])
    );
    assert_eq!(entry(&body, "bible")["required_permissions"], json!([]));
}

// ============ Checks ============

#[tokio::test]
async fn test_check_any_and_all() {
    let backend = Arc::new(FakeBackend::new().with_profile(MEMBER_TOKEN, &["wards.read"]));
    let (app, _) = setup_test_app(backend);

    let (status, body) = send(
        &app,
        post_json(
            "/api/roles/permissions/check",
            MEMBER_TOKEN,
            json!({ "codes": ["wards.read", "wards.delete"] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], true);
    assert_eq!(body["mode"], "any");

    let (_, body) = send(
        &app,
        post_json(
            "/api/roles/permissions/check",
            MEMBER_TOKEN,
            json!({ "codes": ["wards.read", "wards.delete"], "mode": "all" }),
        ),
    )
    .await;
    assert_eq!(body["allowed"], false);
    assert_eq!(body["mode"], "all");
}

#[tokio::test]
async fn test_check_empty_codes_is_allowed() {
    let backend = Arc::new(FakeBackend::new().with_profile(MEMBER_TOKEN, &[]));
    let (app, _) = setup_test_app(backend);

    let (_, body) = send(
        &app,
        post_json(
            "/api/roles/permissions/check",
            MEMBER_TOKEN,
            json!({ "codes": [], "mode": "all" }),
        ),
    )
    .await;
    assert_eq!(body["allowed"], true);
}

#[tokio::test]
async fn test_check_reuses_loaded_profile() {
    let backend = Arc::new(FakeBackend::new().with_profile(MEMBER_TOKEN, &["events.view"]));
    let (app, _) = setup_test_app(backend.clone());

    for _ in 0..3 {
        let (_, body) = send(
            &app,
            post_json(
                "/api/roles/permissions/check",
                MEMBER_TOKEN,
                json!({ "codes": ["events.view"] }),
            ),
        )
        .await;
        assert_eq!(body["allowed"], true);
    }

    assert_eq!(backend.profile_calls(), 1);
}

#[tokio::test]
async fn test_check_with_rejected_token() {
    let (app, state) = setup_test_app(Arc::new(FakeBackend::new()));

    let (status, _) = send(
        &app,
        post_json(
            "/api/roles/permissions/check",
            "unknown-token",
            json!({ "codes": ["events.view"] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(state.sessions.is_empty().await);
}
