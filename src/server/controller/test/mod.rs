use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use crate::server::{router, state::AppState};


/// Builds a test database with every table and a router serving it.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let app = router::app(
        AppState::new(db, std::env::temp_dir().join("cardvault-test-artwork")),
        CorsLayer::new(),
    );

    (test, app)
}

/// Sends a request through the router and decodes the JSON response body.
///
/// Returns `Value::Null` for empty bodies.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(body) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = setup().await;

    let (status, body) = send(&app, Method::GET, "/api/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/packs"].is_object());
    assert!(body["paths"]["/api/packs/{id}/cards"].is_object());
    assert!(body["paths"]["/api/cards/{id}"].is_object());
    assert!(body["paths"]["/api/decks"].is_object());
}

#[tokio::test]
async fn rejects_malformed_json() {
    let (_test, app) = setup().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/packs")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (_test, app) = setup().await;

    let (status, _) = send(&app, Method::GET, "/api/unknown", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn factory_rows_are_visible_through_router() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let pack = factory::create_pack(db).await.unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/packs/{}", pack.id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(pack.id));
    assert_eq!(body["name"], json!(pack.name));
    assert_eq!(body["set_code"], json!(pack.set_code));
}

#[tokio::test]
async fn migrated_schema_detaches_cards_of_deleted_pack() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let app = router::app(
        AppState::new(db, std::env::temp_dir().join("cardvault-test-artwork")),
        CorsLayer::new(),
    );

    let (status, pack) = send(
        &app,
        Method::POST,
        "/api/packs",
        Some(json!({ "name": "Team Rocket", "image_url": "/images/packs/team-rocket.png" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(pack["image_url"], "/images/packs/team-rocket.png");

    let (status, card) = send(
        &app,
        Method::POST,
        "/api/cards",
        Some(json!({
            "pack_id": pack["id"],
            "name": "Dark Dragonite",
            "image_url": "/images/cards/dark-dragonite.jpg"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(card["pack_id"], pack["id"]);
    assert_eq!(card["image_url"], "/images/cards/dark-dragonite.jpg");

    let pack_uri = format!("/api/packs/{}", pack["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::DELETE, &pack_uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let card_uri = format!("/api/cards/{}", card["id"].as_str().unwrap());
    let (status, card) = send(&app, Method::GET, &card_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(card["pack_id"].is_null());
}
