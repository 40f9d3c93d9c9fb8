//! End-to-end smoke tests for the full plantstored stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use plantstore_adapter_http_axum::router::{self, Options};
use plantstore_adapter_http_axum::state::AppState;
use plantstore_adapter_storage_sqlite_sqlx::{Config, SqlitePlantRepository};
use plantstore_app::services::plant_service::PlantService;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqlitePlantRepository::new(db.pool().clone());
    let state = AppState::new(PlantService::new(repo));

    router::build(state, &Options::default())
}

/// Send one request through the router and return status plus raw body.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, text) = send(app, method, uri, body).await;
    (status, serde_json::from_str(&text).unwrap())
}

fn aloe() -> Value {
    json!({"name": "Aloe", "image": "aloe.png", "price": 10, "is_in_stock": true})
}

// ---------------------------------------------------------------------------
// Health check and landing page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn should_render_greeting_at_root() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<h1>Plant Store API</h1>");
}

// ---------------------------------------------------------------------------
// Plant lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_run_create_list_delete_get_scenario() {
    let app = app().await;

    let (status, created) = send_json(&app, Method::POST, "/plants", Some(aloe())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Aloe");
    assert_eq!(created["image"], "aloe.png");
    assert_eq!(created["price"].as_f64(), Some(10.0));
    assert_eq!(created["is_in_stock"], true);

    let (status, list) = send_json(&app, Method::GET, "/plants", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([created]));

    let (status, body) = send(&app, Method::DELETE, "/plants/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = send(&app, Method::GET, "/plants/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_identical_plant_on_repeated_get() {
    let app = app().await;
    let (_, created) = send_json(&app, Method::POST, "/plants", Some(aloe())).await;
    let uri = format!("/plants/{}", created["id"]);

    let (status, first) = send_json(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send_json(&app, Method::GET, &uri, None).await;

    assert_eq!(first, created);
    assert_eq!(first, second);
}

#[tokio::test]
async fn should_default_to_in_stock_when_flag_omitted() {
    let app = app().await;
    let (status, created) =
        send_json(&app, Method::POST, "/plants", Some(json!({"name": "Fern"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["is_in_stock"], true);
    assert_eq!(created["image"], Value::Null);
    assert_eq!(created["price"], Value::Null);
}

#[tokio::test]
async fn should_default_to_in_stock_when_flag_is_null() {
    let app = app().await;
    let (status, created) = send_json(
        &app,
        Method::POST,
        "/plants",
        Some(json!({"name": "X", "is_in_stock": null})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["is_in_stock"], true);
}

#[tokio::test]
async fn should_store_plant_without_name() {
    let app = app().await;
    let (status, created) =
        send_json(&app, Method::POST, "/plants", Some(json!({"price": -2}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], Value::Null);
    assert_eq!(created["price"].as_f64(), Some(-2.0));
}

#[tokio::test]
async fn should_only_change_price_when_patching_price() {
    let app = app().await;
    let (_, created) = send_json(&app, Method::POST, "/plants", Some(aloe())).await;
    let uri = format!("/plants/{}", created["id"]);

    let (status, updated) =
        send_json(&app, Method::PATCH, &uri, Some(json!({"price": 12.5}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"].as_f64(), Some(12.5));
    assert_eq!(updated["name"], created["name"]);
    assert_eq!(updated["image"], created["image"]);
    assert_eq!(updated["is_in_stock"], created["is_in_stock"]);

    let (_, fetched) = send_json(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn should_clear_image_when_patching_with_null() {
    let app = app().await;
    let (_, created) = send_json(&app, Method::POST, "/plants", Some(aloe())).await;
    let uri = format!("/plants/{}", created["id"]);

    let (status, updated) =
        send_json(&app, Method::PATCH, &uri, Some(json!({"image": null, "is_in_stock": false})))
            .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["image"], Value::Null);
    assert_eq!(updated["is_in_stock"], false);
    assert_eq!(updated["name"], "Aloe");
}

#[tokio::test]
async fn should_keep_stock_flag_when_patching_it_with_null() {
    let app = app().await;
    let (_, created) = send_json(
        &app,
        Method::POST,
        "/plants",
        Some(json!({"name": "Aloe", "is_in_stock": false})),
    )
    .await;
    let uri = format!("/plants/{}", created["id"]);

    let (status, updated) =
        send_json(&app, Method::PATCH, &uri, Some(json!({"is_in_stock": null}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["is_in_stock"], false);

    let (_, fetched) = send_json(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched["is_in_stock"], false);
}

#[tokio::test]
async fn should_keep_both_fields_when_patches_run_concurrently() {
    let app = app().await;
    let (_, created) = send_json(&app, Method::POST, "/plants", Some(aloe())).await;
    let uri = format!("/plants/{}", created["id"]);

    let (rename, reprice) = tokio::join!(
        send(&app, Method::PATCH, &uri, Some(json!({"name": "Renamed"}))),
        send(&app, Method::PATCH, &uri, Some(json!({"price": 12.5}))),
    );
    assert_eq!(rename.0, StatusCode::OK);
    assert_eq!(reprice.0, StatusCode::OK);

    let (_, fetched) = send_json(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched["name"], "Renamed");
    assert_eq!(fetched["price"].as_f64(), Some(12.5));
    assert_eq!(fetched["image"], "aloe.png");
}

#[tokio::test]
async fn should_return_not_found_when_patching_missing_plant() {
    let app = app().await;
    let (status, body) =
        send_json(&app, Method::PATCH, "/plants/99", Some(json!({"price": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Plant 99 not found");
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_plant() {
    let app = app().await;
    let (status, _) = send(&app, Method::DELETE, "/plants/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_for_non_integer_id() {
    let app = app().await;
    let (status, _) = send(&app, Method::GET, "/plants/aloe", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_for_signed_id() {
    let app = app().await;
    let (status, created) = send_json(&app, Method::POST, "/plants", Some(aloe())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, _) = send(&app, Method::GET, "/plants/+1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::GET, "/plants/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn should_not_reuse_id_after_delete() {
    let app = app().await;
    let (_, first) = send_json(&app, Method::POST, "/plants", Some(aloe())).await;
    let uri = format!("/plants/{}", first["id"]);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, second) = send_json(&app, Method::POST, "/plants", Some(aloe())).await;
    assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());
}

#[tokio::test]
async fn should_list_plants_in_creation_order() {
    let app = app().await;
    for name in ["Aloe", "Fern", "Cactus"] {
        let (status, _) =
            send_json(&app, Method::POST, "/plants", Some(json!({"name": name}))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, list) = send_json(&app, Method::GET, "/plants", None).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Aloe", "Fern", "Cactus"]);
}

#[tokio::test]
async fn should_reject_body_that_is_not_json() {
    let app = app().await;
    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/plants")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}
