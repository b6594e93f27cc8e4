//! HTTP tests driving the full router over a seeded in-memory database.

mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::ConnectionTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use order_api::api::{create_router, AppState};

use common::{seeded_app, seeded_database};

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(app, Method::GET, uri, None).await;
    (status, body)
}

fn assert_envelope(body: &Value, status: u16, error: &str, path: &str) {
    assert_eq!(body["status"], status);
    assert_eq!(body["error"], error);
    assert_eq!(body["path"], path);
    assert!(body["message"].is_string());
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_root_returns_welcome_text() {
    let app = seeded_app().await;
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to Order API");
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_list_users_hides_passwords() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "Maria Brown");
    assert_eq!(users[1]["phone"], "977777777");
    for user in users {
        assert!(user.get("password").is_none());
        assert!(user.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn test_get_missing_user_returns_envelope() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/users/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "Resource not found", "/users/99");
    assert_eq!(body["message"], "Resource not found. Id 99");
}

#[tokio::test]
async fn test_create_user_returns_location() {
    let app = seeded_app().await;
    let (status, headers, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({
            "name": "Bob Grey",
            "email": "bob@gmail.com",
            "phone": "955555555",
            "password": "123456"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[header::LOCATION], "/users/3");
    assert_eq!(body["id"], 3);
    assert_eq!(body["email"], "bob@gmail.com");
    assert!(body.get("password").is_none());

    let (status, body) = get(&app, "/users/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bob Grey");
}

#[tokio::test]
async fn test_create_user_rejects_invalid_payload() {
    let app = seeded_app().await;
    let (status, _, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Bob Grey", "email": "bob@gmail.com", "password": "123" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "Validation error", "/users");

    let (status, _, body) = send(&app, Method::POST, "/users", Some(json!({ "name": 5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "Validation error", "/users");
}

#[tokio::test]
async fn test_update_user_keeps_unset_fields() {
    let app = seeded_app().await;
    let (status, _, body) = send(
        &app,
        Method::PUT,
        "/users/2",
        Some(json!({ "email": "alex.green@gmail.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alex Green");
    assert_eq!(body["email"], "alex.green@gmail.com");
    assert_eq!(body["phone"], "977777777");

    let (_, _, body) = send(&app, Method::PUT, "/users/2", Some(json!({ "phone": null }))).await;
    assert_eq!(body["phone"], Value::Null);
    assert_eq!(body["email"], "alex.green@gmail.com");
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let app = seeded_app().await;
    let (status, _, body) = send(&app, Method::PUT, "/users/42", Some(json!({ "name": "Nobody" }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "Resource not found", "/users/42");
}

#[tokio::test]
async fn test_delete_user_with_orders_is_rejected() {
    let app = seeded_app().await;
    let (status, _, body) = send(&app, Method::DELETE, "/users/1", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400, "Database error", "/users/1");

    let (status, _) = get(&app, "/users/1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_user_without_orders() {
    let app = seeded_app().await;
    send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "Bob Grey", "email": "bob@gmail.com", "password": "123456" })),
    )
    .await;

    let (status, _, body) = send(&app, Method::DELETE, "/users/3", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = get(&app, "/users/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(&app, Method::DELETE, "/users/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalog_endpoints() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
    assert_eq!(body[0]["name"], "The Lord of the Rings");
    assert_eq!(body[0]["price"], 90.5);
    assert_eq!(body[0]["imgUrl"], "");
    assert_eq!(body[0]["categories"][0]["name"], "Books");

    let (status, body) = get(&app, "/categories/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Computers");

    let (status, body) = get(&app, "/products/9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "Resource not found", "/products/9");
}

#[tokio::test]
async fn test_order_representation() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/orders/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["moment"], "2019-06-20T19:53:07Z");
    assert_eq!(body["orderStatus"], "PAID");
    assert_eq!(body["client"]["name"], "Maria Brown");
    assert!(body["client"].get("password").is_none());
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["quantity"], 2);
    assert_eq!(body["items"][0]["subTotal"], 181.0);
    assert_eq!(body["items"][0]["product"]["name"], "The Lord of the Rings");
    assert_eq!(body["payment"]["id"], 1);
    assert_eq!(body["payment"]["moment"], "2019-06-20T21:53:07Z");
    assert_eq!(body["total"], 1431.0);

    let (_, body) = get(&app, "/orders/2").await;
    assert_eq!(body["orderStatus"], "WAITING_PAYMENT");
    assert_eq!(body["payment"], Value::Null);
    assert_eq!(body["total"], 2500.0);

    let (status, body) = get(&app, "/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_unknown_route_returns_envelope() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/invoices/1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404, "Resource not found", "/invoices/1");
}

#[tokio::test]
async fn test_corrupt_order_status_is_server_error() {
    let db = seeded_database().await;
    db.connection()
        .execute_unprepared("UPDATE orders SET status = 0 WHERE id = 3")
        .await
        .unwrap();
    let app = create_router(AppState::from_database(Arc::new(db)));

    let (status, body) = get(&app, "/orders/3").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_envelope(&body, 500, "Internal server error", "/orders/3");

    let (status, _) = get(&app, "/orders/1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cross_origin_requests_are_allowed() {
    let app = seeded_app().await;
    let request = Request::builder()
        .uri("/products")
        .header(header::ORIGIN, "http://localhost:8080")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
