use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use barber_backend::build_app;
use barber_config::{AppConfig, ClientConfig};
use serde_json::Value;
use std::fs;
use std::sync::Arc;
use tower::ServiceExt;

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_api_is_nested_under_prefix() {
    let app = build_app(Arc::new(AppConfig::default())).unwrap();

    let (status, body) = get(app.clone(), "/api").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Welcome to the ToTa Booking API!");

    let (status, body) = get(app.clone(), "/api/booking/routes").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["name"], "Your Barber's truly");
    assert_eq!(body["time_zone"], "Europe/London");

    let (status, _) = get(app, "/booking/routes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_api_path_is_not_found() {
    let app = build_app(Arc::new(AppConfig::default())).unwrap();
    let (status, _) = get(app, "/api/booking/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_page_routes_serve_client_index() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<html>ToTa</html>").unwrap();
    fs::write(dir.path().join("app.js"), "console.log('ToTa');").unwrap();

    let config = AppConfig {
        client: ClientConfig {
            dir: Some(dir.path().to_string_lossy().into_owned()),
        },
        ..Default::default()
    };
    let app = build_app(Arc::new(config)).unwrap();

    for path in ["/", "/guest-booking", "/login-user-booking", "/booking-confirmation"] {
        let (status, body) = get(app.clone(), path).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert_eq!(body, b"<html>ToTa</html>", "{}", path);
    }

    let (status, body) = get(app.clone(), "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"console.log('ToTa');");

    let (status, _) = get(app.clone(), "/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The API still wins over the client bundle.
    let (status, _) = get(app, "/api/booking/slots?date=2025-04-27").await;
    assert_eq!(status, StatusCode::OK);
}

#[test]
fn test_unknown_time_zone_is_rejected() {
    let mut config = AppConfig::default();
    config.shop.time_zone = "Mars/Olympus_Mons".to_string();
    assert!(build_app(Arc::new(config)).is_err());
}
