use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use campus_api::build_app;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn health_is_public() {
    let app = build_app().await.expect("app should build");

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn chat_requires_api_key() {
    let app = build_app().await.expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/chat")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "text": "where is the library"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn chat_returns_reply_bundle() {
    let app = build_app().await.expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/chat")
        .header("content-type", "application/json")
        .header("x-api-key", "dev-campus-key")
        .body(Body::from(
            json!({
                "text": "Where is the library?",
                "language": "en"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(parsed["intent"], "find_building");
    assert!(parsed["response"]
        .as_str()
        .unwrap()
        .starts_with("The Central Library"));
    assert_eq!(parsed["quick_actions"][0]["building_id"], "library");
    assert!(parsed["session_id"].as_str().is_some());
}

#[tokio::test]
async fn chat_answers_in_german() {
    let app = build_app().await.expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/v1/chat")
        .header("content-type", "application/json")
        .header("x-api-key", "dev-campus-key")
        .body(Body::from(
            json!({
                "text": "Wann hat die Mensa geöffnet?",
                "language": "de"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(parsed["intent"], "get_hours");
    assert!(parsed["response"]
        .as_str()
        .unwrap()
        .starts_with("Cafeteria-Zeiten:"));
}

#[tokio::test]
async fn welcome_and_buildings_are_language_aware() {
    let app = build_app().await.expect("app should build");

    let welcome_request = Request::builder()
        .uri("/v1/welcome?language=de&user_name=Kim")
        .header("x-api-key", "dev-campus-key")
        .body(Body::empty())
        .unwrap();

    let welcome_response = app.clone().oneshot(welcome_request).await.unwrap();
    assert_eq!(welcome_response.status(), StatusCode::OK);

    let body = to_bytes(welcome_response.into_body(), usize::MAX)
        .await
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(parsed["response"].as_str().unwrap().starts_with("Hallo Kim!"));
    assert_eq!(parsed["quick_actions"].as_array().unwrap().len(), 3);

    let buildings_request = Request::builder()
        .uri("/v1/buildings?language=de")
        .header("x-api-key", "dev-campus-key")
        .body(Body::empty())
        .unwrap();

    let buildings_response = app.oneshot(buildings_request).await.unwrap();
    assert_eq!(buildings_response.status(), StatusCode::OK);

    let body = to_bytes(buildings_response.into_body(), usize::MAX)
        .await
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 6);
    assert!(entries
        .iter()
        .any(|entry| entry["id"] == "library" && entry["name"] == "Bibliothek"));
}
