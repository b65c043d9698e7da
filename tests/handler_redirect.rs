mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use shortly::api::handlers::{redirect_handler, shorten_handler};
use shortly::domain::store::KeyValueStore;

fn test_server() -> (TestServer, std::sync::Arc<shortly::infrastructure::store::MemoryStore>) {
    let (state, store) = common::create_test_state();
    let app = Router::new()
        .route("/api", get(shorten_handler))
        .route("/{id}", get(redirect_handler))
        .with_state(state);
    (TestServer::new(app).unwrap(), store)
}

#[tokio::test]
async fn test_shorten_then_redirect_round_trip() {
    let (server, _store) = test_server();

    let shorten = server
        .get("/api")
        .add_query_param("url", "https://example.com/landing?utm=1")
        .add_query_param("dur", "60")
        .await;
    shorten.assert_status_ok();

    let json = shorten.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    let code = short_url.rsplit('/').next().unwrap();

    let redirect = server.get(&format!("/{code}")).await;
    redirect.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        redirect.header("location"),
        "https://example.com/landing?utm=1"
    );
}

#[tokio::test]
async fn test_redirect_identifier_too_short() {
    let (server, _store) = test_server();

    let response = server.get("/abc").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "id format not supported");
}

#[tokio::test]
async fn test_redirect_identifier_with_symbols() {
    let (server, _store) = test_server();

    let response = server.get("/abc-123").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_redirect_unknown_identifier() {
    let (server, _store) = test_server();

    let response = server.get("/zzzzzzz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "key not found");
}

#[tokio::test]
async fn test_redirect_corrupt_stored_value() {
    let (server, store) = test_server();

    store
        .set_if_absent("badbad1", "%%%not-base64%%%", 60)
        .await
        .unwrap();

    let response = server.get("/badbad1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "error while decoding stored url");
}

#[tokio::test]
async fn test_redirect_non_utf8_stored_value() {
    let (server, store) = test_server();

    // base64 of the single byte 0xFF
    store.set_if_absent("badbad2", "/w==", 60).await.unwrap();

    let response = server.get("/badbad2").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_redirect_expired_mapping_is_gone() {
    let (server, _store) = test_server();

    let shorten = server
        .get("/api")
        .add_query_param("url", "https://example.com/ephemeral")
        .add_query_param("dur", "1")
        .await;
    let json = shorten.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    let code = short_url.rsplit('/').next().unwrap().to_string();

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let response = server.get(&format!("/{code}")).await;
    response.assert_status_not_found();
}
