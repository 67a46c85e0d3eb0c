//! Integration tests for session creation.
//!
//! Tests the full flow against a wiremock server:
//! - Request shape (auth header, user agent, form body)
//! - Media mode / location / archive mode serialization
//! - Local validation short-circuits (no request on bad input)
//! - Error mapping (403, 5xx, timeout)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Duration;
use vantage::{ArchiveMode, Client, ClientConfig, MediaMode, SessionOptions, VantageError};
use vantage_test_utils::{fake_session_id, verify_token_signature};
use wiremock::matchers::{body_string, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "123456";
const API_SECRET: &str = "1234567890abcdef1234567890abcdef1234567890";

const SESSION_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>",
    "<sessions><Session><session_id>SESSIONID</session_id>",
    "<partner_id>123456</partner_id>",
    "<create_dt>Wed Mar 19 23:35:24 PDT 2014</create_dt>",
    "</Session></sessions>"
);

const ERROR_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>",
    "<errorPayload><code>-1</code>",
    "<message>Invalid partner credentials</message></errorPayload>"
);

fn mock_client(server: &MockServer) -> Client {
    Client::with_config(API_KEY, API_SECRET, server.uri()).unwrap()
}

fn expected_user_agent() -> String {
    format!("Vantage-Rust-SDK/{}", env!("CARGO_PKG_VERSION"))
}

#[tokio::test]
async fn test_creates_a_new_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session/create"))
        .and(header("x-vg-partner-auth", format!("{API_KEY}:{API_SECRET}")))
        .and(header("user-agent", expected_user_agent()))
        .and(body_string("p2p.preference=enabled"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SESSION_XML))
        .expect(1)
        .mount(&server)
        .await;

    let session = mock_client(&server)
        .create_session(SessionOptions::default())
        .await
        .unwrap();

    assert_eq!(session.id(), "SESSIONID");
    assert_eq!(session.media_mode(), MediaMode::Relayed);
    assert!(session.location().is_none());
}

#[tokio::test]
async fn test_creates_a_media_routed_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session/create"))
        .and(body_string("p2p.preference=disabled"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SESSION_XML))
        .expect(1)
        .mount(&server)
        .await;

    let options = SessionOptions::new().with_media_mode(MediaMode::Routed);
    let session = mock_client(&server).create_session(options).await.unwrap();

    assert_eq!(session.media_mode(), MediaMode::Routed);
}

#[tokio::test]
async fn test_adds_a_location_hint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session/create"))
        .and(body_string("location=12.34.56.78&p2p.preference=enabled"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SESSION_XML))
        .expect(1)
        .mount(&server)
        .await;

    let options = SessionOptions::new().with_location("12.34.56.78");
    let session = mock_client(&server).create_session(options).await.unwrap();

    assert_eq!(session.location(), Some("12.34.56.78"));
    assert_eq!(session.media_mode(), MediaMode::Relayed);
}

#[tokio::test]
async fn test_requests_archiving() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session/create"))
        .and(body_string_contains("archive.mode=always"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SESSION_XML))
        .expect(1)
        .mount(&server)
        .await;

    let options = SessionOptions::new().with_archive_mode(ArchiveMode::Always);
    mock_client(&server).create_session(options).await.unwrap();
}

#[tokio::test]
async fn test_invalid_location_fails_without_a_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SESSION_XML))
        .expect(0)
        .mount(&server)
        .await;

    let options = SessionOptions::new().with_location("not an ip address");
    let result = mock_client(&server).create_session(options).await;

    assert!(matches!(result, Err(VantageError::Validation(_))));
}

#[tokio::test]
async fn test_rejected_credentials_surface_as_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session/create"))
        .respond_with(ResponseTemplate::new(403).set_body_string(ERROR_XML))
        .expect(1)
        .mount(&server)
        .await;

    let result = mock_client(&server)
        .create_session(SessionOptions::default())
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, VantageError::Authentication(_)));
    assert!(err.to_string().contains("Invalid partner credentials"));
}

#[tokio::test]
async fn test_server_failure_surfaces_as_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session/create"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = mock_client(&server)
        .create_session(SessionOptions::default())
        .await;

    assert!(matches!(result, Err(VantageError::Service(_))));
}

#[tokio::test]
async fn test_slow_response_surfaces_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session/create"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(SESSION_XML)
                .set_delay(Duration::from_secs(1)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new()
        .with_api_url(server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = Client::with_config(API_KEY, API_SECRET, config).unwrap();

    let result = client.create_session(SessionOptions::default()).await;

    assert!(matches!(result, Err(VantageError::Transport(_))));
}

#[tokio::test]
async fn test_session_mints_its_own_tokens() {
    let server = MockServer::start().await;

    // Issue an id that decodes back to the test account
    let session_id = fake_session_id(API_KEY);
    let body = format!(
        "<sessions><Session><session_id>{session_id}</session_id>\
         <partner_id>{API_KEY}</partner_id></Session></sessions>"
    );

    Mock::given(method("POST"))
        .and(path("/session/create"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let session = mock_client(&server)
        .create_session(SessionOptions::default())
        .await
        .unwrap();

    let token = session.generate_token(vantage::TokenOptions::default()).unwrap();
    assert!(verify_token_signature(&token, API_SECRET));
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session/create"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SESSION_XML))
        .expect(2)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let (a, b) = tokio::join!(
        client.create_session(SessionOptions::default()),
        client.create_session(SessionOptions::default()),
    );

    assert_eq!(a.unwrap().id(), "SESSIONID");
    assert_eq!(b.unwrap().id(), "SESSIONID");
}
