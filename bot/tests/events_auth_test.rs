//! Event endpoint authentication tests: signature and timestamp gates.

mod helpers;

use axum::http::StatusCode;
use chrono::Utc;
use helpers::{body_to_json, envelope_body, TestRelay};
use warden_platform::signing;

#[tokio::test]
async fn valid_signature_on_unhandled_event_is_acknowledged() {
    let relay = TestRelay::start(|_| {}).await;

    let body = envelope_body("member.joined", serde_json::json!({}));
    let signature = signing::signature_header(&relay.config.event_signing_secret, &body);
    let response = relay
        .deliver_raw(body, &signature, Utc::now().timestamp(), "member.joined")
        .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn tampered_body_is_rejected() {
    let relay = TestRelay::start(|_| {}).await;

    let body = envelope_body("command.invoked", serde_json::json!({}));
    let signature = signing::signature_header(&relay.config.event_signing_secret, &body);

    let mut tampered = body.clone();
    tampered.extend_from_slice(b" ");
    let response = relay
        .deliver_raw(tampered, &signature, Utc::now().timestamp(), "command.invoked")
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_to_json(response).await["error"], "invalid_signature");
}

#[tokio::test]
async fn wrong_secret_is_rejected() {
    let relay = TestRelay::start(|_| {}).await;

    let body = envelope_body("command.invoked", serde_json::json!({}));
    let signature = signing::signature_header("not-the-configured-secret", &body);
    let response = relay
        .deliver_raw(body, &signature, Utc::now().timestamp(), "command.invoked")
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn stale_timestamp_is_rejected() {
    let relay = TestRelay::start(|_| {}).await;

    let body = envelope_body("command.invoked", serde_json::json!({}));
    let signature = signing::signature_header(&relay.config.event_signing_secret, &body);
    let response = relay
        .deliver_raw(
            body,
            &signature,
            Utc::now().timestamp() - 3600,
            "command.invoked",
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_to_json(response).await["error"], "stale_timestamp");
}

#[tokio::test]
async fn malformed_envelope_is_a_bad_request() {
    let relay = TestRelay::start(|_| {}).await;

    let body = b"not json at all".to_vec();
    let signature = signing::signature_header(&relay.config.event_signing_secret, &body);
    let response = relay
        .deliver_raw(body, &signature, Utc::now().timestamp(), "command.invoked")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_to_json(response).await["error"], "malformed_event");
}
