//! Reusable test helpers for relay integration tests.
//!
//! Provides [`TestRelay`]: the full axum router wired against a wiremock
//! platform server, plus builders for signed event deliveries.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::MockServer;

use warden_bot::api::{create_router, AppState};
use warden_bot::config::Config;
use warden_bot::platform::PlatformClient;
use warden_platform::signing;
use warden_platform::{
    BotEventType, CommandInvoked, ComponentInteraction, EVENT_ID_HEADER, EVENT_TYPE_HEADER,
    SIGNATURE_HEADER, TIMESTAMP_HEADER,
};

/// A relay instance backed by a mock platform server.
pub struct TestRelay {
    pub router: Router,
    pub platform: MockServer,
    pub config: Config,
}

impl TestRelay {
    /// Start a mock platform and build the router against it.
    ///
    /// The base config has one staff role and a control guild; `customize`
    /// adjusts targets, flags, and the rest.
    pub async fn start(customize: impl FnOnce(&mut Config)) -> Self {
        let platform = MockServer::start().await;

        let mut config = Config::default_for_test();
        config.platform_base_url = platform.uri();
        config.control_guild_id = Uuid::new_v4();
        config.log_channel_id = Uuid::new_v4();
        config.staff_role_ids = vec![Uuid::new_v4()];
        customize(&mut config);

        let client = PlatformClient::new(
            &config.platform_base_url,
            &config.bot_token,
            std::time::Duration::from_secs(5),
        )
        .expect("Failed to build platform client");

        let router = create_router(AppState::new(config.clone(), client));

        Self {
            router,
            platform,
            config,
        }
    }

    /// The configured staff role id (tests add it to member roles).
    pub fn staff_role(&self) -> Uuid {
        self.config.staff_role_ids[0]
    }

    /// Deliver a correctly signed event and return the response.
    pub async fn deliver(
        &self,
        event_type: BotEventType,
        data: serde_json::Value,
    ) -> Response<Body> {
        let body = envelope_body(event_type.as_str(), data);
        let signature = signing::signature_header(&self.config.event_signing_secret, &body);
        self.deliver_raw(body, &signature, Utc::now().timestamp(), event_type.as_str())
            .await
    }

    /// Deliver an arbitrary body with explicit signature and timestamp.
    pub async fn deliver_raw(
        &self,
        body: Vec<u8>,
        signature: &str,
        timestamp: i64,
        event_type: &str,
    ) -> Response<Body> {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/events")
            .header("content-type", "application/json")
            .header(SIGNATURE_HEADER, signature)
            .header(TIMESTAMP_HEADER, timestamp.to_string())
            .header(EVENT_TYPE_HEADER, event_type)
            .header(EVENT_ID_HEADER, Uuid::new_v4().to_string())
            .body(Body::from(body))
            .expect("Failed to build event request");

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }
}

/// Serialize a CloudEvents envelope around an event payload.
pub fn envelope_body(event_type: &str, data: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({
        "specversion": "1.0",
        "type": event_type,
        "source": "platform-test",
        "id": Uuid::new_v4(),
        "time": Utc::now(),
        "data": data,
    }))
    .expect("Failed to serialize envelope")
}

/// A `command.invoked` payload from inside the control guild.
pub fn command_invocation(
    relay: &TestRelay,
    command: &str,
    roles: Vec<Uuid>,
    options: &[(&str, &str)],
) -> CommandInvoked {
    CommandInvoked {
        interaction_id: Uuid::new_v4(),
        command_name: command.to_string(),
        guild_id: Some(relay.config.control_guild_id),
        channel_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        member_roles: roles,
        options: options
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
    }
}

/// An `interaction.component` payload for a card button press.
pub fn button_press(
    relay: &TestRelay,
    custom_id: &str,
    roles: Vec<Uuid>,
    message_id: Uuid,
) -> ComponentInteraction {
    ComponentInteraction {
        interaction_id: Uuid::new_v4(),
        custom_id: custom_id.to_string(),
        message_id,
        channel_id: Uuid::new_v4(),
        guild_id: Some(relay.config.control_guild_id),
        user_id: Uuid::new_v4(),
        member_roles: roles,
    }
}

/// Collect a response body and parse it as JSON.
pub async fn body_to_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect response body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        let preview = String::from_utf8_lossy(&bytes);
        panic!("Failed to parse response as JSON: {e}\nBody: {preview}")
    })
}
