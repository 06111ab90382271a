use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::{Value, json};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{debug, info};

use super::config::RelayConfig;
use super::error::RelayError;
use super::mailer::Mailer;
use super::payload::ContactSubmission;

pub const CONTACT_PATH: &str = "/contact";

/// Shared, read-only relay state.
#[derive(Clone)]
pub struct RelayState {
    pub config: Arc<RelayConfig>,
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl RelayState {
    #[must_use]
    pub fn new(config: RelayConfig, mailer: Option<Arc<dyn Mailer>>) -> Self {
        Self {
            config: Arc::new(config),
            mailer,
        }
    }
}

impl std::fmt::Debug for RelayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayState")
            .field("config", &self.config)
            .field("has_mailer", &self.mailer.is_some())
            .finish()
    }
}

/// Successful submission outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent,
    Mocked,
}

impl IntoResponse for ContactOutcome {
    fn into_response(self) -> Response {
        let body = match self {
            Self::Sent => json!({ "ok": true }),
            Self::Mocked => json!({ "ok": true, "mocked": true }),
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}

/// Processes one raw request body. An empty body is treated as `{}`.
pub async fn handle_contact(state: &RelayState, body: &[u8]) -> Result<ContactOutcome, RelayError> {
    let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_slice(body).map_err(RelayError::InvalidJson)?
    };

    let submission = ContactSubmission::from_json_value(&value)?;
    submission.validate()?;

    if state.config.should_mock() {
        info!(reason = submission.get("reason"), "contact submission accepted in mock mode");
        return Ok(ContactOutcome::Mocked);
    }

    let (_, from, recipients) = state
        .config
        .provider_settings()
        .ok_or(RelayError::ProviderNotConfigured)?;
    let mailer = state
        .mailer
        .as_ref()
        .ok_or(RelayError::ProviderNotConfigured)?;

    let email = submission.to_email(from, recipients);
    mailer.send(&email).await.map_err(RelayError::Upstream)?;

    info!(recipients = recipients.len(), "contact submission forwarded");
    Ok(ContactOutcome::Sent)
}

async fn submit(State(state): State<RelayState>, body: Bytes) -> Result<ContactOutcome, RelayError> {
    debug!(bytes = body.len(), "contact submission received");
    handle_contact(&state, &body).await
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

/// Router serving [`CONTACT_PATH`] with permissive CORS on every response.
pub fn contact_router(state: RelayState) -> Router {
    Router::new()
        .route(
            CONTACT_PATH,
            post(submit).options(preflight).fallback(method_not_allowed),
        )
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
}
