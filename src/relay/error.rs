use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

/// Failure reported by the email provider.
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("email provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("email provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Client-visible relay failures. Display strings are the stable wire messages.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid JSON body.")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid request body.")]
    InvalidBody,

    #[error("Missing required fields.")]
    MissingFields { field: &'static str },

    #[error("Method not allowed.")]
    MethodNotAllowed,

    #[error("Email provider is not configured correctly.")]
    ProviderNotConfigured,

    #[error("Unable to send email. Please try again later.")]
    Upstream(#[source] MailerError),
}

impl RelayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidJson(_) | Self::InvalidBody | Self::MissingFields { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::ProviderNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::InvalidJson(source) => debug!(error = %source, "rejecting contact request with invalid json"),
            Self::MissingFields { field } => debug!(field, "rejecting contact request with missing field"),
            Self::Upstream(source) => error!(error = %source, "failed to send contact email"),
            Self::ProviderNotConfigured => error!("contact relay provider configuration is incomplete"),
            Self::InvalidBody | Self::MethodNotAllowed => debug!(status = status.as_u16(), "rejecting contact request"),
        }

        let mut response = (status, Json(json!({ "error": self.to_string() }))).into_response();
        if matches!(self, Self::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}
