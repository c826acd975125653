use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::modules::events::core::ports::EventStoreError;

/// Everything an events endpoint can answer with besides success.
///
/// The display text is the plaintext response body.
#[derive(Debug, Error)]
pub enum EventApiError {
    #[error("Bad request")]
    BadRequest(String),

    #[error("Invalid JSON")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Event not found")]
    NotFound,

    #[error("Event already exists")]
    AlreadyExists(String),

    #[error("Internal server error")]
    Store(String),
}

impl EventApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            EventApiError::BadRequest(_) | EventApiError::InvalidJson(_) => {
                StatusCode::BAD_REQUEST
            }
            EventApiError::NotFound => StatusCode::NOT_FOUND,
            EventApiError::AlreadyExists(_) => StatusCode::CONFLICT,
            EventApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BytesRejection> for EventApiError {
    fn from(rejection: BytesRejection) -> Self {
        EventApiError::BadRequest(rejection.body_text())
    }
}

impl From<EventStoreError> for EventApiError {
    fn from(err: EventStoreError) -> Self {
        match err {
            EventStoreError::AlreadyExists(id) => EventApiError::AlreadyExists(id),
            EventStoreError::Backend(message) => EventApiError::Store(message),
        }
    }
}

impl IntoResponse for EventApiError {
    fn into_response(self) -> Response {
        match &self {
            EventApiError::BadRequest(reason) => tracing::warn!(%reason, "unreadable body"),
            EventApiError::InvalidJson(err) => tracing::warn!(error = %err, "invalid json"),
            EventApiError::NotFound => tracing::debug!("event not found"),
            EventApiError::AlreadyExists(id) => tracing::warn!(event_id = %id, "duplicate id"),
            EventApiError::Store(message) => tracing::error!(%message, "event store failed"),
        }
        (self.status(), self.to_string()).into_response()
    }
}
