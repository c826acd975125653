use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use serde::de::DeserializeOwned;

use crate::modules::events::adapters::inbound::errors::EventApiError;

/// Decodes a buffered request body as JSON regardless of its content type.
///
/// A body that could not be read is `BadRequest`; one that does not decode is
/// `InvalidJson`.
pub fn decode<T: DeserializeOwned>(
    body: Result<Bytes, BytesRejection>,
) -> Result<T, EventApiError> {
    let bytes = body?;
    Ok(serde_json::from_slice(&bytes)?)
}
