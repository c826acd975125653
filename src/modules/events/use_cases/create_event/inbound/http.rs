use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::events::adapters::inbound::errors::EventApiError;
use crate::modules::events::adapters::inbound::json_body;
use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, EventApiError> {
    let event: Event = json_body::decode(body)?;
    let created = state.event_store.insert(event).await?;
    tracing::info!(event_id = %created.id, "event created");
    Ok((StatusCode::CREATED, Json(created)))
}
