use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
    response::IntoResponse,
};

use crate::modules::events::adapters::inbound::errors::EventApiError;
use crate::modules::events::adapters::inbound::json_body;
use crate::modules::events::core::event::EventChanges;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, EventApiError> {
    let changes: EventChanges = json_body::decode(body)?;
    let updated = state
        .event_store
        .update(&id, changes)
        .await?
        .ok_or(EventApiError::NotFound)?;
    tracing::info!(event_id = %updated.id, "event updated");
    Ok(Json(updated))
}
