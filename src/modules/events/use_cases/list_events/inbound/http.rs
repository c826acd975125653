use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::events::adapters::inbound::errors::EventApiError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<impl IntoResponse, EventApiError> {
    let events = state.event_store.list().await?;
    tracing::debug!(count = events.len(), "listing events");
    Ok(Json(events))
}
