use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::events::adapters::inbound::errors::EventApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, EventApiError> {
    tracing::debug!(event_id = %id, "fetching event");
    state
        .event_store
        .get(&id)
        .await?
        .map(Json)
        .ok_or(EventApiError::NotFound)
}
