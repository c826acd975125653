use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::events::adapters::inbound::errors::EventApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, EventApiError> {
    state
        .event_store
        .delete(&id)
        .await?
        .ok_or(EventApiError::NotFound)?;
    tracing::info!(event_id = %id, "event deleted");
    Ok(format!("The event ID {id} has been deleted successfully"))
}
