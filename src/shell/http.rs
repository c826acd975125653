use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_http;
use crate::modules::events::use_cases::welcome::inbound::http as welcome_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome_http::handle))
        .route("/event", post(create_http::handle))
        .route("/events", get(list_http::handle))
        .route(
            "/event/{id}",
            get(get_http::handle)
                .patch(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
