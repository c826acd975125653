// Composition root for the events service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the event store and hand it to the handlers through AppState.
// - Expose the HTTP router and the shutdown signal to the binary.

pub mod config;
pub mod http;
pub mod shutdown;
pub mod state;
