// Ports describe what the events module needs from storage, without implementing it.
//
// Adapters implement these traits in adapters::outbound. Handlers only see the trait
// object held by the shell state.

use crate::modules::events::core::event::{Event, EventChanges};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("event {0} already exists")]
    AlreadyExists(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Ordered storage for events. Lookups match the first event with the given ID;
/// a missing event is `Ok(None)`, not an error.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, EventStoreError>;

    async fn get(&self, id: &str) -> Result<Option<Event>, EventStoreError>;

    /// Appends `event`. Fails with `AlreadyExists` if its ID is taken.
    async fn insert(&self, event: Event) -> Result<Event, EventStoreError>;

    async fn update(
        &self,
        id: &str,
        changes: EventChanges,
    ) -> Result<Option<Event>, EventStoreError>;

    async fn delete(&self, id: &str) -> Result<Option<Event>, EventStoreError>;
}
