// In memory implementation of the EventStore port.
//
// Every operation takes the single collection lock for its whole duration, so
// concurrent requests observe the same behavior as sequential ones.

use crate::modules::events::core::event::{Event, EventChanges, seed_events};
use crate::modules::events::core::ports::{EventStore, EventStoreError};
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryEventStore {
    events: Mutex<Vec<Event>>,
    offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            offline: false,
        }
    }

    pub fn seeded() -> Self {
        Self::with_events(seed_events())
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn list(&self) -> Result<Vec<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.events.lock().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        let events = self.events.lock().await;
        Ok(events.iter().find(|event| event.id == id).cloned())
    }

    async fn insert(&self, event: Event) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        let mut events = self.events.lock().await;
        if events.iter().any(|existing| existing.id == event.id) {
            return Err(EventStoreError::AlreadyExists(event.id));
        }
        events.push(event.clone());
        Ok(event)
    }

    async fn update(
        &self,
        id: &str,
        changes: EventChanges,
    ) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        let mut events = self.events.lock().await;
        Ok(events.iter_mut().find(|event| event.id == id).map(|event| {
            event.apply(changes);
            event.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        let mut events = self.events.lock().await;
        let position = events.iter().position(|event| event.id == id);
        Ok(position.map(|index| events.remove(index)))
    }
}
