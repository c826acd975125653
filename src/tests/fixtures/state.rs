use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryEventStore::seeded()))
}

pub fn make_offline_event_store_state() -> AppState {
    let mut event_store = InMemoryEventStore::seeded();
    event_store.toggle_offline();
    AppState::new(Arc::new(event_store))
}
