// Shared test fixture for Event payloads.

use crate::modules::events::core::event::Event;

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: Event::new("3", "Test Event", "Testing createEvent"),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.inner).unwrap()
    }
}

#[cfg(test)]
mod event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = EventBuilder::new()
            .id("e-1")
            .title("title")
            .description("desc")
            .build();

        assert_eq!(custom, Event::new("e-1", "title", "desc"));
    }

    #[rstest]
    fn to_json_uses_the_wire_field_names() {
        let json = EventBuilder::default().to_json();
        assert_eq!(
            json,
            r#"{"ID":"3","Title":"Test Event","Description":"Testing createEvent"}"#
        );
    }
}
