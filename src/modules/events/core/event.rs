use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// An event record. `id` is caller-supplied and is the only lookup key.
///
/// Decoding is lenient: keys match case-insensitively, absent or `null` fields
/// are empty strings, a repeated key keeps its last value and unknown keys are
/// skipped. Only a malformed document or a field of the wrong JSON type fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", from = "EventFields")]
pub struct Event {
    #[serde(rename = "ID")]
    pub id: String,
    pub title: String,
    pub description: String,
}

/// The mutable part of an event. An `ID` in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "EventFields")]
pub struct EventChanges {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default)]
struct EventFields {
    id: String,
    title: String,
    description: String,
}

impl From<EventFields> for Event {
    fn from(fields: EventFields) -> Self {
        Event::new(fields.id, fields.title, fields.description)
    }
}

impl From<EventFields> for EventChanges {
    fn from(fields: EventFields) -> Self {
        EventChanges {
            title: fields.title,
            description: fields.description,
        }
    }
}

impl<'de> Deserialize<'de> for EventFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EventFieldsVisitor)
    }
}

struct EventFieldsVisitor;

impl<'de> Visitor<'de> for EventFieldsVisitor {
    type Value = EventFields;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an event object")
    }

    // A bare `null` document decodes to an empty event.
    fn visit_unit<E: de::Error>(self) -> Result<EventFields, E> {
        Ok(EventFields::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<EventFields, A::Error> {
        let mut fields = EventFields::default();
        while let Some(key) = map.next_key::<String>()? {
            let slot = if key.eq_ignore_ascii_case("id") {
                &mut fields.id
            } else if key.eq_ignore_ascii_case("title") {
                &mut fields.title
            } else if key.eq_ignore_ascii_case("description") {
                &mut fields.description
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if let Some(value) = map.next_value::<Option<String>>()? {
                *slot = value;
            }
        }
        Ok(fields)
    }
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn apply(&mut self, changes: EventChanges) {
        self.title = changes.title;
        self.description = changes.description;
    }
}

/// The collection every process starts from.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event::new("1", "Intro to Golang", "very difficult to understand"),
        Event::new("2", "Advance Golang", "Yes, I agree, hahaha"),
    ]
}
