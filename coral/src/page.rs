//! Paginated result pages decoded from raw response bodies.
//!
//! A page is decoded once, at construction, and is immutable afterwards.
//! An empty page is an explicit empty list in the body; a missing
//! `resources`/`events` field is a decode error, never an empty page.

use serde_json::Value;

use crate::event::Event;
use crate::{Error, Result};

/// One paginated batch of member refs for a set or expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPage {
    refs: Vec<String>,
}

impl SetPage {
    /// Decode a raw response body carrying a `resources` list.
    pub fn decode(body: &Value) -> Result<Self> {
        let raw = body
            .get("resources")
            .ok_or(Error::MissingField("resources"))?;
        let refs = serde_json::from_value(raw.clone())?;
        Ok(Self { refs })
    }

    /// Member refs in response order.
    pub fn refs(&self) -> &[String] {
        &self.refs
    }

    /// Number of refs in this page.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// True iff this page holds no refs.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Iterate over member refs in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.refs.iter()
    }
}

impl IntoIterator for SetPage {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.into_iter()
    }
}

impl<'a> IntoIterator for &'a SetPage {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.iter()
    }
}

/// One paginated batch of membership change events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsPage {
    events: Vec<Event>,
}

impl EventsPage {
    /// Decode a raw response body carrying an `events` list.
    pub fn decode(body: &Value) -> Result<Self> {
        let raw = body.get("events").ok_or(Error::MissingField("events"))?;
        let events = serde_json::from_value(raw.clone())?;
        Ok(Self { events })
    }

    /// Decoded events in response order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events in this page.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True iff this page holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over events in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

impl IntoIterator for EventsPage {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventsPage {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
