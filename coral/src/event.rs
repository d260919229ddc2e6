//! Membership change events and timestamp decoding.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Decode a raw microsecond count into a calendar timestamp.
///
/// Counts outside chrono's representable range clamp to the epoch.
pub fn time_from_usecs(usecs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(usecs).unwrap_or(DateTime::UNIX_EPOCH)
}

/// A single recorded change to a set's membership.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    /// Ref of the resource the event concerns.
    pub resource: String,

    /// Name of the set the event belongs to, when the remote reports one.
    #[serde(default)]
    pub set: Option<String>,

    /// Change kind as reported by the remote (e.g. "create", "delete").
    /// Left untyped: the vocabulary is owned by the remote service.
    pub action: String,

    /// Raw event timestamp in microseconds.
    #[serde(rename = "ts")]
    pub ts_usecs: i64,
}

impl Event {
    /// Create an event.
    pub fn new(resource: impl Into<String>, action: impl Into<String>, ts_usecs: i64) -> Self {
        Self {
            resource: resource.into(),
            set: None,
            action: action.into(),
            ts_usecs,
        }
    }

    /// Set the owning set name.
    pub fn with_set(mut self, set: impl Into<String>) -> Self {
        self.set = Some(set.into());
        self
    }

    /// Decoded event timestamp.
    pub fn ts(&self) -> DateTime<Utc> {
        time_from_usecs(self.ts_usecs)
    }

    /// The event's own ref: `<resource>/events/<raw-ts>/<action>`.
    pub fn ref_str(&self) -> String {
        format!("{}/events/{}/{}", self.resource, self.ts_usecs, self.action)
    }
}
