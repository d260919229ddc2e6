//! The resource-access seam between the query algebra and the remote store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// Access to the remote resource store.
///
/// Implementations own the transport: connection handling, authentication,
/// timeouts, and retries all live behind this trait. Failures cross the
/// boundary wrapped by [`Error::transport`](crate::Error::transport) and are
/// propagated to callers unchanged; this layer adds no retry logic.
pub trait ResourceService {
    /// Issue a GET against `path` and return the decoded response body.
    fn get(&self, path: &str, params: &[(String, String)], page: &PageOptions) -> Result<Value>;

    /// Issue a PUT against `path`. The response body is ignored.
    fn put(&self, path: &str) -> Result<()>;

    /// Issue a DELETE against `path`. The response body is ignored.
    fn delete(&self, path: &str) -> Result<()>;
}

/// Pagination controls, forwarded verbatim to the transport.
///
/// Cursor tokens are opaque to this layer: the remote hands them out and the
/// remote interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    /// Maximum number of items in the returned page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Opaque cursor: return items before this position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,

    /// Opaque cursor: return items after this position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl PageOptions {
    /// Options with nothing set; the remote applies its own defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the `before` cursor.
    pub fn with_before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Set the `after` cursor.
    pub fn with_after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }
}
