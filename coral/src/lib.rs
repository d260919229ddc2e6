//! Coral: client-side query algebra for a remote resource-set store.
//!
//! Set operations (union, intersection, difference, merge, join, match,
//! per-member mapping) compose into a single deferred expression, which
//! resolves into one page of resource refs or membership change events,
//! paginated against a remote service reached through [`ResourceService`].

pub mod client;
pub mod config;
pub mod error;
pub mod event;
pub mod membership;
pub mod page;
pub mod query;
pub mod service;
pub mod set;

pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
pub use event::Event;
pub use page::{EventsPage, SetPage};
pub use query::{Operand, QuerySet, SetFunction};
pub use service::{PageOptions, ResourceService};
pub use set::{RefPath, Set};
