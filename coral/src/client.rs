//! Request glue between set handles and a [`ResourceService`].

use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::service::{PageOptions, ResourceService};
use crate::Result;

/// A connected client: a resource service plus client-side defaults.
///
/// The client holds no shared mutable state; callers may use one instance
/// from multiple threads if the underlying service allows it.
pub struct Client<S> {
    service: S,
    config: Config,
}

impl<S: ResourceService> Client<S> {
    /// Create a client with default configuration.
    pub fn new(service: S) -> Self {
        Self::with_config(service, Config::default())
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(service: S, config: Config) -> Self {
        Self { service, config }
    }

    /// Get config reference.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the underlying resource service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Issue a paginated GET, filling the configured default page size.
    pub(crate) fn get(
        &self,
        path: &str,
        params: &[(String, String)],
        page: &PageOptions,
    ) -> Result<Value> {
        let page = self.effective_page(page);
        debug!("GET {} params={:?}", path, params);
        self.service.get(path, params, &page)
    }

    pub(crate) fn put(&self, path: &str) -> Result<()> {
        debug!("PUT {}", path);
        self.service.put(path)
    }

    pub(crate) fn delete(&self, path: &str) -> Result<()> {
        debug!("DELETE {}", path);
        self.service.delete(path)
    }

    /// Apply `default_page_size` to requests that leave `size` unset.
    fn effective_page(&self, page: &PageOptions) -> PageOptions {
        let mut page = page.clone();
        if page.size.is_none() {
            page.size = self.config.default_page_size;
        }
        page
    }
}
