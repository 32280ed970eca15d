//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::list::{ListEntity, RemoteStore};
use crate::store_api::{ApiError, RestClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    api: RestClient,
}

impl AppState {
    /// Build the state, creating the REST client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the HTTP client cannot be built.
    pub fn new(config: AdminConfig) -> Result<Self, ApiError> {
        let api = RestClient::new(&config.api)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { config, api }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn api(&self) -> &RestClient {
        &self.inner.api
    }

    /// A fresh store for one list view of `E`.
    #[must_use]
    pub fn list_store<E: ListEntity>(&self) -> RemoteStore<RestClient, E> {
        RemoteStore::new(
            self.inner.api.clone(),
            E::ROUTE.resource,
            self.inner.config.list_page_size,
        )
    }
}
