//! Entity stores: where a list view gets its rows from.
//!
//! A store accepts fetch requests without blocking and publishes its state as
//! a [`ListSnapshot`] over a `tokio::sync::watch` channel. [`RemoteStore`]
//! backs a store with the REST service.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use tokio::sync::watch;

use crate::store_api::{ApiError, EntityApi, Page, PageRequest};

/// Parameters of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Sort parameter value, `<field>,<asc|desc>`.
    pub sort: String,
}

impl FetchRequest {
    #[must_use]
    pub fn sorted(sort: impl Into<String>) -> Self {
        Self { sort: sort.into() }
    }
}

/// Handle to an issued fetch; generations increase with every fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[must_use]
    pub const fn new(generation: u64) -> Self {
        Self(generation)
    }

    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Where a list is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// Nothing requested yet.
    Idle,
    /// The latest fetch is in flight.
    Loading,
    /// The latest fetch returned rows.
    Populated,
    /// The latest fetch returned no rows, or failed.
    Empty,
}

/// State a store publishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot<E> {
    /// Rows of the latest completed fetch.
    pub entities: Vec<E>,
    /// Whether the latest issued fetch is still in flight.
    pub loading: bool,
    /// Error text of the latest fetch, if it failed.
    pub error: Option<String>,
    /// Collection size reported by the service.
    pub total_count: Option<u64>,
    /// Generation of the latest issued fetch.
    pub requested: u64,
    /// Generation of the latest applied fetch.
    pub completed: u64,
}

impl<E> Default for ListSnapshot<E> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            loading: false,
            error: None,
            total_count: None,
            requested: 0,
            completed: 0,
        }
    }
}

impl<E> ListSnapshot<E> {
    #[must_use]
    pub fn phase(&self) -> ListPhase {
        if self.loading {
            ListPhase::Loading
        } else if self.requested == 0 {
            ListPhase::Idle
        } else if self.entities.is_empty() {
            ListPhase::Empty
        } else {
            ListPhase::Populated
        }
    }

    /// Whether the fetch behind `ticket`, or a later one, has been applied.
    #[must_use]
    pub const fn is_settled(&self, ticket: FetchTicket) -> bool {
        self.completed >= ticket.0
    }
}

/// Source of the rows of a list view.
pub trait EntityStore: Send + Sync {
    type Entity: Clone + Send + Sync + 'static;

    /// Start a fetch and return at once.
    fn fetch(&self, request: FetchRequest) -> FetchTicket;

    /// Watch the store's state.
    fn subscribe(&self) -> watch::Receiver<ListSnapshot<Self::Entity>>;

    /// Wait until `ticket`'s fetch (or a later one) has been applied.
    fn settled(
        &self,
        ticket: FetchTicket,
    ) -> impl Future<Output = ListSnapshot<Self::Entity>> + Send {
        let mut rx = self.subscribe();
        async move {
            let waited = rx.wait_for(|s| s.is_settled(ticket)).await.map(|s| s.clone());
            waited.unwrap_or_else(|_| rx.borrow().clone())
        }
    }
}

/// Store backed by one collection of the REST service.
///
/// Only the latest issued fetch may publish its result; responses of
/// superseded fetches are dropped. In-flight requests are not cancelled.
pub struct RemoteStore<A, E> {
    inner: Arc<RemoteStoreInner<A, E>>,
}

struct RemoteStoreInner<A, E> {
    api: A,
    resource: &'static str,
    page_size: u32,
    generation: AtomicU64,
    state: watch::Sender<ListSnapshot<E>>,
}

impl<A, E> Clone for RemoteStore<A, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, E> std::fmt::Debug for RemoteStore<A, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteStore")
            .field("resource", &self.inner.resource)
            .field("page_size", &self.inner.page_size)
            .field("generation", &self.inner.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl<A, E> RemoteStore<A, E>
where
    A: EntityApi,
    E: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Store for `resource` (e.g. `shopping-carts`), `page_size` rows per fetch.
    #[must_use]
    pub fn new(api: A, resource: &'static str, page_size: u32) -> Self {
        let (state, _) = watch::channel(ListSnapshot::default());
        Self {
            inner: Arc::new(RemoteStoreInner {
                api,
                resource,
                page_size,
                generation: AtomicU64::new(0),
                state,
            }),
        }
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot<E> {
        self.inner.state.borrow().clone()
    }
}

impl<A, E> RemoteStoreInner<A, E> {
    /// Publish the result of fetch `generation` unless a newer one was issued.
    fn apply(&self, generation: u64, result: Result<Page<E>, ApiError>) {
        let latest = self.generation.load(Ordering::SeqCst);
        if generation < latest {
            tracing::debug!(
                resource = self.resource,
                generation,
                latest,
                "Dropping stale fetch result"
            );
            return;
        }

        self.state.send_if_modified(|snapshot| {
            if generation < snapshot.requested {
                return false;
            }
            match result {
                Ok(page) => {
                    snapshot.entities = page.items;
                    snapshot.total_count = page.total_count;
                    snapshot.error = None;
                }
                Err(e) => {
                    tracing::error!(
                        resource = self.resource,
                        error = %e,
                        "Failed to fetch entities"
                    );
                    snapshot.entities.clear();
                    snapshot.total_count = None;
                    snapshot.error = Some(e.to_string());
                }
            }
            snapshot.loading = false;
            snapshot.completed = generation;
            true
        });
    }
}

impl<A, E> EntityStore for RemoteStore<A, E>
where
    A: EntityApi,
    E: DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Entity = E;

    fn fetch(&self, request: FetchRequest) -> FetchTicket {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.send_modify(|snapshot| {
            snapshot.loading = true;
            snapshot.requested = snapshot.requested.max(generation);
        });

        tracing::debug!(
            resource = self.inner.resource,
            sort = %request.sort,
            generation,
            "Dispatching fetch"
        );

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let page_request = PageRequest::sorted(request.sort, inner.page_size);
            let result = inner.api.fetch_page::<E>(inner.resource, page_request).await;
            inner.apply(generation, result);
        });

        FetchTicket(generation)
    }

    fn subscribe(&self) -> watch::Receiver<ListSnapshot<E>> {
        self.inner.state.subscribe()
    }
}
