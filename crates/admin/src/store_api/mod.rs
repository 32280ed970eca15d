//! Client for the store's REST service.
//!
//! # Architecture
//!
//! - The service owns persistence and CRUD; the admin only reads pages of
//!   entity collections from it
//! - Collections are requested with Spring-style paging parameters
//!   (`sort=<field>,<dir>`, `page`, `size`) and answer with a JSON array plus
//!   an `X-Total-Count` header
//! - [`EntityApi`] is the seam the list store depends on, so tests can swap
//!   the HTTP client for an in-memory fake
//!
//! # Example
//!
//! ```rust,ignore
//! use store_admin::store_api::{EntityApi, PageRequest, RestClient};
//! use store_admin_core::ShoppingCart;
//!
//! let client = RestClient::new(&config.api)?;
//! let page = client
//!     .fetch_page::<ShoppingCart>("shopping-carts", PageRequest::sorted("id,asc", 20))
//!     .await?;
//! ```

mod client;

use std::future::Future;

use serde::de::DeserializeOwned;
use thiserror::Error;

pub use client::{RestClient, TOTAL_COUNT_HEADER};

/// Errors that can occur when talking to the REST service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Store API returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Paging parameters of a collection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// `sort` parameter value, e.g. `status,desc`.
    pub sort: String,
    /// Zero-based page index.
    pub page: u32,
    /// Rows per page.
    pub size: u32,
}

impl PageRequest {
    /// First page of `size` rows ordered by `sort`.
    #[must_use]
    pub fn sorted(sort: impl Into<String>, size: u32) -> Self {
        Self {
            sort: sort.into(),
            page: 0,
            size,
        }
    }
}

/// One page of an entity collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<E> {
    /// Records in the order the service sorted them.
    pub items: Vec<E>,
    /// Total records across all pages, when the service reports it.
    pub total_count: Option<u64>,
}

impl<E> Page<E> {
    /// A page holding `items` with no pagination metadata.
    #[must_use]
    pub const fn new(items: Vec<E>) -> Self {
        Self {
            items,
            total_count: None,
        }
    }
}

/// Read access to entity collections.
pub trait EntityApi: Clone + Send + Sync + 'static {
    /// Fetch one page of the collection at `/api/{resource}`.
    fn fetch_page<E>(
        &self,
        resource: &'static str,
        request: PageRequest,
    ) -> impl Future<Output = Result<Page<E>, ApiError>> + Send
    where
        E: DeserializeOwned + Send + 'static;

    /// Whether the service reports itself healthy.
    fn health(&self) -> impl Future<Output = Result<(), ApiError>> + Send;
}
