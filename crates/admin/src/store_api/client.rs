//! `reqwest` implementation of [`EntityApi`].

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::config::StoreApiConfig;

use super::{ApiError, EntityApi, Page, PageRequest};

/// Response header carrying the collection's total size.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Longest body excerpt kept in [`ApiError::Status`].
const ERROR_BODY_LIMIT: usize = 500;

/// HTTP client for the store's REST service.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct RestClient {
    inner: Arc<RestClientInner>,
}

struct RestClientInner {
    client: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Create a client for the configured service.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying HTTP client cannot be built.
    pub fn new(config: &StoreApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(RestClientInner {
                client,
                base_url: config.base_url.clone(),
                token: config.token.clone(),
            }),
        })
    }

    /// Base URL of the service.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Build `{base}/{path}` with the given query pairs.
    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn get(&self, url: Url) -> reqwest::RequestBuilder {
        let request = self.inner.client.get(url);
        match &self.inner.token {
            Some(token) => {
                request.header(AUTHORIZATION, format!("Bearer {}", token.expose_secret()))
            }
            None => request,
        }
    }

    /// Turn a non-success response into [`ApiError::Status`].
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let body: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        tracing::error!(
            status = %status,
            body = %body,
            "Store API returned non-success status"
        );
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl EntityApi for RestClient {
    #[instrument(skip(self), fields(sort = %request.sort))]
    async fn fetch_page<E>(
        &self,
        resource: &'static str,
        request: PageRequest,
    ) -> Result<Page<E>, ApiError>
    where
        E: DeserializeOwned + Send + 'static,
    {
        let page = request.page.to_string();
        let size = request.size.to_string();
        let url = self.endpoint(
            &format!("api/{resource}"),
            &[
                ("sort", request.sort.as_str()),
                ("page", page.as_str()),
                ("size", size.as_str()),
            ],
        )?;

        let response = Self::check_status(self.get(url).send().await?).await?;
        let total_count = parse_total_count(response.headers());
        let body = response.bytes().await?;
        let items: Vec<E> = serde_json::from_slice(&body)?;

        tracing::debug!(rows = items.len(), ?total_count, "Fetched entity page");
        Ok(Page { items, total_count })
    }

    #[instrument(skip(self))]
    async fn health(&self) -> Result<(), ApiError> {
        let url = self.endpoint("management/health", &[])?;
        Self::check_status(self.get(url).send().await?).await?;
        Ok(())
    }
}

/// Read the total collection size from the response headers.
fn parse_total_count(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}
