//! Integration tests for the store admin.
//!
//! Each test starts a fake REST service and the admin router in-process on
//! ephemeral ports, then talks to the admin over HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p store-admin-integration-tests
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use store_admin::config::{AdminConfig, StoreApiConfig};
use store_admin::state::AppState;
use tokio::net::TcpListener;

/// A collection request the fake service received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub resource: String,
    pub params: HashMap<String, String>,
}

impl RecordedRequest {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Clone, Default)]
struct FakeState {
    collections: Arc<HashMap<String, Vec<Value>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    unhealthy: Arc<AtomicBool>,
    failing: Arc<AtomicBool>,
}

/// In-process stand-in for the store's REST service.
pub struct FakeStoreApi {
    addr: SocketAddr,
    state: FakeState,
}

impl FakeStoreApi {
    /// Serve `collections` (resource name to records) on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start(collections: HashMap<String, Vec<Value>>) -> Self {
        let state = FakeState {
            collections: Arc::new(collections),
            ..FakeState::default()
        };

        let app = Router::new()
            .route("/api/{resource}", get(collection))
            .route("/management/health", get(health))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake store API");
        let addr = listener.local_addr().expect("Failed to read local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, state }
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every collection request received so far.
    ///
    /// # Panics
    ///
    /// Panics if the request log lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .expect("request log poisoned")
            .clone()
    }

    /// Make `/management/health` report the service as down.
    pub fn set_unhealthy(&self, unhealthy: bool) {
        self.state.unhealthy.store(unhealthy, AtomicOrdering::SeqCst);
    }

    /// Make every collection request fail with a server error.
    pub fn set_failing(&self, failing: bool) {
        self.state.failing.store(failing, AtomicOrdering::SeqCst);
    }
}

async fn collection(
    State(state): State<FakeState>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let sort = params.get("sort").cloned();
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(RecordedRequest {
            resource: resource.clone(),
            params,
        });
    }

    if state.failing.load(AtomicOrdering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response();
    }

    let mut rows = state
        .collections
        .get(&resource)
        .cloned()
        .unwrap_or_default();
    if let Some((field, direction)) = sort.as_deref().and_then(|s| s.split_once(',')) {
        rows.sort_by(|a, b| compare_field(&a[field], &b[field]));
        if direction == "desc" {
            rows.reverse();
        }
    }

    let total = rows.len().to_string();
    ([("X-Total-Count", total)], Json(rows)).into_response()
}

async fn health(State(state): State<FakeState>) -> Response {
    if state.unhealthy.load(AtomicOrdering::SeqCst) {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"status": "DOWN"}))).into_response()
    } else {
        Json(json!({"status": "UP"})).into_response()
    }
}

fn compare_field(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        _ => a.to_string().cmp(&b.to_string()),
    }
}

/// A running admin wired to a [`FakeStoreApi`].
pub struct TestContext {
    pub client: reqwest::Client,
    pub admin_url: String,
    pub upstream: FakeStoreApi,
}

impl TestContext {
    /// Start the fake service with [`fixtures`] and an admin in front of it.
    ///
    /// # Panics
    ///
    /// Panics if a server cannot be started.
    pub async fn start() -> Self {
        Self::with_collections(fixtures()).await
    }

    /// Start the fake service with `collections` and an admin in front of it.
    ///
    /// # Panics
    ///
    /// Panics if a server cannot be started.
    pub async fn with_collections(collections: HashMap<String, Vec<Value>>) -> Self {
        let upstream = FakeStoreApi::start(collections).await;

        let api = StoreApiConfig::new(&upstream.url()).expect("Invalid fake API URL");
        let state = AppState::new(AdminConfig::local(api)).expect("Failed to build state");
        let app = store_admin::routes::app(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind admin");
        let addr = listener.local_addr().expect("Failed to read local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            admin_url: format!("http://{addr}"),
            upstream,
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.admin_url)
    }

    /// Request as htmx does when the browser shows `current` (path and query).
    #[must_use]
    pub fn htmx_get(&self, path: &str, current: &str) -> reqwest::RequestBuilder {
        self.client
            .get(self.url(path))
            .header("HX-Request", "true")
            .header("HX-Current-URL", self.url(current))
    }
}

/// Sample records for every collection; product categories are empty.
#[must_use]
pub fn fixtures() -> HashMap<String, Vec<Value>> {
    HashMap::from([
        (
            "shopping-carts".to_string(),
            vec![
                json!({
                    "id": 1,
                    "placedDate": "2024-03-01T09:30:00Z",
                    "status": "PAID",
                    "totalPrice": "42.50",
                    "paymentMethod": "CREDIT_CARD",
                    "paymentReference": "pay-001",
                    "customerDetails": {"id": 7}
                }),
                json!({
                    "id": 2,
                    "placedDate": "2024-03-02T14:05:00Z",
                    "status": "COMPLETED",
                    "totalPrice": "10.00",
                    "paymentMethod": "IDEAL",
                    "customerDetails": null
                }),
                json!({
                    "id": 3,
                    "placedDate": "2024-03-03T08:00:00Z",
                    "status": "PENDING",
                    "totalPrice": "99.99",
                    "paymentMethod": "IDEAL"
                }),
            ],
        ),
        (
            "customer-details".to_string(),
            vec![json!({
                "id": 7,
                "gender": "FEMALE",
                "phone": "+31 6 1234 5678",
                "addressLine1": "Markt 1",
                "city": "Delft",
                "country": "NL",
                "user": {"id": 3, "login": "anna"}
            })],
        ),
        (
            "products".to_string(),
            vec![json!({
                "id": 4,
                "name": "Linen Shirt",
                "price": "39.95",
                "productSize": "M",
                "imageContentType": "image/png",
                "image": "iVBORw0KGgo=",
                "productCategory": {"id": 1}
            })],
        ),
        ("product-categories".to_string(), vec![]),
        (
            "product-orders".to_string(),
            vec![json!({
                "id": 11,
                "quantity": 2,
                "totalPrice": "79.90",
                "product": {"id": 4},
                "cart": {"id": 1}
            })],
        ),
    ])
}
