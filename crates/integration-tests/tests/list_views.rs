//! Integration tests for the entity list views.
//!
//! Run with: cargo test -p store-admin-integration-tests

use reqwest::StatusCode;
use serde_json::Value;
use store_admin_core::{
    CustomerDetails, Product, ProductCategory, ProductOrder, ShoppingCart, ShoppingCartId,
};
use store_admin_integration_tests::{TestContext, fixtures};

fn row_position(body: &str, id: u32) -> usize {
    body.find(&format!("data-id=\"{id}\""))
        .unwrap_or_else(|| panic!("row {id} missing"))
}

fn records<T: serde::de::DeserializeOwned>(resource: &str) -> Vec<T> {
    let rows = fixtures().remove(resource).expect("fixture missing");
    serde_json::from_value(Value::Array(rows))
        .unwrap_or_else(|e| panic!("{resource} fixtures do not parse: {e}"))
}

// ============================================================================
// Fixtures
// ============================================================================

#[test]
fn test_fixtures_parse_as_records() {
    let carts: Vec<ShoppingCart> = records("shopping-carts");
    assert_eq!(
        carts.iter().map(|c| c.id).collect::<Vec<_>>(),
        [1, 2, 3].map(ShoppingCartId::new)
    );
    assert_eq!(records::<CustomerDetails>("customer-details").len(), 1);
    assert_eq!(records::<ProductOrder>("product-orders").len(), 1);
    assert!(records::<ProductCategory>("product-categories").is_empty());

    let products: Vec<Product> = records("products");
    assert_eq!(
        products[0].image_data_uri().as_deref(),
        Some("data:image/png;base64,iVBORw0KGgo=")
    );
}

// ============================================================================
// Full Page Loads
// ============================================================================

#[tokio::test]
async fn test_list_without_sort_requests_canonical_url() {
    let ctx = TestContext::start().await;

    let resp = ctx
        .client
        .get(ctx.url("/shopping-cart"))
        .send()
        .await
        .expect("Failed to get shopping carts");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("<table"));
    assert!(body.contains("Shopping Carts"));
    assert!(body.contains(r#"data-replace-url="/shopping-cart?sort=id,asc""#));

    let requests = ctx.upstream.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].resource, "shopping-carts");
    assert_eq!(requests[0].param("sort"), Some("id,asc"));
    assert_eq!(requests[0].param("page"), Some("0"));
    assert_eq!(requests[0].param("size"), Some("20"));
}

#[tokio::test]
async fn test_canonical_url_is_left_alone() {
    let ctx = TestContext::start().await;

    let body = ctx
        .client
        .get(ctx.url("/shopping-cart?sort=status,desc"))
        .send()
        .await
        .expect("Failed to get shopping carts")
        .text()
        .await
        .expect("Failed to read response");

    assert!(!body.contains("data-replace-url"));
    // PENDING > PAID > COMPLETED
    assert!(row_position(&body, 3) < row_position(&body, 1));
    assert!(row_position(&body, 1) < row_position(&body, 2));
    assert_eq!(ctx.upstream.requests()[0].param("sort"), Some("status,desc"));
}

#[tokio::test]
async fn test_malformed_sort_falls_back_to_default() {
    let ctx = TestContext::start().await;

    let body = ctx
        .client
        .get(ctx.url("/shopping-cart?sort=status"))
        .send()
        .await
        .expect("Failed to get shopping carts")
        .text()
        .await
        .expect("Failed to read response");

    assert!(body.contains(r#"data-replace-url="/shopping-cart?sort=id,asc""#));
    assert_eq!(ctx.upstream.requests()[0].param("sort"), Some("id,asc"));
}

#[tokio::test]
async fn test_unsortable_sort_falls_back_to_default() {
    let ctx = TestContext::start().await;

    for query in ["?sort=customerDetails,asc", "?sort=bogus,desc"] {
        let body = ctx
            .client
            .get(ctx.url(&format!("/shopping-cart{query}")))
            .send()
            .await
            .expect("Failed to get shopping carts")
            .text()
            .await
            .expect("Failed to read response");
        assert!(
            body.contains(r#"data-replace-url="/shopping-cart?sort=id,asc""#),
            "{query}"
        );
    }

    let sorts: Vec<_> = ctx
        .upstream
        .requests()
        .iter()
        .map(|r| r.param("sort").map(str::to_string))
        .collect();
    assert_eq!(sorts, [Some("id,asc".to_string()), Some("id,asc".to_string())]);
}

#[tokio::test]
async fn test_product_image_renders_as_thumbnail() {
    let ctx = TestContext::start().await;

    let body = ctx
        .client
        .get(ctx.url("/product?sort=id,asc"))
        .send()
        .await
        .expect("Failed to get products")
        .text()
        .await
        .expect("Failed to read response");

    assert!(body.contains(r#"<img class="thumbnail" src="data:image/png;base64,iVBORw0KGgo=""#));
}

#[tokio::test]
async fn test_relational_cells_link_when_present() {
    let ctx = TestContext::start().await;

    let body = ctx
        .client
        .get(ctx.url("/shopping-cart?sort=id,asc"))
        .send()
        .await
        .expect("Failed to get shopping carts")
        .text()
        .await
        .expect("Failed to read response");

    assert_eq!(body.matches(r#"href="/customer-details/7""#).count(), 1);
    assert!(body.contains(r#"href="/shopping-cart/1/edit""#));
    assert!(body.contains(r#"href="/shopping-cart/new""#));
}

#[tokio::test]
async fn test_empty_collection_shows_not_found() {
    let ctx = TestContext::start().await;

    let body = ctx
        .client
        .get(ctx.url("/product-category?sort=id,asc"))
        .send()
        .await
        .expect("Failed to get product categories")
        .text()
        .await
        .expect("Failed to read response");

    assert!(body.contains("No Product Categories found"));
    assert!(!body.contains("<table"));
}

#[tokio::test]
async fn test_upstream_failure_renders_empty_list() {
    let ctx = TestContext::start().await;
    ctx.upstream.set_failing(true);

    let resp = ctx
        .client
        .get(ctx.url("/product?sort=id,asc"))
        .send()
        .await
        .expect("Failed to get products");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("No Products found"));
}

#[tokio::test]
async fn test_every_entity_has_a_list_view() {
    let ctx = TestContext::start().await;

    for path in [
        "/shopping-cart",
        "/customer-details",
        "/product",
        "/product-category",
        "/product-order",
    ] {
        let resp = ctx
            .client
            .get(ctx.url(path))
            .send()
            .await
            .expect("Failed to get list");
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
    }

    let resources: Vec<String> = ctx
        .upstream
        .requests()
        .into_iter()
        .map(|r| r.resource)
        .collect();
    assert_eq!(
        resources,
        [
            "shopping-carts",
            "customer-details",
            "products",
            "product-categories",
            "product-orders"
        ]
    );
}

// ============================================================================
// htmx Actions
// ============================================================================

#[tokio::test]
async fn test_header_click_pushes_new_url() {
    let ctx = TestContext::start().await;

    let resp = ctx
        .htmx_get("/shopping-cart?sort_by=status", "/shopping-cart?sort=id,asc")
        .send()
        .await
        .expect("Failed to sort");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("HX-Push-Url")
            .and_then(|v| v.to_str().ok()),
        Some("/shopping-cart?sort=status,desc")
    );
    let body = resp.text().await.expect("Failed to read response");
    assert!(!body.contains("<html"));
    assert!(body.contains("ph-caret-down"));

    let requests = ctx.upstream.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].param("sort"), Some("status,desc"));
}

#[tokio::test]
async fn test_clicking_active_header_flips_direction() {
    let ctx = TestContext::start().await;

    let resp = ctx
        .htmx_get("/product?sort_by=name", "/product?sort=name,desc")
        .send()
        .await
        .expect("Failed to sort");

    assert_eq!(
        resp.headers()
            .get("HX-Push-Url")
            .and_then(|v| v.to_str().ok()),
        Some("/product?sort=name,asc")
    );
}

#[tokio::test]
async fn test_refresh_fetches_without_navigation() {
    let ctx = TestContext::start().await;

    let resp = ctx
        .htmx_get("/shopping-cart?refresh=1", "/shopping-cart?sort=totalPrice,desc")
        .send()
        .await
        .expect("Failed to refresh");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("HX-Push-Url").is_none());

    let requests = ctx.upstream.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].param("sort"), Some("totalPrice,desc"));
}

#[tokio::test]
async fn test_refresh_of_unsortable_url_falls_back_to_default() {
    let ctx = TestContext::start().await;

    let resp = ctx
        .htmx_get("/shopping-cart?refresh=1", "/shopping-cart?sort=customerDetails,asc")
        .send()
        .await
        .expect("Failed to refresh");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("HX-Push-Url")
            .and_then(|v| v.to_str().ok()),
        Some("/shopping-cart?sort=id,asc")
    );

    let requests = ctx.upstream.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].param("sort"), Some("id,asc"));
}

#[tokio::test]
async fn test_fragment_cancels_superseded_requests() {
    let ctx = TestContext::start().await;

    let body = ctx
        .htmx_get("/shopping-cart?sort_by=status", "/shopping-cart?sort=id,asc")
        .send()
        .await
        .expect("Failed to sort")
        .text()
        .await
        .expect("Failed to read response");

    // Six sortable headers plus the refresh button share one request slot.
    assert_eq!(
        body.matches(r#"hx-sync="closest section:replace""#).count(),
        7
    );
}

#[tokio::test]
async fn test_sorting_by_relational_column_is_rejected() {
    let ctx = TestContext::start().await;

    let resp = ctx
        .htmx_get("/product-order?sort_by=cart", "/product-order?sort=id,asc")
        .send()
        .await
        .expect("Failed to sort");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(ctx.upstream.requests().is_empty());
}

// ============================================================================
// Health & Navigation
// ============================================================================

#[tokio::test]
async fn test_readiness_follows_upstream_health() {
    let ctx = TestContext::start().await;

    let resp = ctx
        .client
        .get(ctx.url("/health/ready"))
        .send()
        .await
        .expect("Failed to check readiness");
    assert_eq!(resp.status(), StatusCode::OK);

    ctx.upstream.set_unhealthy(true);
    let resp = ctx
        .client
        .get(ctx.url("/health/ready"))
        .send()
        .await
        .expect("Failed to check readiness");
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_root_redirects_to_shopping_carts() {
    let ctx = TestContext::start().await;

    let resp = ctx
        .client
        .get(ctx.url("/"))
        .send()
        .await
        .expect("Failed to get root");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some("/shopping-cart")
    );
}
