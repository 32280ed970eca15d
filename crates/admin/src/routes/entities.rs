//! Entity list route handlers.
//!
//! One generic handler serves every entity's list view:
//!
//! - a full page load mounts the view from the request URL and asks the
//!   browser to replace its URL with the canonical one if it differs
//! - a header click (`?sort_by=<field>`) or the refresh button
//!   (`?refresh=1`) arrives as an htmx request; the view is restored from
//!   `HX-Current-URL`, the action applied, and the table fragment returned
//!   with `HX-Push-Url` when the address has to change

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, Uri},
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use store_admin_core::SortState;
use tracing::instrument;

use crate::error::AppError;
use crate::list::{
    AddressBar, EntityListView, EntityStore, ListController, ListEntity, Location, render_list,
};
use crate::state::AppState;

/// Header htmx sets on every request it makes.
pub const HX_REQUEST: &str = "HX-Request";

/// Response header telling htmx which URL to push into the history.
pub const HX_PUSH_URL: &str = "HX-Push-Url";

/// List view actions.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Header of this column was clicked.
    pub sort_by: Option<String>,
    /// Refresh button was clicked.
    pub refresh: Option<String>,
}

/// Full list page.
#[derive(Template, WebTemplate)]
#[template(path = "entities/index.html")]
pub struct EntityIndexTemplate {
    pub current_path: String,
    pub view: EntityListView,
    /// Canonical URL the browser should show instead of the requested one.
    pub replace_url: Option<String>,
}

/// Table fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "entities/_table.html")]
pub struct EntityTableTemplate {
    pub view: EntityListView,
}

/// List view handler for entity `E`.
#[instrument(skip(state, uri, headers), fields(entity = E::ROUTE.slug))]
pub async fn index<E: ListEntity>(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let config = E::table_config();
    if let Some(field) = query.sort_by.as_deref().filter(|f| !config.is_sortable(f)) {
        return Err(AppError::BadRequest(format!("cannot sort by {field:?}")));
    }

    let location = AddressBar::from_request(&uri, &headers);
    let sort = sortable_or_default::<E>(SortState::initialize(
        location.current_query(),
        E::DEFAULT_SORT_FIELD,
    ));
    let store = state.list_store::<E>();

    let (controller, outcome) = if query.sort_by.is_some() || query.refresh.is_some() {
        let mut controller = ListController::restore_with(store, location, sort);
        let changed = match &query.sort_by {
            Some(field) => controller.sort_by(field),
            None => None,
        };
        // Rows are needed for the fragment even if the state did not change.
        let outcome = changed.unwrap_or_else(|| controller.manual_refresh());
        (controller, outcome)
    } else {
        ListController::mount_with(store, location, sort)
    };

    let snapshot = controller.store().settled(outcome.ticket).await;
    let view = render_list(&snapshot.entities, snapshot.loading, controller.sort_state());
    let pushed_url = controller.location().pushed_url().map(str::to_string);

    tracing::info!(
        sort = %controller.sort_state(),
        rows = snapshot.entities.len(),
        total = ?snapshot.total_count,
        "Rendered list view"
    );

    if headers.contains_key(HX_REQUEST) {
        let table = EntityTableTemplate { view };
        return Ok(match pushed_url {
            Some(url) => (AppendHeaders([(HX_PUSH_URL, url)]), table).into_response(),
            None => table.into_response(),
        });
    }

    Ok(EntityIndexTemplate {
        current_path: E::ROUTE.list_path(),
        view,
        replace_url: pushed_url,
    }
    .into_response())
}

/// `sort`, or the default order if it names a column `E` cannot sort by.
fn sortable_or_default<E: ListEntity>(sort: SortState) -> SortState {
    if E::table_config().is_sortable(&sort.field) {
        return sort;
    }
    tracing::debug!(field = %sort.field, "Ignoring sort on unknown column");
    SortState::ascending(E::DEFAULT_SORT_FIELD)
}
