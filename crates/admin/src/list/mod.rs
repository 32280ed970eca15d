//! Sortable entity list views.
//!
//! # Architecture
//!
//! - [`sync::ListController`] owns a view's [`store_admin_core::SortState`];
//!   each change issues one fetch to an [`store::EntityStore`] and rewrites the
//!   [`location::Location`] to the canonical `?sort=` query
//! - [`store::RemoteStore`] fetches from the REST service in the background
//!   and publishes rows over a watch channel, newest fetch wins
//! - [`render::render_list`] is a pure function from rows and sort state to
//!   the template's view model
//! - [`entity::ListEntity`] describes how each entity type is listed

pub mod entity;
pub mod location;
pub mod render;
pub mod store;
pub mod sync;

pub use entity::{CellView, EntityRoute, ListEntity};
pub use location::{AddressBar, HX_CURRENT_URL, Location};
pub use render::{ColumnHeader, EntityListView, RowView, SortIndicator, render_list};
pub use store::{
    EntityStore, FetchRequest, FetchTicket, ListPhase, ListSnapshot, RemoteStore,
};
pub use sync::{ListController, SyncOutcome, plan_sync};
