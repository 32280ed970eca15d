//! Store admin library.
//!
//! Server-rendered list views over the entities of the store's REST
//! service. Each view is sortable by column; the sort order lives in the
//! `sort` query parameter so that list URLs can be bookmarked and shared.
//!
//! The crate is a library so the router can be driven from tests; the
//! `store-admin` binary only adds configuration, tracing and the listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod list;
pub mod routes;
pub mod state;
pub mod store_api;
