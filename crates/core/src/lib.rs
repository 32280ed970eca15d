//! Store Admin Core - Shared types library.
//!
//! This crate provides the types used by the admin panel:
//! - entity records as the remote REST service serializes them
//! - type-safe ids and closed enumerations
//! - the sort state that a list view keeps in its URL
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Fetching, navigation and rendering live in the admin crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids and status enumerations
//! - [`entities`] - Shopping carts, customer details, products, categories, orders
//! - [`sort`] - Sort state parsing, toggling and canonical query strings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entities;
pub mod sort;
pub mod types;

pub use entities::*;
pub use sort::{SortDirection, SortState};
pub use types::*;
