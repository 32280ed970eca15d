//! Core types for the store admin.
//!
//! This module provides type-safe wrappers for ids and the closed
//! enumerations carried by store entities.

pub mod id;
pub mod status;

pub use id::*;
pub use status::*;
