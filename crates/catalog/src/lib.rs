//! Catalog snapshot sources for PrepTrack.
//!
//! This crate provides a trait-based interface for loading topic, company and
//! profile snapshots, with a JSON-directory reference implementation.

#![warn(missing_docs)]

pub mod source;
pub mod json_catalog;
pub mod memory;

pub use source::{CatalogSource, CatalogError, Result};
pub use json_catalog::JsonCatalog;
pub use memory::InMemoryCatalog;
