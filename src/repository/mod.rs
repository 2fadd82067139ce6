//! Repository layer for the story catalog.
//!
//! The catalog is a static JSON file loaded wholesale on each request.
//! There are no write operations.

mod catalog;
mod novel;
mod source;

pub use catalog::{Catalog, CatalogIssue};
pub use novel::NovelRepository;
pub use source::{CatalogSource, JsonFileSource, MemorySource};
