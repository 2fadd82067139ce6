//! Service layer for catalog business logic.
//!
//! This module contains domain logic separated from UI concerns.
//! Services are pure functions used by both the CLI and the web server.

pub mod pagination;
pub mod query;

pub use pagination::{paginate, parse_page_param};
pub use query::{resolve, QueryResult};
