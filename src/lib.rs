//! Shadowcipher - a web reader for short serialized horror and spy fiction.
//!
//! Stories are loaded from a static JSON catalog and served as a filterable
//! library plus a paged reader.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod server;
pub mod services;
