//! HTTP request handlers for the web server.

mod api;
mod browse;
mod helpers;
mod home;
mod novels;
mod static_files;

// Re-export handlers for use by the router
pub use api::{api_novel_page, api_novels};
pub use browse::browse_novels;
pub use helpers::not_found;
pub use home::home;
pub use novels::novel_detail;
pub use static_files::{serve_css, serve_js};
