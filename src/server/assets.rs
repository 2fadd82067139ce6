//! Static asset constants (CSS and JavaScript).

/// Stylesheet for the web interface, including the reader animations.
pub const CSS: &str = include_str!("styles.css");

/// Progressive enhancements for the reader (keyboard paging).
pub const JS: &str = include_str!("reader.js");
