//! Data models for the story catalog and the per-request views derived from it.

mod filter;
mod locale;
mod novel;
mod page_view;

pub use filter::{Facet, FilterState};
pub use locale::Locale;
pub use novel::{Novel, NovelSummary};
pub use page_view::PageView;
