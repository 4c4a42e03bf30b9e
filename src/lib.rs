//! folio library crate providing pagination state and navigation links.
//!
//! The library computes a clamped, internally consistent pagination state
//! from a total item count, a page size, and a requested page, then turns
//! that state into navigation links and an HTML view. URL construction stays
//! with the caller through the [`PageUrl`] trait.

pub mod config;
pub mod error;
pub mod links;
pub mod pagination;
pub mod paginator;
pub mod source;
pub mod view;

pub use config::{FolioConfig, OutputFormat};
pub use error::PaginationError;
pub use links::{LinkKind, LinkLabels, LinkOptions, PageLink, PageUrl, build_links};
pub use pagination::{PaginationInput, PaginationState, Property};
pub use paginator::{Paginator, PaginatorSettings, SettingsUpdate};
pub use source::{PageSource, RequestParams, resolve_requested_page};
pub use view::{render_html, write_html};
