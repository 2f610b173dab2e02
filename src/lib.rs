//! Paginates plain-text RFCs: fixed-length pages with running headers and
//! footers, form-feed separators, and page numbers spliced into the
//! document's own table of contents.

pub mod config;
pub mod error;
pub mod pager;

pub use crate::config::Settings;
pub use error::PagerError;
pub use pager::diagnostics::{Diagnostics, Silent, TraceDiagnostics};
pub use pager::document::Document;
pub use pager::metadata::Metadata;
pub use pager::paginate::{paginate, Fixed, Jitter, Page, PageSizer, Pagination};
pub use pager::render::{Layout, Rendered, Renderer};
pub use pager::toc::{TocIndex, TocSlot, TocTable};
pub use pager::{lay_out, run, Paged};
