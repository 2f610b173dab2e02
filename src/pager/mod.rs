pub mod diagnostics;
pub mod document;
pub mod metadata;
pub mod paginate;
pub mod render;
pub mod toc;

#[cfg(test)]
pub(crate) mod testdoc;

use tracing::info;

use crate::config::Settings;
use diagnostics::Diagnostics;
use document::Document;
use metadata::Metadata;
use paginate::{paginate, Jitter, PageSizer, Pagination};
use render::{Rendered, Renderer};
use toc::{TocIndex, TocTable};

/// Everything known about a document once it has been split into pages.
#[derive(Debug, Clone)]
pub struct Paged {
    pub metadata: Metadata,
    pub toc: Option<TocTable>,
    pub pagination: Pagination,
}

/// Metadata and TOC discovery followed by pagination.
pub fn lay_out<S, D>(doc: &Document, sizer: &mut S, diag: &mut D) -> Paged
where
    S: PageSizer + ?Sized,
    D: Diagnostics + ?Sized,
{
    let metadata = Metadata::extract(doc);
    let mut toc = TocIndex::locate(doc).map(TocTable::new);
    let pagination = paginate(doc, toc.as_mut(), sizer, diag);

    if let Some(toc) = &toc {
        for key in toc.unresolved() {
            diag.toc_left_unfilled(key);
        }
    }

    info!(
        rfc = metadata.rfc_number.as_deref().unwrap_or("-"),
        pages = pagination.len(),
        toc_entries = toc.as_ref().map_or(0, |t| t.index().len()),
        "laid out document"
    );

    Paged {
        metadata,
        toc,
        pagination,
    }
}

/// The whole pipeline: document in, rendered pages out.
pub fn run<D>(doc: &Document, settings: &Settings, diag: &mut D) -> Rendered
where
    D: Diagnostics + ?Sized,
{
    let mut sizer = match settings.seed {
        Some(seed) => Jitter::seeded(seed, settings.thresholds()),
        None => Jitter::new(settings.thresholds()),
    };
    let paged = lay_out(doc, &mut sizer, diag);
    let layout = settings.layout();
    Renderer::new(&paged.metadata, paged.toc.as_ref(), &layout).render(&paged.pagination, diag)
}
