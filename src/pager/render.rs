use tracing::debug;

use super::diagnostics::Diagnostics;
use super::metadata::Metadata;
use super::paginate::{Page, Pagination};
use super::toc::{TocSlot, TocTable, TOC_HEADING};

const BOM: &str = "\u{feff}";
const FORM_FEED: &str = "\u{c}";

/// Fixed geometry of an output page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Body lines per page after padding.
    pub page_lines: usize,
    /// Column the dot leader is measured against.
    pub toc_column: usize,
    /// Column at which `[Page N]` ends.
    pub footer_column: usize,
    /// Right-align the RFC date in the running header.
    pub header_date: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            page_lines: 58,
            toc_column: 70,
            footer_column: 72,
            header_date: false,
        }
    }
}

/// Where the renderer is relative to the TOC block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TocMarker {
    NotYet,
    HeadingSeen,
    InBody,
    Past,
}

/// Final output, one entry per line. Page breaks are lines holding a form feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    lines: Vec<String>,
}

impl Rendered {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

pub struct Renderer<'a> {
    meta: &'a Metadata,
    toc: Option<&'a TocTable>,
    layout: &'a Layout,
}

impl<'a> Renderer<'a> {
    pub fn new(meta: &'a Metadata, toc: Option<&'a TocTable>, layout: &'a Layout) -> Self {
        Renderer { meta, toc, layout }
    }

    pub fn render<D>(&self, pagination: &Pagination, diag: &mut D) -> Rendered
    where
        D: Diagnostics + ?Sized,
    {
        let mut out = Vec::new();
        let mut marker = TocMarker::NotYet;

        for page in &pagination.pages {
            if page.number > 1 {
                out.push(self.running_header());
                out.push(String::new());
            } else {
                out.push(BOM.to_string());
            }

            for line in &page.lines {
                out.push(self.body_line(line, &mut marker, diag));
            }
            out.extend((page.lines.len()..self.layout.page_lines).map(|_| String::new()));

            out.push(String::new());
            out.push(self.footer(page));
            out.push(FORM_FEED.to_string());
        }

        debug!(pages = pagination.len(), lines = out.len(), "rendered pages");
        Rendered { lines: out }
    }

    fn running_header(&self) -> String {
        let number = self.meta.rfc_number.as_deref().unwrap_or_default();
        let title = self.meta.title.as_deref().unwrap_or_default();
        let header = format!("RFC {number} {title}");
        let header = header.trim_end();

        match self.meta.rfc_date.as_deref() {
            Some(date) if self.layout.header_date => {
                let used = header.chars().count() + date.chars().count();
                let gap = self.layout.footer_column.saturating_sub(used).max(1);
                format!("{header}{}{date}", " ".repeat(gap))
            }
            _ => header.to_string(),
        }
    }

    fn footer(&self, page: &Page) -> String {
        let label = format!("[Page {}]", page.number);
        let header = page.header.as_deref().unwrap_or_default();
        let used = header.chars().count() + label.len();
        let gap = self.layout.footer_column.saturating_sub(used);
        format!("{header}{}{label}", " ".repeat(gap))
    }

    /// Adds the dot leader and page number to lines inside the TOC body.
    fn body_line<D>(&self, line: &str, marker: &mut TocMarker, diag: &mut D) -> String
    where
        D: Diagnostics + ?Sized,
    {
        *marker = match *marker {
            TocMarker::NotYet if line == TOC_HEADING => TocMarker::HeadingSeen,
            TocMarker::HeadingSeen if !line.is_empty() => TocMarker::InBody,
            m => m,
        };
        if *marker != TocMarker::InBody {
            return line.to_string();
        }
        if line.is_empty() {
            *marker = TocMarker::Past;
            return String::new();
        }

        match self.toc.map_or(TocSlot::Missing, |t| t.lookup(line)) {
            TocSlot::Page(page) => self.dot_leader(line, page),
            TocSlot::Unresolved => line.to_string(),
            TocSlot::Missing => {
                diag.unresolved_toc_entry(line);
                line.to_string()
            }
        }
    }

    fn dot_leader(&self, line: &str, page: usize) -> String {
        let page = page.to_string();
        let dots = self
            .layout
            .toc_column
            .saturating_sub(line.chars().count() + page.len());
        format!("{line} {} {page}", ".".repeat(dots))
    }
}
