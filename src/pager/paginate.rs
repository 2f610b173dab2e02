use std::ops::RangeInclusive;

use tracing::debug;

use super::diagnostics::Diagnostics;
use super::document::Document;
use super::toc::TocTable;

const BOM: char = '\u{feff}';

/// Default band for the page-break threshold. A page is closed once it holds
/// more lines than the threshold.
pub const DEFAULT_THRESHOLDS: RangeInclusive<usize> = 56..=58;

/// Supplies the break threshold for each new page.
pub trait PageSizer {
    fn next_threshold(&mut self) -> usize;
}

/// Same threshold for every page.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub usize);

impl PageSizer for Fixed {
    fn next_threshold(&mut self) -> usize {
        self.0
    }
}

/// Draws each page's threshold at random from a small band so that
/// widow/orphan fixes don't land at the same offset on every page.
#[derive(Debug, Clone)]
pub struct Jitter {
    rng: fastrand::Rng,
    range: RangeInclusive<usize>,
}

impl Jitter {
    pub fn new(range: RangeInclusive<usize>) -> Self {
        Jitter {
            rng: fastrand::Rng::new(),
            range,
        }
    }

    pub fn seeded(seed: u64, range: RangeInclusive<usize>) -> Self {
        Jitter {
            rng: fastrand::Rng::with_seed(seed),
            range,
        }
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Jitter::new(DEFAULT_THRESHOLDS)
    }
}

impl PageSizer for Jitter {
    fn next_threshold(&mut self) -> usize {
        self.rng.usize(self.range.clone())
    }
}

/// One output page before headers, footers and padding are added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub lines: Vec<String>,
    /// Last section header seen when the page was closed.
    pub header: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Pagination {
    pub pages: Vec<Page>,
}

impl Pagination {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Section header per page, parallel to `pages`.
    pub fn headers(&self) -> Vec<Option<&str>> {
        self.pages.iter().map(|p| p.header.as_deref()).collect()
    }
}

/// A non-blank line starting in column 0.
pub fn is_section_header(line: &str) -> bool {
    !line.is_empty() && !line.starts_with(' ')
}

/// Lines carrying a byte-order mark are treated as blank.
fn scrub(line: &str) -> &str {
    if line.contains(BOM) {
        ""
    } else {
        line
    }
}

fn record_header(toc: Option<&mut TocTable>, header: &str, page: usize) {
    if let Some(toc) = toc {
        toc.assign(header, page);
    }
}

/// Split the document into pages in a single forward pass, filling in TOC
/// page numbers as section headers go by.
///
/// A break is skipped when it would leave one line at the top of the new page
/// followed by a blank (a widow). When a break would leave one line alone after
/// a blank at the bottom of the old page (an orphan), that line moves to the new page.
pub fn paginate<S, D>(
    doc: &Document,
    mut toc: Option<&mut TocTable>,
    sizer: &mut S,
    diag: &mut D,
) -> Pagination
where
    S: PageSizer + ?Sized,
    D: Diagnostics + ?Sized,
{
    let mut pages = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut header: Option<String> = None;
    let mut number = 1;
    let mut threshold = sizer.next_threshold();

    for (idx, raw) in doc.lines().iter().enumerate() {
        let line = scrub(raw);

        if current.len() > threshold {
            let prev = scrub(doc.before(idx, 1));
            let next = scrub(doc.after(idx, 1));

            if !line.is_empty() && next.is_empty() && !prev.is_empty() {
                diag.widow_avoided(number, idx);
            } else {
                let mut closing = std::mem::take(&mut current);
                let orphan = !line.is_empty()
                    && !prev.is_empty()
                    && scrub(doc.before(idx, 2)).is_empty();
                let carried = if orphan { closing.pop() } else { None };

                pages.push(Page {
                    number,
                    lines: closing,
                    header: header.clone(),
                });
                number += 1;
                threshold = sizer.next_threshold();

                if let Some(moved) = carried {
                    diag.orphan_moved(number, &moved);
                    if is_section_header(&moved) {
                        record_header(toc.as_deref_mut(), &moved, number);
                    }
                    current.push(moved);
                }
            }
        }

        if is_section_header(line) {
            record_header(toc.as_deref_mut(), line, number);
            header = Some(line.to_string());
        }
        current.push(line.to_string());
    }

    pages.push(Page {
        number,
        lines: current,
        header,
    });
    debug!(pages = pages.len(), lines = doc.len(), "paginated document");

    Pagination { pages }
}
