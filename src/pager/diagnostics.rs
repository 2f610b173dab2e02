use tracing::{debug, warn};

/// Side channel for layout decisions and non-fatal problems.
///
/// Every method defaults to doing nothing so sinks only implement what they care about.
pub trait Diagnostics {
    /// A break before `line_index` was skipped to keep a lone line off the top of `page`.
    fn widow_avoided(&mut self, _page: usize, _line_index: usize) {}

    /// `line` was pulled from the bottom of page `page - 1` onto the top of `page`.
    fn orphan_moved(&mut self, _page: usize, _line: &str) {}

    /// A line inside the TOC body that matches no entry.
    fn unresolved_toc_entry(&mut self, _line: &str) {}

    /// A TOC entry that no section header ever filled in.
    fn toc_left_unfilled(&mut self, _key: &str) {}
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Diagnostics for Silent {}

/// Forwards to `tracing`: layout decisions at debug, TOC problems at warn.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceDiagnostics;

impl Diagnostics for TraceDiagnostics {
    fn widow_avoided(&mut self, page: usize, line_index: usize) {
        debug!(page, line = line_index + 1, "avoided widow");
    }

    fn orphan_moved(&mut self, page: usize, line: &str) {
        debug!(page, line, "moved orphan");
    }

    fn unresolved_toc_entry(&mut self, line: &str) {
        warn!(line, "toc entry matches no section");
    }

    fn toc_left_unfilled(&mut self, key: &str) {
        warn!(key, "no section header found for toc entry");
    }
}
