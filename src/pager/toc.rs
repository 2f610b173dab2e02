use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::document::Document;

pub const TOC_HEADING: &str = "Table of Contents";

/// Squeeze out the spaces so wrapped or re-indented entries still compare equal.
pub fn normalize(line: &str) -> String {
    line.chars().filter(|&c| c != ' ').collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    BeforeToc,
    AfterHeader,
    InToc,
}

/// The normalised TOC entries, in document order. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocIndex {
    keys: Vec<String>,
}

impl TocIndex {
    /// Collect the block of lines following the "Table of Contents" heading,
    /// from its first non-blank line up to the next blank one.
    pub fn locate(doc: &Document) -> Option<Self> {
        let mut state = Scan::BeforeToc;
        let mut entries: Vec<&str> = Vec::new();

        for line in doc.lines() {
            match state {
                Scan::BeforeToc => {
                    if line == TOC_HEADING {
                        state = Scan::AfterHeader;
                    }
                }
                Scan::AfterHeader => {
                    if !line.is_empty() {
                        entries.push(line);
                        state = Scan::InToc;
                    }
                }
                Scan::InToc => {
                    if line.is_empty() {
                        break;
                    }
                    entries.push(line);
                }
            }
        }

        if entries.is_empty() {
            return None;
        }

        let mut seen = HashSet::new();
        let keys: Vec<String> = entries
            .into_iter()
            .map(normalize)
            .filter(|k| seen.insert(k.clone()))
            .collect();
        debug!(entries = keys.len(), "located table of contents");
        Some(TocIndex { keys })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}

/// What the table knows about a given line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocSlot {
    /// Not a TOC entry at all.
    Missing,
    /// A TOC entry whose section has not been seen yet.
    Unresolved,
    Page(usize),
}

/// TOC entries plus the page each one was found on.
#[derive(Debug, Clone)]
pub struct TocTable {
    index: TocIndex,
    pages: HashMap<String, usize>,
}

impl TocTable {
    pub fn new(index: TocIndex) -> Self {
        TocTable {
            index,
            pages: HashMap::new(),
        }
    }

    pub fn index(&self) -> &TocIndex {
        &self.index
    }

    pub fn lookup(&self, line: &str) -> TocSlot {
        let key = normalize(line);
        match self.pages.get(&key) {
            Some(&page) => TocSlot::Page(page),
            None if self.index.contains(&key) => TocSlot::Unresolved,
            None => TocSlot::Missing,
        }
    }

    /// Record `page` for the entry matching a section header line and return
    /// how many entries were updated.
    ///
    /// An exact match on the normalised line wins. Otherwise every entry that
    /// starts with the header's first word is updated; this catches entries
    /// that were wrapped or shortened in the TOC, at the cost of also hitting
    /// unrelated entries that share that prefix.
    pub fn assign(&mut self, header: &str, page: usize) -> usize {
        let key = normalize(header);
        if self.index.contains(&key) {
            self.pages.insert(key, page);
            return 1;
        }

        let Some(prefix) = header.split_whitespace().next() else {
            return 0;
        };
        let mut hits = 0;
        for k in &self.index.keys {
            if k.starts_with(prefix) {
                self.pages.insert(k.clone(), page);
                hits += 1;
            }
        }
        hits
    }

    /// Entries no section header ever resolved, in TOC order.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.index
            .keys
            .iter()
            .filter(|k| !self.pages.contains_key(*k))
            .map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved().next().is_none()
    }
}
