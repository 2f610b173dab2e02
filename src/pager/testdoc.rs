//! Document builders shared by the pager tests.

use super::document::Document;

/// `n` indented body lines, none of them blank.
pub fn filler(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("   body text line {i}")).collect()
}

#[derive(Debug, Default)]
pub struct DocBuilder {
    lines: Vec<String>,
}

impl DocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn blank(self) -> Self {
        self.line("")
    }

    pub fn text(mut self, n: usize) -> Self {
        let start = self.lines.len();
        self.lines
            .extend((start..start + n).map(|i| format!("   text at line {i}")));
        self
    }

    /// Heading, blank, one indented line per entry, blank.
    pub fn toc(mut self, entries: &[&str]) -> Self {
        self.lines.push("Table of Contents".to_string());
        self.lines.push(String::new());
        self.lines
            .extend(entries.iter().map(|e| format!("   {e}")));
        self.lines.push(String::new());
        self
    }

    pub fn build(self) -> Document {
        Document::from_lines(self.lines)
    }

    /// A TOC listing `sections` entries, then one section per entry made of a
    /// header and three paragraphs of uneven length.
    pub fn structured(sections: usize) -> Document {
        const PARAGRAPHS: [usize; 9] = [1, 4, 2, 7, 3, 1, 5, 2, 6];

        let titles: Vec<String> = (1..=sections)
            .map(|i| format!("{i}.  Section number {i}"))
            .collect();
        let entries: Vec<&str> = titles.iter().map(String::as_str).collect();

        let mut b = DocBuilder::new()
            .line("Abstract")
            .blank()
            .text(3)
            .blank()
            .toc(&entries);
        for (i, title) in titles.iter().enumerate() {
            b = b.line(title).blank();
            for j in 0..3 {
                b = b.text(PARAGRAPHS[(i * 3 + j) % PARAGRAPHS.len()]).blank();
            }
        }
        b.build()
    }
}

/// A TOC with two entries whose sections start on lines 80 and 140.
pub fn scenario_doc() -> Document {
    DocBuilder::new()
        .toc(&["1.  Introduction", "2.  Overview"]) // 0..=4
        .text(74) // 5..=78
        .blank()
        .line("1.  Introduction") // 80
        .blank()
        .text(57) // 82..=138
        .blank()
        .line("2.  Overview") // 140
        .blank()
        .text(58) // 142..=199
        .build()
}
