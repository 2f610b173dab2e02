/// The input text as an immutable list of lines with trailing whitespace removed.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines
            .into_iter()
            .map(|l| {
                let mut l: String = l.into();
                let keep = l.trim_end().len();
                l.truncate(keep);
                l
            })
            .collect();
        Document { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at `idx`, or `""` past either end.
    pub fn line(&self, idx: usize) -> &str {
        self.lines.get(idx).map(String::as_str).unwrap_or("")
    }

    /// The line `n` positions before `idx`, or `""` if that falls before the first line.
    pub fn before(&self, idx: usize, n: usize) -> &str {
        idx.checked_sub(n).map(|i| self.line(i)).unwrap_or("")
    }

    pub fn after(&self, idx: usize, n: usize) -> &str {
        idx.checked_add(n).map(|i| self.line(i)).unwrap_or("")
    }
}
