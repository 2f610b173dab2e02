use std::sync::LazyLock;

use regex::Regex;

use super::document::Document;

static RFC_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Request for Comments: *(\d+)").unwrap());
static DATE_TAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.* 20\d\d$").unwrap());

/// Width of the right-hand column scanned for a publication date.
const DATE_TAIL_CHARS: usize = 15;

/// What the front matter tells us about the document. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub rfc_number: Option<String>,
    pub rfc_date: Option<String>,
    pub title: Option<String>,
}

impl Metadata {
    /// Scan the front matter up to and including the first indented line,
    /// which is taken as the title.
    pub fn extract(doc: &Document) -> Self {
        let mut meta = Metadata::default();

        for line in doc.lines() {
            if let Some(caps) = RFC_NUMBER_RE.captures(line) {
                meta.rfc_number = Some(caps[1].to_string());
            }

            let tail = date_tail(line);
            if DATE_TAIL_RE.is_match(tail) {
                meta.rfc_date = Some(tail.trim().to_string());
            }

            if line.starts_with(' ') {
                meta.title = Some(line.trim().to_string());
                break;
            }
        }

        meta
    }
}

/// The last `DATE_TAIL_CHARS` characters of a line.
fn date_tail(line: &str) -> &str {
    let start = line
        .char_indices()
        .rev()
        .nth(DATE_TAIL_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &line[start..]
}
