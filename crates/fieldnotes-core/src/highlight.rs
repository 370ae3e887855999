use regex::RegexBuilder;

use crate::error::Error;

/// One piece of display text, either outside or inside a query match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Match(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Match(text) => text,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Segment::Match(_))
    }
}

/// Split `text` into alternating plain/matched segments on every
/// case-insensitive occurrence of `query`, preserving every character in
/// original order. Adjacent occurrences stay separate `Match` segments.
///
/// An empty query yields the whole text as one plain segment. The matcher
/// is built from the query verbatim, so a query carrying reserved pattern
/// syntax (`+`, `*`, ...) fails with [`Error::InvalidPattern`] instead of
/// being silently reinterpreted; the caller decides whether to sanitize
/// and retry.
pub fn highlight(text: &str, query: &str) -> Result<Vec<Segment>, Error> {
    if query.is_empty() {
        return Ok(vec![Segment::Plain(text.to_string())]);
    }

    let pattern = RegexBuilder::new(query)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::InvalidPattern {
            query: query.to_string(),
            source,
        })?;

    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::Plain(text[cursor..found.start()].to_string()));
        }
        if !found.as_str().is_empty() {
            segments.push(Segment::Match(found.as_str().to_string()));
        }
        cursor = found.end();
    }

    if cursor < text.len() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }

    Ok(segments)
}
