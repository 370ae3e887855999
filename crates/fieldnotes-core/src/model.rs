use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parsed metadata block of one note document.
///
/// Every field is optional in the source document: `title` and
/// `description` default to the empty string, `tags` to an empty list,
/// `date` to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Publication date as written, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
}

/// One entry in the note index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteMeta {
    /// Unique identifier, derived from the note's directory name.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub date: Option<String>,
}

impl NoteMeta {
    pub(crate) fn from_frontmatter(slug: String, frontmatter: Frontmatter) -> Self {
        Self {
            slug,
            title: frontmatter.title,
            description: frontmatter.description,
            tags: frontmatter.tags,
            date: frontmatter.date,
        }
    }

    /// Sort key for date-descending ordering. Missing or unparseable
    /// dates yield `None` and sort after every dated entry.
    pub(crate) fn date_key(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
    }
}

/// A fully loaded note: parsed metadata plus body content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDocument {
    pub slug: String,
    pub frontmatter: Frontmatter,
    /// Body text after the metadata block.
    pub content: String,
}
