use std::collections::HashMap;

use super::NoteIndex;
use crate::model::NoteMeta;

impl NoteIndex {
    /// Look up one note by slug.
    pub fn by_slug(&self, slug: &str) -> Option<&NoteMeta> {
        self.slug_map.get(slug).map(|&pos| &self.notes[pos])
    }

    /// The previous (newer) and next (older) notes around `slug` in index
    /// order, for navigation links. Unknown slugs have no neighbors.
    pub fn neighbors(&self, slug: &str) -> (Option<&NoteMeta>, Option<&NoteMeta>) {
        let Some(&pos) = self.slug_map.get(slug) else {
            return (None, None);
        };
        let prev = pos.checked_sub(1).map(|p| &self.notes[p]);
        let next = self.notes.get(pos + 1);
        (prev, next)
    }

    /// Notes whose title, description, or any tag contains `query`,
    /// case-insensitively. An empty query matches everything. Index order
    /// is preserved.
    pub fn search(&self, query: &str) -> Vec<&NoteMeta> {
        if query.is_empty() {
            return self.notes.iter().collect();
        }

        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&needle)
                    || note.description.to_lowercase().contains(&needle)
                    || note
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Notes carrying `tag` exactly, compared case-sensitively. The tag
    /// may arrive percent-encoded from a URL path segment; an encoding
    /// that does not decode is compared as-is.
    pub fn with_tag(&self, tag: &str) -> Vec<&NoteMeta> {
        let tag = urlencoding::decode(tag).unwrap_or_else(|_| tag.into());
        self.notes
            .iter()
            .filter(|note| note.tags.iter().any(|t| t.as_str() == &*tag))
            .collect()
    }

    /// Every distinct tag with its note count, most used first, ties by
    /// name.
    pub fn tags(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for note in &self.notes {
            for tag in &note.tags {
                *counts.entry(tag.as_str()).or_default() += 1;
            }
        }

        let mut tags: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        tags
    }
}
