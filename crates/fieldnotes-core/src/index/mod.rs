use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::frontmatter;
use crate::model::NoteMeta;
use crate::vfs::DocumentStore;

mod queries;


/// The built note index: every parseable note under the root, sorted by
/// date descending. Undated notes come last; notes sharing a date order
/// by slug, so the output is deterministic across storage backends.
#[derive(Debug, Clone, Default)]
pub struct NoteIndex {
    pub(crate) notes: Vec<NoteMeta>,
    pub(crate) slug_map: HashMap<String, usize>,
}

impl NoteIndex {
    pub(crate) fn new(mut notes: Vec<NoteMeta>) -> Self {
        notes.sort_by(|a, b| {
            b.date_key()
                .cmp(&a.date_key())
                .then_with(|| a.slug.cmp(&b.slug))
        });
        let slug_map = notes
            .iter()
            .enumerate()
            .map(|(pos, note)| (note.slug.clone(), pos))
            .collect();
        Self { notes, slug_map }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoteMeta> {
        self.notes.iter()
    }

    pub fn as_slice(&self) -> &[NoteMeta] {
        &self.notes
    }
}

/// Builds a [`NoteIndex`] from a document store.
///
/// Bridges I/O ([`DocumentStore`]) and the sorted in-memory index. The
/// builder is stateless per invocation: repeated builds over unchanged
/// input give identical output.
pub struct IndexBuilder<'a> {
    store: &'a dyn DocumentStore,
    root: PathBuf,
    document_file: String,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(store: &'a dyn DocumentStore, root: &Path, document_file: &str) -> Self {
        Self {
            store,
            root: root.to_path_buf(),
            document_file: document_file.to_string(),
        }
    }

    /// Builds the full index. Unreadable or unparseable documents are
    /// skipped with a warning, and an unreadable root yields an empty
    /// index: partial success always beats total failure here.
    pub fn build(&self) -> NoteIndex {
        match self.try_build() {
            Ok(index) => index,
            Err(err) => {
                log::warn!("[INDEX] {}", err);
                NoteIndex::default()
            }
        }
    }

    /// Like [`build`](Self::build), but propagates a root listing failure
    /// instead of mapping it to an empty index.
    pub fn try_build(&self) -> Result<NoteIndex> {
        let slugs = self
            .store
            .list_children(&self.root)
            .map_err(|source| Error::RootUnreadable {
                path: self.root.clone(),
                source,
            })?;

        let mut notes = Vec::with_capacity(slugs.len());

        for slug in slugs {
            match self.build_one(&slug) {
                Ok(meta) => notes.push(meta),
                Err(err) => log::warn!("[INDEX] skipping note: {}", err),
            }
        }

        log::info!("[INDEX] indexed {} notes under {:?}", notes.len(), self.root);
        Ok(NoteIndex::new(notes))
    }

    fn build_one(&self, slug: &str) -> Result<NoteMeta> {
        let text = self
            .store
            .read_document(&self.root, slug, &self.document_file)
            .map_err(|source| Error::DocumentUnreadable {
                slug: slug.to_string(),
                source,
            })?;

        let parsed = frontmatter::parse(&text).map_err(|source| Error::MetadataUnparseable {
            slug: slug.to_string(),
            source,
        })?;

        Ok(NoteMeta::from_frontmatter(
            slug.to_string(),
            parsed.frontmatter,
        ))
    }
}
