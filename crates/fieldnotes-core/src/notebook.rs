use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::TtlCell;
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::frontmatter;
use crate::index::{IndexBuilder, NoteIndex};
use crate::model::NoteDocument;
use crate::vfs::{DocumentStore, FsDocumentStore};

/// The Notebook acts as the high-level Facade for the notes engine.
///
/// # Architecture Decision: Action vs Query Separation
///
/// *   **Actions (Build/Load)**: Unified in `Notebook`.
///     Everything that touches the document store — building the index,
///     loading a single document, invalidating the cache — SHOULD happen
///     through methods here. This keeps I/O and cache bookkeeping behind
///     a single entry point.
///
/// *   **Queries (Read)**: Access the returned [`NoteIndex`] directly.
///     Search, tag filtering, and neighbor lookups are read-only views
///     over the built index and DO NOT need to be wrapped in `Notebook`.
///     This avoids boilerplate and keeps the API surface clean.
pub struct Notebook {
    store: Arc<dyn DocumentStore>,
    root: PathBuf,
    config: SiteConfig,
    index_cache: TtlCell<NoteIndex>,
}

impl Notebook {
    /// Open a notebook over the real filesystem. The notes live under
    /// `site_root/<config.notes_dir>`.
    pub fn open(site_root: &Path, config: SiteConfig) -> Self {
        Self::with_store(Arc::new(FsDocumentStore), site_root, config)
    }

    /// Open a notebook over any document store. Tests substitute
    /// in-memory backends here.
    pub fn with_store(
        store: Arc<dyn DocumentStore>,
        site_root: &Path,
        config: SiteConfig,
    ) -> Self {
        let root = site_root.join(&config.notes_dir);
        let index_cache = TtlCell::new(Duration::from_secs(config.cache_ttl_secs));
        Self {
            store,
            root,
            config,
            index_cache,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Directory the note directories live under.
    pub fn notes_root(&self) -> &Path {
        &self.root
    }

    // ------------------------------------------------------------------------
    // Index building
    // ------------------------------------------------------------------------

    /// The built index, served from cache while it is fresh.
    pub fn index(&self) -> Arc<NoteIndex> {
        if let Some(index) = self.index_cache.get() {
            log::debug!("[NOTEBOOK] serving cached index");
            return index;
        }
        self.rebuild()
    }

    /// Build the index from the store, bypassing and refreshing the cache.
    pub fn rebuild(&self) -> Arc<NoteIndex> {
        let index = Arc::new(
            IndexBuilder::new(&*self.store, &self.root, &self.config.document_file).build(),
        );
        self.index_cache.store(Arc::clone(&index));
        index
    }

    /// Drop the cached index; the next [`index`](Self::index) call rebuilds.
    pub fn invalidate(&self) {
        self.index_cache.invalidate();
    }

    // ------------------------------------------------------------------------
    // Document loading
    // ------------------------------------------------------------------------

    /// Load one note in full: parsed frontmatter plus body content.
    ///
    /// A slug with no directory on disk is [`Error::SlugNotFound`]; a
    /// document that exists but cannot be read or parsed keeps its usual
    /// error.
    pub fn document(&self, slug: &str) -> Result<NoteDocument> {
        let text = self
            .store
            .read_document(&self.root, slug, &self.config.document_file)
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => Error::SlugNotFound {
                    slug: slug.to_string(),
                },
                _ => Error::DocumentUnreadable {
                    slug: slug.to_string(),
                    source,
                },
            })?;

        let parsed = frontmatter::parse(&text).map_err(|source| Error::MetadataUnparseable {
            slug: slug.to_string(),
            source,
        })?;

        let content = parsed.body(&text).to_string();
        Ok(NoteDocument {
            slug: slug.to_string(),
            frontmatter: parsed.frontmatter,
            content,
        })
    }
}
