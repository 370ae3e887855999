//! Fieldnotes Core Library
//!
//! The notes engine: frontmatter parsing, index building, search,
//! pagination, and highlighting. All I/O goes through the `vfs`
//! document store; everything above it is pure logic.

pub mod browse;
pub mod cache;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod highlight;
pub mod index;
pub mod model;
pub mod notebook;
pub mod page;
pub mod vfs;

pub use browse::NoteBrowser;
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use highlight::{highlight, Segment};
pub use index::{IndexBuilder, NoteIndex};
pub use model::{Frontmatter, NoteDocument, NoteMeta};
pub use notebook::Notebook;
pub use page::Pager;
pub use vfs::{DocumentStore, FsDocumentStore};
