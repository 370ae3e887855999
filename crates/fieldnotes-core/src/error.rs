use std::io;
use std::path::PathBuf;

/// Convenience alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the notes engine.
///
/// Per-document problems (`DocumentUnreadable`, `MetadataUnparseable`) are
/// recoverable: the index builder logs them and moves on. The remaining
/// variants surface to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The notes root could not be listed. `IndexBuilder::build` swallows
    /// this and returns an empty index; `try_build` propagates it.
    #[error("notes root {path:?} is unreadable: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single note's document file could not be read.
    #[error("note '{slug}' is unreadable: {source}")]
    DocumentUnreadable {
        slug: String,
        #[source]
        source: io::Error,
    },

    /// A note's metadata block is missing or malformed.
    #[error("note '{slug}' has unparseable metadata: {source}")]
    MetadataUnparseable {
        slug: String,
        #[source]
        source: MetadataError,
    },

    /// A highlight query contained reserved pattern syntax.
    #[error("query {query:?} is not a valid match pattern: {source}")]
    InvalidPattern {
        query: String,
        #[source]
        source: regex::Error,
    },

    /// The requested slug is not in the index.
    #[error("no note with slug '{slug}'")]
    SlugNotFound { slug: String },
}

/// Why a metadata block failed to parse. Callers attach the owning slug
/// by wrapping this into [`Error::MetadataUnparseable`].
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("document has no metadata block")]
    MissingBlock,

    #[error("metadata block is not valid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}
