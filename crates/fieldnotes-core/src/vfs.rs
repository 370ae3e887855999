use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Abstract interface over the note storage backend.
///
/// Each note is one directory under the root holding a single document
/// file. Any backend that can list those directories and read a document
/// satisfies the contract and is interchangeable with the filesystem.
pub trait DocumentStore: Send + Sync {
    /// List the names of the immediate child directories of `root`.
    fn list_children(&self, root: &Path) -> io::Result<Vec<String>>;

    /// Read the document file of the child directory `name`.
    fn read_document(&self, root: &Path, name: &str, file: &str) -> io::Result<String>;
}

/// Standard implementation of DocumentStore using std::fs and walkdir.
pub struct FsDocumentStore;

impl DocumentStore for FsDocumentStore {
    fn list_children(&self, root: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry?;
            if entry.file_type().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        names.sort();
        Ok(names)
    }

    fn read_document(&self, root: &Path, name: &str, file: &str) -> io::Result<String> {
        std::fs::read_to_string(root.join(name).join(file))
    }
}
