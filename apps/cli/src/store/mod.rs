//! Collection persistence.

pub mod error;

pub use error::StoreError;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use verse_core::Collection;

type Result<T> = std::result::Result<T, StoreError>;

/// Storage for the passage collection.
pub trait CollectionStore {
    /// Load the collection. A store with nothing saved yields a fresh one.
    fn load(&self) -> Result<Collection>;
    fn save(&self, collection: &Collection) -> Result<()>;
}

/// Default location of the collection file.
pub fn default_collection_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("yamp")
        .join("collection.json")
}

/// Collection stored as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CollectionStore for JsonFileStore {
    fn load(&self) -> Result<Collection> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no collection file, starting fresh");
                return Ok(Collection::new());
            }
            Err(e) => return Err(e.into()),
        };

        let collection = Collection::from_json(&content)?;
        tracing::info!(
            path = %self.path.display(),
            passages = collection.passages().len(),
            "loaded collection"
        );
        Ok(collection)
    }

    fn save(&self, collection: &Collection) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = collection.to_json()?;
        // Replace atomically via a sibling temp file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::info!(
            path = %self.path.display(),
            passages = collection.passages().len(),
            "saved collection"
        );
        Ok(())
    }
}
