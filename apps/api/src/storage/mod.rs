// Per-device persistence: a flat key-value string store holding the serialized document.
// The content model knows nothing about this; the editor session saves through it.

pub mod file;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::models::defaults::default_document;
use crate::models::ResumeDocument;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the serialized document.
pub const DOCUMENT_KEY: &str = "resume_data";
/// Key holding the version of the app that last wrote the document.
pub const VERSION_KEY: &str = "resume_app_version";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub async fn save_document(
    store: &dyn KeyValueStore,
    doc: &ResumeDocument,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(doc)?;
    store.set(DOCUMENT_KEY, &raw).await?;
    store.set(VERSION_KEY, env!("CARGO_PKG_VERSION")).await?;
    Ok(())
}

/// Reads the saved document, if any. The display order is repaired when it
/// is not a permutation of the sections.
pub async fn load_document(
    store: &dyn KeyValueStore,
) -> Result<Option<ResumeDocument>, StorageError> {
    let Some(raw) = store.get(DOCUMENT_KEY).await? else {
        return Ok(None);
    };
    let mut doc: ResumeDocument = serde_json::from_str(&raw)?;
    if doc.repair_section_order() {
        warn!("Saved document {} had an inconsistent section order; repaired", doc.id);
    }
    Ok(Some(doc))
}

/// The saved document, or the default one when nothing is saved or the
/// saved state cannot be read.
pub async fn restore_or_default(store: &dyn KeyValueStore) -> ResumeDocument {
    match load_document(store).await {
        Ok(Some(doc)) => {
            info!("Resume loaded from saved data ({} sections)", doc.sections.len());
            doc
        }
        Ok(None) => {
            info!("No saved resume; starting from the default document");
            default_document()
        }
        Err(e) => {
            error!("Failed to load saved resume, falling back to defaults: {e}");
            default_document()
        }
    }
}

pub async fn clear(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(DOCUMENT_KEY).await?;
    store.remove(VERSION_KEY).await?;
    Ok(())
}
