use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::models::ResumeDocument;
use crate::storage::{save_document, KeyValueStore};

/// Persists the document every time the session publishes a change.
///
/// Writes are best-effort: a failed save is logged and the next change tries
/// again. The task ends when the session is dropped.
pub fn spawn_autosave(
    mut rx: watch::Receiver<Arc<ResumeDocument>>,
    store: Arc<dyn KeyValueStore>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let doc = rx.borrow_and_update().clone();
            match save_document(store.as_ref(), &doc).await {
                Ok(()) => debug!("Autosaved resume {} ({})", doc.id, doc.updated_at),
                Err(e) => error!("Autosave failed: {e}"),
            }
        }
        info!("Editor session closed; autosave stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fields::PersonalField;
    use crate::content::Command;
    use crate::editor::session::EditorSession;
    use crate::models::defaults::default_document;
    use crate::storage::{load_document, MemoryStore};

    #[tokio::test]
    async fn test_change_is_persisted() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let session = EditorSession::new(default_document());
        let handle = spawn_autosave(session.subscribe(), store.clone());

        session.apply(&Command::UpdatePersonalInfo {
            field: PersonalField::Email,
            value: "sam@example.com".to_string(),
        });
        drop(session);
        handle.await.unwrap();

        let saved = load_document(store.as_ref()).await.unwrap().unwrap();
        assert_eq!(saved.personal_info.email, "sam@example.com");
    }

    #[tokio::test]
    async fn test_unchanged_document_is_not_written() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let session = EditorSession::new(default_document());
        let handle = spawn_autosave(session.subscribe(), store.clone());

        session.apply(&Command::ToggleSectionVisibility {
            section_id: "nope".to_string(),
        });
        drop(session);
        handle.await.unwrap();

        assert!(load_document(store.as_ref()).await.unwrap().is_none());
    }
}
