use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::content::Command;
use crate::models::defaults::default_document;
use crate::models::ResumeDocument;

/// Owns the current document and publishes every effective change.
///
/// Commands are applied through the pure content operations; the session only
/// swaps in the result and stamps `updated_at` when something actually changed.
pub struct EditorSession {
    tx: watch::Sender<Arc<ResumeDocument>>,
}

impl EditorSession {
    pub fn new(doc: ResumeDocument) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(doc));
        Self { tx }
    }

    pub fn current(&self) -> Arc<ResumeDocument> {
        self.tx.borrow().clone()
    }

    /// Receiver that wakes on every published change.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ResumeDocument>> {
        self.tx.subscribe()
    }

    /// Applies `command`; returns the resulting document and whether it changed.
    pub fn apply(&self, command: &Command) -> (Arc<ResumeDocument>, bool) {
        let changed = self.tx.send_if_modified(|current| {
            let mut next = command.apply(current);
            if next == **current {
                return false;
            }
            next.updated_at = Utc::now();
            *current = Arc::new(next);
            true
        });
        if changed {
            debug!("Command {} changed the document", command.name());
        } else {
            debug!("Command {} left the document unchanged", command.name());
        }
        (self.current(), changed)
    }

    /// Swaps in a whole document, e.g. an import.
    pub fn replace(&self, mut doc: ResumeDocument) -> Arc<ResumeDocument> {
        if doc.repair_section_order() {
            warn!("Imported document {} had an inconsistent section order; repaired", doc.id);
        }
        doc.updated_at = Utc::now();
        let doc = Arc::new(doc);
        self.tx.send_replace(doc.clone());
        doc
    }

    pub fn reset(&self) -> Arc<ResumeDocument> {
        info!("Resetting resume to the default document");
        self.replace(default_document())
    }
}
