use std::sync::Arc;

use crate::config::Config;
use crate::editor::EditorSession;
use crate::storage::KeyValueStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<EditorSession>,
    /// Backing store; the reset handler clears it directly.
    pub store: Arc<dyn KeyValueStore>,
    pub config: Config,
}
