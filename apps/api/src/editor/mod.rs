// Adapter around the pure content model: holds the current document, applies
// commands, fans changes out to autosave, and serves the HTTP surface.

pub mod autosave;
pub mod handlers;
pub mod session;

pub use autosave::spawn_autosave;
pub use session::EditorSession;
