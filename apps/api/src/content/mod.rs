// Content model operations: pure transformations from one ResumeDocument to the next.
// Misses and rejected input return an equal document; nothing here raises.

pub mod commands;
pub mod custom_fields;
pub mod fields;
pub mod ids;
pub mod ops;

pub use commands::Command;
