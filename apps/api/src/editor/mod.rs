// Resume editing: whole-value commands applied to an owned ResumeRecord.
// Every command returns the next record and its completeness, never a partial update.

pub mod commands;
pub mod handlers;

pub use commands::{apply_command, EditorCommand, EditorUpdate};
