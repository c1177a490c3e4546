// Mock writing assistant: bullet points, cover letters, summary and ATS keyword analysis.
// Every backend sits behind `SuggestionProvider`; handlers never pick canned text directly.

pub mod ats;
pub mod bullets;
pub mod cover_letter;
pub mod dialog;
pub mod handlers;
pub mod provider;

use thiserror::Error;

pub use provider::{MockSuggestionProvider, SuggestionProvider};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    /// A required field was missing or blank. The request was never sent.
    #[error("{0}")]
    InvalidInput(String),

    /// The backend did not produce a result. Safe to retry.
    #[error("{0}")]
    GenerationFailed(String),
}
