use std::sync::Arc;

use crate::assistant::SuggestionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Backend for writing suggestions. Default: MockSuggestionProvider.
    pub assistant: Arc<dyn SuggestionProvider>,
}
