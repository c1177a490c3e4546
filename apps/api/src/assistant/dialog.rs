//! Bullet-point suggestion dialog.
//!
//! Idle → Loading → Success | Failed → Idle. Each request gets a ticket; a result is
//! applied only if its ticket is still current, so results for a closed dialog or a
//! superseded request are dropped instead of reaching a view that moved on.

use serde::Serialize;
use tracing::debug;

use crate::assistant::{AssistantError, SuggestionProvider};
use crate::models::suggestion::AiSuggestion;

pub const GENERIC_FAILURE: &str = "Failed to generate suggestions. Please try again.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum DialogState {
    Idle,
    Loading,
    Success(Vec<AiSuggestion>),
    Failed(String),
}

/// Identifies one generate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct SuggestionDialog {
    state: DialogState,
    current: Option<Ticket>,
    next_ticket: u64,
}

impl Default for SuggestionDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionDialog {
    pub fn new() -> Self {
        Self {
            state: DialogState::Idle,
            current: None,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    /// Starts a request, superseding any one still in flight.
    pub fn request(&mut self) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.current = Some(ticket);
        self.state = DialogState::Loading;
        ticket
    }

    /// Applies a finished request. Returns false when the result was discarded.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<AiSuggestion>, AssistantError>,
    ) -> bool {
        if self.current != Some(ticket) || self.state != DialogState::Loading {
            debug!("Discarding stale suggestion result {:?}", ticket);
            return false;
        }

        self.state = match result {
            Ok(suggestions) => DialogState::Success(suggestions),
            Err(AssistantError::InvalidInput(msg)) => DialogState::Failed(msg),
            Err(AssistantError::GenerationFailed(detail)) => {
                debug!("Suggestion request failed: {detail}");
                DialogState::Failed(GENERIC_FAILURE.to_string())
            }
        };
        self.current = None;
        true
    }

    /// Closes the dialog. Any in-flight result will be discarded.
    pub fn close(&mut self) {
        self.state = DialogState::Idle;
        self.current = None;
    }

    /// Picks one offered suggestion, closes the dialog and hands back a copy of its
    /// text for the host section.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let text = match &self.state {
            DialogState::Success(suggestions) => suggestions.get(index)?.text.clone(),
            _ => return None,
        };
        self.close();
        Some(text)
    }

    /// One full round trip against `provider`.
    pub async fn generate(
        &mut self,
        provider: &dyn SuggestionProvider,
        job_title: &str,
        company_name: &str,
        job_description: Option<&str>,
    ) -> &DialogState {
        let ticket = self.request();
        let result = provider
            .generate_bullet_points(job_title, company_name, job_description)
            .await;
        self.resolve(ticket, result);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::MockSuggestionProvider;
    use async_trait::async_trait;

    use crate::assistant::cover_letter::CoverLetterProfile;
    use crate::models::suggestion::{AtsAnalysis, CoverLetter, Tone};

    struct FailingProvider;

    #[async_trait]
    impl SuggestionProvider for FailingProvider {
        async fn generate_bullet_points(
            &self,
            _job_title: &str,
            _company_name: &str,
            _job_description: Option<&str>,
        ) -> Result<Vec<AiSuggestion>, AssistantError> {
            Err(AssistantError::GenerationFailed("upstream 503".to_string()))
        }

        async fn generate_cover_letter(
            &self,
            _profile: &CoverLetterProfile,
            _job_description: &str,
            _tone: Tone,
        ) -> Result<CoverLetter, AssistantError> {
            Err(AssistantError::GenerationFailed("upstream 503".to_string()))
        }

        async fn analyze_resume_for_ats(
            &self,
            _resume_text: &str,
            _job_description: &str,
        ) -> Result<AtsAnalysis, AssistantError> {
            Err(AssistantError::GenerationFailed("upstream 503".to_string()))
        }

        async fn suggest_summary(&self) -> Result<AiSuggestion, AssistantError> {
            Err(AssistantError::GenerationFailed("upstream 503".to_string()))
        }
    }

    fn offered() -> Vec<AiSuggestion> {
        vec![
            AiSuggestion::new("first", 90, &[]),
            AiSuggestion::new("second", 80, &[]),
        ]
    }

    #[test]
    fn test_starts_idle() {
        assert_eq!(SuggestionDialog::new().state(), &DialogState::Idle);
    }

    #[test]
    fn test_request_moves_to_loading() {
        let mut dialog = SuggestionDialog::new();
        dialog.request();
        assert_eq!(dialog.state(), &DialogState::Loading);
    }

    #[test]
    fn test_resolve_success() {
        let mut dialog = SuggestionDialog::new();
        let ticket = dialog.request();
        assert!(dialog.resolve(ticket, Ok(offered())));
        assert_eq!(dialog.state(), &DialogState::Success(offered()));
    }

    #[test]
    fn test_invalid_input_surfaces_its_message() {
        let mut dialog = SuggestionDialog::new();
        let ticket = dialog.request();
        dialog.resolve(
            ticket,
            Err(AssistantError::InvalidInput("Please enter a job title".to_string())),
        );
        assert_eq!(
            dialog.state(),
            &DialogState::Failed("Please enter a job title".to_string())
        );
    }

    #[test]
    fn test_generation_failure_surfaces_generic_message() {
        let mut dialog = SuggestionDialog::new();
        let ticket = dialog.request();
        dialog.resolve(
            ticket,
            Err(AssistantError::GenerationFailed("socket closed".to_string())),
        );
        assert_eq!(dialog.state(), &DialogState::Failed(GENERIC_FAILURE.to_string()));
    }

    #[test]
    fn test_result_after_close_is_discarded() {
        let mut dialog = SuggestionDialog::new();
        let ticket = dialog.request();
        dialog.close();
        assert!(!dialog.resolve(ticket, Ok(offered())));
        assert_eq!(dialog.state(), &DialogState::Idle);
    }

    #[test]
    fn test_superseded_result_is_discarded() {
        let mut dialog = SuggestionDialog::new();
        let first = dialog.request();
        let second = dialog.request();
        assert_ne!(first, second);

        assert!(!dialog.resolve(first, Ok(offered())));
        assert_eq!(dialog.state(), &DialogState::Loading);

        assert!(dialog.resolve(second, Ok(vec![])));
        assert_eq!(dialog.state(), &DialogState::Success(vec![]));
    }

    #[test]
    fn test_ticket_resolves_once() {
        let mut dialog = SuggestionDialog::new();
        let ticket = dialog.request();
        assert!(dialog.resolve(ticket, Ok(offered())));
        assert!(!dialog.resolve(ticket, Ok(vec![])));
        assert_eq!(dialog.state(), &DialogState::Success(offered()));
    }

    #[test]
    fn test_select_returns_text_and_closes() {
        let mut dialog = SuggestionDialog::new();
        let ticket = dialog.request();
        dialog.resolve(ticket, Ok(offered()));

        assert_eq!(dialog.select(1), Some("second".to_string()));
        assert_eq!(dialog.state(), &DialogState::Idle);
    }

    #[test]
    fn test_select_out_of_range_keeps_dialog_open() {
        let mut dialog = SuggestionDialog::new();
        let ticket = dialog.request();
        dialog.resolve(ticket, Ok(offered()));

        assert_eq!(dialog.select(5), None);
        assert_eq!(dialog.state(), &DialogState::Success(offered()));
    }

    #[test]
    fn test_select_outside_success_is_none() {
        let mut dialog = SuggestionDialog::new();
        assert_eq!(dialog.select(0), None);
        dialog.request();
        assert_eq!(dialog.select(0), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_round_trip_with_mock() {
        let provider = MockSuggestionProvider::default();
        let mut dialog = SuggestionDialog::new();
        let state = dialog
            .generate(&provider, "Backend Developer", "Acme", None)
            .await
            .clone();
        match state {
            DialogState::Success(suggestions) => assert_eq!(suggestions.len(), 3),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_with_blank_title_fails_inline() {
        let provider = MockSuggestionProvider::default();
        let mut dialog = SuggestionDialog::new();
        let state = dialog.generate(&provider, " ", "Acme", None).await;
        assert_eq!(state, &DialogState::Failed("Please enter a job title".to_string()));
    }

    #[tokio::test]
    async fn test_generate_with_failing_backend_is_retryable() {
        let mut dialog = SuggestionDialog::new();
        let state = dialog.generate(&FailingProvider, "Engineer", "Acme", None).await;
        assert_eq!(state, &DialogState::Failed(GENERIC_FAILURE.to_string()));

        // a new request starts over
        dialog.request();
        assert_eq!(dialog.state(), &DialogState::Loading);
    }
}
