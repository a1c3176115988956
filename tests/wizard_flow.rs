//! End-to-end wizard flow against a scripted text-generation provider

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ideagen::api::{AiProvider, ApiError};
use ideagen::{GenerationError, SuggestionGenerator, WizardPhase, WizardState, WizardStep};

/// Provider that records every prompt and answers with a fixed reply
struct ScriptedProvider {
    reply: Result<Option<String>, ApiError>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new(reply: Result<Option<String>, ApiError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-1"
    }

    fn is_configured(&self) -> bool {
        true
    }

    async fn generate(&self, prompt: &str) -> Result<Option<String>, ApiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}

const SELECTIONS: [(WizardStep, &str); 7] = [
    (WizardStep::Focus, "problem"),
    (WizardStep::Industry, "Healthcare"),
    (WizardStep::SubIndustry, "Dental Care"),
    (WizardStep::Technology, "Artificial Intelligence (AI)"),
    (WizardStep::BusinessModel, "SaaS"),
    (WizardStep::Audience, "General Public"),
    (WizardStep::MarketSegment, "Global"),
];

fn ten_numbered_lines() -> String {
    (1..=10)
        .map(|i| format!("{i}. Problem number {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drive the controller through all seven steps and the generator once
async fn run_wizard(provider: Arc<ScriptedProvider>) -> WizardState {
    let generator = SuggestionGenerator::new(provider);
    let mut state = WizardState::new();
    let mut request = None;

    for (i, (step, value)) in SELECTIONS.iter().enumerate() {
        assert_eq!(state.cursor() as usize, i + 1);
        let transition = state.select_option(*step, *value).unwrap();
        state = transition.state;
        request = transition.request;
    }

    assert!(state.is_loading());
    let request = request.expect("last selection starts generation");
    let outcome = generator.generate(&request.selections).await;
    state.complete_generation(request.id, outcome)
}

#[tokio::test]
async fn test_documented_selection_set_yields_ten_problems() {
    let provider = ScriptedProvider::new(Ok(Some(ten_numbered_lines())));

    let state = run_wizard(provider.clone()).await;

    assert_eq!(state.cursor(), 8);
    assert_eq!(state.step, WizardStep::Results);
    assert_eq!(state.phase, WizardPhase::Results);
    assert_eq!(state.suggestions.len(), 10);
    assert_eq!(state.suggestions[0], "Problem number 1");
    assert_eq!(state.suggestions[9], "Problem number 10");
    assert!(state.error.is_none());

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 1, "generator is invoked exactly once");
    for (_, value) in SELECTIONS {
        assert!(prompts[0].contains(value), "prompt is missing {value}");
    }
}

#[tokio::test]
async fn test_service_failure_lands_in_error_until_reset() {
    let provider = ScriptedProvider::new(Err(ApiError::rate_limited("scripted", Some(20))));

    let state = run_wizard(provider).await;

    assert_eq!(state.phase, WizardPhase::Error);
    assert_eq!(
        state.error.as_deref(),
        Some("scripted: Rate limited - retry after 20s")
    );
    assert!(state.suggestions.is_empty());

    // Back is disabled in the error phase
    assert_eq!(state.go_back(), state);

    let state = state.reset();
    assert_eq!(state.cursor(), 1);
    assert_eq!(state.phase, WizardPhase::Selecting);
    assert!(state.selections.is_empty());
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_blank_reply_is_a_generation_error() {
    let provider = ScriptedProvider::new(Ok(Some("\n   \n\n".to_string())));

    let state = run_wizard(provider).await;

    assert_eq!(state.phase, WizardPhase::Error);
    assert_eq!(
        state.error,
        Some(GenerationError::EmptySuggestions.to_string())
    );
}

#[tokio::test]
async fn test_back_from_results_keeps_everything_and_can_regenerate() {
    let provider = ScriptedProvider::new(Ok(Some(ten_numbered_lines())));
    let generator = SuggestionGenerator::new(provider.clone());

    let state = run_wizard(provider.clone()).await;
    let back = state.go_back();
    assert_eq!(back.cursor(), 7);
    assert_eq!(back.selections, state.selections);

    let transition = back
        .select_option(WizardStep::MarketSegment, "Emerging")
        .unwrap();
    let request = transition.request.unwrap();
    assert_eq!(request.selections.market_segment, "Emerging");

    let outcome = generator.generate(&request.selections).await;
    let state = transition.state.complete_generation(request.id, outcome);
    assert_eq!(state.cursor(), 8);
    assert_eq!(provider.prompts().len(), 2);
}
