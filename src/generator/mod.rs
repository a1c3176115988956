//! Suggestion generator
//!
//! Turns a complete selection set into a prompt, sends it to the injected
//! text-generation provider once, and parses the reply into problems.

pub mod parser;
pub mod prompt;

pub use parser::parse_suggestions;
pub use prompt::{build_prompt, SUGGESTION_COUNT};

use std::sync::Arc;

use crate::api::AiProvider;
use crate::error::GenerationError;
use crate::wizard::SelectionSet;

/// Generates problem suggestions through an `AiProvider`
#[derive(Clone)]
pub struct SuggestionGenerator {
    provider: Arc<dyn AiProvider>,
}

impl SuggestionGenerator {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    /// Name of the backing provider (e.g., "gemini")
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Model the backing provider sends requests to
    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Request suggestions for `selections`.
    ///
    /// One call to the provider, no retries. Provider errors keep their
    /// message; a missing or blank reply is a `GenerationError` too.
    pub async fn generate(&self, selections: &SelectionSet) -> Result<Vec<String>, GenerationError> {
        let prompt = build_prompt(selections);
        tracing::info!(
            provider = self.provider.name(),
            model = self.provider.model(),
            "Requesting problem suggestions"
        );
        tracing::debug!(prompt = %prompt, "Generation prompt");

        let text = self.provider.generate(&prompt).await.map_err(|e| {
            tracing::warn!(error = %e, "Text generation failed");
            GenerationError::from(e)
        })?;

        let Some(text) = text else {
            tracing::warn!("Text generation returned no text");
            return Err(GenerationError::NoText);
        };

        let suggestions = parse_suggestions(&text)?;
        tracing::info!(count = suggestions.len(), "Parsed problem suggestions");
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider returning a canned reply and recording prompts
    struct CannedProvider {
        reply: Result<Option<String>, ApiError>,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedProvider {
        fn new(reply: Result<Option<String>, ApiError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl AiProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned-1"
        }

        fn is_configured(&self) -> bool {
            true
        }

        async fn generate(&self, prompt: &str) -> Result<Option<String>, ApiError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone()
        }
    }

    fn selections() -> SelectionSet {
        SelectionSet {
            focus: "problem".to_string(),
            industry: "Banking".to_string(),
            sub_industry: "Asset Management".to_string(),
            technology: "Blockchain Technology".to_string(),
            business_model: "Freemium".to_string(),
            audience: "Farmers".to_string(),
            market_segment: "Niche".to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_parses_reply() {
        let provider = CannedProvider::new(Ok(Some("1. Alpha\n2. Beta\n".to_string())));
        let generator = SuggestionGenerator::new(provider.clone());

        let suggestions = generator.generate(&selections()).await.unwrap();

        assert_eq!(suggestions, vec!["Alpha", "Beta"]);
        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Asset Management"));
    }

    #[tokio::test]
    async fn test_generate_no_text_fails() {
        let generator = SuggestionGenerator::new(CannedProvider::new(Ok(None)));
        assert_eq!(
            generator.generate(&selections()).await.unwrap_err(),
            GenerationError::NoText
        );
    }

    #[tokio::test]
    async fn test_generate_blank_text_fails() {
        let generator = SuggestionGenerator::new(CannedProvider::new(Ok(Some("\n\n".to_string()))));
        assert_eq!(
            generator.generate(&selections()).await.unwrap_err(),
            GenerationError::EmptySuggestions
        );
    }

    #[tokio::test]
    async fn test_generate_passes_provider_error_message_through() {
        let err = ApiError::http("canned", 500, "internal");
        let expected = err.to_string();
        let generator = SuggestionGenerator::new(CannedProvider::new(Err(err)));

        match generator.generate(&selections()).await.unwrap_err() {
            GenerationError::Service(message) => assert_eq!(message, expected),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_provider_name() {
        let generator = SuggestionGenerator::new(CannedProvider::new(Ok(None)));
        assert_eq!(generator.provider_name(), "canned");
    }
}
