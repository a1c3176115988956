//! AI Provider trait and implementations
//!
//! Supports Gemini (default) and Anthropic for one-shot text generation.

mod anthropic;
mod gemini;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::error::ConfigurationError;

/// Trait for text-generation providers
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Get the provider name (e.g., "gemini", "anthropic")
    fn name(&self) -> &str;

    /// Model used for requests
    fn model(&self) -> &str;

    /// Check if the provider has a credential
    fn is_configured(&self) -> bool;

    /// Send one prompt and return the reply text.
    ///
    /// `Ok(None)` means the service answered without any text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ApiError>;
}

/// Supported providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Anthropic,
}

impl ProviderKind {
    pub fn parse(name: &str) -> Result<Self, ConfigurationError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "anthropic" => Ok(ProviderKind::Anthropic),
            other => Err(ConfigurationError::UnknownProvider(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Anthropic => "anthropic",
        }
    }

    /// Environment variable holding the API key
    pub fn credential_env_var(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "IDEAGEN_GEMINI_API_KEY",
            ProviderKind::Anthropic => "IDEAGEN_ANTHROPIC_API_KEY",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini-1.5-pro",
            ProviderKind::Anthropic => "claude-3-5-haiku-latest",
        }
    }
}

/// Build the configured provider, reading its key from the process environment
pub fn build_provider(api: &ApiConfig) -> Result<Arc<dyn AiProvider>, ConfigurationError> {
    build_provider_with(api, |name| std::env::var(name).ok())
}

/// Build the configured provider with an explicit credential lookup
pub fn build_provider_with(
    api: &ApiConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Arc<dyn AiProvider>, ConfigurationError> {
    let kind = ProviderKind::parse(&api.provider)?;
    let env_var = kind.credential_env_var();

    let api_key = lookup(env_var)
        .filter(|k| !k.trim().is_empty())
        .ok_or(ConfigurationError::MissingCredential {
            provider: kind.name(),
            env_var,
        })?;

    let model = api
        .model
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| kind.default_model().to_string());
    let timeout = Duration::from_secs(api.timeout_secs);

    let client_error = |e: ApiError| ConfigurationError::Client {
        provider: kind.name(),
        message: e.to_string(),
    };

    let provider: Arc<dyn AiProvider> = match kind {
        ProviderKind::Gemini => {
            let mut provider = GeminiProvider::new(api_key, model, timeout).map_err(client_error)?;
            if let Some(base_url) = &api.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Arc::new(provider)
        }
        ProviderKind::Anthropic => {
            let mut provider = AnthropicProvider::new(api_key, model, api.max_tokens, timeout)
                .map_err(client_error)?;
            if let Some(base_url) = &api.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Arc::new(provider)
        }
    };

    tracing::info!(
        provider = provider.name(),
        model = provider.model(),
        "Text-generation provider configured"
    );
    Ok(provider)
}
