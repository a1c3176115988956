//! API client modules for the text-generation service
//!
//! This module provides:
//! - The `AiProvider` trait and its Gemini and Anthropic implementations
//! - Provider construction from configuration and environment credentials
//! - Error handling for provider calls

pub mod error;
pub mod providers;

pub use error::ApiError;
pub use providers::ai::{build_provider, AiProvider, AnthropicProvider, GeminiProvider, ProviderKind};
