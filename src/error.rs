//! Error taxonomy for ideagen
//!
//! `ConfigurationError` is fatal at startup, `GenerationError` is recoverable
//! and shown to the user, `WizardError` rejects an invalid transition.

use thiserror::Error;

use crate::api::ApiError;
use crate::wizard::WizardStep;

/// Startup failures that halt initialization
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("missing API credential: set {env_var} to use the {provider} provider")]
    MissingCredential {
        provider: &'static str,
        env_var: &'static str,
    },

    #[error("unknown provider '{0}' (expected 'gemini' or 'anthropic')")]
    UnknownProvider(String),

    #[error("failed to build {provider} client: {message}")]
    Client {
        provider: &'static str,
        message: String,
    },
}

/// Failure to obtain a usable list of suggestions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("the text-generation service returned no text")]
    NoText,

    #[error("the text-generation service returned no usable suggestions")]
    EmptySuggestions,

    #[error("{0}")]
    Service(String),
}

impl From<ApiError> for GenerationError {
    fn from(err: ApiError) -> Self {
        GenerationError::Service(err.to_string())
    }
}

/// Rejected controller transition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("cannot select for {requested:?} while the wizard is at {current:?}")]
    StepMismatch {
        requested: WizardStep,
        current: WizardStep,
    },

    #[error("a value is required for {0:?}")]
    BlankValue(WizardStep),

    #[error("suggestions are being generated")]
    Busy,

    #[error("the wizard is not accepting selections; reset to start over")]
    NotSelecting,
}
