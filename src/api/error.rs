//! API error types for text-generation providers

use std::fmt;

/// Errors that can occur when calling a text-generation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 401 Unauthorized - API key rejected
    Unauthorized { provider: String },
    /// 403 Forbidden - key lacks access to the model
    Forbidden { provider: String },
    /// 429 Rate Limited
    RateLimited {
        provider: String,
        retry_after_secs: Option<u64>,
    },
    /// Network or timeout error
    NetworkError { provider: String, message: String },
    /// Other HTTP errors
    HttpError {
        provider: String,
        status: u16,
        message: String,
    },
    /// Response body could not be decoded
    InvalidResponse { provider: String, message: String },
}

impl ApiError {
    /// Check if this is an authentication error (401 or 403)
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized { .. } | ApiError::Forbidden { .. }
        )
    }

    /// Get the provider name for this error
    pub fn provider_name(&self) -> &str {
        match self {
            ApiError::Unauthorized { provider }
            | ApiError::Forbidden { provider }
            | ApiError::RateLimited { provider, .. }
            | ApiError::NetworkError { provider, .. }
            | ApiError::HttpError { provider, .. }
            | ApiError::InvalidResponse { provider, .. } => provider,
        }
    }

    pub fn unauthorized(provider: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            provider: provider.into(),
        }
    }

    pub fn forbidden(provider: impl Into<String>) -> Self {
        ApiError::Forbidden {
            provider: provider.into(),
        }
    }

    pub fn rate_limited(provider: impl Into<String>, retry_after: Option<u64>) -> Self {
        ApiError::RateLimited {
            provider: provider.into(),
            retry_after_secs: retry_after,
        }
    }

    pub fn network(provider: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::NetworkError {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn http(provider: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        ApiError::HttpError {
            provider: provider.into(),
            status,
            message: message.into(),
        }
    }

    pub fn invalid_response(provider: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::InvalidResponse {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Map a non-success status and body to the matching variant
    pub fn from_status(
        provider: &str,
        status: u16,
        retry_after: Option<u64>,
        body: impl Into<String>,
    ) -> Self {
        match status {
            401 => ApiError::unauthorized(provider),
            403 => ApiError::forbidden(provider),
            429 => ApiError::rate_limited(provider, retry_after),
            _ => ApiError::http(provider, status, body),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized { provider } => {
                write!(f, "{}: Unauthorized (401) - check the API key", provider)
            }
            ApiError::Forbidden { provider } => {
                write!(
                    f,
                    "{}: Forbidden (403) - insufficient permissions",
                    provider
                )
            }
            ApiError::RateLimited {
                provider,
                retry_after_secs,
            } => {
                if let Some(secs) = retry_after_secs {
                    write!(f, "{}: Rate limited - retry after {}s", provider, secs)
                } else {
                    write!(f, "{}: Rate limited", provider)
                }
            }
            ApiError::NetworkError { provider, message } => {
                write!(f, "{}: Network error - {}", provider, message)
            }
            ApiError::HttpError {
                provider,
                status,
                message,
            } => {
                write!(f, "{}: HTTP {} - {}", provider, status, message)
            }
            ApiError::InvalidResponse { provider, message } => {
                write!(f, "{}: Invalid response - {}", provider, message)
            }
        }
    }
}

impl std::error::Error for ApiError {}
