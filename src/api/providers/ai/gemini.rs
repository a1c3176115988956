//! Gemini API provider implementation

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::AiProvider;
use crate::api::error::ApiError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const PROVIDER_NAME: &str = "gemini";

/// Gemini `generateContent` client
pub struct GeminiProvider {
    api_key: String,
    model: String,
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiProvider {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ideagen/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::network(PROVIDER_NAME, e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            client,
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    /// Point the client at a different endpoint root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn request_body(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }

    /// Concatenate the text parts of the first candidate
    fn extract_text(response: GenerateResponse) -> Option<String> {
        let content = response.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Pull `error.message` out of an error body, falling back to the raw body
    fn error_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json.get("error")?
                    .get("message")?
                    .as_str()
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.to_string())
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn generate(&self, prompt: &str) -> Result<Option<String>, ApiError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|e| ApiError::network(PROVIDER_NAME, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(
                PROVIDER_NAME,
                status.as_u16(),
                retry_after,
                Self::error_message(&body),
            ));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ApiError::invalid_response(PROVIDER_NAME, e.to_string()))?;

        Ok(Self::extract_text(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeminiProvider {
        GeminiProvider::new("AIza-test", "gemini-1.5-pro", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_provider_name_and_model() {
        let provider = provider();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.model(), "gemini-1.5-pro");
        assert!(provider.is_configured());
    }

    #[test]
    fn test_endpoint_uses_model_and_base_url() {
        let provider = provider().with_base_url("http://localhost:9999/");
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn test_request_body_format() {
        let body = serde_json::to_value(GeminiProvider::request_body("list problems")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [
                    { "role": "user", "parts": [ { "text": "list problems" } ] }
                ]
            })
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"1. A\n"},{"text":"2. B"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            GeminiProvider::extract_text(response),
            Some("1. A\n2. B".to_string())
        );
    }

    #[test]
    fn test_extract_text_without_candidates_is_none() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(GeminiProvider::extract_text(response), None);

        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(GeminiProvider::extract_text(response), None);
    }

    #[test]
    fn test_extract_text_blocked_candidate_is_none() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(GeminiProvider::extract_text(response), None);
    }

    #[test]
    fn test_error_message_prefers_api_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(GeminiProvider::error_message(body), "API key not valid");
        assert_eq!(GeminiProvider::error_message("plain failure"), "plain failure");
    }
}
