//! Async client for the completion generate endpoint
//!
//! Sends `POST {endpoint}` with a JSON body `{"prompt": ...}` and reads the
//! `text` field of the JSON reply. Uses reqwest for HTTP and runs on the
//! worker thread's tokio runtime.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;
use thiserror::Error;

use crate::config::CompletionConfig;

/// Errors that can occur while requesting a completion
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompletionError {
    /// The configured endpoint cannot be used
    #[error("Completion endpoint not configured: {0}")]
    NotConfigured(String),

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with an error status
    #[error("Completion service error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Request was cancelled
    #[error("Request cancelled")]
    Cancelled,
}

/// Request body for the generate endpoint
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_new_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct GenerateClient {
    client: Client,
    endpoint: Url,
    max_new_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl GenerateClient {
    /// Create a client from configuration
    ///
    /// Returns an error if the endpoint is not a valid http(s) URL.
    pub fn from_config(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let endpoint = Url::parse(config.endpoint.trim()).map_err(|e| {
            CompletionError::NotConfigured(format!(
                "invalid endpoint '{}': {}. Set 'endpoint' in the [completion] section.",
                config.endpoint, e
            ))
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(CompletionError::NotConfigured(format!(
                "endpoint '{}' must use http or https",
                config.endpoint
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| CompletionError::NotConfigured(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Request a completion for `prompt`
    ///
    /// # Returns
    /// * `Ok(Some(text))` - The service returned completion text
    /// * `Ok(None)` - The reply had no usable `text` field
    /// * `Err(CompletionError::*)` - Network failure or error status
    pub async fn generate(&self, prompt: &str) -> Result<Option<String>, CompletionError> {
        let body = GenerateRequest {
            prompt,
            max_new_tokens: self.max_new_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CompletionError::Api { code, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        Ok(extract_completion_text(&body))
    }
}

/// The non-empty string `text` field of a JSON reply, if any
pub fn extract_completion_text(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("text")? {
        serde_json::Value::String(text) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let client = GenerateClient::from_config(&CompletionConfig::default()).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://localhost:8000/api/v1/generate/"
        );
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = CompletionConfig {
            endpoint: "not a url".to_string(),
            ..CompletionConfig::default()
        };
        let err = GenerateClient::from_config(&config).unwrap_err();
        assert!(matches!(err, CompletionError::NotConfigured(_)));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let config = CompletionConfig {
            endpoint: "ftp://localhost/generate".to_string(),
            ..CompletionConfig::default()
        };
        assert!(matches!(
            GenerateClient::from_config(&config),
            Err(CompletionError::NotConfigured(_))
        ));
    }

    #[test]
    fn test_request_body_contains_only_prompt_by_default() {
        let body = GenerateRequest {
            prompt: "module top;",
            max_new_tokens: None,
            temperature: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"prompt":"module top;"}"#
        );
    }

    #[test]
    fn test_request_body_with_generation_parameters() {
        let body = GenerateRequest {
            prompt: "x",
            max_new_tokens: Some(64),
            temperature: Some(0.5),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"prompt":"x","max_new_tokens":64,"temperature":0.5}"#
        );
    }

    #[test]
    fn test_extract_text() {
        assert_eq!(
            extract_completion_text(r#"{"text": "assign y = a;"}"#),
            Some("assign y = a;".to_string())
        );
    }

    #[test]
    fn test_extract_ignores_other_fields() {
        assert_eq!(
            extract_completion_text(r#"{"model": "codeqwen", "text": "end"}"#),
            Some("end".to_string())
        );
    }

    #[test]
    fn test_extract_malformed_replies() {
        assert_eq!(extract_completion_text(r#"{}"#), None);
        assert_eq!(extract_completion_text(r#"{"text": 42}"#), None);
        assert_eq!(extract_completion_text(r#"{"text": null}"#), None);
        assert_eq!(extract_completion_text(r#"{"text": ""}"#), None);
        assert_eq!(extract_completion_text(r#"["text"]"#), None);
        assert_eq!(extract_completion_text("Internal Server Error"), None);
        assert_eq!(extract_completion_text(""), None);
    }

    #[test]
    fn test_error_display() {
        let err = CompletionError::Api {
            code: 400,
            message: "Prompt must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Completion service error (400): Prompt must not be empty"
        );
    }
}
