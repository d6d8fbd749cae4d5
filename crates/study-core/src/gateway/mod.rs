//! Single-call text generation against an OpenAI-compatible service.
//!
//! [`Gateway::send`] posts one chat completion request per call: no retry, no
//! streaming. Failures come back as a classified [`GatewayError`] instead of
//! propagating a crate error, and an unconfigured gateway never touches the
//! network.

use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::text::format_response;

pub mod config;
pub mod error;

pub use config::GatewayConfig;
pub use error::GatewayError;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Extracts the most descriptive message from an error response body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { error }) => match error.code {
            Some(code) if !error.message.contains(&code) => format!("{} ({code})", error.message),
            _ => error.message,
        },
        Err(_) => body.trim().to_string(),
    }
}

/// Wrapper around the external text generation call.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct Gateway {
    config: GatewayConfig,
    client: Option<Client>,
}

impl Gateway {
    /// Builds a gateway. The HTTP client is only created when a credential
    /// is present; a client that fails to build leaves the gateway
    /// unconfigured.
    pub fn new(config: GatewayConfig) -> Self {
        let client = config.api_key().and_then(|_| {
            Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|e| warn!("Failed to build HTTP client: {e}"))
                .ok()
        });
        Self { config, client }
    }

    /// True only when a credential and an initialized client both exist.
    pub fn configured(&self) -> bool {
        self.client.is_some() && self.config.api_key().is_some()
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Sends `prompt` and returns the generated text, trimmed.
    pub async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
        let (Some(client), Some(api_key)) = (&self.client, self.config.api_key()) else {
            debug!("Gateway not configured; skipping request");
            return Err(GatewayError::NotConfigured);
        };

        let result = self.request(client, api_key, prompt).await;

        if let Err(ref e) = result {
            warn!("Text generation failed: {e:?}");
        }
        result
    }

    async fn request(
        &self,
        client: &Client,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            "Sending {} character prompt to {}",
            prompt.chars().count(),
            self.config.endpoint()
        );

        let resp = client
            .post(self.config.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::classify(&e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::from_status(
                status.as_u16(),
                &error_message(&body),
            ));
        }

        let body: ChatResponse = resp.json().await.map_err(|e| GatewayError::Connection {
            message: format!("Malformed response: {e}"),
        })?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| format_response(&text).to_string())
            .ok_or_else(|| GatewayError::Connection {
                message: "The response contained no text.".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_gateway() {
        let gateway = Gateway::new(GatewayConfig::unconfigured());
        assert!(!gateway.configured());
    }

    #[test]
    fn test_configured_gateway() {
        let gateway = Gateway::new(GatewayConfig::new(Some("sk-test".to_string())));
        assert!(gateway.configured());
    }

    #[tokio::test]
    async fn test_send_unconfigured_returns_fixed_error() {
        let gateway = Gateway::new(GatewayConfig::new(Some("   ".to_string())));
        assert_eq!(
            gateway.send("anything").await,
            Err(GatewayError::NotConfigured)
        );
    }

    #[test]
    fn test_error_message_from_api_body() {
        let body = r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota","code":"insufficient_quota"}}"#;
        assert_eq!(
            error_message(body),
            "You exceeded your current quota (insufficient_quota)"
        );
        assert_eq!(error_message("  plain text failure \n"), "plain text failure");
    }
}
