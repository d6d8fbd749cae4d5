//! Gateway configuration read from the process environment.

use std::{fmt, time::Duration};

pub const API_KEY_VAR: &str = "STUDY_BUDDY_API_KEY";
pub const FALLBACK_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const API_URL_VAR: &str = "STUDY_BUDDY_API_URL";
pub const MODEL_VAR: &str = "STUDY_BUDDY_MODEL";
pub const TIMEOUT_VAR: &str = "STUDY_BUDDY_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for the text generation service.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Settings with the given credential and default endpoint and model.
    /// A blank key counts as no key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Settings without a credential; a gateway built from them is never
    /// configured.
    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    /// Reads settings from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = present(API_KEY_VAR).or_else(|| present(FALLBACK_API_KEY_VAR));
        let mut config = Self::new(api_key);

        if let Some(url) = present(API_URL_VAR) {
            config.base_url = url;
        }
        if let Some(model) = present(MODEL_VAR) {
            config.model = model;
        }
        if let Some(secs) = present(TIMEOUT_VAR).and_then(|v| v.trim().parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Full URL of the chat completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::unconfigured()
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}
