//! Classified text generation failures.

use thiserror::Error;

/// Why a generation request produced no text.
///
/// `Display` yields the sentence shown to the user in place of the generated
/// text, so callers that only want text can use
/// `result.unwrap_or_else(|e| e.to_string())`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No usable credential, or the HTTP client could not be created
    #[error("Error: AI API key not configured. Please set up your API key first.")]
    NotConfigured,
    /// The service rejected the credential
    #[error("Error: Invalid API key. Please check your API key and try again.")]
    InvalidCredential,
    /// The account ran out of quota or hit a rate limit
    #[error("Error: API quota exceeded. Please check your plan and billing details.")]
    QuotaExceeded,
    /// Any other failure reaching or reading from the service
    #[error("Error: Could not connect to the AI service. {message}")]
    Connection { message: String },
}

const CREDENTIAL_MARKERS: &[&str] = &[
    "api key",
    "api_key",
    "unauthorized",
    "authentication",
];

const QUOTA_MARKERS: &[&str] = &["quota", "rate limit", "rate_limit"];

fn mentions_quota(lower: &str) -> bool {
    QUOTA_MARKERS.iter().any(|marker| lower.contains(marker))
}

impl GatewayError {
    /// Classifies a failure from its message text alone.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        if mentions_quota(&lower) {
            Self::QuotaExceeded
        } else if CREDENTIAL_MARKERS.iter().any(|marker| lower.contains(marker)) {
            Self::InvalidCredential
        } else {
            Self::Connection {
                message: message.to_string(),
            }
        }
    }

    /// Classifies an unsuccessful HTTP response.
    ///
    /// Quota text wins over the status: some providers answer an exhausted
    /// quota with 403.
    pub fn from_status(status: u16, message: &str) -> Self {
        if mentions_quota(&message.to_lowercase()) {
            return Self::QuotaExceeded;
        }
        match status {
            429 => Self::QuotaExceeded,
            401 | 403 => Self::InvalidCredential,
            _ => Self::classify(&format!("HTTP {status}: {message}")),
        }
    }
}
