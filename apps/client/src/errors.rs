use thiserror::Error;

/// Message shown when no response arrived at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error: unable to reach the generation service.";

/// Failure talking to the generation service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No response was received (connection refused, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service rejected request (status {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// A success response whose body did not match the expected contract.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ServiceError {
    /// Human-readable message for the page banner.
    ///
    /// `fallback` is the endpoint-specific wording used when the service
    /// failed without a usable `detail`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ServiceError::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ServiceError::Rejected {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            ServiceError::Rejected { .. } | ServiceError::Decode(_) | ServiceError::InvalidUrl(_) => {
                fallback.to_string()
            }
        }
    }
}

/// Input rejected at the form boundary, before any request is issued.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid value for {field}: {value}")]
    InvalidChoice { field: &'static str, value: String },
}
