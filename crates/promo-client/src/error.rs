//! Transport error types.
//!
//! Every failure path is converted to one of these variants before it
//! reaches the session; `user_message` carries the fixed user-safe text
//! while the variant fields keep the diagnostic detail.

use thiserror::Error;

pub type GenerationResult<T> = Result<T, GenerationError>;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// Simulated stochastic failure, or an explicitly unavailable backend.
    #[error("{message}")]
    Unavailable { message: String },

    /// Non-2xx response from the real API.
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        code: String,
        details: Option<serde_json::Value>,
    },

    /// Transport-level failure (timeout, DNS, connection reset).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Success status with a body missing required fields.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Transport could not be constructed from its configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GenerationError {
    /// Short symbolic code for diagnostics and logs.
    pub fn code(&self) -> &str {
        match self {
            GenerationError::Unavailable { .. } => "SERVICE_UNAVAILABLE",
            GenerationError::Api { code, .. } => code,
            GenerationError::Network(_) => "NETWORK_ERROR",
            GenerationError::InvalidResponse(_) => "INVALID_RESPONSE",
            GenerationError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Fixed, user-safe message. Raw causes are never surfaced here.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::Unavailable { .. } => {
                "Video generation service temporarily unavailable."
            }
            GenerationError::Api { .. } => "Failed to generate video. Please try again.",
            GenerationError::Network(_) | GenerationError::InvalidResponse(_) => {
                "Unable to generate video at this time."
            }
            GenerationError::Config(_) => "Video generation is not configured.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let unavailable = GenerationError::Unavailable {
            message: "down".to_string(),
        };
        assert_eq!(unavailable.code(), "SERVICE_UNAVAILABLE");

        let api = GenerationError::Api {
            status: 500,
            message: "boom".to_string(),
            code: "X".to_string(),
            details: None,
        };
        assert_eq!(api.code(), "X");
    }

    #[test]
    fn test_user_message_hides_detail() {
        let api = GenerationError::Api {
            status: 500,
            message: "stack trace with secrets".to_string(),
            code: "GENERATION_ERROR".to_string(),
            details: None,
        };
        assert!(!api.user_message().contains("secrets"));
    }
}
