//! Session state published by the controller.

use promo_client::GenerationError;
use promo_models::GenerationResponse;

/// One generation attempt's lifecycle state.
///
/// Exactly one request is in flight at a time; starting a new attempt
/// discards any prior terminal state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// No attempt started, or the last one was cleared.
    #[default]
    Idle,
    /// Synchronous input validation in progress.
    Validating,
    /// The transport call is outstanding. Progress is advisory only.
    InFlight { progress: u8 },
    /// The transport resolved with a full response.
    Succeeded(GenerationResponse),
    /// The transport resolved with a typed error.
    Failed(SessionFailure),
}

impl SessionState {
    /// Whether a transport call is currently outstanding. Submission is
    /// suppressed while this is true.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SessionState::InFlight { .. })
    }

    /// Whether this is a terminal outcome. Terminal states never prevent
    /// re-submission.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Succeeded(_) | SessionState::Failed(_))
    }

    /// The held response, if the last attempt succeeded.
    pub fn response(&self) -> Option<&GenerationResponse> {
        match self {
            SessionState::Succeeded(response) => Some(response),
            _ => None,
        }
    }
}

/// User-facing failure outcome.
///
/// Carries the fixed user-safe message and the symbolic code; the raw error
/// detail stays in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFailure {
    pub message: String,
    pub code: String,
}

impl SessionFailure {
    /// Reduce a transport error to its user-facing form.
    pub fn from_error(error: &GenerationError) -> Self {
        Self {
            message: error.user_message().to_string(),
            code: error.code().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        assert!(!SessionState::Idle.is_in_flight());
        assert!(SessionState::InFlight { progress: 40 }.is_in_flight());
        assert!(!SessionState::InFlight { progress: 100 }.is_terminal());
        assert!(SessionState::Failed(SessionFailure {
            message: "m".to_string(),
            code: "c".to_string(),
        })
        .is_terminal());
    }

    #[test]
    fn test_failure_hides_raw_detail() {
        let error = GenerationError::InvalidResponse("missing field `video_url`".to_string());
        let failure = SessionFailure::from_error(&error);
        assert_eq!(failure.message, "Unable to generate video at this time.");
        assert_eq!(failure.code, "INVALID_RESPONSE");
        assert!(!failure.message.contains("video_url"));
    }
}
