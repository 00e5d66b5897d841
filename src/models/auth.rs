//! Authentication message DTOs
//!
//! Plain data carriers exchanged with the security service. Fields
//! round-trip through serialization as declared; nothing is computed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Authentication Outcome ==
/// Result of an authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticationOutcome {
    /// Credentials accepted
    Authenticated,
    /// Credentials rejected
    Rejected,
    /// Account locked out after repeated failures
    LockedOut,
}

// == Authenticate Response ==
/// Base authentication response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    /// Outcome of the attempt
    pub outcome: AuthenticationOutcome,
    /// Id of the authenticated user, when known
    pub user_id: Option<i32>,
    /// Failed attempts recorded against the account
    pub failure_count: u32,
}

impl AuthenticateResponse {
    /// Creates a response for a successful attempt.
    pub fn authenticated(user_id: i32) -> Self {
        Self {
            outcome: AuthenticationOutcome::Authenticated,
            user_id: Some(user_id),
            failure_count: 0,
        }
    }

    /// Creates a response for a rejected attempt.
    pub fn rejected(failure_count: u32) -> Self {
        Self {
            outcome: AuthenticationOutcome::Rejected,
            user_id: None,
            failure_count,
        }
    }
}

// == Forgotten Password: Step One ==
/// Response to the first step of the forgotten-password flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticateForgottenStepOneResponse {
    /// Base authentication response
    #[serde(flatten)]
    pub response: AuthenticateResponse,
    /// Security question to present for step two, when the account has one
    pub security_question: Option<String>,
    /// When the challenge was issued
    pub issued_at: DateTime<Utc>,
}

impl AuthenticateForgottenStepOneResponse {
    /// Creates a step-one response carrying the account's security question.
    pub fn new(response: AuthenticateResponse, security_question: Option<String>) -> Self {
        Self {
            response,
            security_question,
            issued_at: Utc::now(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_response_roundtrip() {
        let response = AuthenticateResponse::authenticated(42);

        let json = serde_json::to_string(&response).unwrap();
        let back: AuthenticateResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(back, response);
    }

    #[test]
    fn test_rejected_response_fields() {
        let response = AuthenticateResponse::rejected(2);

        assert_eq!(response.outcome, AuthenticationOutcome::Rejected);
        assert!(response.user_id.is_none());
        assert_eq!(response.failure_count, 2);
    }

    #[test]
    fn test_forgotten_step_one_roundtrip() {
        let response = AuthenticateForgottenStepOneResponse::new(
            AuthenticateResponse::authenticated(7),
            Some("First pet's name?".to_string()),
        );

        let json = serde_json::to_string(&response).unwrap();
        let back: AuthenticateForgottenStepOneResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(back, response);
    }

    #[test]
    fn test_forgotten_step_one_flattens_base_fields() {
        let response = AuthenticateForgottenStepOneResponse::new(
            AuthenticateResponse::rejected(1),
            None,
        );

        let json = serde_json::to_value(&response).unwrap();

        // Base fields serialize at the top level, not nested
        assert_eq!(json["outcome"], "Rejected");
        assert_eq!(json["failure_count"], 1);
        assert!(json.get("response").is_none());
    }
}
