//! Error types for country resolution and quiz sessions.
//!
//! Resolution errors are defined here rather than in `geoquiz-providers` so
//! the orchestrator can classify failures without knowing which concrete
//! collaborator produced them.

use thiserror::Error;

use crate::model::Country;

/// Errors that can occur while turning the device position into a country.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The user refused access to their location.
    #[error("location permission denied")]
    PermissionDenied,

    /// Permission was granted but no position could be obtained.
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    /// The reverse-geocoding service could not be reached or answered with an error.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The reverse-geocoding response carried no address.
    #[error("no address found for the current position")]
    NoAddressFound,

    /// Resolution did not finish within the configured bound.
    #[error("resolution timed out after {0}s")]
    Timeout(u64),
}

impl ResolveError {
    /// Returns `true` if this failure should be shown to the user rather than
    /// silently degrading the session to "no questions available".
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ResolveError::PermissionDenied)
    }
}

/// Errors raised by a [`crate::session::QuizSession`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// An answer slot outside the question count was addressed. This is a
    /// caller defect, not a user-recoverable condition.
    #[error("answer index {index} out of range for {len} question(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised by the [`crate::orchestrator::SessionOrchestrator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrchestratorError {
    /// Country resolution failed; the session is back in `Idle`.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The underlying quiz session rejected an operation.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The operation is not defined for the current state.
    #[error("cannot {action} while session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// Submission was attempted on an empty question set.
    #[error("no questions available for {0}")]
    NoQuestions(Country),
}
