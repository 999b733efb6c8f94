// The closed failure taxonomy for the extraction pipeline.
//
// Every failure anywhere in the pipeline collapses into one of these
// variants. Each variant carries a fixed HTTP status and a fixed
// user-facing German message (the Display impl) — diagnostic detail
// is logged at the point of classification and never reaches the caller.
// Nothing is retried: every failure is terminal for the current call.

use axum::http::StatusCode;
use thiserror::Error;

/// Caller-facing extraction errors.
///
/// The Display strings are the localized messages returned to the UI
/// verbatim, so they must stay stable — the frontend matches on them.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Request body was not JSON, or `transcript` was missing, not a
    /// string, or empty after trimming.
    #[error("Kein Transkript zum Analysieren vorhanden")]
    InvalidInput,

    /// The configured provider's API key is not set. Deployment
    /// misconfiguration, not a transient fault — fails before any
    /// network call.
    #[error("API-Schlüssel nicht konfiguriert")]
    Configuration,

    /// Upstream signaled throttling (HTTP 429).
    #[error("Rate-Limit überschritten. Bitte versuchen Sie es später erneut.")]
    RateLimited,

    /// Upstream signaled quota/billing exhaustion (HTTP 402).
    #[error("Guthaben aufgebraucht. Bitte fügen Sie Guthaben zu Ihrem Workspace hinzu.")]
    PaymentRequired,

    /// Any other non-2xx upstream status or network fault.
    #[error("Fehler bei der Themenextraktion")]
    Upstream,

    /// The upstream reply could not be parsed into a topic list.
    #[error("Ungültiges Themenformat von der KI erhalten")]
    MalformedResponse,

    /// Anything not covered above; the message is passed through verbatim.
    #[error("{0}")]
    Unknown(String),
}

impl ExtractError {
    /// The HTTP status this error maps to at the boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            ExtractError::InvalidInput => StatusCode::BAD_REQUEST,
            ExtractError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ExtractError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            ExtractError::Configuration
            | ExtractError::Upstream
            | ExtractError::MalformedResponse
            | ExtractError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Classify a non-2xx upstream status. 429 and 402 get their own
    /// variants so the caller can distinguish "retry later" from
    /// "add credits"; everything else is an opaque upstream failure.
    pub fn from_upstream_status(status: StatusCode) -> Self {
        match status {
            StatusCode::TOO_MANY_REQUESTS => ExtractError::RateLimited,
            StatusCode::PAYMENT_REQUIRED => ExtractError::PaymentRequired,
            _ => ExtractError::Upstream,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_429_maps_to_rate_limited() {
        let err = ExtractError::from_upstream_status(StatusCode::TOO_MANY_REQUESTS);
        assert!(matches!(err, ExtractError::RateLimited));
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn upstream_402_maps_to_payment_required() {
        let err = ExtractError::from_upstream_status(StatusCode::PAYMENT_REQUIRED);
        assert!(matches!(err, ExtractError::PaymentRequired));
        assert_eq!(err.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn other_upstream_statuses_map_to_upstream_500() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            let err = ExtractError::from_upstream_status(status);
            assert!(matches!(err, ExtractError::Upstream), "status {status}");
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn messages_are_the_localized_texts() {
        assert_eq!(
            ExtractError::InvalidInput.to_string(),
            "Kein Transkript zum Analysieren vorhanden"
        );
        assert_eq!(
            ExtractError::Configuration.to_string(),
            "API-Schlüssel nicht konfiguriert"
        );
        assert_eq!(
            ExtractError::MalformedResponse.to_string(),
            "Ungültiges Themenformat von der KI erhalten"
        );
    }

    #[test]
    fn unknown_passes_message_through_verbatim() {
        let err = ExtractError::Unknown("something odd".to_string());
        assert_eq!(err.to_string(), "something odd");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
