// ── Core error types ──
//
// User-facing errors from vitrine-core. Consumers never see raw HTTP
// status codes or JSON parse failures directly; the `From` impl below
// translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog fetch failed. Recovered by the retry affordance.
    #[error("fetch failed: {reason}")]
    FetchFailed { reason: String },

    /// Lookup by id returned nothing (stale id after a collection
    /// replacement). The requested action is silently aborted.
    #[error("product not found: {id}")]
    ProductNotFound { id: String },

    /// Configuration problem (bad URL, bad order number).
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl From<vitrine_api::Error> for CoreError {
    fn from(err: vitrine_api::Error) -> Self {
        match err {
            vitrine_api::Error::Api { status, .. } => CoreError::FetchFailed {
                reason: format!("HTTP {status}"),
            },
            vitrine_api::Error::Deserialization { .. } => CoreError::FetchFailed {
                reason: "malformed response body".into(),
            },
            vitrine_api::Error::Transport(e) => CoreError::FetchFailed {
                reason: e.to_string(),
            },
            vitrine_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid catalog URL: {e}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_becomes_fetch_failed_with_status() {
        let err: CoreError = vitrine_api::Error::Api {
            status: 500,
            body: String::new(),
        }
        .into();
        assert_eq!(err.to_string(), "fetch failed: HTTP 500");
    }

    #[test]
    fn decode_failure_is_generic() {
        let err: CoreError = vitrine_api::Error::Deserialization {
            message: "expected value".into(),
            body: "<html>".into(),
        }
        .into();
        assert_eq!(err.to_string(), "fetch failed: malformed response body");
    }
}
