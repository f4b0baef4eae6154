//! Error taxonomy for calls to the remote menu API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a search or upload, as seen by the page controllers.
///
/// `Validation` is raised before anything is dispatched. `Network` means the
/// request never got an answer; `Server` means it did, but with a failure
/// status or a body that does not match the expected schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ApiError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Status code used when the server answered 2xx with a body we could not parse.
pub const MALFORMED_BODY_STATUS: u16 = 502;

/// Codes used to carry the error kind through a server function.
pub const VALIDATION_STATUS: u16 = 400;
pub const NETWORK_STATUS: u16 = 599;
pub const BAD_GATEWAY_STATUS: u16 = 502;

impl ApiError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Server { status: MALFORMED_BODY_STATUS, message: message.into() }
    }

    /// HTTP status used when forwarding this error out of a server function.
    ///
    /// Upstream failures all become 502; the upstream status stays in the message.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => VALIDATION_STATUS,
            Self::Network(_) => NETWORK_STATUS,
            Self::Server { .. } => BAD_GATEWAY_STATUS,
        }
    }

    /// Inverse of [`ApiError::status_code`], for errors that crossed a server function.
    pub fn from_status_code(code: u16, message: String) -> Self {
        match code {
            VALIDATION_STATUS => Self::Validation(message),
            NETWORK_STATUS => Self::Network(message),
            status => Self::Server { status, message },
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_survive_the_server_function_boundary() {
        let errors = [
            ApiError::Validation("no file".to_string()),
            ApiError::Network("connection refused".to_string()),
            ApiError::Server { status: 500, message: "boom".to_string() },
            ApiError::malformed("not json"),
        ];
        for err in errors {
            let code = err.status_code();
            let back = ApiError::from_status_code(code, "x".to_string());
            assert_eq!(std::mem::discriminant(&err), std::mem::discriminant(&back));
        }
    }

    #[test]
    fn malformed_body_is_a_server_error() {
        let err = ApiError::malformed("missing field `count`");
        assert!(matches!(err, ApiError::Server { status: MALFORMED_BODY_STATUS, .. }));
        assert!(err.to_string().contains("missing field"));
    }
}
