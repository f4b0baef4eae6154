//! Server functions and their error mapping.

pub mod search_api;
pub mod upload_api;

use common::api_error::ApiError;
use dioxus::prelude::*;

/// Recovers the error kind carried through a server function.
///
/// Anything other than our own `ServerError` means the request never reached
/// the backend, which the pages treat as a network failure.
pub fn api_error_from_server_fn(err: ServerFnError) -> ApiError {
    match err {
        ServerFnError::ServerError { message, code, .. } => ApiError::from_status_code(code, message),
        other => ApiError::Network(other.to_string()),
    }
}

#[cfg(feature = "server")]
pub(crate) fn server_fn_error(err: ApiError) -> ServerFnError {
    ServerFnError::ServerError { message: err.to_string(), code: err.status_code(), details: None }
}
