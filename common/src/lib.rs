//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod search_query;
pub mod search_result;
pub mod rating;
pub mod upload;
pub mod api_error;
pub mod api_status;
pub mod advisory;
pub mod search_state;
pub mod upload_state;
