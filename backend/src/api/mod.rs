//! Entry points called by the frontend server functions.

pub mod search;
pub mod upload;
pub mod api_status;
