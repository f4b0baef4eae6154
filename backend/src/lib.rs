//! Server-side access to the remote menu search API.

pub mod api;
pub mod config;
pub mod remote_utils;
