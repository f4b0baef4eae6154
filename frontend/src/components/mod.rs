pub mod error_boundary;
pub mod suspend_boundary;
pub mod advisory_banner;
pub mod navbar;
pub mod search_components;
pub mod upload_components;
