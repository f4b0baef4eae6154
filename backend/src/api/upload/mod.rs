//! Menu upload entry points.

mod upload_menu;
pub use upload_menu::upload_menu;
