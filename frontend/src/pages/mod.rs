pub mod home_page;
pub mod admin_page;
