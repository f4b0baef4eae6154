pub mod menu_api_client;
pub mod wire;
