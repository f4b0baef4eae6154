use common::{api_error::ApiError, api_status::ApiStatus};

use crate::remote_utils::menu_api_client::MenuApiClient;

pub async fn get_api_status() -> Result<ApiStatus, ApiError> {
    let client = MenuApiClient::from_env()?;
    client.status().await
}
