use common::{api_error::ApiError, upload::{UploadReceipt, UploadTarget}};

use crate::remote_utils::menu_api_client::MenuApiClient;

/// Forwards the file to the extraction service. Size and extension checks are left to it.
pub async fn upload_menu(target: UploadTarget) -> Result<UploadReceipt, ApiError> {
    if target.file_name.is_empty() {
        return Err(ApiError::Validation("no file selected".to_string()));
    }
    let client = MenuApiClient::from_env()?;
    client.upload(target).await
}
