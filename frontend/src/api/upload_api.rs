//! Client API call for menu uploads.

use common::upload::{UploadReceipt, UploadTarget};
use dioxus::prelude::*;


#[server]
pub async fn upload_menu(target: UploadTarget) -> Result<UploadReceipt, ServerFnError> {
    let x = backend::api::upload::upload_menu(target).await;
    x.map_err(crate::api::server_fn_error)
}
