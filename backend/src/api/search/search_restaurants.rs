//! Restaurant search against the remote menu index.

use common::{api_error::ApiError, search_query::SearchQuery, search_result::SearchResult};

use crate::remote_utils::menu_api_client::MenuApiClient;

pub async fn search_restaurants(query: SearchQuery) -> Result<SearchResult, ApiError> {
    let client = MenuApiClient::from_env()?;
    client.search(&query).await
}
