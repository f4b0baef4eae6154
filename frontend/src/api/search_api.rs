//! Client API calls for the search endpoints.

use common::{api_status::ApiStatus, search_query::SearchQuery, search_result::SearchResult};
use dioxus::prelude::*;


#[server]
pub async fn search_restaurants(query: SearchQuery) -> Result<SearchResult, ServerFnError> {
    let x = backend::api::search::search_restaurants(query).await;
    x.map_err(crate::api::server_fn_error)
}

#[server]
pub async fn get_api_status() -> Result<ApiStatus, ServerFnError> {
    let x = backend::api::api_status::get_api_status().await;
    x.map_err(crate::api::server_fn_error)
}
