//! HTTP client for the remote menu search service.

use common::{
    api_error::ApiError,
    api_status::ApiStatus,
    search_query::SearchQuery,
    search_result::SearchResult,
    upload::{UploadReceipt, UploadTarget},
};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::{
    config::MenuApiConfig,
    remote_utils::wire::{RawErrorBody, RawSearchResponse, RawUploadResponse},
};

const ERROR_BODY_PREVIEW_LEN: usize = 300;

#[derive(Debug, Clone)]
pub struct MenuApiClient {
    client: reqwest::Client,
    config: MenuApiConfig,
}

impl MenuApiClient {
    pub fn new(config: MenuApiConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    pub fn from_env() -> Result<Self, ApiError> {
        let config = MenuApiConfig::from_env().map_err(|e| {
            tracing::error!("menu api config: {:#}", e);
            ApiError::Server { status: 500, message: format!("{e:#}") }
        })?;
        Ok(Self::new(config))
    }

    /// `GET /search`. Absent filters are not sent.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, ApiError> {
        if query.text.trim().is_empty() {
            return Err(ApiError::Validation("search text is empty".to_string()));
        }
        let url = self.config.endpoint("search");
        tracing::info!("menu search: {} {:?}", url, query.query_params());
        let request = self.client.get(&url).query(&query.query_params());
        let raw: RawSearchResponse = self.send_json(request, &url).await?;
        let result = SearchResult::try_from(raw)?;
        tracing::info!("menu search: {} results ({} cards)", result.count, result.items.len());
        Ok(result)
    }

    /// `POST /upload` with the file in the multipart field `file`.
    pub async fn upload(&self, target: UploadTarget) -> Result<UploadReceipt, ApiError> {
        let url = self.config.endpoint("upload");
        tracing::info!("menu upload: {} {:?}", url, target);
        let part = Part::bytes(target.bytes)
            .file_name(target.file_name.clone())
            .mime_str(&target.content_type)
            .map_err(|e| ApiError::Validation(format!("bad content type {:?}: {e}", target.content_type)))?;
        let form = Form::new().part("file", part);
        let request = self.client.post(&url).multipart(form);
        let raw: RawUploadResponse = self.send_json(request, &url).await?;
        tracing::info!("menu upload: stored {} at {}", raw.filename, raw.url);
        Ok(raw.into())
    }

    /// `GET /` service status.
    pub async fn status(&self) -> Result<ApiStatus, ApiError> {
        let url = self.config.endpoint("");
        self.send_json(self.client.get(&url), &url).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder, url: &str) -> Result<T, ApiError> {
        let t0 = std::time::Instant::now();
        let response = request.send().await.map_err(|e| {
            tracing::error!("menu api: {} unreachable: {}", url, e);
            ApiError::Network(e.to_string())
        })?;
        let status = response.status();
        let response_txt = response.text().await.map_err(|e| {
            tracing::error!("menu api: {} body read failed: {}", url, e);
            ApiError::Network(e.to_string())
        })?;
        let dt_ms = t0.elapsed().as_millis();
        if status.is_client_error() || status.is_server_error() {
            let message = error_message(&response_txt);
            tracing::warn!("menu api: {} answered {} in {}ms: {}", url, status, dt_ms, message);
            return Err(ApiError::Server { status: status.as_u16(), message });
        }
        tracing::info!("menu api: {} answered {} in {}ms, len = {}", url, status, dt_ms, response_txt.len());
        serde_json::from_str::<T>(&response_txt).map_err(|e| {
            tracing::error!("menu api: {} sent a malformed body: {}", url, e);
            ApiError::malformed(e.to_string())
        })
    }
}

/// Prefers the service's `{"error": ...}` text over the raw body.
fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<RawErrorBody>(body) {
        return parsed.error;
    }
    body.chars().take(ERROR_BODY_PREVIEW_LEN).collect()
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, net::SocketAddr};

    use axum::{
        Json, Router,
        extract::{DefaultBodyLimit, Multipart, RawQuery},
        http::StatusCode,
        routing::{get, post},
    };
    use common::{
        search_const::SERVER_FN_BODY_LIMIT,
        search_query::{CuisineType, SearchFormState},
    };
    use serde_json::{Value, json};

    use super::*;

    async fn spawn_mock(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> MenuApiClient {
        MenuApiClient::new(MenuApiConfig::new(format!("http://{addr}")).unwrap())
    }

    /// Echoes the raw query string back in `search_terms`.
    async fn echo_search(RawQuery(query): RawQuery) -> Json<Value> {
        Json(json!({
            "count": 2,
            "results": [
                {"metadata_storage_name": "a.pdf", "puntuacion": 4.2,
                 "platos": [{"nombre": "1", "puntuacion": 1}, {"nombre": "2", "puntuacion": 2},
                            {"nombre": "3", "puntuacion": 3}, {"nombre": "4", "puntuacion": 4}]},
                {"metadata_storage_name": "b.png"}
            ],
            "facets": {},
            "search_terms": query.unwrap_or_default(),
        }))
    }

    fn query(form: SearchFormState) -> SearchQuery {
        form.to_query().unwrap()
    }

    #[tokio::test]
    async fn plain_query_sends_only_search() {
        let addr = spawn_mock(Router::new().route("/search", get(echo_search))).await;
        let result = client_for(addr)
            .search(&query(SearchFormState { text: "pizza".to_string(), ..Default::default() }))
            .await
            .unwrap();
        assert_eq!(result.query_echoed, "search=pizza");
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].hidden_dish_count(), 1);
    }

    #[tokio::test]
    async fn non_default_filters_are_sent() {
        let addr = spawn_mock(Router::new().route("/search", get(echo_search))).await;
        let form = SearchFormState {
            text: "pad thai".to_string(),
            cuisine_type: Some(CuisineType::Asiatica),
            min_rating: 4.0,
            ..Default::default()
        };
        let result = client_for(addr).search(&query(form)).await.unwrap();
        assert_eq!(result.query_echoed, "search=pad+thai&tipologia=Asiatica&puntuacion=4");
    }

    #[tokio::test]
    async fn empty_text_is_never_dispatched() {
        // nothing listens on this client; a dispatch would be a network error
        let client = MenuApiClient::new(MenuApiConfig::new("http://127.0.0.1:9").unwrap());
        let err = client.search(&SearchQuery::default()).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn failure_status_is_a_server_error_with_service_message() {
        let router = Router::new().route(
            "/search",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "index offline"}))) }),
        );
        let addr = spawn_mock(router).await;
        let err = client_for(addr)
            .search(&query(SearchFormState { text: "x".to_string(), ..Default::default() }))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Server { status: 500, message: "index offline".to_string() });
    }

    #[tokio::test]
    async fn malformed_body_is_a_server_error() {
        let router = Router::new().route("/search", get(|| async { "<html>not json</html>" }));
        let addr = spawn_mock(router).await;
        let err = client_for(addr)
            .search(&query(SearchFormState { text: "x".to_string(), ..Default::default() }))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Server { .. }));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = client_for(addr)
            .search(&query(SearchFormState { text: "x".to_string(), ..Default::default() }))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "{err:?}");
    }

    #[tokio::test]
    async fn upload_sends_a_single_file_field() {
        async fn receive(mut multipart: Multipart) -> Json<Value> {
            let mut fields = HashMap::new();
            while let Some(field) = multipart.next_field().await.unwrap() {
                let name = field.name().unwrap_or_default().to_string();
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let len = field.bytes().await.unwrap().len();
                fields.insert(name, (file_name, content_type, len));
            }
            assert_eq!(fields.len(), 1);
            let (file_name, content_type, len) = fields.remove("file").unwrap();
            assert_eq!(content_type, "image/png");
            assert_eq!(len, 5);
            Json(json!({
                "message": "Archivo subido correctamente",
                "filename": format!("1234_{file_name}"),
                "url": format!("https://blob/1234_{file_name}"),
            }))
        }
        let addr = spawn_mock(Router::new().route("/upload", post(receive))).await;
        let target = UploadTarget::new("carta.png", Some("image/png".to_string()), vec![1, 2, 3, 4, 5]);
        let receipt = client_for(addr).upload(target).await.unwrap();
        assert_eq!(receipt.stored_name, "1234_carta.png");
        assert_eq!(receipt.url, "https://blob/1234_carta.png");
    }

    #[tokio::test]
    async fn menus_over_two_megabytes_reach_the_upload_service() {
        const SIZE: usize = 3 * 1024 * 1024;
        async fn receive(mut multipart: Multipart) -> Json<Value> {
            let field = multipart.next_field().await.unwrap().unwrap();
            let len = field.bytes().await.unwrap().len();
            Json(json!({"filename": len.to_string(), "url": "https://blob/foto.jpg"}))
        }
        let upstream = spawn_mock(
            Router::new().route("/upload", post(receive)).layer(DefaultBodyLimit::disable()),
        )
        .await;

        // same body limit and JSON argument as the upload server function
        let forward = move |Json(target): Json<UploadTarget>| async move {
            Json(client_for(upstream).upload(target).await.unwrap())
        };
        let front = spawn_mock(
            Router::new().route("/upload_menu", post(forward)).layer(DefaultBodyLimit::max(SERVER_FN_BODY_LIMIT)),
        )
        .await;

        let target = UploadTarget::new("foto.jpg", None, vec![7; SIZE]);
        let response = reqwest::Client::new()
            .post(format!("http://{front}/upload_menu"))
            .json(&target)
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success(), "{}", response.status());
        let receipt: UploadReceipt = response.json().await.unwrap();
        assert_eq!(receipt.stored_name, SIZE.to_string());
    }

    #[tokio::test]
    async fn rejected_upload_is_a_server_error() {
        let router = Router::new().route(
            "/upload",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"error": "Tipo de archivo no permitido"}))) }),
        );
        let addr = spawn_mock(router).await;
        let target = UploadTarget::new("carta.gif", Some("image/gif".to_string()), vec![1]);
        let err = client_for(addr).upload(target).await.unwrap_err();
        assert_eq!(err, ApiError::Server { status: 400, message: "Tipo de archivo no permitido".to_string() });
    }

    #[tokio::test]
    async fn status_endpoint() {
        let router = Router::new().route(
            "/",
            get(|| async { Json(json!({"status": "ok", "message": "API de búsqueda de restaurantes activa", "endpoints": {}})) }),
        );
        let addr = spawn_mock(router).await;
        let status = client_for(addr).status().await.unwrap();
        assert!(status.is_ok());
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(1000);
        assert_eq!(error_message(&body).len(), ERROR_BODY_PREVIEW_LEN);
        assert_eq!(error_message(r#"{"error": "nope"}"#), "nope");
    }
}
