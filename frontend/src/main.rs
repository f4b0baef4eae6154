//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::{DefaultBodyLimit, Request}, middleware::Next};
        use common::search_const::SERVER_FN_BODY_LIMIT;
        use dioxus::logger::tracing;
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            // uploads arrive as a server function argument
            .layer(DefaultBodyLimit::max(SERVER_FN_BODY_LIMIT))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    tracing::info!("{} {} -> {}", method, path, res.status());
                    res
                },
            )))
    });
}
