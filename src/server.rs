use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use log::info;

use crate::collector::Collector;

pub fn build_router(collector: Arc<Collector>) -> Router {
    Router::new()
        .route("/metrics", any(metrics))
        .fallback(not_found)
        .with_state(collector)
}

/// GET runs a full collection pass and returns the report; HEAD answers with
/// the same status and headers without touching the upstream API.
async fn metrics(State(collector): State<Arc<Collector>>, method: Method) -> Response {
    match method {
        Method::GET => {
            let body = collector.collect().await;
            info!("Metrics requested and served.");
            (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
        }
        Method::HEAD => {
            info!("HEAD request for metrics served.");
            (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain")], "").into_response()
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
