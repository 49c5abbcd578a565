mod routes;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{config::Config, Error};

/// Shared router state: one pooled HTTP client for all outbound calls plus
/// the configured Bot API base.
pub struct AppState {
    pub client: reqwest::Client,
    pub telegram_api_base: String,
}

pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    pub fn new(config: &Config) -> Self {
        Self {
            state: Arc::new(AppState {
                client: reqwest::Client::new(),
                telegram_api_base: config.telegram.api_base.clone(),
            }),
        }
    }

    pub fn build_router(self) -> Router {
        Router::new()
            .route("/health", get(routes::health))
            .route("/metrics", get(routes::metrics))
            .route("/alert", post(routes::forward_alerts))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state)
    }

    pub async fn start(self, addr: &str) -> crate::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.build_router()).await?;
        Ok(())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
