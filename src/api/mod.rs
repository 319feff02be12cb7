//! HTTP API handlers served next to the console

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ClientSettings;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    started: Instant,
    started_at: DateTime<Utc>,
    client: Arc<ClientSettings>,
}

impl AppState {
    pub fn new(client: ClientSettings) -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
            client: Arc::new(client),
        }
    }
}

/// General status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
    pub uptime_secs: u64,
    /// Backend the console talks to
    pub api_base_url: String,
    pub require_authentication: bool,
}

/// GET /healthz - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "smart-stadium",
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at,
        uptime_secs: state.started.elapsed().as_secs(),
        api_base_url: state.client.api_base_url.clone(),
        require_authentication: state.client.require_authentication,
    })
}
