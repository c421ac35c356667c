use axum::{http::StatusCode, routing::get, routing::post, Router};
use serde::Serialize;

mod status;
mod tasks;

use crate::state::AppState;

/// Axum REST API routes.
///
///   POST /tasks   -> create a task owned by the authenticated caller
///   GET  /status  -> health check
///
/// Task update/delete/list are deliberately absent; creation is the
/// only task operation on this surface. Board state (columns, ordering)
/// never crosses the network -- it lives with the client.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/tasks", post(tasks::create_task))
        .route("/status", get(status::status))
}

// ── Shared types and helpers used across sub-modules ────────────────────

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::new("Unauthorized")
    }

    pub fn bad_request(msg: &str) -> Self {
        Self::new(&format!("Bad request: {}", msg))
    }
}

pub(crate) fn log_api_issue(status: StatusCode, target: &'static str, message: impl AsRef<str>) {
    let message = message.as_ref();
    if status.is_server_error() {
        log::error!(target: target, "{}", message);
    } else {
        log::warn!(target: target, "{}", message);
    }
}
