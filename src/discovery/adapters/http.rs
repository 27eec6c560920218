//! Axum binding of the discovery surface.
//!
//! Routes are mounted under `/a2a`:
//!
//! - `GET /a2a/manifest`
//! - `GET /a2a/agents`
//! - `GET /a2a/agents/:id/card`
//! - `POST /a2a/agents/:id/invoke`

use crate::discovery::{
    domain::{AgentCard, AgentSummary, InvokeRequest, InvokeResponse, ServiceManifest},
    services::{DiscoveryError, DiscoveryService},
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use thiserror::Error;

/// Errors rendered by the HTTP adapter.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested agent is not registered.
    #[error("{0}")]
    NotFound(String),

    /// The invocation could not be delivered to the owning process.
    #[error("{0}")]
    InvocationFailed(String),
}

#[derive(Debug, Serialize)]
struct ErrorPayload {
    error: String,
}

impl From<DiscoveryError> for ApiError {
    fn from(err: DiscoveryError) -> Self {
        match err {
            DiscoveryError::NotFound(_) => Self::NotFound(err.to_string()),
            DiscoveryError::Correlation(_) => Self::InvocationFailed(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorPayload { error: message }),
            )
                .into_response(),
            Self::InvocationFailed(message) => {
                tracing::warn!(%message, "agent invocation failed");
                (StatusCode::BAD_GATEWAY, Json(InvokeResponse::error(message))).into_response()
            }
        }
    }
}

/// Builds the router for the discovery surface.
#[must_use]
pub fn router(service: DiscoveryService) -> Router {
    let a2a: Router<DiscoveryService> = Router::new()
        .route("/manifest", get(manifest))
        .route("/agents", get(list_agents))
        .route("/agents/:id/card", get(card))
        .route("/agents/:id/invoke", post(invoke));

    Router::new().nest("/a2a", a2a).with_state(service)
}

async fn manifest(State(service): State<DiscoveryService>) -> Json<ServiceManifest> {
    Json(service.manifest())
}

async fn list_agents(State(service): State<DiscoveryService>) -> Json<Vec<AgentSummary>> {
    Json(service.list_agents())
}

async fn card(
    State(service): State<DiscoveryService>,
    Path(id): Path<String>,
) -> Result<Json<AgentCard>, ApiError> {
    Ok(Json(service.card(&id)?))
}

async fn invoke(
    State(service): State<DiscoveryService>,
    Path(id): Path<String>,
    Json(request): Json<InvokeRequest>,
) -> Result<Json<InvokeResponse>, ApiError> {
    Ok(Json(service.invoke(&id, request)?))
}
