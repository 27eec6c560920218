//! Axum binding of the outbound function for the orchestration engine.
//!
//! `POST /engine/outbound` takes the task variables as a JSON object and
//! replies with the normalised [`OutboundResult`]. The agent's own status
//! code travels inside the result; the route itself answers `200` whenever
//! the agent was reached.

use crate::outbound::{
    domain::{OutboundRequest, OutboundResult},
    ports::OutboundTransport,
    services::{DispatchError, OutboundDispatcher},
};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors rendered by the outbound HTTP adapter.
#[derive(Debug, Error)]
pub enum DispatchApiError {
    /// The variables do not describe a usable call.
    #[error("{0}")]
    Configuration(String),

    /// The external agent could not be reached.
    #[error("{0}")]
    Network(String),
}

#[derive(Debug, Serialize)]
struct ErrorPayload {
    error: String,
}

impl From<DispatchError> for DispatchApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Configuration(_) => Self::Configuration(err.to_string()),
            DispatchError::Network(_) => Self::Network(err.to_string()),
        }
    }
}

impl IntoResponse for DispatchApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Configuration(message) => (StatusCode::BAD_REQUEST, message),
            Self::Network(message) => {
                tracing::warn!(%message, "outbound agent call failed");
                (StatusCode::BAD_GATEWAY, message)
            }
        };
        (status, Json(ErrorPayload { error: message })).into_response()
    }
}

/// Builds the router exposing the outbound function.
#[must_use]
pub fn router<T>(dispatcher: OutboundDispatcher<T>) -> Router
where
    T: OutboundTransport + 'static,
{
    Router::new()
        .route("/engine/outbound", post(execute::<T>))
        .with_state(dispatcher)
}

async fn execute<T>(
    State(dispatcher): State<OutboundDispatcher<T>>,
    Json(variables): Json<Value>,
) -> Result<Json<OutboundResult>, DispatchApiError>
where
    T: OutboundTransport + 'static,
{
    let request = OutboundRequest::from_variables(variables).map_err(DispatchError::from)?;
    Ok(Json(dispatcher.execute(&request).await?))
}
