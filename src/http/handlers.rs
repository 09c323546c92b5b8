use super::error::ApiError;
use crate::chat::ChatEngine;
use crate::store::VectorStore;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct ChatParams {
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn handle_chat<S: VectorStore>(
    State(engine): State<Arc<ChatEngine<S>>>,
    Query(params): Query<ChatParams>,
) -> Result<String, ApiError> {
    Ok(engine.respond(params.message.as_deref()).await?)
}

pub async fn handle_health<S: VectorStore>(
    State(engine): State<Arc<ChatEngine<S>>>,
) -> (StatusCode, Json<HealthResponse>) {
    match engine.store().health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "SERVING".to_string(),
            }),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "NOT_SERVING".to_string(),
                }),
            )
        }
    }
}
