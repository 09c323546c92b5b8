mod error;
pub mod handlers;
pub mod start_http_server;

pub use error::ApiError;

use crate::chat::ChatEngine;
use crate::store::VectorStore;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn router<S: VectorStore>(engine: Arc<ChatEngine<S>>) -> Router {
    Router::new()
        .route("/chat", get(handlers::handle_chat::<S>))
        .route("/health", get(handlers::handle_health::<S>))
        .with_state(engine)
}
