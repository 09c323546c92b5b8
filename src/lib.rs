pub mod candle;
mod chat;
mod cli;
mod config;
mod constants;
pub mod http;
pub mod store;

#[cfg(test)]
mod tests;

pub use candle::{BertEmbedder, QueryEmbedder};
pub use chat::ChatEngine;
pub use cli::{parse_args, Args};
pub use config::{Config, ModelConfig, ServerConfig, StoreConfig};
pub use constants::{DEFAULT_MESSAGE, TOP_K};
pub use http::router;
pub use http::start_http_server::start_http_server;
pub use store::lance::LanceStore;
pub use store::{Document, SearchRequest, StoreError, VectorStore};
