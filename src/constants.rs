pub const DEFAULT_MESSAGE: &str =
    "smartwatch with features like fitness tracking and health monitoring";
pub const TOP_K: usize = 10;

pub const CONFIG_PATH: &str = "config.yaml";
pub const MODEL_PATH: &str = "models/all-MiniLM-L6-v2";
pub const DB_URI: &str = "data/vectordb";
pub const TABLE_NAME: &str = "vector_store";
pub const BIND_ADDR: &str = "0.0.0.0:8080";

// Column appended by LanceDB to vector search results.
pub const DISTANCE_COLUMN: &str = "_distance";
pub const DISTANCE_METADATA_KEY: &str = "distance";
