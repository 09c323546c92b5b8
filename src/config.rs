use crate::constants::{BIND_ADDR, CONFIG_PATH, DB_URI, MODEL_PATH, TABLE_NAME};
use crate::store::SIMILARITY_THRESHOLD_ACCEPT_ALL;
use anyhow::{Context, Result as AnyhowResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: BIND_ADDR.to_string(),
        }
    }
}

/// Where the existing table lives and how its columns are named.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    pub uri: String,
    pub table: String,
    pub id_column: String,
    pub content_column: String,
    pub metadata_column: String,
    pub vector_column: String,
    pub similarity_threshold: f32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: DB_URI.to_string(),
            table: TABLE_NAME.to_string(),
            id_column: "id".to_string(),
            content_column: "content".to_string(),
            metadata_column: "metadata".to_string(),
            vector_column: "embedding".to_string(),
            similarity_threshold: SIMILARITY_THRESHOLD_ACCEPT_ALL,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ModelConfig {
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(MODEL_PATH),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> AnyhowResult<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind))
    }
}

impl Config {
    pub fn load_from_yaml<P: AsRef<Path>>(path: P) -> AnyhowResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path)
            .with_context(|| format!("Failed to open config file {:?}", path))?;
        let config: Config = serde_yaml::from_reader(f)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    /// An explicitly requested file must exist; the default one is optional.
    pub fn load(path: Option<&Path>) -> AnyhowResult<Self> {
        match path {
            Some(path) => Self::load_from_yaml(path),
            None if Path::new(CONFIG_PATH).exists() => Self::load_from_yaml(CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let threshold = self.store.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(format!(
                "store.similarity_threshold must be within [0, 1], got {}",
                threshold
            ));
        }
        if self.store.table.is_empty() {
            return Err("store.table must not be empty".to_string());
        }
        Ok(())
    }
}
