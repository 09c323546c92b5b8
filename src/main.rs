use anyhow::{Context, Result as AnyhowResult};
use retrieval::{parse_args, BertEmbedder, ChatEngine, Config, LanceStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> AnyhowResult<()> {
    let args = parse_args();

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    let embedder = BertEmbedder::load(&config.model.path)
        .with_context(|| format!("Failed to load model from {:?}", config.model.path))?;
    let store = LanceStore::connect(config.store.clone(), Arc::new(embedder)).await?;
    let engine = Arc::new(
        ChatEngine::new(Arc::new(store))
            .with_similarity_threshold(config.store.similarity_threshold),
    );

    if args.server {
        let addr = config.server.socket_addr()?;
        info!("Starting HTTP server on {}", addr);
        retrieval::start_http_server(addr, engine).await?;
    } else if let Some(query) = args.query {
        let answer = engine.respond(Some(&query)).await?;
        println!("{}", answer);
    }

    Ok(())
}
