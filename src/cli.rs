use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "retrieval",
    about = "Answer free-text queries with the closest documents from a vector store",
    long_about = "Serves GET /chat, which runs a similarity search for the given message and returns \
                  the contents of the top matching documents joined by commas. \
                  You must specify either --server mode or provide a --query.",
    version
)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(
        short,
        long,
        help = "Configuration file (defaults to config.yaml when present)"
    )]
    pub config: Option<PathBuf>,

    /// Address the HTTP server binds to
    #[arg(long, help = "Override server.bind from the configuration, e.g. 127.0.0.1:8080")]
    pub bind: Option<String>,

    /// Free-text query to answer once
    #[arg(
        short,
        long,
        help = "Run a single query and print the joined document contents",
        required_unless_present = "server"
    )]
    pub query: Option<String>,

    /// Enable debug output
    #[arg(
        long,
        help = "Enable debug logging",
        action = ArgAction::SetTrue
    )]
    pub debug: bool,

    /// Run in server mode
    #[arg(
        long,
        help = "Run the HTTP server instead of CLI mode",
        conflicts_with = "query",
        action = ArgAction::SetTrue
    )]
    pub server: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
