//! Directory service entry point.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use roster_api::{serve, ServerConfig};

/// Club membership directory service.
#[derive(Debug, Parser)]
#[command(name = "roster-api", version, about)]
struct Args {
    /// Path to a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the config file
    #[arg(long, env = "ROSTER_HOST")]
    host: Option<String>,

    /// Port to bind, overriding the config file
    #[arg(long, env = "ROSTER_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roster_api=debug".into()),
        )
        .init();

    let args = Args::parse();

    // Load configuration, flags beating the file
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("reading config file {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    serve(config).await.context("directory service failed")?;
    Ok(())
}
