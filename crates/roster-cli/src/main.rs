//! Roster tool entry point.

use clap::Parser;

use roster_cli::cli::Args;
use roster_cli::commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Quiet by default; RUST_LOG opens it up
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();
    commands::run(args).await?;
    Ok(())
}
