use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sift_core::{Config, Pipeline};
use tracing_subscriber::EnvFilter;

mod error;
mod routes;

/// HTTP front end for the Sift answer engine
#[derive(Parser, Debug)]
#[command(name = "sift-server", version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = Config::from_env().context("Invalid configuration")?;
    let pipeline = Pipeline::from_config(&config).context("Failed to build query pipeline")?;
    tracing::info!(
        search = pipeline.search_service().active_backend().map(|b| b.name()),
        answer = pipeline.answer_service().active_backend().map(|b| b.name()),
        max_concurrency = config.enrich.max_concurrency,
        "pipeline ready"
    );

    let app = routes::router(Arc::new(pipeline));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", args.host, args.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
