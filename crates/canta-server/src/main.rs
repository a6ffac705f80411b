//! # canta
//!
//! HTTP search proxy for `YouTube` Music: searches songs and resolves a
//! direct audio stream URL per result.

use std::net::SocketAddr;

use anyhow::Result;
use canta_innertube::InnerTubeClient;
use canta_server::app;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "canta", version, about)]
struct Options {
    /// Address to listen on.
    #[arg(long, env = "CANTA_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canta_server=debug,canta_innertube=debug".into()),
        )
        .init();

    let options = Options::parse();

    info!("Starting canta v{}", env!("CARGO_PKG_VERSION"));

    let client = InnerTubeClient::new()?;
    let router = app(client);

    let listener = tokio::net::TcpListener::bind(options.bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;

    Ok(())
}
