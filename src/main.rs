// src/main.rs
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::signal;
use tracing::{debug, info};

mod config;
mod error;
mod server;

use crate::server::{handler_fn, AcceptorBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("accept_shell=debug".parse()?),
        )
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());

    info!("Loading configuration from: {}", config_path);
    let config = config::load_config(&config_path).await?;

    // The shell carries no protocol of its own; this binary plugs in a
    // line-echo handler as the demo processor.
    let mut builder = AcceptorBuilder::new(config.port).with_handler(handler_fn(echo_lines));
    if let Some(limit) = config.max_connections {
        builder = builder.with_max_connections(limit);
    }
    let acceptor = Arc::new(builder.build());

    info!("Starting echo server on port {}", config.port);
    let server = {
        let acceptor = acceptor.clone();
        tokio::spawn(async move { acceptor.start().await })
    };

    shutdown_signal().await;
    acceptor.stop();
    server.await??;

    Ok(())
}

/// Echo each received line back to the client until it disconnects.
async fn echo_lines(stream: TcpStream, peer: SocketAddr) -> Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    debug!(%peer, "client disconnected");
    Ok(())
}

// Graceful shutdown handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
