// ────────────────────────────────
// src/server/listener.rs
// Encapsulates low‑level TCP bind so we can swap TLS later.
// ────────────────────────────────
use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;

use crate::error::AcceptorError;

/// Bind a listener on all interfaces for `port`. Port 0 asks the OS for an
/// ephemeral port; read it back via `local_addr`.
pub async fn bind_tcp(port: u16) -> Result<TcpListener, AcceptorError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AcceptorError::Bind { port, source })?;
    Ok(listener)
}
