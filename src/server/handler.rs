// src/server/handler.rs

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Result;
use async_trait::async_trait;
use tokio::net::TcpStream;

/// Per-connection callback invoked by the acceptor.
///
/// Each invocation receives exclusive ownership of one accepted stream and
/// runs in its own task. Returning an error is the handler's own business:
/// the acceptor logs it and moves on, it never reaches the accept loop or
/// other connections.
#[async_trait]
pub trait ConnectionHandler: Send + Sync + 'static {
    async fn handle(&self, stream: TcpStream, peer: SocketAddr) -> Result<()>;
}

/// Adapter so a plain async closure can act as a [`ConnectionHandler`].
pub fn handler_fn<F, Fut>(f: F) -> HandlerFn<F>
where
    F: Fn(TcpStream, SocketAddr) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    HandlerFn(f)
}

pub struct HandlerFn<F>(F);

#[async_trait]
impl<F, Fut> ConnectionHandler for HandlerFn<F>
where
    F: Fn(TcpStream, SocketAddr) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    async fn handle(&self, stream: TcpStream, peer: SocketAddr) -> Result<()> {
        (self.0)(stream, peer).await
    }
}
