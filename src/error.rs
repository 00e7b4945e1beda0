// src/error.rs

use std::io;

/// Errors surfaced by [`Acceptor::start`](crate::server::Acceptor::start).
///
/// Accept failures never appear here: listener closure is the normal stop
/// signal and terminates the loop silently. Handler failures stay inside
/// their own connection task.
#[derive(Debug, thiserror::Error)]
pub enum AcceptorError {
    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("acceptor is already running")]
    AlreadyRunning,
}
