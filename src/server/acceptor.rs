// ────────────────────────────────
// src/server/acceptor.rs
// Core accept loop and start/stop lifecycle.
// ────────────────────────────────
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tokio::sync::{watch, Semaphore};
use tracing::{debug, info, warn};

use crate::error::AcceptorError;
use crate::server::handler::ConnectionHandler;
use crate::server::listener::bind_tcp;

/// One server instance: a port, a handler, and an accept loop.
///
/// `start` binds a fresh listener and accepts connections until `stop` is
/// called; each accepted connection is handed to the handler in its own
/// spawned task and never touched again. The acceptor itself carries no
/// protocol logic.
pub struct Acceptor<H> {
    port: u16,
    handler: Arc<H>,
    max_connections: Option<usize>,
    running: AtomicBool,
    shutdown: watch::Sender<bool>,
    local_addr: ArcSwapOption<SocketAddr>,
}

impl<H: ConnectionHandler> Acceptor<H> {
    /// Store the port and handler. Performs no I/O; an unbindable port only
    /// surfaces once `start` is called.
    pub fn new(port: u16, handler: H) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            port,
            handler: Arc::new(handler),
            max_connections: None,
            running: AtomicBool::new(false),
            shutdown,
            local_addr: ArcSwapOption::empty(),
        }
    }

    pub(crate) fn with_max_connections(mut self, limit: Option<usize>) -> Self {
        self.max_connections = limit;
        self
    }

    /// Bind and accept until stopped. Resolves only when the loop exits, so
    /// callers that need to keep going run it in a spawned task.
    ///
    /// Fails with [`AcceptorError::Bind`] if the port cannot be acquired and
    /// [`AcceptorError::AlreadyRunning`] if another `start` holds the
    /// listener. A `stop`-induced exit is `Ok(())`, not an error. Spawned
    /// connection tasks are not waited for; they run to completion on their
    /// own.
    pub async fn start(&self) -> Result<(), AcceptorError> {
        // At most one listener per acceptor at a time.
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AcceptorError::AlreadyRunning);
        }

        let listener = match bind_tcp(self.port).await {
            Ok(listener) => listener,
            Err(err) => {
                self.running.store(false, Ordering::SeqCst);
                return Err(err);
            }
        };

        let addr = match listener.local_addr() {
            Ok(addr) => addr,
            Err(source) => {
                self.running.store(false, Ordering::SeqCst);
                return Err(AcceptorError::Bind { port: self.port, source });
            }
        };
        self.local_addr.store(Some(Arc::new(addr)));

        // Arm a fresh latch for this listener's lifetime, discarding any
        // stop that predates it.
        self.shutdown.send_replace(false);
        let mut shutdown = self.shutdown.subscribe();

        let semaphore = self
            .max_connections
            .map(|limit| Arc::new(Semaphore::new(limit)));

        info!(%addr, "listening for connections");

        loop {
            tokio::select! {
                _ = shutdown.wait_for(|stopped| *stopped) => {
                    debug!(%addr, "stop requested, leaving accept loop");
                    break;
                }
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        let permit = match &semaphore {
                            Some(sem) => match sem.clone().try_acquire_owned() {
                                Ok(permit) => Some(permit),
                                Err(_) => {
                                    warn!(%peer, "connection limit reached, dropping connection");
                                    continue;
                                }
                            },
                            None => None,
                        };

                        debug!(%peer, "accepted connection");
                        let handler = Arc::clone(&self.handler);

                        // One task per connection, fire-and-forget. A panic
                        // or error in here stays in here.
                        tokio::spawn(async move {
                            if let Err(err) = handler.handle(stream, peer).await {
                                warn!(%peer, %err, "connection handler failed");
                            }
                            drop(permit);
                        });
                    }
                    Err(err) => {
                        debug!(%err, "accept failed, leaving accept loop");
                        break;
                    }
                },
            }
        }

        // Dropping the listener here closes the socket, freeing the port
        // for a later restart.
        drop(listener);
        self.local_addr.store(None);
        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// Ask a running accept loop to exit. Idempotent and infallible: safe
    /// before `start`, after `start` has already returned, and on repeat
    /// calls. Does not wait for the loop, and never cancels connection
    /// tasks already dispatched.
    pub fn stop(&self) {
        self.shutdown.send_replace(true);
    }

    /// Whether an accept loop currently holds the listener.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Address the current listener is bound to, once `start` has bound it.
    /// This is how callers binding port 0 learn the ephemeral port.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr.load().as_deref().copied()
    }
}
