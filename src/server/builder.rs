// ────────────────────────────────
// src/server/builder.rs
// ────────────────────────────────
use crate::server::acceptor::Acceptor;
use crate::server::handler::ConnectionHandler;

/// Builder pattern so `main.rs` can inject its handler (or any
/// [`ConnectionHandler`]) and the optional tuning knobs.
pub struct AcceptorBuilder<H> {
    port: u16,
    handler: Option<H>,
    max_connections: Option<usize>,
}

impl<H: ConnectionHandler> AcceptorBuilder<H> {
    pub fn new(port: u16) -> Self {
        Self {
            port,
            handler: None,
            max_connections: None,
        }
    }

    /// Inject the per-connection handler.
    pub fn with_handler(mut self, handler: H) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Cap concurrently live connection tasks. Unset means unbounded, which
    /// matches the plain `Acceptor::new` behavior.
    pub fn with_max_connections(mut self, limit: usize) -> Self {
        self.max_connections = Some(limit);
        self
    }

    /// Consume the builder. Panics if no handler was injected, same
    /// contract as forgetting `with_handler` on any service builder.
    pub fn build(self) -> Acceptor<H> {
        let handler = self.handler.expect("handler must be set via with_handler()");
        Acceptor::new(self.port, handler).with_max_connections(self.max_connections)
    }
}
