pub mod acceptor;
pub mod builder;
pub mod handler;
pub mod listener;

pub use acceptor::Acceptor;
pub use builder::AcceptorBuilder;
pub use handler::{handler_fn, ConnectionHandler, HandlerFn};
