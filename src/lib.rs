// src/lib.rs
pub mod config;
pub mod error;
pub mod server;

pub use error::AcceptorError;
pub use server::{handler_fn, Acceptor, AcceptorBuilder, ConnectionHandler};
