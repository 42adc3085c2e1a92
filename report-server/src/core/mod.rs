//! Core server building blocks: configuration, state and the HTTP server.

pub mod config;
pub mod server;
pub mod state;

pub use config::{ALLOWED_EXTENSIONS, Config};
pub use server::Server;
pub use state::ServerState;
