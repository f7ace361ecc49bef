pub mod server;
pub mod shopping;
