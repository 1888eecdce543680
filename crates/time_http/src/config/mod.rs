use std::net::SocketAddr;

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
}
