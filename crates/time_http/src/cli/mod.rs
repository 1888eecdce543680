use std::net::{IpAddr, SocketAddr};

use clap::Parser;

use crate::config::Config;

/// Time HTTP Server
///
/// Reports the server's current time in one or more IANA timezones.
///
/// ## Endpoints
/// - `GET /time`: current time in US/Central as an ISO 8601 offset datetime
/// - `GET /time/local`: current offset time in the host timezone
/// - `POST /time/zones`: local times for `{"timeZones": [...]}`
/// - `GET /headers`: echo of the request headers
///
/// ## Development
/// ```bash
/// RUST_LOG=debug cargo run --bin http-server-time -- --port 8080
/// curl -X POST localhost:8080/time/zones -H 'content-type: application/json' \
///      -d '{"timeZones": ["Europe/London", "UTC"]}'
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
/// - `TIME_SERVER_HOST`, `TIME_SERVER_PORT`: Defaults for `--host` and `--port`
#[derive(Parser, Debug, Clone)]
#[command(name = "http-server-time")]
#[command(about = "An HTTP server reporting the current time across timezones")]
#[command(version)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "TIME_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "TIME_SERVER_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> Config {
        Self::parse().into_config()
    }

    pub fn into_config(self) -> Config {
        Config {
            bind_addr: SocketAddr::new(self.host, self.port),
        }
    }
}
