//! Configuration Module
//!
//! Server configuration from command-line flags, with environment variable fallbacks.

use std::net::{Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Server configuration parameters.
///
/// Every flag can also be set through its environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "mcache", version, about = "TLS-secured in-memory content cache")]
pub struct Config {
    /// Address and port to listen on; a bare `:port` listens on every interface
    #[arg(
        short = 'p',
        long = "addr",
        env = "MCACHE_ADDR",
        default_value = ":8888",
        value_parser = parse_listen_addr
    )]
    pub addr: SocketAddr,

    /// Local development mode: use the certificates under tls/dev
    #[arg(short = 'd', long = "dev", env = "MCACHE_DEV")]
    pub dev: bool,

    /// PEM certificate chain, overrides the dev/prod default
    #[arg(long = "cert", env = "MCACHE_CERT")]
    pub cert_file: Option<PathBuf>,

    /// PEM private key, overrides the dev/prod default
    #[arg(long = "key", env = "MCACHE_KEY")]
    pub key_file: Option<PathBuf>,

    /// Seconds to let in-flight requests drain on shutdown (unbounded if unset)
    #[arg(long = "shutdown-grace", env = "MCACHE_SHUTDOWN_GRACE")]
    pub shutdown_grace: Option<u64>,
}

/// Parses `host:port`, or `:port` meaning the IPv6 wildcard (dual-stack where supported).
pub fn parse_listen_addr(value: &str) -> Result<SocketAddr, String> {
    match value.strip_prefix(':') {
        Some(port) => port
            .parse::<u16>()
            .map(|port| SocketAddr::from((Ipv6Addr::UNSPECIFIED, port)))
            .map_err(|err| format!("invalid port '{}': {}", port, err)),
        None => value
            .parse()
            .map_err(|err| format!("invalid listen address '{}': {}", value, err)),
    }
}

impl Config {
    /// Returns the certificate and key paths to load.
    ///
    /// Explicit paths win; otherwise `tls/dev` or `tls/prod` depending on `dev`.
    pub fn tls_paths(&self) -> (PathBuf, PathBuf) {
        let dir = if self.dev { "tls/dev" } else { "tls/prod" };
        let cert = self
            .cert_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(dir).join("cert.pem"));
        let key = self
            .key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(dir).join("key.pem"));
        (cert, key)
    }

    /// Returns the drain bound for graceful shutdown, if any.
    pub fn shutdown_grace(&self) -> Option<Duration> {
        self.shutdown_grace.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv6Addr::UNSPECIFIED, 8888)),
            dev: false,
            cert_file: None,
            key_file: None,
            shutdown_grace: None,
        }
    }
}
