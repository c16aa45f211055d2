//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults match the deployed service.
//!
//! - `SITE_HOST` - Bind address (default: 0.0.0.0, or 127.0.0.1 on Windows)
//! - `SITE_PORT` - Listen port (default: 5000)
//! - `SITE_STATIC_DIR` - Directory with the built browser client
//!   (default: `dist/public`; skipped when the directory does not exist)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Default listen port for the site.
const DEFAULT_PORT: u16 = 5000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory containing the built browser client
    pub static_dir: PathBuf,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `SITE_HOST` or `SITE_PORT`
    /// is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match std::env::var("SITE_HOST") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_owned(), format!("{e}")))?,
            Err(_) => default_host(),
        };

        let port = match std::env::var("SITE_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_owned(), format!("{e}")))?,
            Err(_) => DEFAULT_PORT,
        };

        let static_dir = std::env::var("SITE_STATIC_DIR")
            .map_or_else(|_| PathBuf::from("dist/public"), PathBuf::from);

        Ok(Self {
            host,
            port,
            static_dir,
        })
    }

    /// Get the socket address to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Configuration for in-process tests: loopback, ephemeral port.
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            static_dir: PathBuf::from("dist/public"),
        }
    }
}

/// Default bind address.
///
/// Binds all interfaces in normal deployments; loopback on Windows, where
/// wildcard binds trip the firewall prompt during local development.
fn default_host() -> IpAddr {
    if cfg!(windows) {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    } else {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    }
}
