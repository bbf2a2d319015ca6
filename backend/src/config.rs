//! Server configuration loaded via OrthoConfig.
//!
//! Values merge defaults, an optional configuration file, `SCOREBOARD_*`
//! environment variables and command-line flags.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_DATABASE_PATH: &str = "scores.db";

/// Settings controlling the listener, the score store and debug mode.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SCOREBOARD")]
pub struct ScoreboardSettings {
    /// Listen address.
    pub host: Option<String>,
    /// Listen port.
    pub port: Option<u16>,
    /// SQLite database file, created on first start.
    pub database_path: Option<PathBuf>,
    /// Enable Swagger UI, human-readable logs and a `debug` log filter.
    #[ortho_config(default = false)]
    pub debug: bool,
}

impl ScoreboardSettings {
    /// Return the configured host, falling back to loopback.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 5001.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the configured database path, falling back to `scores.db`.
    #[must_use]
    pub fn database_path(&self) -> &Path {
        self.database_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATABASE_PATH))
    }

    /// Database URL in the form Diesel's SQLite backend expects.
    #[must_use]
    pub fn database_url(&self) -> String {
        self.database_path().to_string_lossy().into_owned()
    }

    /// Socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().parse()?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Default log filter when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
