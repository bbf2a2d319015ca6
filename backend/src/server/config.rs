//! HTTP server configuration object and helpers.

use scoreboard::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) docs_enabled: bool,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`, storing scores
    /// through `db_pool`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            docs_enabled: false,
        }
    }

    /// Serve Swagger UI at `/docs`.
    #[must_use]
    pub fn with_docs(mut self, enabled: bool) -> Self {
        self.docs_enabled = enabled;
        self
    }
}
