//! Process settings loaded via OrthoConfig.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use backend::outbound::persistence::PoolConfig;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 5;

/// Startup settings, layered from defaults, files, environment and CLI.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
pub struct ServerSettings {
    /// PostgreSQL connection string. Records live in memory when unset.
    pub database_url: Option<String>,
    /// TCP port for the listener. Defaults to 3000.
    pub port: Option<u16>,
    /// Interface or hostname for the listener. Defaults to `0.0.0.0`.
    pub host: Option<String>,
    /// Upper bound for the connection pool.
    pub db_max_connections: Option<u32>,
    /// Connections the pool keeps open while idle.
    pub db_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection before answering 503.
    pub db_connection_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Listener port, falling back to 3000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Listener host, falling back to every interface.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Pool size, falling back to ten connections.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Checkout timeout, falling back to five seconds.
    pub fn db_connection_timeout(&self) -> Duration {
        Duration::from_secs(
            self.db_connection_timeout_secs
                .unwrap_or(DEFAULT_DB_CONNECTION_TIMEOUT_SECS),
        )
    }

    /// Pool configuration for `database_url` carrying every `db_*` setting.
    pub fn pool_config(&self, database_url: &str) -> PoolConfig {
        PoolConfig::new(database_url)
            .with_max_size(self.db_max_connections())
            .with_min_idle(self.db_min_idle)
            .with_connection_timeout(self.db_connection_timeout())
    }

    /// The configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Resolve `host:port` into the address the listener binds.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] when the host does not resolve.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("host {} did not resolve", self.host()),
                )
            })
    }
}
