//! Connection parameters for the Postgres store.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Where and how to reach the store.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Pool ceiling shared by all in-flight requests.
    pub max_connections: u32,
    /// How long to wait for a pooled connection, including the first connect.
    pub connect_timeout: Duration,
}

impl DbConfig {
    /// Build driver connect options. TLS is disabled, matching a local or
    /// sidecar Postgres.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: String::new(),
            name: "todos".into(),
            max_connections: 10,
            connect_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_options_carry_every_field() {
        let cfg = DbConfig {
            host: "db.internal".into(),
            port: 6543,
            user: "app".into(),
            password: "secret".into(),
            name: "todo_app".into(),
            max_connections: 4,
            connect_timeout: Duration::from_secs(5),
        };
        let opts = cfg.connect_options();
        assert_eq!(opts.get_host(), "db.internal");
        assert_eq!(opts.get_port(), 6543);
        assert_eq!(opts.get_username(), "app");
        assert_eq!(opts.get_database(), Some("todo_app"));
    }

    #[test]
    fn default_targets_local_postgres() {
        let cfg = DbConfig::default();
        assert_eq!(cfg.port, 5432);
        assert_eq!(cfg.max_connections, 10);
    }
}
