//! `todo-server` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — initialize storage, then start the API server. Also what a
//!   bare `todo-server` does.
//! - `migrate` — initialize storage (connect, ping, migrate) and exit.
//!
//! Settings come from the environment, optionally seeded from a `.env` file
//! in the working directory.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use db::pool::DEFAULT_MIGRATION_PATH;
use db::{DbConfig, DbPool};
use service::TodoService;

#[derive(Parser)]
#[command(name = "todo-server", about = "Todo list REST service backed by Postgres", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server (the default).
    Serve(ServeArgs),
    /// Apply the schema migration and exit.
    Migrate {
        #[command(flatten)]
        storage: StorageArgs,
    },
}

#[derive(Parser)]
#[command(name = "todo-server")]
struct ServeArgs {
    #[command(flatten)]
    storage: StorageArgs,
    /// Port to listen on (all interfaces).
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

#[derive(Args)]
struct StorageArgs {
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    db_host: String,
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    db_port: u16,
    #[arg(long, env = "DB_USER")]
    db_user: String,
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    db_password: String,
    #[arg(long, env = "DB_NAME")]
    db_name: String,
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    db_max_connections: u32,
    /// Seconds to wait for a database connection before giving up.
    #[arg(long, env = "DB_CONNECT_TIMEOUT_SECS", default_value_t = 30)]
    db_connect_timeout_secs: u64,
    /// SQL script applied on every start; must be re-runnable.
    #[arg(long, env = "MIGRATION_PATH", default_value = DEFAULT_MIGRATION_PATH)]
    migration_path: PathBuf,
}

impl StorageArgs {
    fn db_config(&self) -> DbConfig {
        DbConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            name: self.db_name.clone(),
            max_connections: self.db_max_connections,
            connect_timeout: Duration::from_secs(self.db_connect_timeout_secs),
        }
    }

    async fn initialize(&self) -> anyhow::Result<DbPool> {
        db::pool::initialize(&self.db_config(), &self.migration_path)
            .await
            .context("storage initialization failed")
    }
}

#[tokio::main]
async fn main() {
    let dotenv_result = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match dotenv_result {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => info!("No .env file found; using process environment"),
        Err(e) => {
            error!("Cannot load .env file: {e}");
            std::process::exit(1);
        }
    }

    let cli = Cli::parse();

    // No subcommand: serve, with every setting taken from the environment.
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::parse_from(["todo-server"])));

    if let Err(e) = run(command).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve(ServeArgs { storage, port }) => {
            let pool = storage.initialize().await?;
            let bind = format!("0.0.0.0:{port}");
            info!("Starting API server on {bind}");
            api::serve(&bind, TodoService::postgres(pool.clone()))
                .await
                .with_context(|| format!("server on {bind} failed"))?;
            pool.close().await;
        }
        Command::Migrate { storage } => {
            let pool = storage.initialize().await?;
            info!("Migrations applied successfully");
            pool.close().await;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const STORAGE: [&str; 4] = ["--db-user", "app", "--db-name", "todos"];

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
        ServeArgs::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["todo-server"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_args_parse_without_a_subcommand() {
        let args = ["todo-server", "--port", "9000", "--db-port", "6543"]
            .into_iter()
            .chain(STORAGE);
        let serve = ServeArgs::try_parse_from(args).unwrap();
        assert_eq!(serve.port, 9000);

        let config = serve.storage.db_config();
        assert_eq!(config.port, 6543);
        assert_eq!(config.user, "app");
        assert_eq!(config.name, "todos");
    }

    #[test]
    fn migrate_subcommand_takes_storage_args() {
        let args = ["todo-server", "migrate", "--db-connect-timeout-secs", "3"]
            .into_iter()
            .chain(STORAGE);
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Command::Migrate { storage }) => {
                assert_eq!(storage.db_config().connect_timeout, Duration::from_secs(3));
            }
            _ => panic!("expected migrate"),
        }
    }
}
