//! CLI and environment configuration for the `parley` binary.
//!
//! Every setting can come from a flag or from the environment (`DB_*`,
//! `API_*`, `LOG_FORMAT`, ...). A `.env` file in the working directory is
//! loaded first unless `APP_ENV=docker`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use parley_infra::postgres::migrate::MigrationMode;
use parley_observe::tracing_setup::LogFormat;
use parley_types::config::{
    ApiConfig, DEFAULT_API_PORT, DEFAULT_API_VERSION, DEFAULT_MAX_CONNECTIONS, DatabaseConfig,
};
use secrecy::SecretString;

/// Chats and messages over HTTP, backed by PostgreSQL.
#[derive(Parser)]
#[command(name = "parley", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub api: ApiArgs,

    /// Log output format (json, pretty).
    #[arg(long, env = "LOG_FORMAT", default_value_t = LogFormat::Json, global = true)]
    pub log_format: LogFormat,

    /// Also export spans to stdout through OpenTelemetry.
    #[arg(long, env = "OTEL_STDOUT", global = true)]
    pub otel_stdout: bool,

    /// Revert every migration before applying them again. Drops all data.
    #[arg(long, env = "DB_RESET_ON_START", global = true)]
    pub reset_database: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commands {
    /// Apply migrations, then serve the HTTP API (default).
    #[default]
    Serve,

    /// Apply migrations and exit.
    Migrate,
}

/// Connection settings for the PostgreSQL store.
///
/// Argument ids are spelled out: clap derives them from field names, which
/// repeat between `DatabaseArgs` and `ApiArgs`.
#[derive(Args)]
pub struct DatabaseArgs {
    #[arg(id = "db_host", long = "db-host", env = "DB_HOST")]
    pub host: String,

    #[arg(id = "db_port", long = "db-port", env = "DB_PORT")]
    pub port: u16,

    #[arg(id = "db_user", long = "db-user", env = "DB_USER")]
    pub user: String,

    #[arg(id = "db_password", long = "db-password", env = "DB_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[arg(id = "db_name", long = "db-name", env = "DB_NAME")]
    pub name: String,

    #[arg(
        id = "db_max_connections",
        long = "db-max-connections",
        env = "DB_MAX_CONNECTIONS",
        default_value_t = DEFAULT_MAX_CONNECTIONS
    )]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn into_config(self) -> DatabaseConfig {
        DatabaseConfig {
            host: self.host,
            port: self.port,
            user: self.user,
            password: SecretString::from(self.password),
            name: self.name,
            max_connections: self.max_connections,
        }
    }
}

/// HTTP surface settings.
#[derive(Args)]
pub struct ApiArgs {
    /// Version segment of every route: `/api/{version}/chats`.
    #[arg(id = "api_version", long = "api-version", env = "API_VERSION", default_value = DEFAULT_API_VERSION)]
    pub version: String,

    #[arg(id = "api_host", long = "api-host", env = "API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "api_port", long = "api-port", env = "API_PORT", default_value_t = DEFAULT_API_PORT)]
    pub port: u16,
}

impl ApiArgs {
    pub fn into_config(self) -> ApiConfig {
        ApiConfig {
            version: self.version,
            host: self.host,
            port: self.port,
        }
    }
}

impl Cli {
    pub fn migration_mode(&self) -> MigrationMode {
        if self.reset_database {
            MigrationMode::Reset
        } else {
            MigrationMode::Apply
        }
    }
}

/// Load `.env` from the working directory unless running in docker.
///
/// Returns `None` when loading was skipped. Called before tracing is set up,
/// so the caller logs the outcome.
pub fn load_dotenv() -> Option<Result<PathBuf, dotenvy::Error>> {
    if std::env::var("APP_ENV").as_deref() == Ok("docker") {
        return None;
    }
    Some(dotenvy::dotenv())
}
