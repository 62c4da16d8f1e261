//! Parley REST API entry point.
//!
//! Binary name: `parley`
//!
//! Loads `.env`, parses configuration, sets up tracing, connects to
//! PostgreSQL and applies migrations, then serves the API until Ctrl+C or
//! SIGTERM.

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use parley_api::cli::{Cli, Commands, load_dotenv};
use parley_api::http::router::build_router;
use parley_api::state::PgAppState;
use parley_infra::postgres::pool::DatabasePool;
use parley_observe::tracing_setup::{init_tracing, shutdown_tracing};
use parley_types::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before parsing, so `.env` values feed clap's `env` fallbacks.
    let dotenv = load_dotenv();
    let cli = Cli::parse();

    init_tracing(cli.log_format, cli.otel_stdout)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    match dotenv {
        Some(Ok(path)) => info!(path = %path.display(), "Loaded environment file"),
        Some(Err(e)) => warn!(error = %e, "No .env file loaded, using process environment"),
        None => info!("APP_ENV=docker, skipping .env"),
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mode = cli.migration_mode();
    let command = cli.command.unwrap_or_default();

    let database = cli.database.into_config();
    database.validate()?;
    let api = cli.api.into_config();
    api.validate()?;

    let pool = DatabasePool::connect(&database)
        .await
        .with_context(|| format!("failed to connect to {}:{}", database.host, database.port))?;

    pool.migrate(mode)
        .await
        .context("failed to apply migrations")?;

    match command {
        Commands::Migrate => {
            info!("Migrations applied, exiting");
            pool.close().await;
            Ok(())
        }
        Commands::Serve => serve(pool, &api).await,
    }
}

async fn serve(pool: DatabasePool, api: &ApiConfig) -> anyhow::Result<()> {
    let state = PgAppState::from_pool(pool.clone());
    let router = build_router(state, api);

    let addr = api.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %addr, prefix = %api.prefix(), "Parley API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
