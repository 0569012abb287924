//! FinPal API Server
//!
//! Backend for the personal finance tracker: income and expense tracking,
//! period summaries, budget recommendations, CSV export and a cached news
//! feed, on top of PostgreSQL.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings
//! finpal-server
//!
//! # Start with custom config
//! finpal-server --config /path/to/config.toml
//!
//! # Start with environment overrides
//! FINPAL__SERVER__PORT=8080 finpal-server
//! ```

mod config;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use finpal_api::{create_router, ApiConfig, AppState, NewsCache};
use finpal_db::{Database, DatabaseConfig as DbConfig};

use crate::config::ServerConfig;

/// FinPal API Server - personal finance tracker backend
#[derive(Parser, Debug)]
#[command(name = "finpal-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML, JSON, or YAML)
    #[arg(short, long, env = "FINPAL_CONFIG")]
    config: Option<String>,

    /// Host to bind to
    #[arg(long, env = "FINPAL_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FINPAL_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FINPAL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format (json, pretty)
    #[arg(long, env = "FINPAL_LOG_FORMAT")]
    log_format: Option<String>,

    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// NewsAPI key for the news feed
    #[arg(long, env = "NEWS_API_KEY")]
    news_api_key: Option<String>,

    /// Skip running database migrations on startup
    #[arg(long)]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut server_config = ServerConfig::load(args.config.as_deref())?;

    // CLI arguments win over file and environment configuration
    if let Some(host) = args.host {
        server_config.server.host = host;
    }
    if let Some(port) = args.port {
        server_config.server.port = port;
    }
    if let Some(db_url) = args.database_url {
        server_config.database.postgres_url = db_url;
    }
    if let Some(key) = args.news_api_key {
        server_config.news.api_key = Some(key);
    }
    if let Some(level) = args.log_level {
        server_config.logging.level = level;
    }
    if let Some(format) = args.log_format {
        server_config.logging.format = format;
    }
    if args.skip_migrations {
        server_config.database.run_migrations = false;
    }

    init_logging(&server_config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting FinPal API Server"
    );

    let db = init_database(&server_config.database).await?;

    let news = NewsCache::new(
        server_config.news.api_key.clone(),
        server_config.news.cache_ttl_secs,
    );

    let state = Arc::new(AppState::new(db, news));

    let api_config = ApiConfig {
        enable_cors: server_config.api.enable_cors,
        cors_origins: server_config.api.cors_origins.clone(),
    };

    let app = create_router(state, api_config);

    let addr = server_config.server.socket_addr()?;

    tracing::info!(
        host = %server_config.server.host,
        port = %server_config.server.port,
        "Server listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let drain_timeout = server_config.server.shutdown_timeout();
    let (drain_tx, drain_rx) = tokio::sync::oneshot::channel();

    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = drain_tx.send(());
            })
            .await
    });

    // The drain window starts only once a shutdown signal lands. A server
    // error before that drops the sender and we fall straight through.
    if drain_rx.await.is_ok() {
        tracing::info!(
            timeout_secs = drain_timeout.as_secs(),
            "Waiting for in-flight requests to complete..."
        );
    }

    await_drain(server, drain_timeout).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for the server task to finish draining, but never longer than
/// `timeout`.
async fn await_drain(
    server: tokio::task::JoinHandle<std::io::Result<()>>,
    timeout: Duration,
) -> anyhow::Result<()> {
    match tokio::time::timeout(timeout, server).await {
        Ok(served) => Ok(served??),
        Err(_) => {
            tracing::warn!("Drain window elapsed, closing remaining connections");
            Ok(())
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &config::LoggingConfig) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            subscriber.with(fmt::layer().json().with_target(true)).init();
        }
        _ => {
            subscriber.with(fmt::layer().pretty().with_target(true)).init();
        }
    }

    Ok(())
}

/// Initialize database connection and run migrations
async fn init_database(config: &config::DatabaseSettings) -> anyhow::Result<Arc<Database>> {
    tracing::info!("Connecting to database...");

    let db_config = DbConfig {
        postgres_url: config.postgres_url.clone(),
        pg_max_connections: config.max_connections,
        pg_min_connections: config.min_connections,
        pg_acquire_timeout_secs: config.connect_timeout_secs,
    };

    let db = Database::connect(&db_config).await?;

    if config.run_migrations {
        db.migrate().await?;
    }

    let health = db.health_check().await;
    if !health.healthy {
        anyhow::bail!("Database health check failed");
    }

    tracing::info!(postgres = health.postgres, "Database health check passed");

    Ok(Arc::new(db))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
