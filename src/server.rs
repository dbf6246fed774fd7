//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, migrations and the Axum server lifecycle.

use crate::application::services::TwitterService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::TweetRepository;
use crate::infrastructure::persistence::{MemoryTweetRepository, PgTweetRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - the tweet repository (PostgreSQL pool plus migrations, or in-memory)
/// - the twitter service with the configured limits
/// - the Axum HTTP server, stopped gracefully on Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_storage(&config).await?;

    let twitter_service = Arc::new(TwitterService::new(repository, config.tweet_policy()));
    let state = AppState::new(twitter_service, config.default_page_size);

    let app = app_router(state, Duration::from_secs(config.request_timeout_seconds));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Builds the repository selected by `STORAGE`.
async fn connect_storage(config: &Config) -> Result<Arc<dyn TweetRepository>> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, tweets are lost on restart");
            Ok(Arc::new(MemoryTweetRepository::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set when STORAGE is 'postgres'")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(PgTweetRepository::new(Arc::new(pool))))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
