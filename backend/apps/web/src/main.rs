//! Web Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are
//! `auth::AuthError` rendered through `kernel::error::AppError`.

mod config;

use std::net::SocketAddr;
use std::time::Duration;

use auth::store::SessionRepository;
use auth::{GoogleIdentityProvider, InMemoryAuthRepository, PgAuthRepository, auth_router};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    let auth_config = settings.auth_config();
    let provider = GoogleIdentityProvider::new(settings.google.clone())?;

    let app = match &settings.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            let repo = PgAuthRepository::new(pool);
            spawn_session_sweeper(repo.clone(), settings.sweep_interval);
            auth_router(repo, provider, auth_config)
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory store");

            let repo = InMemoryAuthRepository::new();
            spawn_session_sweeper(repo.clone(), settings.sweep_interval);
            auth_router(repo, provider, auth_config)
        }
    };

    let app: Router = app.layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!("Listening on http://localhost:{}", settings.port);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Remove expired sessions now and then every `every`
///
/// Errors here should not stop the server.
fn spawn_session_sweeper<R>(repo: R, every: Duration)
where
    R: SessionRepository + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            if let Err(e) = repo.cleanup_expired().await {
                tracing::warn!(
                    error = %e,
                    "Auth session cleanup failed, continuing anyway"
                );
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
