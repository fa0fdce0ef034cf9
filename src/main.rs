//! Server binary: reads configuration, connects the pool, optionally prepares the
//! database, and serves the canteen API until interrupted.

use kantin_kita::{build_router, ensure_database_exists, ensure_tables, AppConfig, AppState, PgStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kantin_kita=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    if config.database.create_database {
        ensure_database_exists(&config.database.url).await?;
    }
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout)
        .connect(&config.database.url)
        .await?;
    if config.database.ensure_tables {
        ensure_tables(&pool).await?;
    }

    let state = AppState::new(Arc::new(PgStore::new(pool))).with_rules(config.validation.clone());
    let app = build_router(state, &config.http);

    let listener = TcpListener::bind(&config.http.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
