// src/main.rs

use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod models;
mod reports;
mod routes;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn")),
        )
        .init();

    let cfg = config::Config::from_env()?;

    // Initialize DB pool
    let pool = db::connect(&cfg).await?;
    let app = routes::app(AppState { pool }, &cfg);

    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, origins = ?cfg.cors_allow_origins, "analytics API listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
