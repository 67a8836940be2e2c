// src/db/mod.rs

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::Config;

pub async fn connect(cfg: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(cfg.db_max_connections)
        .acquire_timeout(cfg.db_acquire_timeout)
        .connect(&cfg.database_url)
        .await?;

    tracing::info!(max_connections = cfg.db_max_connections, "connected to PostgreSQL");
    Ok(pool)
}

/// Round-trips a trivial query; used by the readiness probe.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
