use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the PostgreSQL pool shared by all request handlers. Sized for the
/// interview/report CRUD load; LLM calls dominate request latency, so
/// handlers hold connections only briefly.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await?;

    info!("Database pool ready ({MAX_CONNECTIONS} connections max)");
    Ok(pool)
}
