use fertibase_domain::config::DatabaseConfig;
use fertibase_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info, warn};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    if cfg.is_in_memory() {
        warn!("No database path configured, using an in-memory database; data is lost on exit");
    } else {
        info!("Initializing database: {}", cfg.url());
    }

    let pool = create_pool(cfg).await.map_err(|e| {
        error!("Failed to initialize database pool: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        max_connections = if cfg.is_in_memory() { 1 } else { cfg.max_connections },
        "Database initialized successfully"
    );

    Ok(pool)
}
