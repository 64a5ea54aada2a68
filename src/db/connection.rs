use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers;
use crate::config::DatabaseConfig;

/// Opens the shared pool. The schema is owned by the database, so nothing is synced here.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let registry = providers::default_registry()?;
    let provider = registry.provider_for_url(&cfg.url)?;

    let db = provider.connect(cfg).await?;
    info!(
        provider = provider.id().as_str(),
        max_connections = cfg.max_connections,
        "database pool ready"
    );
    Ok(db)
}
