use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{Database, DatabaseConnection};

use super::registry::{DbProvider, DbProviderId};
use crate::config::DatabaseConfig;

/// How long a writer waits on a locked database file before giving up.
const SQLITE_BUSY_TIMEOUT: Duration = Duration::from_secs(15);

pub struct SqliteDbProvider;

#[async_trait]
impl DbProvider for SqliteDbProvider {
    fn id(&self) -> DbProviderId {
        DbProviderId::Sqlite
    }

    fn schemes(&self) -> &'static [&'static str] {
        &["sqlite:"]
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut options = super::pool_options(cfg);
        // Every pooled connection to `:memory:` would otherwise see its own empty database.
        if cfg.url.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }
        // Pragmas are per connection, so they go into the connect options of every member.
        options.map_sqlx_sqlite_opts(|opts| {
            opts.foreign_keys(true).busy_timeout(SQLITE_BUSY_TIMEOUT)
        });

        let db = Database::connect(options).await?;
        Ok(db)
    }
}
