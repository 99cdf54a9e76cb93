use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use tracing::{error, info};

use crate::{domain::common::DatabaseConfig, entity::blocks};

/// Connection handle shared by every repository.
#[derive(Debug, Clone)]
pub struct SqlDatabase {
    db: DatabaseConnection,
}

impl SqlDatabase {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url());
        options
            .sqlx_logging(config.logging)
            .max_connections(config.max_connections.max(1));

        // Every pooled connection to `sqlite::memory:` would see its own empty database.
        if config.is_in_memory() {
            options.max_connections(1).min_connections(1);
        }

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to {} database: {}", config.dialect, e);
            e
        })?;
        info!(dialect = %config.dialect, "database connection established");

        if config.is_in_memory() {
            create_blocks_table(&db).await?;
        }

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}

/// Creates `blocks` from the entity definition. Only used for ephemeral in-memory stores.
async fn create_blocks_table(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let statement = Schema::new(backend)
        .create_table_from_entity(blocks::Entity)
        .if_not_exists()
        .to_owned();

    db.execute(backend.build(&statement)).await?;
    info!("created in-memory blocks table");

    Ok(())
}
