//! Database connection and initialization.

use sea_orm::{ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr};

use crate::config::Config;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect to the configured database. The schema is owned externally;
    /// nothing is created or migrated here.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let options = ConnectOptions::new(config.database_url.clone());
        let connection = SeaDatabase::connect(options).await?;
        tracing::info!(backend = ?connection.get_database_backend(), "Database connected");

        Ok(Self { connection })
    }

    /// Wrap an already established connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
