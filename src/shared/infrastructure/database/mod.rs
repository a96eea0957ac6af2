// Datastore connection descriptor, pool creation and schema synchronization.
//
// Kind, port, database name and the two flags are fixed for this service. Host and
// credentials come from the environment profile so no secret lives in source.

use std::fmt;

use log::LevelFilter;
use sqlx::ConnectOptions;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use thiserror::Error;

use crate::shared::config::environment::EnvironmentProfile;
use crate::shared::config::error::ConfigError;

pub const DATASTORE_PORT: u16 = 5432;
pub const DATABASE_NAME: &str = "nuber-eats";
const MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatastoreKind {
    Postgres,
}

impl fmt::Display for DatastoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatastoreKind::Postgres => f.write_str("postgres"),
        }
    }
}

/// Table owned by a feature module, created on startup when synchronization is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    pub table: &'static str,
    pub ddl: &'static str,
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("could not connect to {kind} at {host}:{port}/{database}")]
    Connect {
        kind: DatastoreKind,
        host: String,
        port: u16,
        database: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("could not synchronize table {table}")]
    Synchronize {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub kind: DatastoreKind,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub synchronize: bool,
    pub logging: bool,
}

impl DatabaseConfig {
    pub fn from_profile(profile: &EnvironmentProfile) -> Result<Self, ConfigError> {
        Ok(Self {
            kind: DatastoreKind::Postgres,
            host: profile.require("DB_HOST")?.to_string(),
            port: DATASTORE_PORT,
            username: profile.require("DB_USERNAME")?.to_string(),
            password: profile.require("DB_PASSWORD")?.to_string(),
            database: DATABASE_NAME.to_string(),
            synchronize: true,
            logging: true,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database);
        if self.logging {
            options.log_statements(LevelFilter::Info)
        } else {
            options.disable_statement_logging()
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("kind", &self.kind)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("synchronize", &self.synchronize)
            .field("logging", &self.logging)
            .finish()
    }
}

pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    tracing::info!(
        kind = %config.kind,
        host = %config.host,
        port = config.port,
        database = %config.database,
        "connecting to datastore"
    );
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(config.connect_options())
        .await
        .map_err(|source| DatabaseError::Connect {
            kind: config.kind,
            host: config.host.clone(),
            port: config.port,
            database: config.database.clone(),
            source,
        })
}

/// Runs each entity's idempotent DDL in order.
pub async fn synchronize(pool: &PgPool, entities: &[EntitySchema]) -> Result<(), DatabaseError> {
    for entity in entities {
        sqlx::query(entity.ddl)
            .execute(pool)
            .await
            .map_err(|source| DatabaseError::Synchronize {
                table: entity.table,
                source,
            })?;
        tracing::info!(table = entity.table, "table synchronized");
    }
    Ok(())
}
