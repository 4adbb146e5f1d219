//! Selection of the persistence back-end from configuration.

use std::sync::Arc;

use sqlx::FromRow;
use sqlx::postgres::PgRow;
use tracing::info;

use tutor_core::config::DatabaseConfig;
use tutor_core::result::AppResult;
use tutor_core::traits::{Entity, Repository};

use crate::connection::DatabasePool;
use crate::memory::MemoryDatabase;
use crate::migration::run_migrations;
use crate::postgres::PgRepository;

/// The configured persistence back-end.
#[derive(Debug, Clone)]
pub enum Database {
    /// PostgreSQL through a connection pool.
    Postgres(DatabasePool),
    /// Process-local tables, selected by a `memory://` URL.
    Memory(MemoryDatabase),
}

impl Database {
    /// Connect according to `config`, running migrations when enabled.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        if config.is_memory() {
            info!("Using in-memory database");
            return Ok(Self::Memory(MemoryDatabase::new()));
        }

        let pool = DatabasePool::connect(config).await?;
        if config.run_migrations {
            run_migrations(pool.pool()).await?;
        }
        Ok(Self::Postgres(pool))
    }

    /// A repository for entity `E` on this back-end.
    pub fn repository<E>(&self) -> Arc<dyn Repository<E>>
    where
        E: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
    {
        match self {
            Self::Postgres(pool) => Arc::new(PgRepository::<E>::new(pool.pool().clone())),
            Self::Memory(db) => Arc::new(db.repository::<E>()),
        }
    }

    /// Check that the back-end is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match self {
            Self::Postgres(pool) => pool.health_check().await,
            Self::Memory(_) => Ok(true),
        }
    }

    /// Release connections.
    pub async fn close(&self) {
        if let Self::Postgres(pool) = self {
            pool.close().await;
        }
    }
}
