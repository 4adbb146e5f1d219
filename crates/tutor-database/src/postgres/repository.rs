//! Generic PostgreSQL repository over any [`Entity`] with a row mapping.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::debug;

use tutor_core::error::{AppError, ErrorKind};
use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::traits::{Entity, MergeFn, Repository};
use tutor_core::types::{PageRequest, PageResponse};

use super::sql::{self, Window};
use crate::order::resolve_order;

/// Repository executing specifications as SQL against PostgreSQL.
///
/// Reads open a `READ ONLY` transaction; a page and its total count are
/// read in the same transaction.
#[derive(Debug, Clone)]
pub struct PgRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> PgRepository<E> {
    /// Create a new repository over `pool`.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| storage_error::<E>("begin transaction", e))
    }

    async fn begin_read_only(&self) -> AppResult<Transaction<'static, Postgres>> {
        let mut tx = self.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_error::<E>("begin read-only transaction", e))?;
        Ok(tx)
    }
}

fn storage_error<E: Entity>(action: &str, err: sqlx::Error) -> AppError {
    AppError::with_source(
        ErrorKind::of_sqlx(&err),
        format!("Failed to {action} for {}: {err}", E::META.name),
        err,
    )
}

async fn count_in<E: Entity>(
    tx: &mut Transaction<'static, Postgres>,
    spec: &Specification<E>,
) -> AppResult<u64> {
    let mut qb = sql::count(spec)?;
    debug!(entity = E::META.name, sql = qb.sql(), "Counting rows");
    let total: i64 = qb
        .build_query_scalar()
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| storage_error::<E>("count rows", e))?;
    Ok(u64::try_from(total).unwrap_or_default())
}

#[async_trait]
impl<E> Repository<E> for PgRepository<E>
where
    E: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
{
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        let mut tx = self.begin_read_only().await?;
        let mut qb = sql::find_by_id(E::META, id);
        let found = qb
            .build_query_as::<E>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| storage_error::<E>("find row", e))?;
        tx.commit()
            .await
            .map_err(|e| storage_error::<E>("commit", e))?;
        Ok(found)
    }

    async fn find_by_spec(&self, spec: &Specification<E>) -> AppResult<Vec<E>> {
        let order = resolve_order(E::META, &[])?;
        let mut tx = self.begin_read_only().await?;
        let mut qb = sql::select(spec, &order, None)?;
        debug!(entity = E::META.name, sql = qb.sql(), "Listing rows");
        let rows = qb
            .build_query_as::<E>()
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| storage_error::<E>("list rows", e))?;
        tx.commit()
            .await
            .map_err(|e| storage_error::<E>("commit", e))?;
        Ok(rows)
    }

    async fn find_page_by_spec(
        &self,
        spec: &Specification<E>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<E>> {
        let order = resolve_order(E::META, &page.sort)?;
        let mut tx = self.begin_read_only().await?;

        let total = count_in(&mut tx, spec).await?;

        let window = Window {
            limit: page.limit(),
            offset: page.offset(),
        };
        let mut qb = sql::select(spec, &order, Some(window))?;
        debug!(entity = E::META.name, sql = qb.sql(), "Fetching page");
        let items = qb
            .build_query_as::<E>()
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| storage_error::<E>("fetch page", e))?;
        tx.commit()
            .await
            .map_err(|e| storage_error::<E>("commit", e))?;

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count_by_spec(&self, spec: &Specification<E>) -> AppResult<u64> {
        let mut tx = self.begin_read_only().await?;
        let total = count_in(&mut tx, spec).await?;
        tx.commit()
            .await
            .map_err(|e| storage_error::<E>("commit", e))?;
        Ok(total)
    }

    async fn insert(&self, entity: E) -> AppResult<E> {
        let mut tx = self.begin().await?;
        let mut qb = sql::insert(E::META, &entity.to_record());
        let stored = qb
            .build_query_as::<E>()
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| storage_error::<E>("insert row", e))?;
        tx.commit()
            .await
            .map_err(|e| storage_error::<E>("commit", e))?;
        debug!(entity = E::META.name, id = ?stored.id(), "Inserted row");
        Ok(stored)
    }

    async fn update_with(&self, id: i64, merge: MergeFn<E>) -> AppResult<Option<E>> {
        let mut tx = self.begin().await?;
        let mut select = sql::find_by_id(E::META, id);
        let current = select
            .build_query_as::<E>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| storage_error::<E>("load row for update", e))?;
        let Some(mut entity) = current else {
            return Ok(None);
        };

        // An error here drops the transaction, which rolls it back.
        merge(&mut entity)?;

        let mut qb = sql::update(E::META, id, &entity.to_record());
        let stored = qb
            .build_query_as::<E>()
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| storage_error::<E>("update row", e))?;
        tx.commit()
            .await
            .map_err(|e| storage_error::<E>("commit", e))?;
        debug!(entity = E::META.name, id, "Updated row");
        Ok(Some(stored))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tx = self.begin().await?;
        let mut qb = sql::delete(E::META, id);
        let result = qb
            .build()
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_error::<E>("delete row", e))?;
        tx.commit()
            .await
            .map_err(|e| storage_error::<E>("commit", e))?;
        Ok(result.rows_affected() > 0)
    }
}
