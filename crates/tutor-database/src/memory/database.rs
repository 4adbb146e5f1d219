//! Shared in-memory table storage.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;

use tutor_core::error::AppError;
use tutor_core::query::{EntityMeta, JoinKind, Record, Value};
use tutor_core::result::AppResult;
use tutor_core::traits::Entity;

use super::repository::MemoryRepository;

/// One stored row: the column record used for evaluation and the typed
/// entity returned to callers.
#[derive(Clone)]
pub(crate) struct StoredRow {
    pub(crate) record: Record,
    pub(crate) entity: Arc<dyn Any + Send + Sync>,
}

impl StoredRow {
    pub(crate) fn new<E: Entity>(entity: E) -> Self {
        Self {
            record: entity.to_record(),
            entity: Arc::new(entity),
        }
    }

    pub(crate) fn typed<E: Entity>(&self) -> Option<E> {
        self.entity.downcast_ref::<E>().cloned()
    }
}

/// Rows of one table keyed by id, plus the id sequence.
pub(crate) struct Table {
    pub(crate) meta: &'static EntityMeta,
    pub(crate) next_id: i64,
    pub(crate) rows: BTreeMap<i64, StoredRow>,
}

impl Table {
    fn new(meta: &'static EntityMeta) -> Self {
        Self {
            meta,
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Every table, keyed by table name.
#[derive(Default)]
pub(crate) struct Tables {
    tables: HashMap<&'static str, Table>,
}

impl Tables {
    pub(crate) fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub(crate) fn table_mut(&mut self, meta: &'static EntityMeta) -> &mut Table {
        self.tables
            .entry(meta.table)
            .or_insert_with(|| Table::new(meta))
    }

    /// The first table with a row whose foreign key still references row
    /// `id` of `table`.
    pub(crate) fn referencing(&self, table: &str, id: i64) -> Option<&'static str> {
        self.tables.values().find_map(|other| {
            let referenced = other.meta.joins.iter().any(|join| match join.kind {
                JoinKind::ManyToOne { foreign_key } if join.table == table => other
                    .rows
                    .values()
                    .any(|row| row.record.get(foreign_key) == Some(&Value::Long(id))),
                _ => false,
            });
            referenced.then_some(other.meta.table)
        })
    }

    /// Reject a record whose foreign keys point at rows that do not exist.
    pub(crate) fn check_references(&self, meta: &EntityMeta, record: &Record) -> AppResult<()> {
        for join in meta.joins {
            let JoinKind::ManyToOne { foreign_key } = join.kind else {
                continue;
            };
            let Some(target) = record.get(foreign_key).and_then(Value::as_i64) else {
                continue;
            };
            let exists = self
                .table(join.table)
                .is_some_and(|table| table.rows.contains_key(&target));
            if !exists {
                return Err(AppError::database(format!(
                    "{}.{foreign_key} references missing {} row {target}",
                    meta.table, join.table
                )));
            }
        }
        Ok(())
    }
}

/// A process-local database shared by every [`MemoryRepository`] created
/// from it. Cloning shares the same storage.
///
/// A single lock covers all tables, so each operation observes and
/// produces a consistent snapshot.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    inner: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository for entity `E` backed by this database.
    pub fn repository<E: Entity>(&self) -> MemoryRepository<E> {
        MemoryRepository::new(self.clone())
    }

    pub(crate) fn tables(&self) -> &RwLock<Tables> {
        &self.inner
    }
}

impl std::fmt::Debug for MemoryDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDatabase").finish_non_exhaustive()
    }
}
