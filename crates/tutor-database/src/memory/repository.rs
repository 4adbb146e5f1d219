//! Generic in-memory repository.

use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::debug;

use tutor_core::error::AppError;
use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::traits::{Entity, MergeFn, Repository};
use tutor_core::types::{PageRequest, PageResponse};

use super::database::{MemoryDatabase, StoredRow, Table};
use super::rows;
use crate::order::resolve_order;

/// Repository evaluating specifications over a [`MemoryDatabase`].
///
/// Reads hold the shared lock and writes the exclusive lock for their whole
/// duration, which gives every call transaction-like isolation.
pub struct MemoryRepository<E> {
    db: MemoryDatabase,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for MemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> MemoryRepository<E> {
    /// Create a repository over `db`.
    pub fn new(db: MemoryDatabase) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

fn load<E: Entity>(table: &Table, ids: &[i64]) -> AppResult<Vec<E>> {
    ids.iter()
        .map(|id| {
            table
                .rows
                .get(id)
                .and_then(StoredRow::typed::<E>)
                .ok_or_else(|| {
                    AppError::internal(format!("{} row {id} could not be loaded", E::META.name))
                })
        })
        .collect()
}

fn to_usize(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

#[async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        let tables = self.db.tables().read().await;
        Ok(tables
            .table(E::META.table)
            .and_then(|table| table.rows.get(&id))
            .and_then(StoredRow::typed::<E>))
    }

    async fn find_by_spec(&self, spec: &Specification<E>) -> AppResult<Vec<E>> {
        let tables = self.db.tables().read().await;
        let ids = rows::matching_ids(&tables, spec)?;
        match tables.table(E::META.table) {
            Some(table) => load(table, &ids),
            None => Ok(Vec::new()),
        }
    }

    async fn find_page_by_spec(
        &self,
        spec: &Specification<E>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<E>> {
        let order = resolve_order(E::META, &page.sort)?;
        let tables = self.db.tables().read().await;
        let mut ids = rows::matching_ids(&tables, spec)?;
        let total = ids.len() as u64;

        let Some(table) = tables.table(E::META.table) else {
            return Ok(PageResponse::new(Vec::new(), page.page, page.page_size, 0));
        };
        rows::sort_ids(table, &mut ids, &order);
        let window: Vec<i64> = ids
            .into_iter()
            .skip(to_usize(page.offset()))
            .take(to_usize(page.limit()))
            .collect();
        let items = load(table, &window)?;

        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count_by_spec(&self, spec: &Specification<E>) -> AppResult<u64> {
        let tables = self.db.tables().read().await;
        Ok(rows::matching_ids(&tables, spec)?.len() as u64)
    }

    async fn insert(&self, entity: E) -> AppResult<E> {
        let mut tables = self.db.tables().write().await;
        tables.check_references(E::META, &entity.to_record())?;

        let table = tables.table_mut(E::META);
        let id = table.next_id;
        table.next_id += 1;

        let mut entity = entity;
        entity.set_id(id);
        table.rows.insert(id, StoredRow::new(entity.clone()));
        debug!(entity = E::META.name, id, "Inserted row");
        Ok(entity)
    }

    async fn update_with(&self, id: i64, merge: MergeFn<E>) -> AppResult<Option<E>> {
        let mut tables = self.db.tables().write().await;
        let Some(stored) = tables
            .table(E::META.table)
            .and_then(|table| table.rows.get(&id))
        else {
            return Ok(None);
        };
        let mut entity = stored.typed::<E>().ok_or_else(|| {
            AppError::internal(format!("{} row {id} could not be loaded", E::META.name))
        })?;

        merge(&mut entity)?;
        entity.set_id(id);
        tables.check_references(E::META, &entity.to_record())?;

        tables
            .table_mut(E::META)
            .rows
            .insert(id, StoredRow::new(entity.clone()));
        debug!(entity = E::META.name, id, "Updated row");
        Ok(Some(entity))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.db.tables().write().await;
        let exists = tables
            .table(E::META.table)
            .is_some_and(|table| table.rows.contains_key(&id));
        if !exists {
            return Ok(false);
        }
        if let Some(other) = tables.referencing(E::META.table, id) {
            return Err(AppError::database(format!(
                "{} row {id} is still referenced from {other}",
                E::META.table
            )));
        }
        tables.table_mut(E::META).rows.remove(&id);
        debug!(entity = E::META.name, id, "Deleted row");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::types::{IntegerFilter, LongFilter, SortField};
    use tutor_entity::{Lesson, Like, Rating, Student, Teacher};

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let db = MemoryDatabase::new();
        let repo = db.repository::<Student>();
        let a = repo.insert(Student::new("S1", "Ann")).await.expect("insert");
        let b = repo.insert(Student::new("S2", "Bob")).await.expect("insert");
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(repo.count().await.expect("count"), 2);
    }

    #[tokio::test]
    async fn test_range_filter_on_scores() {
        let db = MemoryDatabase::new();
        let repo = db.repository::<Rating>();
        for score in 0..=5 {
            repo.insert(Rating::new().score(score)).await.expect("insert");
        }
        let spec = Specification::<Rating>::builder()
            .filter("score", Some(&IntegerFilter::between(Some(3), Some(5))))
            .build();
        let scores: Vec<i32> = repo
            .find_by_spec(&spec)
            .await
            .expect("list")
            .into_iter()
            .map(|r| r.score)
            .collect();
        assert_eq!(scores, vec![3, 4, 5]);
    }

    #[tokio::test]
    async fn test_like_by_student_includes_null_fields() {
        let db = MemoryDatabase::new();
        let students = db.repository::<Student>();
        let likes = db.repository::<Like>();
        for i in 1..=7 {
            students
                .insert(Student::new(format!("S{i}"), format!("Student {i}")))
                .await
                .expect("insert");
        }
        likes.insert(Like::new().student(7)).await.expect("insert");
        likes.insert(Like::new().student(3)).await.expect("insert");
        likes.insert(Like::new()).await.expect("insert");

        let spec = Specification::<Like>::builder()
            .join_filter("student", Some(&LongFilter::equal_to(7)))
            .build();
        let found = likes.find_by_spec(&spec).await.expect("list");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].student_id, Some(7));
        assert!(found[0].kind.is_none());
        assert_eq!(likes.count_by_spec(&spec).await.expect("count"), 1);
    }

    #[tokio::test]
    async fn test_one_to_many_join_and_distinct() {
        let db = MemoryDatabase::new();
        let teachers = db.repository::<Teacher>();
        let lessons = db.repository::<Lesson>();
        let t1 = teachers.insert(Teacher::new("T1", "Tran")).await.expect("insert");
        teachers.insert(Teacher::new("T2", "Le")).await.expect("insert");
        let t1_id = t1.id.expect("id");
        for code in ["L1", "L2"] {
            lessons
                .insert(Lesson::new(code, "Algebra").teacher(t1_id))
                .await
                .expect("insert");
        }

        let with_lessons = |distinct| {
            Specification::<Teacher>::builder()
                .distinct(Some(distinct))
                .join_filter("lessons", Some(&LongFilter::is_specified(true)))
                .build()
        };
        let plain = teachers.find_by_spec(&with_lessons(false)).await.expect("list");
        let distinct = teachers.find_by_spec(&with_lessons(true)).await.expect("list");
        assert_eq!(plain.len(), 2);
        assert_eq!(distinct.len(), 1);
        assert_eq!(
            teachers.count_by_spec(&with_lessons(true)).await.expect("count"),
            1
        );
    }

    #[tokio::test]
    async fn test_page_sorting_and_total() {
        let db = MemoryDatabase::new();
        let repo = db.repository::<Rating>();
        for score in [2, 5, 1, 4, 3] {
            repo.insert(Rating::new().score(score)).await.expect("insert");
        }
        let page = PageRequest::new(1, 2).with_sort(SortField::desc("score"));
        let result = repo
            .find_page_by_spec(&Specification::all(), &page)
            .await
            .expect("page");
        assert_eq!(result.total_items, 5);
        assert_eq!(
            result.items.iter().map(|r| r.score).collect::<Vec<_>>(),
            vec![5, 4]
        );
        assert!(result.has_next);
    }

    #[tokio::test]
    async fn test_update_with_missing_id_writes_nothing() {
        let db = MemoryDatabase::new();
        let repo = db.repository::<Rating>();
        repo.insert(Rating::new().score(3)).await.expect("insert");
        let updated = repo
            .update_with(
                42,
                Box::new(|rating: &mut Rating| {
                    rating.score = 1;
                    Ok(())
                }),
            )
            .await
            .expect("update");
        assert!(updated.is_none());
        assert_eq!(repo.count().await.expect("count"), 1);
    }

    #[tokio::test]
    async fn test_failed_merge_leaves_row_unchanged() {
        let db = MemoryDatabase::new();
        let repo = db.repository::<Rating>();
        let stored = repo.insert(Rating::new().score(3)).await.expect("insert");
        let id = stored.id.expect("id");
        let result = repo
            .update_with(
                id,
                Box::new(|rating: &mut Rating| {
                    rating.score = 9;
                    Err(AppError::validation("score out of range"))
                }),
            )
            .await;
        assert!(result.is_err());
        let reloaded = repo.find_by_id(id).await.expect("find").expect("row");
        assert_eq!(reloaded.score, 3);
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let db = MemoryDatabase::new();
        let teachers = db.repository::<Teacher>();
        let lessons = db.repository::<Lesson>();

        let dangling = lessons.insert(Lesson::new("L1", "Algebra").teacher(99)).await;
        assert!(dangling.is_err());

        let teacher = teachers.insert(Teacher::new("T1", "Tran")).await.expect("insert");
        let teacher_id = teacher.id.expect("id");
        lessons
            .insert(Lesson::new("L1", "Algebra").teacher(teacher_id))
            .await
            .expect("insert");
        assert!(teachers.delete(teacher_id).await.is_err());
        assert!(!teachers.delete(1234).await.expect("delete"));
    }
}
