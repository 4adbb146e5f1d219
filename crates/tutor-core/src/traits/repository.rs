//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::query::Specification;
use crate::result::AppResult;
use crate::traits::entity::Entity;
use crate::types::pagination::{PageRequest, PageResponse};

/// Merge step applied to the stored entity inside an update transaction.
///
/// Returning an error aborts the transaction without writing.
pub type MergeFn<E> = Box<dyn FnOnce(&mut E) -> AppResult<()> + Send>;

/// Generic CRUD + specification repository.
///
/// Every read runs in a read-only transaction and every write in a
/// read-write transaction. List, page, and count all evaluate the same
/// [`Specification`].
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync + 'static {
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>>;

    /// All rows matching `spec`, ordered by id.
    async fn find_by_spec(&self, spec: &Specification<E>) -> AppResult<Vec<E>>;

    /// One page of rows matching `spec` together with the total count.
    async fn find_page_by_spec(
        &self,
        spec: &Specification<E>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<E>>;

    /// Number of rows matching `spec`.
    async fn count_by_spec(&self, spec: &Specification<E>) -> AppResult<u64>;

    /// Persist a new entity, assigning its id.
    async fn insert(&self, entity: E) -> AppResult<E>;

    /// Load the stored entity, apply `merge`, and write it back in one
    /// transaction. Returns `None` without writing when `id` does not exist.
    async fn update_with(&self, id: i64, merge: MergeFn<E>) -> AppResult<Option<E>>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Replace the stored row with `entity`, keeping the stored creation
    /// audit fields. Returns `None` when the id is unassigned or unknown.
    async fn update(&self, entity: E) -> AppResult<Option<E>> {
        let Some(id) = entity.id() else {
            return Ok(None);
        };
        self.update_with(
            id,
            Box::new(move |stored: &mut E| {
                let mut replacement = entity;
                replacement.audit_mut().inherit_created(stored.audit());
                *stored = replacement;
                Ok(())
            }),
        )
        .await
    }

    /// Find all entities with pagination.
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<E>> {
        self.find_page_by_spec(&Specification::all(), page).await
    }

    /// Count total entities.
    async fn count(&self) -> AppResult<u64> {
        self.count_by_spec(&Specification::all()).await
    }
}
