//! Read-only criteria search.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use tutor_core::result::AppResult;
use tutor_core::traits::Repository;
use tutor_core::types::{PageRequest, PageResponse};

use crate::criteria::Criteria;
use crate::mapper::EntityMapper;

/// Executes criteria as list, page, or count.
///
/// All three modes compile the criteria through the same
/// [`Criteria::specification`], so `count == list.len() == page.total_items`
/// for any criteria value.
pub struct QueryService<M: EntityMapper> {
    repo: Arc<dyn Repository<M::Entity>>,
    _mapper: PhantomData<fn() -> M>,
}

impl<M: EntityMapper> Clone for QueryService<M> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            _mapper: PhantomData,
        }
    }
}

impl<M: EntityMapper> QueryService<M> {
    /// Creates a query service over `repo`.
    pub fn new(repo: Arc<dyn Repository<M::Entity>>) -> Self {
        Self {
            repo,
            _mapper: PhantomData,
        }
    }

    /// Every matching row, ordered by id.
    pub async fn find_by_criteria<C>(&self, criteria: &C) -> AppResult<Vec<M::Dto>>
    where
        C: Criteria<Entity = M::Entity>,
    {
        debug!(?criteria, "Find by criteria");
        let spec = criteria.specification();
        let rows = self.repo.find_by_spec(&spec).await?;
        Ok(rows.iter().map(M::to_dto).collect())
    }

    /// One page of matching rows with the total count.
    pub async fn find_by_criteria_page<C>(
        &self,
        criteria: &C,
        page: &PageRequest,
    ) -> AppResult<PageResponse<M::Dto>>
    where
        C: Criteria<Entity = M::Entity>,
    {
        debug!(?criteria, page = page.page, size = page.page_size, "Find by criteria page");
        let spec = criteria.specification();
        let rows = self.repo.find_page_by_spec(&spec, page).await?;
        Ok(rows.map(|entity| M::to_dto(&entity)))
    }

    /// Number of matching rows.
    pub async fn count_by_criteria<C>(&self, criteria: &C) -> AppResult<u64>
    where
        C: Criteria<Entity = M::Entity>,
    {
        debug!(?criteria, "Count by criteria");
        let spec = criteria.specification();
        self.repo.count_by_spec(&spec).await
    }
}
