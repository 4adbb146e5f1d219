//! Generic create/read/update/delete service.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::info;

use tutor_core::error::AppError;
use tutor_core::result::AppResult;
use tutor_core::traits::{Entity, Repository};
use tutor_core::types::{PageRequest, PageResponse};

use crate::context::RequestContext;
use crate::mapper::EntityMapper;
use crate::validation::validate;

/// Save, update, partial update, find, and delete for one entity.
///
/// Every write validates before touching storage and stamps audit columns
/// from the [`RequestContext`]. Updates are last-writer-wins.
pub struct EntityService<M: EntityMapper> {
    repo: Arc<dyn Repository<M::Entity>>,
    _mapper: PhantomData<fn() -> M>,
}

impl<M: EntityMapper> Clone for EntityService<M> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            _mapper: PhantomData,
        }
    }
}

impl<M: EntityMapper> EntityService<M> {
    /// Creates a service over `repo`.
    pub fn new(repo: Arc<dyn Repository<M::Entity>>) -> Self {
        Self {
            repo,
            _mapper: PhantomData,
        }
    }

    fn name() -> &'static str {
        <M::Entity as Entity>::META.name
    }

    /// Persist a new entity. The DTO must not carry an id.
    pub async fn save(&self, ctx: &RequestContext, dto: M::Dto) -> AppResult<M::Dto> {
        if M::dto_id(&dto).is_some() {
            return Err(AppError::conflict(format!(
                "A new {} cannot already have an id",
                Self::name()
            )));
        }
        validate(&dto)?;

        let mut entity = M::to_entity(&dto);
        entity
            .audit_mut()
            .mark_created(&ctx.actor, ctx.request_time);
        let stored = self.repo.insert(entity).await?;

        info!(
            entity = Self::name(),
            id = ?stored.id(),
            actor = %ctx.actor,
            request_id = %ctx.request_id,
            "Created"
        );
        Ok(M::to_dto(&stored))
    }

    /// Replace the entity with id `id`. Returns `None` when it does not exist.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        dto: M::Dto,
    ) -> AppResult<Option<M::Dto>> {
        match M::dto_id(&dto) {
            Some(body_id) if body_id == id => {}
            Some(body_id) => {
                return Err(AppError::validation(format!(
                    "Body id {body_id} does not match path id {id}"
                )));
            }
            None => return Err(AppError::validation("Update requires an id")),
        }
        validate(&dto)?;

        let mut replacement = M::to_entity(&dto);
        replacement
            .audit_mut()
            .mark_modified(&ctx.actor, ctx.request_time);
        let updated = self.repo.update(replacement).await?;

        if updated.is_some() {
            info!(entity = Self::name(), id, actor = %ctx.actor, "Updated");
        }
        Ok(updated.as_ref().map(M::to_dto))
    }

    /// Copy the present fields of `patch` onto the stored entity.
    ///
    /// Read, merge, validation of the merged state, and write happen in one
    /// repository transaction. Returns `None`, writing nothing, when `id`
    /// does not exist.
    pub async fn partial_update(
        &self,
        ctx: &RequestContext,
        id: i64,
        patch: M::Dto,
    ) -> AppResult<Option<M::Dto>> {
        if let Some(body_id) = M::dto_id(&patch) {
            if body_id != id {
                return Err(AppError::validation(format!(
                    "Body id {body_id} does not match path id {id}"
                )));
            }
        }

        let actor = ctx.actor.clone();
        let at = ctx.request_time;
        let updated = self
            .repo
            .update_with(
                id,
                Box::new(move |stored: &mut M::Entity| {
                    M::merge_partial(stored, &patch);
                    validate(&M::to_dto(stored))?;
                    stored.audit_mut().mark_modified(&actor, at);
                    Ok(())
                }),
            )
            .await?;

        if updated.is_some() {
            info!(entity = Self::name(), id, actor = %ctx.actor, "Partially updated");
        }
        Ok(updated.as_ref().map(M::to_dto))
    }

    /// One page of all entities.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<M::Dto>> {
        let rows = self.repo.find_all(page).await?;
        Ok(rows.map(|entity| M::to_dto(&entity)))
    }

    /// The entity with id `id`, if any.
    pub async fn find_one(&self, id: i64) -> AppResult<Option<M::Dto>> {
        Ok(self.repo.find_by_id(id).await?.as_ref().map(M::to_dto))
    }

    /// Delete by id. Returns whether a row was removed.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<bool> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!(entity = Self::name(), id, actor = %ctx.actor, "Deleted");
        }
        Ok(deleted)
    }
}
