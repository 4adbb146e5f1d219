//! Entity ↔ DTO conversion contract.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::Validate;

use tutor_core::traits::Entity;

/// An association reduced to the referenced id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    /// Referenced id.
    pub id: i64,
}

impl IdRef {
    /// Wrap an optional foreign key.
    pub fn of(id: Option<i64>) -> Option<Self> {
        id.map(|id| Self { id })
    }

    /// Unwrap an optional reference into a foreign key.
    pub fn id_of(reference: Option<&Self>) -> Option<i64> {
        reference.map(|r| r.id)
    }
}

/// Converts between an entity and its transport shape.
///
/// Every DTO field is optional: a full save requires the mandatory ones
/// through validation, while a partial update copies only present fields.
pub trait EntityMapper: Send + Sync + 'static {
    /// Persisted entity.
    type Entity: Entity;
    /// Transport shape.
    type Dto: Debug + Clone + Serialize + DeserializeOwned + Validate + Send + Sync + 'static;

    /// The id carried by a DTO.
    fn dto_id(dto: &Self::Dto) -> Option<i64>;

    /// Entity to DTO.
    fn to_dto(entity: &Self::Entity) -> Self::Dto;

    /// DTO to a fresh entity. Audit columns start empty.
    fn to_entity(dto: &Self::Dto) -> Self::Entity;

    /// Copy every present field of `patch` onto `entity`. The id is never
    /// copied.
    fn merge_partial(entity: &mut Self::Entity, patch: &Self::Dto);
}

/// Overwrite `target` when `value` is present.
pub(crate) fn set_if_present<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

/// Overwrite an optional `target` when `value` is present.
pub(crate) fn replace_if_present<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        target.clone_from(value);
    }
}

/// Overwrite a foreign key when the reference is present.
pub(crate) fn relink_if_present(target: &mut Option<i64>, reference: &Option<IdRef>) {
    if let Some(reference) = reference {
        *target = Some(reference.id);
    }
}
