//! Room DTO, mapper, and criteria.

pub mod criteria;
pub mod dto;

pub use criteria::RoomCriteria;
pub use dto::{RoomDto, RoomMapper};

use crate::crud::EntityService;
use crate::query::QueryService;

/// CRUD service for [`tutor_entity::Room`].
pub type RoomService = EntityService<RoomMapper>;
/// Criteria search over [`tutor_entity::Room`].
pub type RoomQueryService = QueryService<RoomMapper>;
