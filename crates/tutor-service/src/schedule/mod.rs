//! Schedule DTO, mapper, and criteria.

pub mod criteria;
pub mod dto;

pub use criteria::ScheduleCriteria;
pub use dto::{ScheduleDto, ScheduleMapper};

use crate::crud::EntityService;
use crate::query::QueryService;

/// CRUD service for [`tutor_entity::Schedule`].
pub type ScheduleService = EntityService<ScheduleMapper>;
/// Criteria search over [`tutor_entity::Schedule`].
pub type ScheduleQueryService = QueryService<ScheduleMapper>;
