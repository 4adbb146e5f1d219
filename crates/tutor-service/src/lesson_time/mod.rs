//! LessonTime DTO, mapper, and criteria.

pub mod criteria;
pub mod dto;

pub use criteria::LessonTimeCriteria;
pub use dto::{LessonTimeDto, LessonTimeMapper};

use crate::crud::EntityService;
use crate::query::QueryService;

/// CRUD service for [`tutor_entity::LessonTime`].
pub type LessonTimeService = EntityService<LessonTimeMapper>;
/// Criteria search over [`tutor_entity::LessonTime`].
pub type LessonTimeQueryService = QueryService<LessonTimeMapper>;
