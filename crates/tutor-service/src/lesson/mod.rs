//! Lesson DTO, mapper, and criteria.

pub mod criteria;
pub mod dto;

pub use criteria::LessonCriteria;
pub use dto::{LessonDto, LessonMapper};

use crate::crud::EntityService;
use crate::query::QueryService;

/// CRUD service for [`tutor_entity::Lesson`].
pub type LessonService = EntityService<LessonMapper>;
/// Criteria search over [`tutor_entity::Lesson`].
pub type LessonQueryService = QueryService<LessonMapper>;
