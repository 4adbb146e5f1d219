//! Teacher DTO, mapper, and criteria.

pub mod criteria;
pub mod dto;

pub use criteria::TeacherCriteria;
pub use dto::{TeacherDto, TeacherMapper};

use crate::crud::EntityService;
use crate::query::QueryService;

/// CRUD service for [`tutor_entity::Teacher`].
pub type TeacherService = EntityService<TeacherMapper>;
/// Criteria search over [`tutor_entity::Teacher`].
pub type TeacherQueryService = QueryService<TeacherMapper>;
