//! Student DTO, mapper, and criteria.

pub mod criteria;
pub mod dto;

pub use criteria::StudentCriteria;
pub use dto::{StudentDto, StudentMapper};

use crate::crud::EntityService;
use crate::query::QueryService;

/// CRUD service for [`tutor_entity::Student`].
pub type StudentService = EntityService<StudentMapper>;
/// Criteria search over [`tutor_entity::Student`].
pub type StudentQueryService = QueryService<StudentMapper>;
