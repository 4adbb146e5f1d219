//! Answer DTO, mapper, and criteria.

pub mod criteria;
pub mod dto;

pub use criteria::AnswerCriteria;
pub use dto::{AnswerDto, AnswerMapper};

use crate::crud::EntityService;
use crate::query::QueryService;

/// CRUD service for [`tutor_entity::Answer`].
pub type AnswerService = EntityService<AnswerMapper>;
/// Criteria search over [`tutor_entity::Answer`].
pub type AnswerQueryService = QueryService<AnswerMapper>;
