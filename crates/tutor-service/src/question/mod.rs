//! Question DTO, mapper, and criteria.

pub mod criteria;
pub mod dto;

pub use criteria::QuestionCriteria;
pub use dto::{QuestionDto, QuestionMapper};

use crate::crud::EntityService;
use crate::query::QueryService;

/// CRUD service for [`tutor_entity::Question`].
pub type QuestionService = EntityService<QuestionMapper>;
/// Criteria search over [`tutor_entity::Question`].
pub type QuestionQueryService = QueryService<QuestionMapper>;
