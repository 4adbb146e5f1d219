//! Rating DTO, mapper, criteria, and question linking.

pub mod criteria;
pub mod dto;
pub mod questions;

pub use criteria::RatingCriteria;
pub use dto::{RatingDto, RatingMapper};
pub use questions::RatingQuestionService;

use crate::crud::EntityService;
use crate::query::QueryService;

/// CRUD service for [`tutor_entity::Rating`].
pub type RatingService = EntityService<RatingMapper>;
/// Criteria search over [`tutor_entity::Rating`].
pub type RatingQueryService = QueryService<RatingMapper>;
