//! Like DTO, mapper, and criteria.

pub mod criteria;
pub mod dto;

pub use criteria::LikeCriteria;
pub use dto::{LikeDto, LikeMapper};

use crate::crud::EntityService;
use crate::query::QueryService;

/// CRUD service for [`tutor_entity::Like`].
pub type LikeService = EntityService<LikeMapper>;
/// Criteria search over [`tutor_entity::Like`].
pub type LikeQueryService = QueryService<LikeMapper>;
