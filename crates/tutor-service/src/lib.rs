//! # tutor-service
//!
//! Business logic layer for the tutoring backend. Each entity gets a DTO,
//! a mapper, and a criteria type; the generic [`EntityService`] and
//! [`QueryService`] implement CRUD and criteria search over any of them.
//!
//! Services follow constructor injection: repositories are provided at
//! construction time as `Arc<dyn Repository<_>>`.

pub mod answer;
pub mod context;
pub mod criteria;
pub mod crud;
pub mod lesson;
pub mod lesson_time;
pub mod like;
pub mod mapper;
pub mod query;
pub mod question;
pub mod rating;
pub mod room;
pub mod schedule;
pub mod student;
pub mod teacher;
pub mod validation;

pub use context::RequestContext;
pub use criteria::Criteria;
pub use crud::EntityService;
pub use mapper::{EntityMapper, IdRef};
pub use query::QueryService;
pub use rating::RatingQuestionService;
