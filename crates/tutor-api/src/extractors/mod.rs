//! Custom Axum extractors.

pub mod actor;
pub mod criteria;
pub mod pagination;

pub use actor::Actor;
pub use criteria::CriteriaQuery;
pub use pagination::PaginationParams;
