//! PostgreSQL back-end: specification rendering and the generic repository.

pub mod repository;
pub mod sql;

pub use repository::PgRepository;
