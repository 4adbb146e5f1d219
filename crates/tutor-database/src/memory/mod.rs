//! In-memory back-end with the same query semantics as PostgreSQL.

pub mod database;
pub mod repository;
mod rows;

pub use database::MemoryDatabase;
pub use repository::MemoryRepository;
