//! # tutor-database
//!
//! PostgreSQL connection management, specification-driven repository
//! implementations, and an in-memory back-end with the same query
//! semantics for tests and local runs.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod order;
pub mod postgres;
pub mod provider;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::{MemoryDatabase, MemoryRepository};
pub use postgres::PgRepository;
pub use provider::Database;
