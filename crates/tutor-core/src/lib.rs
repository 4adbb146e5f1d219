//! # tutor-core
//!
//! Core crate for the tutoring backend. Contains the configuration schema,
//! the unified error system, pagination/sorting/filter types, and the
//! query model (values, predicates, specifications) shared by every
//! persistence back-end.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod query;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
