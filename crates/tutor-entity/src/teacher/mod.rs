//! Teacher entity.

pub mod model;

pub use model::Teacher;
