//! Question entity.

pub mod model;

pub use model::Question;
