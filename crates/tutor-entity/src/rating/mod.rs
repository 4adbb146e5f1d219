//! Rating entity.

pub mod model;

pub use model::{Rating, MAX_SCORE, MIN_SCORE};
