//! Like entity: a student's reaction to an answer.

pub mod kind;
pub mod model;

pub use kind::LikeKind;
pub use model::Like;
