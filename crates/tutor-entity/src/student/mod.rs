//! Student entity and its gender enumeration.

pub mod gender;
pub mod model;

pub use gender::Gender;
pub use model::Student;
