//! Lesson entity and its publication status.

pub mod model;
pub mod status;

pub use model::Lesson;
pub use status::LessonStatus;
