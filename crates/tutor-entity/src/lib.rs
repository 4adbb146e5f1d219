//! # tutor-entity
//!
//! Domain entity models for the tutoring backend. Every struct in this
//! crate represents one database table row. All entities derive `Debug`,
//! `Clone`, `Serialize`, `Deserialize` and `sqlx::FromRow`, compare by id,
//! and implement [`tutor_core::traits::Entity`] with static table metadata.

#[macro_use]
mod macros;

pub mod answer;
pub mod association;
pub mod lesson;
pub mod lesson_time;
pub mod like;
pub mod question;
pub mod rating;
pub mod room;
pub mod schedule;
pub mod student;
pub mod teacher;

pub use answer::Answer;
pub use association::{Aggregate, BackReference};
pub use lesson::{Lesson, LessonStatus};
pub use lesson_time::LessonTime;
pub use like::{Like, LikeKind};
pub use question::Question;
pub use rating::Rating;
pub use room::Room;
pub use schedule::{Schedule, ScheduleStatus};
pub use student::{Gender, Student};
pub use teacher::Teacher;
