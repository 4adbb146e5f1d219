//! Custom finders layered over the generic repositories.

pub mod finders;

pub use finders::{RoomRepositoryExt, StudentRepositoryExt, TeacherRepositoryExt};
