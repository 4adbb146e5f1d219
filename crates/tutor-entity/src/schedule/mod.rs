//! Schedule entity: a booked lesson occurrence.

pub mod model;
pub mod status;

pub use model::Schedule;
pub use status::ScheduleStatus;
