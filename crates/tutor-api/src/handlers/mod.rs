//! HTTP handlers.

pub mod health;
pub mod rating;
pub mod resource;
pub mod teacher;

pub use resource::Resource;
